use std::error::Error;

use database::PgDatabase;
use loader::ExportConfig;
use log::error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = ExportConfig::from_env();

    match ingest::export::<PgDatabase>(&config.out_dir, &config.database).await {
        Ok(summary) => {
            println!(
                "Exported {} places and {} rentals to {}.",
                summary.places,
                summary.rentals,
                config.out_dir.display()
            );
            Ok(())
        }
        Err(why) => {
            error!("export failed: {}", why);
            Err(why.into())
        }
    }
}
