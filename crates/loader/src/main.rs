use std::error::Error;

use database::PgDatabase;
use loader::{LoaderConfig, SUCCESS_MESSAGE};
use log::error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = LoaderConfig::from_env()?;

    match ingest::load::<PgDatabase>(&config.source, &config.database, config.variant)
        .await
    {
        Ok(_) => {
            println!("{}", SUCCESS_MESSAGE);
            Ok(())
        }
        Err(why) => {
            error!("loading {} failed: {}", config.source.display(), why);
            Err(why.into())
        }
    }
}
