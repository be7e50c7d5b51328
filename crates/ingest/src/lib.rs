pub mod database;
pub mod error;
pub mod export;
pub mod loader;
pub mod variant;

#[cfg(test)]
mod testing;

pub use error::{ExportError, LoadError};
pub use export::{export, ExportSummary};
pub use loader::{load, LoadSummary};
pub use variant::SchemaVariant;
