use std::{env, path::PathBuf};

use database::DatabaseConnectionInfo;
use ingest::{variant::UnknownSchemaVariant, SchemaVariant};
use thiserror::Error;

pub const SOURCE: &str = "LOADER_SOURCE";
pub const SCHEMA: &str = "LOADER_SCHEMA";
pub const EXPORT_DIR: &str = "EXPORT_DIR";

pub const DEFAULT_SOURCE: &str = "data.json";
pub const DEFAULT_EXPORT_DIR: &str = "data";

/// Printed once all records are committed.
pub const SUCCESS_MESSAGE: &str = "Data inserted successfully.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid LOADER_SCHEMA: {0}")]
    Schema(#[from] UnknownSchemaVariant),
}

/// Everything the loader needs, read once at startup.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub source: PathBuf,
    pub variant: SchemaVariant,
    pub database: DatabaseConnectionInfo,
}

impl LoaderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let variant = match lookup(SCHEMA) {
            Some(name) => name.parse()?,
            None => SchemaVariant::default(),
        };
        Ok(Self {
            source: lookup(SOURCE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
            variant,
            database: DatabaseConnectionInfo::from_lookup(&lookup),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
    pub database: DatabaseConnectionInfo,
}

impl ExportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            out_dir: lookup(EXPORT_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR)),
            database: DatabaseConnectionInfo::from_lookup(&lookup),
        }
    }
}
