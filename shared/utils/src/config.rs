use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::LedgerResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub destination: DestinationConfig,
    pub ingest: IngestConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directories scanned for configurator exports.
    #[serde(default)]
    pub directories: Vec<PathBuf>,
    pub extension: String,
    /// Encoding label used when a file is not valid UTF-8.
    pub legacy_encoding: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub workbook_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    pub creation_date_format: String,
    pub verify_after_run: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    #[serde(default)]
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> LedgerResult<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Built-in defaults so partial files stay valid
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("CONVEYOR_LEDGER").separator("__"));

        Ok(config.build()?.try_deserialize()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig {
                directories: Vec::new(),
                extension: ".csv".to_string(),
                legacy_encoding: "windows-1252".to_string(),
            },
            destination: DestinationConfig {
                workbook_path: PathBuf::from("base_de_dados.xlsx"),
            },
            ingest: IngestConfig {
                creation_date_format: "%d/%m/%Y".to_string(),
                verify_after_run: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
                file_path: None,
            },
        }
    }
}
