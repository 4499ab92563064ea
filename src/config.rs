use std::path::PathBuf;

use serde::Deserialize;

use crate::blocks::metadata::DEFAULT_TEMPLATE;
use crate::error::Result;

const SETTINGS_FILE: &str = "importer";
const ENV_PREFIX: &str = "IMPORTER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub template: String,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
}

impl Settings {
    /// Defaults, then `importer.toml` if present, then `IMPORTER_*` env vars.
    pub fn load() -> Result<Self> {
        let settings = base_builder()?
            .add_source(config::File::with_name(SETTINGS_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

fn base_builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("template", DEFAULT_TEMPLATE)?
        .set_default("output_dir", "output")?
        .set_default("format", "html")?)
}
