use crate::app::report::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::domain::model::RoundingMode;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "experience-span")]
#[command(about = "Compute years of experience from a list of employment intervals")]
pub struct CliConfig {
    /// Path to the TOML experience list
    #[arg(short, long, default_value = "experience.toml")]
    pub config: String,

    /// Reference date (YYYY-MM-DD or YYYY-MM); overrides config and system clock
    #[arg(long)]
    pub today: Option<String>,

    /// Override the rounding mode from config
    #[arg(long, value_enum)]
    pub rounding: Option<RoundingMode>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only validate the configuration file
    #[arg(long)]
    pub check: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Applies command-line overrides on top of the loaded file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(rounding) = self.rounding {
            tracing::info!("🔧 Rounding overridden to: {}", rounding);
            config.calculation.rounding = Some(rounding);
        }
        if let Some(today) = &self.today {
            tracing::info!("🔧 Reference date overridden to: {}", today);
            config.calculation.today = Some(today.clone());
        }
    }
}
