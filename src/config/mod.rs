pub mod toml_config;

use crate::core::ConfigProvider;
use serde::{Deserialize, Serialize};

/// Target concentration of the final diluted solution (g/L).
pub const RECOMMENDED_CONCENTRATION: f64 = 0.64;

/// Falls back to [`RECOMMENDED_CONCENTRATION`] when nothing else is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl ConfigProvider for DefaultConfig {
    fn recommended_concentration(&self) -> f64 {
        RECOMMENDED_CONCENTRATION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Positional arguments, in order.
pub const VOLUME_ARGS: &str = "SYRINGE_VOLUME STOCK_CONTAINER_VOLUME DILUTED_CONTAINER_VOLUME";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "stock-dilution")]
#[command(about = "Solute mass for a stock solution that dilutes to the target concentration")]
pub struct CliConfig {
    /// Volume drawn from the stock solution (L)
    #[arg(value_name = "SYRINGE_VOLUME", allow_negative_numbers = true)]
    pub syringe_volume: Option<f64>,

    /// Volume of the stock solution container (L)
    #[arg(value_name = "STOCK_CONTAINER_VOLUME", allow_negative_numbers = true)]
    pub stock_container_volume: Option<f64>,

    /// Volume of diluent in the final container (L)
    #[arg(value_name = "DILUTED_CONTAINER_VOLUME", allow_negative_numbers = true)]
    pub diluted_container_volume: Option<f64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the recommended concentration (g/L)
    #[arg(long, value_name = "G_PER_L", allow_negative_numbers = true)]
    pub target: Option<f64>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// `Ok(None)` when no volume was given at all, an error when only some were.
    pub fn volumes(&self) -> crate::Result<Option<crate::core::StockVolumes>> {
        match (
            self.syringe_volume,
            self.stock_container_volume,
            self.diluted_container_volume,
        ) {
            (Some(syringe), Some(stock), Some(diluted)) => {
                Ok(Some(crate::core::StockVolumes::new(syringe, stock, diluted)))
            }
            (None, None, None) => Ok(None),
            _ => Err(crate::DilutionError::ConfigError {
                message: format!("expected three volumes: {}", VOLUME_ARGS),
            }),
        }
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::Result<()> {
        if let Some(target) = self.target {
            crate::utils::validation::validate_positive("target", target)?;
        }
        Ok(())
    }
}

/// Layers the sources: `--target`, then the TOML file, then the default.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedConfig {
    pub recommended_concentration: f64,
}

impl ResolvedConfig {
    pub fn resolve(target: Option<f64>, file: Option<&dyn ConfigProvider>) -> Self {
        let recommended_concentration = target
            .or_else(|| file.map(|f| f.recommended_concentration()))
            .unwrap_or_else(|| DefaultConfig.recommended_concentration());
        Self {
            recommended_concentration,
        }
    }
}

impl ConfigProvider for ResolvedConfig {
    fn recommended_concentration(&self) -> f64 {
        self.recommended_concentration
    }
}
