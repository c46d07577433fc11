pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{
    toml_config::TomlConfig, OutputFormat, ResolvedConfig, RECOMMENDED_CONCENTRATION,
};
pub use crate::core::calculator::{calculate, DilutionCalculator};
pub use crate::core::dilution::{dilution, DilutionProblem};
pub use crate::core::formulas::{concentration, mass_for_concentration};
pub use crate::core::{DilutionPlan, DilutionTerm, StockVolumes};
pub use crate::utils::error::{DilutionError, Result};
