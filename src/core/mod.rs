pub mod calculator;
pub mod dilution;
pub mod formulas;
pub mod report;

pub use crate::domain::model::{DilutionPlan, DilutionTerm, StockVolumes};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
