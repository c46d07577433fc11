use crate::core::dilution::DilutionProblem;
use crate::core::formulas::mass_for_concentration;
use crate::domain::model::{DilutionPlan, StockVolumes};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

/// Grams of solute to dissolve into the stock container so that a syringe
/// sample, topped up with the diluent, lands on `recommended_concentration`.
pub fn calculate(
    syringe_volume: f64,
    stock_container_volume: f64,
    diluted_container_volume: f64,
    recommended_concentration: f64,
) -> Result<f64> {
    let volumes = StockVolumes::new(
        syringe_volume,
        stock_container_volume,
        diluted_container_volume,
    );
    Ok(plan(volumes, recommended_concentration)?.solute_mass)
}

/// Same as [`calculate`], keeping the intermediate values.
pub fn plan(volumes: StockVolumes, recommended_concentration: f64) -> Result<DilutionPlan> {
    let final_volume = volumes.final_volume();

    let stock_concentration = DilutionProblem::InitialConcentration {
        initial_volume: volumes.syringe_volume,
        final_concentration: recommended_concentration,
        final_volume,
    }
    .solve()?;

    let solute_mass =
        mass_for_concentration(volumes.stock_container_volume, stock_concentration);

    Ok(DilutionPlan {
        volumes,
        final_volume,
        stock_concentration,
        solute_mass,
        recommended_concentration,
    })
}

/// Holds the configured target so callers only pass volumes.
pub struct DilutionCalculator {
    recommended_concentration: f64,
}

impl DilutionCalculator {
    pub fn new(recommended_concentration: f64) -> Self {
        Self {
            recommended_concentration,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.recommended_concentration())
    }

    pub fn recommended_concentration(&self) -> f64 {
        self.recommended_concentration
    }

    pub fn plan(&self, volumes: StockVolumes) -> Result<DilutionPlan> {
        tracing::debug!(
            ?volumes,
            target = self.recommended_concentration,
            "planning dilution"
        );
        let plan = plan(volumes, self.recommended_concentration)?;
        tracing::info!(
            "Stock needs {} g/L ({} g in {} L)",
            plan.stock_concentration,
            plan.solute_mass,
            volumes.stock_container_volume
        );
        Ok(plan)
    }
}
