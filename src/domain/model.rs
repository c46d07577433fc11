use serde::Serialize;
use std::fmt;

/// The three container volumes of a two-stage dilution, all in litres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockVolumes {
    /// Volume drawn from the stock and transferred into the diluent.
    pub syringe_volume: f64,
    /// Volume of the stock solution the solute is dissolved into.
    pub stock_container_volume: f64,
    /// Diluent already present before the sample is added.
    pub diluted_container_volume: f64,
}

impl StockVolumes {
    pub fn new(
        syringe_volume: f64,
        stock_container_volume: f64,
        diluted_container_volume: f64,
    ) -> Self {
        Self {
            syringe_volume,
            stock_container_volume,
            diluted_container_volume,
        }
    }

    pub fn final_volume(&self) -> f64 {
        self.syringe_volume + self.diluted_container_volume
    }
}

/// One term of C1·V1 = C2·V2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DilutionTerm {
    InitialConcentration,
    InitialVolume,
    FinalConcentration,
    FinalVolume,
}

impl fmt::Display for DilutionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DilutionTerm::InitialConcentration => "initial_concentration",
            DilutionTerm::InitialVolume => "initial_volume",
            DilutionTerm::FinalConcentration => "final_concentration",
            DilutionTerm::FinalVolume => "final_volume",
        };
        f.write_str(name)
    }
}

/// Everything computed for one set of volumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DilutionPlan {
    pub volumes: StockVolumes,
    /// Syringe sample plus diluent (L).
    pub final_volume: f64,
    /// Concentration the stock must have (g/L).
    pub stock_concentration: f64,
    /// Solute to dissolve into the stock container (g).
    pub solute_mass: f64,
    /// Concentration reached after dilution (g/L).
    pub recommended_concentration: f64,
}
