//! Solver for the dilution law C1·V1 = C2·V2.
//!
//! Subscript 1 is the concentrated solution before dilution, subscript 2 the
//! diluted solution after it. A [`DilutionProblem`] names the unknown term
//! and carries the three known ones, so "exactly one unknown" holds by
//! construction. [`dilution`] accepts the loose four-slot form and checks it.

use crate::core::formulas::checked_div;
use crate::domain::model::DilutionTerm;
use crate::utils::error::{DilutionError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DilutionProblem {
    InitialConcentration {
        initial_volume: f64,
        final_concentration: f64,
        final_volume: f64,
    },
    InitialVolume {
        initial_concentration: f64,
        final_concentration: f64,
        final_volume: f64,
    },
    FinalConcentration {
        initial_concentration: f64,
        initial_volume: f64,
        final_volume: f64,
    },
    FinalVolume {
        initial_concentration: f64,
        initial_volume: f64,
        final_concentration: f64,
    },
}

impl DilutionProblem {
    /// Builds a problem from four optional slots, exactly one of which must be `None`.
    pub fn from_slots(
        initial_concentration: Option<f64>,
        initial_volume: Option<f64>,
        final_concentration: Option<f64>,
        final_volume: Option<f64>,
    ) -> Result<Self> {
        match (initial_concentration, initial_volume, final_concentration, final_volume) {
            (None, Some(initial_volume), Some(final_concentration), Some(final_volume)) => {
                Ok(DilutionProblem::InitialConcentration {
                    initial_volume,
                    final_concentration,
                    final_volume,
                })
            }
            (Some(initial_concentration), None, Some(final_concentration), Some(final_volume)) => {
                Ok(DilutionProblem::InitialVolume {
                    initial_concentration,
                    final_concentration,
                    final_volume,
                })
            }
            (Some(initial_concentration), Some(initial_volume), None, Some(final_volume)) => {
                Ok(DilutionProblem::FinalConcentration {
                    initial_concentration,
                    initial_volume,
                    final_volume,
                })
            }
            (
                Some(initial_concentration),
                Some(initial_volume),
                Some(final_concentration),
                None,
            ) => Ok(DilutionProblem::FinalVolume {
                initial_concentration,
                initial_volume,
                final_concentration,
            }),
            (c1, v1, c2, v2) => {
                let unknowns = [c1, v1, c2, v2]
                    .iter()
                    .filter(|slot| slot.is_none())
                    .count();
                Err(DilutionError::InvalidArguments { unknowns })
            }
        }
    }

    pub fn unknown(&self) -> DilutionTerm {
        match self {
            DilutionProblem::InitialConcentration { .. } => DilutionTerm::InitialConcentration,
            DilutionProblem::InitialVolume { .. } => DilutionTerm::InitialVolume,
            DilutionProblem::FinalConcentration { .. } => DilutionTerm::FinalConcentration,
            DilutionProblem::FinalVolume { .. } => DilutionTerm::FinalVolume,
        }
    }

    /// Value of the unknown term.
    pub fn solve(&self) -> Result<f64> {
        let value = match *self {
            DilutionProblem::InitialConcentration {
                initial_volume,
                final_concentration,
                final_volume,
            } => checked_div(
                final_concentration * final_volume,
                initial_volume,
                "dilution",
                "initial_volume",
            )?,
            DilutionProblem::InitialVolume {
                initial_concentration,
                final_concentration,
                final_volume,
            } => checked_div(
                final_concentration * final_volume,
                initial_concentration,
                "dilution",
                "initial_concentration",
            )?,
            DilutionProblem::FinalConcentration {
                initial_concentration,
                initial_volume,
                final_volume,
            } => checked_div(
                initial_concentration * initial_volume,
                final_volume,
                "dilution",
                "final_volume",
            )?,
            DilutionProblem::FinalVolume {
                initial_concentration,
                initial_volume,
                final_concentration,
            } => checked_div(
                initial_concentration * initial_volume,
                final_concentration,
                "dilution",
                "final_concentration",
            )?,
        };

        tracing::debug!(unknown = %self.unknown(), value, "solved dilution");
        Ok(value)
    }
}

/// Solves C1·V1 = C2·V2 for whichever argument is `None`.
pub fn dilution(
    initial_concentration: Option<f64>,
    initial_volume: Option<f64>,
    final_concentration: Option<f64>,
    final_volume: Option<f64>,
) -> Result<f64> {
    DilutionProblem::from_slots(
        initial_concentration,
        initial_volume,
        final_concentration,
        final_volume,
    )?
    .solve()
}
