//! Concentration formula C = m / V and its inverse m = C · V.
//!
//! Volumes are in litres, masses in grams, concentrations in g/L.

use crate::utils::error::{DilutionError, Result};

/// Divides, refusing an exact zero divisor instead of returning ±∞ or NaN.
pub(crate) fn checked_div(
    numerator: f64,
    divisor: f64,
    operation: &'static str,
    divisor_name: &'static str,
) -> Result<f64> {
    if divisor == 0.0 {
        return Err(DilutionError::DivisionByZero {
            operation,
            divisor: divisor_name,
        });
    }
    Ok(numerator / divisor)
}

/// Concentration (g/L) of `solute_mass` grams dissolved to `solution_volume` litres.
pub fn concentration(solute_mass: f64, solution_volume: f64) -> Result<f64> {
    let value = checked_div(
        solute_mass,
        solution_volume,
        "concentration",
        "solution_volume",
    )?;
    tracing::debug!(
        solute_mass,
        solution_volume,
        concentration = value,
        "computed concentration"
    );
    Ok(value)
}

/// Grams of solute needed for `solution_volume` litres at `concentration` g/L.
pub fn mass_for_concentration(solution_volume: f64, concentration: f64) -> f64 {
    let mass = concentration * solution_volume;
    tracing::debug!(
        solution_volume,
        concentration,
        solute_mass = mass,
        "computed solute mass"
    );
    mass
}
