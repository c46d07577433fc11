use crate::domain::model::DilutionPlan;
use crate::utils::error::Result;

/// Shortest round-trip form, keeping `.0` on integral values (`2.0`, `64.32`).
///
/// Below 1e-4 and from 1e16 up the exponent is signed and at least two
/// digits wide (`1e-05`, `1.5e+16`).
fn number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

pub fn render_text(plan: &DilutionPlan) -> String {
    format!(
        "You will need to dilute {} grams of solute into {} litres of water.\n\
         Afterwards, {} litres of this solution diluted into a container of {}\n\
         litres of water will have the recommended concentration of {} g/L.",
        number(plan.solute_mass),
        number(plan.volumes.stock_container_volume),
        number(plan.volumes.syringe_volume),
        number(plan.volumes.diluted_container_volume),
        number(plan.recommended_concentration),
    )
}

pub fn render_json(plan: &DilutionPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}
