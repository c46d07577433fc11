use crate::utils::error::{DilutionError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DilutionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value <= 0.0 {
        return Err(DilutionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than 0".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("recommended_concentration", 0.64).is_ok());
        assert!(validate_positive("recommended_concentration", 0.0).is_err());
        assert!(validate_positive("recommended_concentration", -1.0).is_err());
        assert!(validate_positive("recommended_concentration", f64::NAN).is_err());
        assert!(validate_positive("recommended_concentration", f64::INFINITY).is_err());
    }
}
