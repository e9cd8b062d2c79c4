pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Checks that `value` lies in `min..=max`, naming the field in the error.
pub(crate) fn check_range(field: &str, value: usize, min: usize, max: usize) -> Result<(), String> {
    if value < min || value > max {
        return Err(format!(
            "{} must be between {} and {}, got {}",
            field, min, max, value
        ));
    }
    Ok(())
}
