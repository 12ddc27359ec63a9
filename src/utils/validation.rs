use crate::utils::error::{ReportError, Result};

/// Configuration-level validation, run before the pipeline starts.
/// Record-level validation lives in `core::validator`.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ReportError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_input_format(field_name: &str, format: &str) -> Result<()> {
    let valid_formats = ["csv", "json"];
    if !valid_formats.contains(&format.to_lowercase().as_str()) {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported input format. Valid formats: {}",
                valid_formats.join(", ")
            ),
        });
    }
    Ok(())
}
