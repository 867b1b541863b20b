use crate::error::{AppError, AppResult};

/// Reject a blank required string field before it reaches the repository.
pub fn validate_required(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Resolve a stored asset filename against the configured public base
/// URL. Pure mapping: the stored row keeps only the filename.
pub fn resolve_image_url(base: &str, filename: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), filename)
}
