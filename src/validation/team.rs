use crate::error::AppError;

pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Team name is required"));
    }
    if name.len() > 255 {
        return Err(AppError::validation(
            "Team name must be 255 characters or less",
        ));
    }
    Ok(())
}

pub fn validate_short_name(short_name: &str) -> Result<(), AppError> {
    if short_name.trim().is_empty() {
        return Err(AppError::validation("Team short name is required"));
    }
    if short_name.len() > 10 {
        return Err(AppError::validation(
            "Team short name must be 10 characters or less",
        ));
    }
    Ok(())
}
