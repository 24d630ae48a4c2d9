use chrono::NaiveDate;

use crate::error::AppError;

pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Competition name is required"));
    }
    if name.len() > 255 {
        return Err(AppError::validation(
            "Competition name must be 255 characters or less",
        ));
    }
    Ok(())
}

pub fn validate_window(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), AppError> {
    if end_date < start_date {
        return Err(AppError::validation(
            "Competition end date cannot be before the start date",
        ));
    }
    Ok(())
}
