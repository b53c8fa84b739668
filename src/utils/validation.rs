use chrono::{DateTime, Utc};
use thiserror::Error;

pub const MAX_TITLE_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title required")]
    TitleRequired,

    #[error("title too long")]
    TitleTooLong,

    #[error("start before end")]
    StartAfterEnd,
}

/// Checks event input; the first failing rule wins.
pub fn validate(
    title: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    if start_time > end_time {
        return Err(ValidationError::StartAfterEnd);
    }
    Ok(())
}
