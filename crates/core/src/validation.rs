//! Text field validation for boards, layers and comments.

use crate::error::CoreError;

/// Maximum length of a board or layer name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a comment body, in characters.
pub const MAX_COMMENT_LENGTH: usize = 10_000;

/// Validate a board or layer name: non-blank and at most
/// [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a comment body.
pub fn validate_comment_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation("Comment body must not be empty".into()));
    }
    if body.chars().count() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment body must be at most {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}
