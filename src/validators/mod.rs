//! Validation helpers shared by the HTTP handlers.

use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Extracts the per-field messages from ValidationErrors and flattens them
/// into the list the error body carries.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn field_messages_are_flattened() {
        let probe = Probe {
            email: "not-an-email".to_string(),
        };
        let err = validation_errors_to_api_error(probe.validate().unwrap_err());

        match err {
            ApiError::ValidationError(errors) => {
                assert_eq!(errors, vec!["Invalid email format".to_string()]);
            }
            other => panic!("expected validation error, got {other}"),
        }
    }
}
