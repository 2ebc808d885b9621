use serde::Serialize;

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None }
    }

    /// Validation failure listing every rejected field.
    pub fn validation(errors: &[String]) -> Self {
        Self {
            error: "Validation failed".to_string(),
            details: Some(errors.join("; ")),
        }
    }
}
