use serde::Serialize;
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
