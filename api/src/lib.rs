mod error;
mod extractor;
mod init;
mod middleware;
mod openapi;

pub mod response;
pub mod routers;

pub use error::ApiError;
pub use init::{setup_config, setup_db, setup_router};
use serde::Serialize;
use utoipa::ToSchema;

/// The `{ success, message, data? }` envelope every JSON endpoint answers with.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse<T> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: Option<T>) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}
