use axum::{extract::Request, middleware::Next, response::Response};
use chrono::Utc;
use models::schemas::user::ClientSchema;
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::ApiError;

pub const CLIENT_SESSION_KEY: &str = "client_session_data_v1";

/// Loads the caller's [`ClientSchema`] (creating one for new browsers) and
/// hands it to handlers as a request extension. Handlers read the logged-in
/// user from there and nowhere else.
pub async fn client_session(
    session: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client_session = match session.get::<ClientSchema>(CLIENT_SESSION_KEY).await {
        Ok(Some(state)) => {
            tracing::trace!("Loaded existing client session.");
            state
        }
        Ok(None) => {
            tracing::debug!("No client session found, creating new one.");

            let new_state = ClientSchema {
                id: Uuid::new_v4().to_string(),
                user: None,
                updated: Utc::now(),
            };
            save_client(&session, &new_state).await?;
            new_state
        }
        Err(e) => {
            tracing::error!("Failed to load client session data from store: {}", e);
            return Err(ApiError::from(e));
        }
    };

    req.extensions_mut().insert(client_session);

    Ok(next.run(req).await)
}

pub async fn save_client(session: &Session, client: &ClientSchema) -> Result<(), ApiError> {
    session
        .insert(CLIENT_SESSION_KEY, client)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save client session data: {}", e);
            ApiError::from(e)
        })
}
