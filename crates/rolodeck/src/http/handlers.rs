//! Request handlers for the contact API.
//!
//! Success and failure shapes follow the service contract: JSON bodies
//! everywhere, `404` with `{"error": "Contact not found"}` for unknown
//! identifiers, and a generic `500` body when the store itself fails.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::contact::{Contact, ContactDraft};
use crate::error::Error;

use super::AppState;

/// JSON body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}

/// Error wrapper mapping store failures onto HTTP responses.
///
/// Store faults are logged here and degraded to a generic message; the
/// details never reach the client.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::ContactNotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Contact not found".to_string(),
                }),
            )
                .into_response(),
            err => {
                error!("request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Handle `GET /contacts`, returning the full collection.
pub async fn list_contacts(State(store): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(store.list().await?))
}

/// Handle `GET /contacts/:id`, returning the contact or a 404.
pub async fn get_contact(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    let contact = store
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found(id))?;
    Ok(Json(contact))
}

/// Handle `POST /contacts`, creating a contact from the submitted fields.
pub async fn create_contact(
    State(store): State<AppState>,
    Json(draft): Json<ContactDraft>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let contact = store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// Handle `PUT /contacts/:id`, shallow-merging the submitted fields, or 404.
pub async fn update_contact(
    State(store): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ContactDraft>,
) -> Result<Json<Contact>, ApiError> {
    let contact = store
        .update(&id, draft)
        .await?
        .ok_or_else(|| Error::not_found(id))?;
    Ok(Json(contact))
}

/// Handle `DELETE /contacts/:id`. Always responds 204, even when the
/// identifier matched nothing.
pub async fn delete_contact(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
