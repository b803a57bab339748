//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `POST`   | `/contacts/`     | Body: [`ContactInput`]; returns the stored contact |
//! | `GET`    | `/contacts/`     | Every contact |
//! | `GET`    | `/contacts/{id}` | 404 if not found |
//! | `PUT`    | `/contacts/{id}` | Body: [`ContactInput`]; full replace, 404 if not found |
//! | `DELETE` | `/contacts/{id}` | Returns the deleted contact, 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
};
use contacts_core::{
  contact::{Contact, ContactId, ContactInput},
  store::ContactStore,
};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts/`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Json(input) = body?;
  let contact = store.create(input).await.map_err(ApiError::store)?;
  tracing::info!(id = contact.id, "created contact");
  Ok(Json(contact))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts/`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contacts = store.list().await.map_err(ApiError::store)?;
  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<ContactId>, PathRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Path(id) = id?;
  let contact = store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  Ok(Json(contact))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/{id}` — every field of the body replaces the stored value.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<ContactId>, PathRejection>,
  body: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Path(id) = id?;
  let Json(input) = body?;
  let contact = store
    .update(id, input)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  tracing::info!(id, "updated contact");
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}` — responds with the values the contact held when it
/// was removed.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<ContactId>, PathRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Path(id) = id?;
  let contact = store
    .delete(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  tracing::info!(id, "deleted contact");
  Ok(Json(contact))
}
