//! Handler for `GET /upcoming_birthdays/`.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Local;
use contacts_core::{contact::Contact, store::ContactStore};

use crate::error::ApiError;

/// `GET /upcoming_birthdays/` — contacts with a birthday between today and
/// seven days from now, inclusive, by the server's local calendar.
pub async fn handler<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let today = Local::now().date_naive();
  let contacts = store.upcoming_birthdays(today).await.map_err(ApiError::store)?;
  Ok(Json(contacts))
}
