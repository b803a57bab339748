//! Handler for `GET /search/`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use contacts_core::{contact::Contact, store::ContactStore};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  /// Matched against first name, last name and email. Required, may be empty.
  pub query: String,
}

/// `GET /search/?query=...`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Query(params) = params?;
  let contacts = store.search(&params.query).await.map_err(ApiError::store)?;
  Ok(Json(contacts))
}
