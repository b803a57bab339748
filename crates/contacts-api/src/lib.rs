//! JSON REST API for the contacts service.
//!
//! Exposes an axum [`Router`] backed by any [`contacts_core::store::ContactStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = contacts_api::app(Arc::new(store), "/api");
//! axum::serve(listener, app).await?;
//! ```

pub mod birthdays;
pub mod contacts;
pub mod error;
pub mod search;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use contacts_core::store::ContactStore;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Build the contact routes for `store`, unprefixed.
///
/// Every collection route answers both with and without its trailing slash.
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Contacts
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route("/contacts/", get(contacts::list::<S>).post(contacts::create::<S>))
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::delete::<S>),
    )
    // Queries
    .route("/search", get(search::handler::<S>))
    .route("/search/", get(search::handler::<S>))
    .route("/upcoming_birthdays", get(birthdays::handler::<S>))
    .route("/upcoming_birthdays/", get(birthdays::handler::<S>))
    .with_state(store)
}

/// The whole application: the greeting at `/`, the contact routes under
/// `prefix`, and request tracing around both.
///
/// An empty or `/` prefix mounts the contact routes at the root. A missing
/// leading slash is added (`api` nests at `/api`).
pub fn app<S>(store: Arc<S>, prefix: &str) -> Router<()>
where
  S: ContactStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let root = Router::new().route("/", get(hello));
  let prefix = prefix.trim_matches('/');

  let router = if prefix.is_empty() {
    root.merge(api_router(store))
  } else {
    root.nest(&format!("/{prefix}"), api_router(store))
  };

  router.layer(TraceLayer::new_for_http())
}

/// `GET /`
async fn hello() -> Json<Value> { Json(json!({ "message": "Hello World" })) }

// ─── Integration tests ────────────────────────────────────────────────────────
