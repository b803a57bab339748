//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `contacts-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::NaiveDate;

use crate::contact::{Contact, ContactId, ContactInput};

/// Abstraction over a contacts store backend.
///
/// "Not found" is never an error: lookups by id answer `None` and the caller
/// decides how to surface it. Every method runs as a single unit of work
/// against the backend; writes either commit entirely or not at all.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new contact and return it with its store-assigned id.
  fn create(
    &self,
    input: ContactInput,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// List every contact, in storage order.
  fn list(&self) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Overwrite every field of an existing contact with `input`.
  ///
  /// Returns the updated contact, or `None` if `id` does not exist.
  fn update(
    &self,
    id: ContactId,
    input: ContactInput,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Permanently remove a contact.
  ///
  /// Returns the values the contact held immediately before removal, or
  /// `None` if `id` does not exist.
  fn delete(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Contacts whose first name, last name or email contains `query`,
  /// ignoring case. An empty query matches every contact with at least one
  /// of those fields set.
  fn search<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;

  /// Contacts whose birthday falls within the
  /// [birthday window](crate::birthday::birthday_window) starting at `today`.
  /// Each contact appears at most once.
  fn upcoming_birthdays(
    &self,
    today: NaiveDate,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;
}
