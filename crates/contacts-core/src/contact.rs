//! The contact record and its input contract.
//!
//! Storage is looser than the API: every stored column except `id` may be
//! NULL, so [`Contact`] models them as options. [`ContactInput`] is what
//! create and update accept, and it requires everything except
//! `additional_data`.

use serde::{Deserialize, Serialize};

use crate::birthday::Birthday;

/// Store-assigned primary key. Never reused after deletion.
pub type ContactId = i64;

/// A persisted contact, as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
  pub id:              ContactId,
  pub first_name:      Option<String>,
  pub last_name:       Option<String>,
  pub email:           Option<String>,
  pub phone_number:    Option<String>,
  pub birthday:        Option<Birthday>,
  pub additional_data: Option<String>,
}

impl Contact {
  /// Build the record a store holds after writing `input` under `id`.
  pub fn from_input(id: ContactId, input: ContactInput) -> Self {
    Self {
      id,
      first_name:      Some(input.first_name),
      last_name:       Some(input.last_name),
      email:           Some(input.email),
      phone_number:    Some(input.phone_number),
      birthday:        Some(input.birthday),
      additional_data: input.additional_data,
    }
  }
}

/// Body accepted by create and update. Update is a full replace, so the same
/// shape serves both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
  pub first_name:      String,
  pub last_name:       String,
  pub email:           String,
  pub phone_number:    String,
  pub birthday:        Birthday,
  #[serde(default)]
  pub additional_data: Option<String>,
}
