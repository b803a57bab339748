//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Birthdays are stored as `YYYY-MM-DD`. Decoding goes through the same
//! parser the API uses, so rows written with a full timestamp still load.

use contacts_core::{
  birthday::Birthday,
  contact::{Contact, ContactId},
};

use crate::Result;

/// Column list shared by every `SELECT` against `contacts`, in the order
/// [`read_row`] expects.
pub const COLUMNS: &str =
  "id, first_name, last_name, email, phone_number, birthday, additional_data";

// ─── Birthday ────────────────────────────────────────────────────────────────

pub fn encode_birthday(b: Birthday) -> String { b.date().format("%Y-%m-%d").to_string() }

pub fn decode_birthday(s: &str) -> Result<Birthday> { Ok(s.parse()?) }

// ─── LIKE patterns ───────────────────────────────────────────────────────────

/// Build a `LIKE ... ESCAPE '\'` pattern matching `needle` anywhere, with
/// `%`, `_` and `\` in the needle taken literally.
pub fn substring_pattern(needle: &str) -> String {
  let mut pattern = String::with_capacity(needle.len() + 2);
  pattern.push('%');
  for c in needle.chars() {
    if matches!(c, '%' | '_' | '\\') {
      pattern.push('\\');
    }
    pattern.push(c);
  }
  pattern.push('%');
  pattern
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `contacts` row.
pub struct RawContact {
  pub id:              ContactId,
  pub first_name:      Option<String>,
  pub last_name:       Option<String>,
  pub email:           Option<String>,
  pub phone_number:    Option<String>,
  pub birthday:        Option<String>,
  pub additional_data: Option<String>,
}

/// Map a row selected with [`COLUMNS`].
pub fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawContact> {
  Ok(RawContact {
    id:              row.get(0)?,
    first_name:      row.get(1)?,
    last_name:       row.get(2)?,
    email:           row.get(3)?,
    phone_number:    row.get(4)?,
    birthday:        row.get(5)?,
    additional_data: row.get(6)?,
  })
}

impl RawContact {
  pub fn into_contact(self) -> Result<Contact> {
    let birthday = self.birthday.as_deref().map(decode_birthday).transpose()?;

    Ok(Contact {
      id: self.id,
      first_name: self.first_name,
      last_name: self.last_name,
      email: self.email,
      phone_number: self.phone_number,
      birthday,
      additional_data: self.additional_data,
    })
  }
}
