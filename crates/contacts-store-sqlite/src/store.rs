//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::{collections::HashSet, path::Path};

use chrono::NaiveDate;
use rusqlite::{OptionalExtension as _, functions::FunctionFlags};

use contacts_core::{
  birthday::birthday_window,
  contact::{Contact, ContactId, ContactInput},
  store::ContactStore,
};

use crate::{
  Result,
  encode::{COLUMNS, RawContact, encode_birthday, read_row, substring_pattern},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contacts store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// Column values for an INSERT or a full-replace UPDATE, in schema order.
struct Row {
  first_name:      String,
  last_name:       String,
  email:           String,
  phone_number:    String,
  birthday:        String,
  additional_data: Option<String>,
}

impl From<&ContactInput> for Row {
  fn from(input: &ContactInput) -> Self {
    Self {
      first_name:      input.first_name.clone(),
      last_name:       input.last_name.clone(),
      email:           input.email.clone(),
      phone_number:    input.phone_number.clone(),
      birthday:        encode_birthday(input.birthday),
      additional_data: input.additional_data.clone(),
    }
  }
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        register_casefold(conn)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a `SELECT` over [`COLUMNS`] with the given trailing clause and decode
  /// every row.
  async fn select_where(&self, clause: &'static str, arg: Option<String>) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM contacts {clause}"))?;
        let rows = match arg {
          Some(a) => stmt.query_map(rusqlite::params![a], read_row)?,
          None    => stmt.query_map([], read_row)?,
        }
        .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = crate::Error;

  async fn create(&self, input: ContactInput) -> Result<Contact> {
    let row = Row::from(&input);

    let id: ContactId = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (
             first_name, last_name, email, phone_number, birthday, additional_data
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.email,
            row.phone_number,
            row.birthday,
            row.additional_data,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Contact::from_input(id, input))
  }

  async fn get(&self, id: ContactId) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1"),
            rusqlite::params![id],
            read_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list(&self) -> Result<Vec<Contact>> { self.select_where("", None).await }

  async fn update(&self, id: ContactId, input: ContactInput) -> Result<Option<Contact>> {
    let row = Row::from(&input);

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts SET
             first_name      = ?1,
             last_name       = ?2,
             email           = ?3,
             phone_number    = ?4,
             birthday        = ?5,
             additional_data = ?6
           WHERE id = ?7",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.email,
            row.phone_number,
            row.birthday,
            row.additional_data,
            id,
          ],
        )?)
      })
      .await?;

    Ok((changed > 0).then(|| Contact::from_input(id, input)))
  }

  async fn delete(&self, id: ContactId) -> Result<Option<Contact>> {
    // Snapshot and removal share one transaction so the returned values are
    // exactly what was deleted.
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let snapshot = tx
          .query_row(
            &format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1"),
            rusqlite::params![id],
            read_row,
          )
          .optional()?;

        if snapshot.is_some() {
          tx.execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id])?;
        }
        tx.commit()?;

        Ok(snapshot)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn search(&self, query: &str) -> Result<Vec<Contact>> {
    let pattern = substring_pattern(query);

    self
      .select_where(
        r"WHERE casefold(first_name) LIKE casefold(?1) ESCAPE '\'
              OR casefold(last_name)  LIKE casefold(?1) ESCAPE '\'
              OR casefold(email)      LIKE casefold(?1) ESCAPE '\'",
        Some(pattern),
      )
      .await
  }

  async fn upcoming_birthdays(&self, today: NaiveDate) -> Result<Vec<Contact>> {
    let days: Vec<String> = birthday_window(today)
      .into_iter()
      .map(|md| md.to_string())
      .collect();

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut found = Vec::new();
        {
          let mut stmt = tx.prepare(&format!(
            "SELECT {COLUMNS} FROM contacts WHERE strftime('%m-%d', birthday) = ?1"
          ))?;
          for day in &days {
            let rows = stmt
              .query_map(rusqlite::params![day], read_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?;
            found.extend(rows);
          }
        }
        tx.commit()?;
        Ok(found)
      })
      .await?;

    unique_by_id(raws).into_iter().map(RawContact::into_contact).collect()
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Register `casefold(text)`, a Unicode-aware lowercase, on `conn`.
///
/// SQLite's own `LIKE` and `lower()` only fold ASCII. NULL stays NULL, so a
/// NULL column never matches.
fn register_casefold(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    "casefold",
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| {
      let text: Option<String> = ctx.get(0)?;
      Ok(text.map(|t| t.to_lowercase()))
    },
  )
}

/// Keep the first row seen for each id, in order.
///
/// A contact can only match one day of a well-formed window; this keeps the
/// result unique even if the window ever repeats a day.
pub(crate) fn unique_by_id(raws: Vec<RawContact>) -> Vec<RawContact> {
  let mut seen = HashSet::new();
  raws.into_iter().filter(|raw| seen.insert(raw.id)).collect()
}
