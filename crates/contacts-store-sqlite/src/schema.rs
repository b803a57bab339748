//! SQL schema for the contacts SQLite store.
//!
//! Executed once at connection startup. The schema version is recorded in
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
///
/// Every column except `id` is nullable even though the API requires most of
/// them; rows written by older clients may hold NULLs.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT: ids of deleted rows are never handed out again.
CREATE TABLE IF NOT EXISTS contacts (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name      TEXT,
    last_name       TEXT,
    email           TEXT,
    phone_number    TEXT,
    birthday        TEXT,   -- YYYY-MM-DD
    additional_data TEXT
);

CREATE INDEX IF NOT EXISTS ix_contacts_id         ON contacts(id);
CREATE INDEX IF NOT EXISTS ix_contacts_first_name ON contacts(first_name);
CREATE INDEX IF NOT EXISTS ix_contacts_last_name  ON contacts(last_name);
CREATE INDEX IF NOT EXISTS ix_contacts_email      ON contacts(email);

PRAGMA user_version = 1;
";
