//! Error types for `contacts-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid birthday {0:?}: expected a date or a date-time")]
  InvalidBirthday(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
