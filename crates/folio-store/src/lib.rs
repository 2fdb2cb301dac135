//! # folio-store
//!
//! Durable local storage for the Folio viewer, backed by SQLite.
//!
//! The crate exposes a synchronous `Database` handle wrapping a
//! `rusqlite::Connection`. Data lives in a single key-value table; the
//! liked-post map is stored as one JSON value under the `postLikes` key and
//! is always rewritten as a whole.

pub mod database;
pub mod kv;
pub mod likes;
pub mod migrations;

mod error;

pub use database::Database;
pub use error::StoreError;
