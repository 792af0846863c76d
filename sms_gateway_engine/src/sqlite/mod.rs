//! SQLite database module for the SMS Gateway Engine.
mod sqlite_impl;

pub mod db;
pub use sqlite_impl::SqliteDatabase;
