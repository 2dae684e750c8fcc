//! Outbound adapters: SQLite persistence, PDF rendering, SMTP email.

pub mod pdf;
pub mod smtp;
pub mod sqlite;
