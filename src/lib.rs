//! Quittance - rent receipt generation and IRL rent revision for French landlords.
//!
//! This crate implements the computational core of a landlord back office:
//! legally-formatted rent receipts ("quittances de loyer"), rent revision
//! against the published IRL index, and partial-month (prorata) rent.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Pure calculations and models
//!   - `revision` - IRL-indexed rent revision with timing-policy warnings
//!   - `prorata` - partial-month rent for entry/exit dates
//!   - `lettres` - French spelling of monetary amounts ("huit cents euros")
//!   - `irl` - the (year, quarter) index table with latest-year fallback
//!
//! - **`port`** - Trait seams for persistence and email
//! - **`adapter`** - SQLite stores, PDF rendering, SMTP, and the CLI
//! - **`app`** - Services wiring the above: receipt sending, reminder scheduling
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Rent arithmetic, calendar utilities, receipt and reminder models
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for outbound dependencies
//! - [`adapter`] - Concrete adapters (SQLite, PDF, SMTP, CLI)
//! - [`app`] - Application services
//!
//! # Example
//!
//! ```
//! use quittance::domain::calendar::Trimestre;
//! use quittance::domain::irl::IrlTable;
//! use quittance::domain::revision::{reviser, ReferenceBail};
//! use rust_decimal_macros::dec;
//!
//! let table = IrlTable::default();
//! let reference = ReferenceBail::Trimestre {
//!     annee: 2023,
//!     trimestre: Trimestre::T3,
//! };
//! let aujourd_hui = chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let revision = reviser(dec!(800), reference, &table, aujourd_hui).unwrap();
//! assert!(revision.nouveau_loyer > dec!(800));
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
