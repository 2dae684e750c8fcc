//! Rent arithmetic and rental-domain models.

pub mod calendar;
pub mod error;
pub mod irl;
pub mod lettres;
pub mod montant;
pub mod prorata;
pub mod quittance;
pub mod rappel;
pub mod revision;

pub use calendar::Trimestre;
pub use error::DomainError;
pub use irl::IrlTable;
pub use prorata::{Occupation, Prorata};
pub use quittance::{Partie, Periode, Quittance, QuittanceId, StatutQuittance};
pub use rappel::{Rappel, RappelId, StatutRappel};
pub use revision::{DelaiRevision, ReferenceBail, Revision};
