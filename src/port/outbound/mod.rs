//! Outbound ports: persistence and email.

pub mod courrier;
pub mod store;

pub use courrier::{Courriel, Courrier, PieceJointe};
pub use store::{QuittanceStore, RappelStore};
