//! Concrete adapters behind the ports.

pub mod inbound;
pub mod outbound;
