#![deny(missing_docs)]

//! Realizability tests and constructive realization for fixed and interval margins.
//!
//! Fixed margins are decided with the Gale–Ryser prefix criterion and realized
//! greedily; interval margins are decided and realized through a bounded
//! bipartite flow network.

mod construct;
pub mod flow;
mod gale_ryser;

pub use construct::{is_realizable_interval, realize_fixed, realize_interval};
pub use gale_ryser::is_realizable_fixed;
