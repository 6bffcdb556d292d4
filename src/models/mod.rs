//! Data models for the ChoreBoard domain core.
//!
//! These models match the mobile frontend interfaces exactly for seamless
//! interoperability.

mod datastore;
mod exchange;
mod post;
mod product;
mod profile;

pub use datastore::*;
pub use exchange::*;
pub use post::*;
pub use product::*;
pub use profile::*;
