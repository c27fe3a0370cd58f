//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`persistence`] - Storage backends for domain entities

pub mod persistence;
