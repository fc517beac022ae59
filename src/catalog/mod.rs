//! In-memory property and agent catalog
//!
//! The demo configuration of this service runs entirely off a seeded
//! in-memory catalog; durable persistence is owned by the hosted
//! collaborator and is out of scope here.

pub mod search;
pub mod seed;
pub mod store;

pub use search::search;
pub use store::{AgentDirectory, PropertyCatalog};
