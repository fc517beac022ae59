//! Domain types and DTOs
//!
//! These types define the data structures for PropertyMatch entities.

pub mod agent;
pub mod auth;
pub mod property;
pub mod search;

pub use agent::Agent;
pub use property::{CreatePropertyRequest, Property, PropertyStatus};
pub use search::{PropertyQuery, SearchCriteria, SortBy};
