//! Agent profile domain types
//!
//! Agents are read-only reference data in this service; profile edits live
//! with the hosted collaborator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub profile_image: String,
    /// Aggregate rating on a 0.0 to 5.0 scale.
    pub rating: f64,
    pub review_count: u32,
    pub years_experience: u32,
    pub location: String,
    pub specializations: Vec<String>,
    pub phone_number: String,
    pub email: String,
    pub bio: String,
    pub listings: u32,
    pub transactions: u32,
    pub languages: Vec<String>,
}
