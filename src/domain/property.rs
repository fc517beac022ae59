//! Property listing domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Listing status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    #[default]
    Available,
    Pending,
    Sold,
    Rented,
}

impl From<String> for PropertyStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => Self::Pending,
            "sold" => Self::Sold,
            "rented" => Self::Rented,
            _ => Self::Available,
        }
    }
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Pending => write!(f, "pending"),
            Self::Sold => write!(f, "sold"),
            Self::Rented => write!(f, "rented"),
        }
    }
}

/// A property listing. Immutable once stored; new listings are prepended
/// to the catalog so source order stays newest-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub address: String,
    /// Price in whole dollars, never negative.
    pub price: i64,
    pub bedrooms: u32,
    /// Fractional counts are valid (e.g. 2.5 baths).
    pub bathrooms: f64,
    pub square_feet: u32,
    pub image_url: String,
    /// Free-text category label, compared case-insensitively.
    pub property_type: String,
    pub status: PropertyStatus,
    pub description: String,
    pub features: Vec<String>,
    pub agent_id: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new listing (agents only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePropertyRequest {
    pub title: String,
    pub address: String,
    pub price: i64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub square_feet: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    pub property_type: String,
    #[serde(default)]
    pub status: PropertyStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl CreatePropertyRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::bad_request("title must not be empty"));
        }
        if self.address.trim().is_empty() {
            return Err(ApiError::bad_request("address must not be empty"));
        }
        if self.price < 0 {
            return Err(ApiError::bad_request("price must not be negative"));
        }
        if self.bathrooms < 0.0 {
            return Err(ApiError::bad_request("bathrooms must not be negative"));
        }
        if self.property_type.trim().is_empty() {
            return Err(ApiError::bad_request("property_type must not be empty"));
        }
        Ok(())
    }

    /// Materialize the stored listing, owned by the submitting agent.
    pub fn into_property(self, agent_id: &str) -> Property {
        Property {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title,
            address: self.address,
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            image_url: self.image_url.unwrap_or_default(),
            property_type: self.property_type,
            status: self.status,
            description: self.description,
            features: self.features,
            agent_id: agent_id.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreatePropertyRequest {
        CreatePropertyRequest {
            title: "Spacious 3BR House with Garden".to_string(),
            address: "12 Elm St, Portland, OR".to_string(),
            price: 540_000,
            bedrooms: 3,
            bathrooms: 2.0,
            square_feet: 1650,
            image_url: None,
            property_type: "House".to_string(),
            status: PropertyStatus::default(),
            description: String::new(),
            features: vec![],
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut req = request();
        req.price = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut req = request();
        req.title = "   ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn into_property_assigns_id_and_owner() {
        let property = request().into_property("agent1");
        assert!(!property.id.is_empty());
        assert_eq!(property.agent_id, "agent1");
        assert_eq!(property.status, PropertyStatus::Available);
    }
}
