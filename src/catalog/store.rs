//! Shared in-memory catalog stores
//!
//! All mutation happens through these handles, which live in the shared
//! application state; there is no module-level global.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::domain::{Agent, Property};

/// Handle to the in-memory property list. Cloning is cheap; all clones
/// see the same underlying list.
#[derive(Clone)]
pub struct PropertyCatalog {
    inner: Arc<RwLock<Vec<Property>>>,
}

impl PropertyCatalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(properties)),
        }
    }

    pub fn with_seed() -> Self {
        Self::new(super::seed::seed_properties())
    }

    /// Snapshot of the full list in source (newest-first) order.
    pub fn snapshot(&self) -> Vec<Property> {
        self.inner.read().clone()
    }

    /// Look up a listing by id. `None` for an unknown id; never panics.
    pub fn get(&self, id: &str) -> Option<Property> {
        self.inner.read().iter().find(|p| p.id == id).cloned()
    }

    /// All listings owned by the given agent; empty when there are none.
    pub fn by_agent(&self, agent_id: &str) -> Vec<Property> {
        self.inner
            .read()
            .iter()
            .filter(|p| p.agent_id == agent_id)
            .cloned()
            .collect()
    }

    /// Prepend a new listing so the list stays newest-first.
    pub fn insert(&self, property: Property) {
        self.inner.write().insert(0, property);
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }
}

/// Read-only agent reference data.
#[derive(Clone)]
pub struct AgentDirectory {
    agents: Arc<Vec<Agent>>,
}

impl AgentDirectory {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self {
            agents: Arc::new(agents),
        }
    }

    pub fn with_seed() -> Self {
        Self::new(super::seed::seed_agents())
    }

    pub fn all(&self) -> Vec<Agent> {
        self.agents.as_ref().clone()
    }

    pub fn get(&self, id: &str) -> Option<Agent> {
        self.agents.iter().find(|a| a.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyStatus;
    use chrono::Utc;

    fn listing(id: &str, agent_id: &str) -> Property {
        Property {
            id: id.to_string(),
            title: format!("Listing {id}"),
            address: "1 Test Ln".to_string(),
            price: 100_000,
            bedrooms: 2,
            bathrooms: 1.0,
            square_feet: 900,
            image_url: String::new(),
            property_type: "House".to_string(),
            status: PropertyStatus::Available,
            description: String::new(),
            features: vec![],
            agent_id: agent_id.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let catalog = PropertyCatalog::with_seed();
        assert!(catalog.get("does-not-exist").is_none());
        assert!(catalog.get("prop3").is_some());
    }

    #[test]
    fn insert_prepends_to_keep_newest_first() {
        let catalog = PropertyCatalog::new(vec![listing("a", "agent1")]);
        catalog.insert(listing("b", "agent1"));
        let ids: Vec<String> = catalog.snapshot().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn by_agent_filters_and_may_be_empty() {
        let catalog = PropertyCatalog::with_seed();
        let sarah = catalog.by_agent("agent1");
        assert_eq!(sarah.len(), 2);
        assert!(sarah.iter().all(|p| p.agent_id == "agent1"));
        assert!(catalog.by_agent("agent99").is_empty());
    }

    #[test]
    fn snapshot_is_a_copy() {
        let catalog = PropertyCatalog::with_seed();
        let before = catalog.snapshot();
        catalog.insert(listing("x", "agent1"));
        assert_eq!(before.len() + 1, catalog.len());
    }

    #[test]
    fn agent_directory_lookups() {
        let agents = AgentDirectory::with_seed();
        assert_eq!(agents.len(), 4);
        assert_eq!(agents.get("agent2").unwrap().name, "Michael Chen");
        assert!(agents.get("nobody").is_none());
    }
}
