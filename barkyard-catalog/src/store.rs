use std::collections::HashMap;

use serde::Deserialize;

use crate::yard::{Yard, YardSummary};

/// Listing filters accepted by the yard search. Price bounds are inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YardFilter {
    pub fenced: Option<bool>,
    pub water: Option<bool>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl YardFilter {
    fn matches(&self, yard: &Yard) -> bool {
        if let Some(fenced) = self.fenced {
            if yard.fenced != fenced {
                return false;
            }
        }
        if let Some(water) = self.water {
            if yard.water != water {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if yard.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if yard.price > max {
                return false;
            }
        }
        true
    }
}

/// Read-only yard directory, built once at startup and shared by reference.
///
/// Listings keep seed order; id lookups go through an index.
pub struct CatalogStore {
    yards: Vec<Yard>,
    by_id: HashMap<String, usize>,
}

impl CatalogStore {
    pub fn new(yards: Vec<Yard>) -> Self {
        let by_id = yards
            .iter()
            .enumerate()
            .map(|(idx, yard)| (yard.id.clone(), idx))
            .collect();
        Self { yards, by_id }
    }

    /// Full record for a yard id.
    pub fn get(&self, id: &str) -> Option<&Yard> {
        self.by_id.get(id).map(|&idx| &self.yards[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Every yard, in listing order.
    pub fn yards(&self) -> &[Yard] {
        &self.yards
    }

    /// Summaries for yards matching the filter, in listing order.
    pub fn summaries(&self, filter: &YardFilter) -> Vec<YardSummary> {
        self.yards
            .iter()
            .filter(|yard| filter.matches(yard))
            .map(Yard::summary)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.yards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.yards.is_empty()
    }
}
