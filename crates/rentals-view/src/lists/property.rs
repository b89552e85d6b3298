//! Property listings: search page and landlord dashboard.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use rentals_core::types::{Selection, UserId};
use rentals_entity::property::{Property, PropertyKind, PropertyStatus};

use super::{sort_keys, AmountRange};
use crate::aggregate::{count_where, rate, sum_by, Tally};
use crate::filter::{Filterable, PredicateChain};
use crate::sort::{compare_timestamps, Sortable};

/// Filter controls of the property list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyCriteria {
    /// Availability status.
    pub status: Selection<PropertyStatus>,
    /// Property type.
    pub kind: Selection<PropertyKind>,
    /// Restrict to one landlord's listings.
    pub landlord: Option<UserId>,
    /// Price band.
    pub price: AmountRange,
    /// Minimum bedroom count.
    pub min_bedrooms: Option<u32>,
}

sort_keys! {
    /// Columns the property list can be ordered by.
    pub enum PropertySortKey {
        /// Listing creation date.
        #[default]
        CreatedAt => "created_at",
        /// Rent or nightly rate.
        Price => "price",
        /// Listing headline.
        Title => "title",
        /// Page views.
        Views => "views",
    }
}

impl Filterable for Property {
    type Criteria = PropertyCriteria;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.address.as_str(),
            self.city.as_str(),
        ]
    }

    fn dimensions(criteria: &PropertyCriteria) -> PredicateChain<'_, Self> {
        let mut chain = PredicateChain::new()
            .select("status", &criteria.status, |p: &Property| p.status)
            .select("kind", &criteria.kind, |p: &Property| p.kind);
        if let Some(landlord) = &criteria.landlord {
            chain.push("landlord", move |p| &p.landlord_id == landlord);
        }
        if criteria.price.is_bounded() {
            chain.push("price", move |p| criteria.price.contains(p.price));
        }
        if let Some(min) = criteria.min_bedrooms {
            chain.push("bedrooms", move |p| p.bedrooms >= min);
        }
        chain
    }
}

impl Sortable for Property {
    type SortKey = PropertySortKey;

    fn compare(a: &Self, b: &Self, key: PropertySortKey) -> Ordering {
        match key {
            PropertySortKey::CreatedAt => compare_timestamps(&a.created_at, &b.created_at),
            PropertySortKey::Price => a.price.cmp(&b.price),
            PropertySortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            PropertySortKey::Views => a.views.cmp(&b.views),
        }
    }
}

/// Stat cards on the landlord dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyStats {
    /// Listings per status.
    pub by_status: Tally<PropertyStatus>,
    /// Total page views.
    pub total_views: u64,
    /// Total saves.
    pub total_favourites: u64,
    /// Share of listings currently rented.
    pub occupancy_rate: u32,
    /// Mean asking price, rounded down; 0 with no listings.
    pub average_price: i64,
}

impl PropertyStats {
    /// Aggregate over `properties`.
    pub fn compute(properties: &[Property]) -> Self {
        let by_status = Tally::of(properties, PropertyStatus::ALL, |p| p.status);
        let rented = count_where(properties, |p| p.status == PropertyStatus::Rented);
        let average_price = match properties.len() as i64 {
            0 => 0,
            n => sum_by(properties, |p| p.price) / n,
        };
        Self {
            total_views: properties.iter().map(|p| p.views).sum(),
            total_favourites: properties.iter().map(|p| p.favourites).sum(),
            occupancy_rate: rate(rented, properties.len()),
            average_price,
            by_status,
        }
    }

    /// Number of listings.
    pub fn total(&self) -> usize {
        self.by_status.total()
    }
}
