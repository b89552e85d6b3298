//! Admin user directory.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use rentals_core::types::Selection;
use rentals_entity::user::{User, UserRole, UserStatus};

use super::sort_keys;
use crate::aggregate::Tally;
use crate::filter::{Filterable, PredicateChain};
use crate::sort::{compare_timestamps, Sortable};

/// Filter controls of the user directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCriteria {
    /// Dashboard role.
    pub role: Selection<UserRole>,
    /// Account status.
    pub status: Selection<UserStatus>,
}

sort_keys! {
    /// Columns the directory can be ordered by.
    pub enum UserSortKey {
        /// Sign-up date.
        #[default]
        JoinedAt => "joined_at",
        /// Display name.
        Name => "name",
    }
}

impl Filterable for User {
    type Criteria = UserCriteria;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn dimensions(criteria: &UserCriteria) -> PredicateChain<'_, Self> {
        PredicateChain::new()
            .select("role", &criteria.role, |u: &User| u.role)
            .select("status", &criteria.status, |u: &User| u.status)
    }
}

impl Sortable for User {
    type SortKey = UserSortKey;

    fn compare(a: &Self, b: &Self, key: UserSortKey) -> Ordering {
        match key {
            UserSortKey::JoinedAt => compare_timestamps(&a.joined_at, &b.joined_at),
            UserSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

/// Directory counters on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Users per role.
    pub by_role: Tally<UserRole>,
    /// Users per account status.
    pub by_status: Tally<UserStatus>,
}

impl UserStats {
    /// Aggregate over `users`.
    pub fn compute(users: &[User]) -> Self {
        Self {
            by_role: Tally::of(users, UserRole::ALL, |u| u.role),
            by_status: Tally::of(users, UserStatus::ALL, |u| u.status),
        }
    }

    /// Number of users.
    pub fn total(&self) -> usize {
        self.by_role.total()
    }
}
