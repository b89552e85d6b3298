//! Sample marketplace data.
//!
//! The default data set is compiled into the binary from `data/*.json`.
//! A single JSON document with the same top-level keys can replace it at
//! runtime. Either way the set is validated on load: ids must be unique
//! per collection and cross-collection references must resolve.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rentals_core::{AppError, AppResult};
use rentals_entity::Record;
use rentals_entity::application::RentalApplication;
use rentals_entity::booking::Booking;
use rentals_entity::earning::Earning;
use rentals_entity::message::Conversation;
use rentals_entity::moderation::ModerationItem;
use rentals_entity::payment::Payment;
use rentals_entity::property::Property;
use rentals_entity::user::User;

const PROPERTIES: &str = include_str!("../data/properties.json");
const APPLICATIONS: &str = include_str!("../data/applications.json");
const EARNINGS: &str = include_str!("../data/earnings.json");
const PAYMENTS: &str = include_str!("../data/payments.json");
const BOOKINGS: &str = include_str!("../data/bookings.json");
const MODERATION: &str = include_str!("../data/moderation.json");
const USERS: &str = include_str!("../data/users.json");
const CONVERSATIONS: &str = include_str!("../data/conversations.json");

/// Every collection the dashboards read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    /// Property listings.
    pub properties: Vec<Property>,
    /// Rental applications.
    pub applications: Vec<RentalApplication>,
    /// Landlord ledger entries.
    pub earnings: Vec<Earning>,
    /// Tenant payments.
    pub payments: Vec<Payment>,
    /// Hotel bookings.
    pub bookings: Vec<Booking>,
    /// Admin moderation queue.
    pub moderation: Vec<ModerationItem>,
    /// Registered users.
    pub users: Vec<User>,
    /// Message threads.
    pub conversations: Vec<Conversation>,
}

impl Fixtures {
    /// Load the data set compiled into the binary.
    pub fn embedded() -> AppResult<Self> {
        let fixtures = Self {
            properties: parse("properties", PROPERTIES)?,
            applications: parse("applications", APPLICATIONS)?,
            earnings: parse("earnings", EARNINGS)?,
            payments: parse("payments", PAYMENTS)?,
            bookings: parse("bookings", BOOKINGS)?,
            moderation: parse("moderation", MODERATION)?,
            users: parse("users", USERS)?,
            conversations: parse("conversations", CONVERSATIONS)?,
        };
        fixtures.validate()?;
        debug!(records = fixtures.record_count(), "Loaded embedded fixtures");
        Ok(fixtures)
    }

    /// Load a data set from one JSON document on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                rentals_core::ErrorKind::NotFound,
                format!("Cannot read fixture file '{}'", path.display()),
                e,
            )
        })?;
        let fixtures: Self = serde_json::from_str(&raw).map_err(|e| {
            AppError::from_json(format!("Invalid fixture file '{}'", path.display()), e)
        })?;
        fixtures.validate()?;
        info!(path = %path.display(), records = fixtures.record_count(), "Loaded fixtures from file");
        Ok(fixtures)
    }

    /// Load from `path` when given, otherwise the embedded set.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// Check id uniqueness and cross-collection references.
    pub fn validate(&self) -> AppResult<()> {
        ensure_unique("properties", &self.properties)?;
        ensure_unique("applications", &self.applications)?;
        ensure_unique("earnings", &self.earnings)?;
        ensure_unique("payments", &self.payments)?;
        ensure_unique("bookings", &self.bookings)?;
        ensure_unique("moderation", &self.moderation)?;
        ensure_unique("users", &self.users)?;
        ensure_unique("conversations", &self.conversations)?;
        for conversation in &self.conversations {
            ensure_unique("messages", &conversation.messages)?;
        }

        let users: HashSet<&str> = self.users.iter().map(Record::id).collect();
        let properties: HashSet<&str> = self.properties.iter().map(Record::id).collect();

        for p in &self.properties {
            ensure_known("property", p.id.as_str(), "user", p.landlord_id.as_str(), &users)?;
        }
        for a in &self.applications {
            ensure_known("application", a.id.as_str(), "property", a.property_id.as_str(), &properties)?;
            ensure_known("application", a.id.as_str(), "user", a.tenant_id.as_str(), &users)?;
        }
        for p in &self.payments {
            ensure_known("payment", p.id.as_str(), "property", p.property_id.as_str(), &properties)?;
        }
        for b in &self.bookings {
            ensure_known("booking", b.id.as_str(), "property", b.room_id.as_str(), &properties)?;
        }
        for c in &self.conversations {
            c.ensure_two_party()?;
            for participant in &c.participants {
                ensure_known("conversation", c.id.as_str(), "user", participant.user_id.as_str(), &users)?;
            }
        }
        Ok(())
    }

    /// Total number of top-level records.
    pub fn record_count(&self) -> usize {
        self.properties.len()
            + self.applications.len()
            + self.earnings.len()
            + self.payments.len()
            + self.bookings.len()
            + self.moderation.len()
            + self.users.len()
            + self.conversations.len()
    }
}

fn parse<T: DeserializeOwned>(collection: &str, raw: &str) -> AppResult<Vec<T>> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::from_json(format!("Invalid {collection} fixtures"), e))
}

fn ensure_unique<R: Record>(collection: &str, records: &[R]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    match records.iter().find(|r| !seen.insert(r.id())) {
        Some(dup) => Err(AppError::conflict(format!(
            "Duplicate id '{}' in {collection}",
            dup.id()
        ))),
        None => Ok(()),
    }
}

fn ensure_known(
    owner: &str,
    owner_id: &str,
    target: &str,
    target_id: &str,
    known: &HashSet<&str>,
) -> AppResult<()> {
    if known.contains(target_id) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{owner} '{owner_id}' refers to unknown {target} '{target_id}'"
        )))
    }
}
