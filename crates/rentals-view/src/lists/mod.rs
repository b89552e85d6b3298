//! Per-screen list definitions: filter criteria, sort keys, and the stat
//! cards each dashboard shows.

pub mod application;
pub mod booking;
pub mod earning;
pub mod moderation;
pub mod payment;
pub mod property;
pub mod user;

use serde::{Deserialize, Serialize};

use rentals_core::types::Timestamp;

/// Define a sort-key enumeration parsed from CLI and query strings.
macro_rules! sort_keys {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Return the key's wire name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = rentals_core::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().replace('-', "_").as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(rentals_core::AppError::validation(format!(
                        "Invalid sort key: '{}'. Expected one of: {}",
                        s,
                        [$($text),+].join(", ")
                    ))),
                }
            }
        }
    };
}

pub(crate) use sort_keys;

/// An inclusive window of time; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest accepted instant.
    #[serde(default)]
    pub from: Option<Timestamp>,
    /// Latest accepted instant.
    #[serde(default)]
    pub to: Option<Timestamp>,
}

impl DateRange {
    /// Whether `at` falls inside the window.
    pub fn contains(&self, at: &Timestamp) -> bool {
        self.from.is_none_or(|from| at >= &from) && self.to.is_none_or(|to| at <= &to)
    }

    /// Whether either end is set.
    pub fn is_bounded(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

/// An inclusive range of amounts in Naira; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRange {
    /// Smallest accepted amount.
    #[serde(default)]
    pub min: Option<i64>,
    /// Largest accepted amount.
    #[serde(default)]
    pub max: Option<i64>,
}

impl AmountRange {
    /// Whether `amount` falls inside the range.
    pub fn contains(&self, amount: i64) -> bool {
        self.min.is_none_or(|min| amount >= min) && self.max.is_none_or(|max| amount <= max)
    }

    /// Whether either end is set.
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_inclusive() {
        let range = DateRange {
            from: Some(Timestamp::parse("2024-01-01").unwrap()),
            to: Some(Timestamp::parse("2024-01-31").unwrap()),
        };
        assert!(range.contains(&Timestamp::parse("2024-01-01").unwrap()));
        assert!(range.contains(&Timestamp::parse("2024-01-31").unwrap()));
        assert!(!range.contains(&Timestamp::parse("2024-02-01").unwrap()));
        assert!(DateRange::default().contains(&Timestamp::parse("1999-12-31").unwrap()));
    }

    #[test]
    fn test_amount_range_open_ends() {
        let range = AmountRange {
            min: Some(500_000),
            max: None,
        };
        assert!(range.contains(500_000));
        assert!(range.contains(9_000_000));
        assert!(!range.contains(499_999));
    }
}
