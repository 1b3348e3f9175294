//! Pedestrian access level.

use fp_core::Tags;

/// Legal access for someone on foot, resolved from `foot`, falling back to
/// `access`.  Values not listed here (yes, permissive, designated, …) are
/// [`AccessLevel::Allowed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccessLevel {
    Allowed,
    No,
    Private,
    /// `customers` or `permit`.
    Customers,
    /// Reserved for agricultural, forestry, delivery or military use.
    NonPedestrian,
}

impl AccessLevel {
    pub fn parse(value: &str) -> AccessLevel {
        match value {
            "no" => AccessLevel::No,
            "private" => AccessLevel::Private,
            "customers" | "permit" => AccessLevel::Customers,
            "agricultural" | "forestry" | "delivery" | "military" => AccessLevel::NonPedestrian,
            _ => AccessLevel::Allowed,
        }
    }
}

/// `None` when neither `foot` nor `access` is tagged (legal by assumption).
pub fn access_level(tags: &Tags) -> Option<AccessLevel> {
    tags.get("foot")
        .filter(|v| !v.is_empty())
        .or_else(|| tags.get("access").filter(|v| !v.is_empty()))
        .map(AccessLevel::parse)
}
