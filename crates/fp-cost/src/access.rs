//! Legal pedestrian access.

use fp_prefs::{OptionName, Preferences};
use fp_tags::AccessLevel;

/// Whether someone on foot may legally pass.  Untagged access is legal.
pub fn access_is_legal(access: Option<AccessLevel>, prefs: &Preferences) -> bool {
    match access {
        None | Some(AccessLevel::Allowed) => true,
        Some(AccessLevel::No | AccessLevel::NonPedestrian) => false,
        Some(AccessLevel::Private) => prefs.enabled(OptionName::AllowPrivateAccess),
        Some(AccessLevel::Customers) => prefs.enabled(OptionName::AllowCustomerAccess),
    }
}
