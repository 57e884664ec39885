//! Priority label resolution.

use crate::models::PriorityTier;

/// Resolve a raw priority label to its ordinal rank.
///
/// Rank 1 is most urgent, 5 means unspecified or unrecognized. Accepts both
/// word and numeric-string synonyms, case-insensitive. Unresolvable input
/// always falls through to 5 rather than failing.
pub fn rank(label: Option<&str>) -> u8 {
    match label.unwrap_or("").to_lowercase().as_str() {
        "urgent" | "1" => 1,
        "high" | "2" => 2,
        "normal" | "medium" | "3" => 3,
        "low" | "4" => 4,
        _ => 5,
    }
}

/// Resolve a raw priority label to its display tier.
pub fn tier(label: Option<&str>) -> PriorityTier {
    match rank(label) {
        1 => PriorityTier::Urgent,
        2 => PriorityTier::High,
        3 => PriorityTier::Normal,
        _ => PriorityTier::None,
    }
}
