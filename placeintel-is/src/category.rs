//! Category classification shared across the analysis engines
//!
//! Two deliberately distinct entry points exist. The business engine maps the
//! primary category into the closed [`PlaceCategory`] set via [`classify`];
//! the context and accessibility engines run substring checks directly
//! against the raw lower-cased label from [`raw_primary_label`]. A label like
//! "fitness-restaurant-bar" therefore matches a single branch in the business
//! engine but can match several independent checks in the other two.

use crate::models::CategoryEntry;

/// Internal category set used by the business engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceCategory {
    Coffee,
    Restaurant,
    Gym,
    Library,
    Shopping,
    General,
}

/// Map the primary category label to the internal category set
///
/// Pure function of the first entry's name: first matching keyword set wins,
/// empty input maps to `General`.
pub fn classify(categories: &[CategoryEntry]) -> PlaceCategory {
    let label = match raw_primary_label(categories) {
        Some(label) => label,
        None => return PlaceCategory::General,
    };

    if label.contains("coffee") || label.contains("café") {
        PlaceCategory::Coffee
    } else if label.contains("restaurant") || label.contains("food") {
        PlaceCategory::Restaurant
    } else if label.contains("gym") || label.contains("fitness") {
        PlaceCategory::Gym
    } else if label.contains("library") {
        PlaceCategory::Library
    } else if label.contains("shop") || label.contains("store") {
        PlaceCategory::Shopping
    } else {
        PlaceCategory::General
    }
}

/// Lower-cased primary category label; `None` when no categories were supplied
pub fn raw_primary_label(categories: &[CategoryEntry]) -> Option<String> {
    categories.first().map(|c| c.name.to_lowercase())
}
