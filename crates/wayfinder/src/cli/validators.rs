//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use crate::domain::NodeId;

/// Validate a place name.
///
/// Delegates to [`NodeId::new`] so the command line accepts exactly the names
/// the graph file can store.
pub fn validate_place(s: &str) -> Result<NodeId, String> {
    NodeId::new(s.trim()).map_err(|e| e.to_string())
}

/// Validate a distance unit label.
///
/// Delegates to the domain validator in `commands::init`.
pub fn validate_unit(s: &str) -> Result<String, String> {
    use crate::commands::init;

    let trimmed = s.trim();
    init::validate_unit(trimmed).map_err(|e| e.to_string())?;
    Ok(trimmed.to_string())
}

/// Validate a hop limit for path enumeration.
///
/// Zero is rejected because no path with a distinct start and end has zero
/// roads.
pub fn validate_hops(s: &str) -> Result<usize, String> {
    let hops: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid hop limit: '{s}'. Expected a positive whole number"))?;
    if hops == 0 {
        return Err("Hop limit must be at least 1".to_string());
    }
    Ok(hops)
}
