//! Named locations in the world.

use super::Point;

/// Substring in a location's kind tag that marks it as an ice-highway
/// endpoint.
pub const ICE_HIGHWAY_MARKER: &str = "Ice Highway";

/// Owner label used for land that belongs to nobody in particular.
/// Not worth calling out when annotating a destination.
pub const PUBLIC_OWNER: &str = "Public Land";

/// A named place with exactly one coordinate.
///
/// The kind tag is free text from the dataset; the only substring with
/// engine-level meaning is [`ICE_HIGHWAY_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    name: String,
    point: Point,
    owner: Option<String>,
    kind: String,
}

impl Location {
    /// Create a location. An empty owner string becomes `None`.
    pub fn new(name: String, point: Point, owner: String, kind: String) -> Self {
        let owner = if owner.is_empty() { None } else { Some(owner) };
        Self {
            name,
            point,
            owner,
            kind,
        }
    }

    /// The location's unique display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The location's coordinate.
    pub fn point(&self) -> Point {
        self.point
    }

    /// The owner label, if any.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// The free-text kind tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether this location is an ice-highway endpoint.
    pub fn is_ice_highway(&self) -> bool {
        self.kind.contains(ICE_HIGHWAY_MARKER)
    }
}

/// Whether an owner label is worth showing next to a location name.
///
/// Generic public land is omitted, as is an owner whose name already
/// appears (case-insensitively) inside the location name.
///
/// # Examples
///
/// ```
/// use wayfinder_server::domain::owner_is_notable;
///
/// assert!(owner_is_notable("Alex", "North Farm"));
/// assert!(!owner_is_notable("Public Land", "North Farm"));
/// assert!(!owner_is_notable("alex", "Alex's Tower"));
/// assert!(!owner_is_notable("", "North Farm"));
/// ```
pub fn owner_is_notable(owner: &str, name: &str) -> bool {
    !owner.is_empty()
        && owner != PUBLIC_OWNER
        && !name.to_lowercase().contains(&owner.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(kind: &str) -> Location {
        Location::new(
            "Somewhere".to_string(),
            Point::new(0, 0),
            String::new(),
            kind.to_string(),
        )
    }

    #[test]
    fn ice_highway_marker_is_substring_match() {
        assert!(loc("Ice Highway").is_ice_highway());
        assert!(loc("Station, Ice Highway Hub").is_ice_highway());
        assert!(!loc("Station").is_ice_highway());
        // Case matters, matching the dataset convention.
        assert!(!loc("ice highway").is_ice_highway());
    }

    #[test]
    fn empty_owner_becomes_none() {
        let l = Location::new(
            "A".to_string(),
            Point::new(1, 2),
            String::new(),
            String::new(),
        );
        assert_eq!(l.owner(), None);

        let l = Location::new(
            "A".to_string(),
            Point::new(1, 2),
            "Alex".to_string(),
            String::new(),
        );
        assert_eq!(l.owner(), Some("Alex"));
    }

    #[test]
    fn notable_owner_rules() {
        assert!(owner_is_notable("Alex", "North Farm"));
        assert!(!owner_is_notable("", "North Farm"));
        assert!(!owner_is_notable("Public Land", "North Farm"));
        // Owner already implied by the name, any casing.
        assert!(!owner_is_notable("Alex", "Alex's Tower"));
        assert!(!owner_is_notable("ALEX", "alex tower"));
    }
}
