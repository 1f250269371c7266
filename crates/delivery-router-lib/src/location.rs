use std::fmt;

/// A named point in the delivery network.
///
/// Equality, hashing, and ordering consider only the name, so two `Location`
/// values carrying the same name denote the same vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    name: String,
}

impl Location {
    /// Create a location with the given name.
    ///
    /// Name validity is checked when the location is added to a
    /// [`RouteGraph`](crate::graph::RouteGraph), not here.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Identifying name of the location.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_considers_only_the_name() {
        assert_eq!(Location::new("Tunja"), Location::from("Tunja"));
        assert_ne!(Location::new("Tunja"), Location::new("Paipa"));
    }

    #[test]
    fn display_renders_the_name() {
        assert_eq!(Location::new("Villa de Leyva").to_string(), "Villa de Leyva");
    }
}
