//! Section names and the payloads the catalog API groups movies into.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::ConfigError;
use crate::models::Movie;

// ============================================================================
// SectionName
// ============================================================================

/// Name of a lazily loaded homepage section (e.g. `action`).
///
/// The name ends up in a query string, a cache key and an element id, so it
/// is restricted to lowercase ASCII letters, digits, `_` and `-`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionName(String);

impl SectionName {
    /// Validate and wrap a section name.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(ConfigError::InvalidSection(name.to_string()))
        }
    }

    /// Wrap a name known at compile time.
    pub(crate) fn known(name: &'static str) -> Self {
        debug_assert!(Self::parse(name).is_ok(), "invalid section name: {name}");
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SectionName {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SectionName> for String {
    fn from(name: SectionName) -> Self {
        name.0
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SectionsBundle
// ============================================================================

/// Movies grouped by bucket name, in the order the server sent them.
///
/// Serialized as a JSON object. Buckets whose value is `null` deserialize as
/// empty lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionsBundle {
    buckets: Vec<(String, Vec<Movie>)>,
}

impl SectionsBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bucket, replacing an existing one with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, movies: Vec<Movie>) {
        let name = name.into();
        match self.buckets.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = movies,
            None => self.buckets.push((name, movies)),
        }
    }

    /// Remove a bucket and return its movies.
    pub fn take(&mut self, name: &str) -> Option<Vec<Movie>> {
        let index = self.buckets.iter().position(|(n, _)| n == name)?;
        Some(self.buckets.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Movie])> {
        self.buckets
            .iter()
            .map(|(name, movies)| (name.as_str(), movies.as_slice()))
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<Movie>)> for SectionsBundle {
    fn from_iter<I: IntoIterator<Item = (N, Vec<Movie>)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (name, movies) in iter {
            bundle.insert(name, movies);
        }
        bundle
    }
}

impl Serialize for SectionsBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (name, movies) in &self.buckets {
            map.serialize_entry(name, movies)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionsBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BundleVisitor;

        impl<'de> Visitor<'de> for BundleVisitor {
            type Value = SectionsBundle;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of section names to movie lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut bundle = SectionsBundle::new();
                while let Some((name, movies)) = map.next_entry::<String, Option<Vec<Movie>>>()? {
                    bundle.insert(name, movies.unwrap_or_default());
                }
                Ok(bundle)
            }
        }

        deserializer.deserialize_map(BundleVisitor)
    }
}

/// Body of the catalog endpoint.
///
/// The client historically expected `{"sections": {...}}` while the server
/// answers with the bare bundle; both shapes are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum CatalogPayload {
    Wrapped { sections: SectionsBundle },
    Bare(SectionsBundle),
}

impl From<CatalogPayload> for SectionsBundle {
    fn from(payload: CatalogPayload) -> Self {
        match payload {
            CatalogPayload::Wrapped { sections } => sections,
            CatalogPayload::Bare(sections) => sections,
        }
    }
}

// ============================================================================
// SearchResults
// ============================================================================

/// Body of the search endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub search_results: Vec<Movie>,
    #[serde(default)]
    pub recommendations: Vec<Movie>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.search_results.is_empty() && self.recommendations.is_empty()
    }
}
