//! Movie records as returned by the catalog API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single movie record.
///
/// Every field is optional. The API omits fields freely and may send `null`,
/// so display code must go through the accessors below, which treat empty
/// strings and zero values as missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<ReleaseYear>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_count: Option<u64>,
}

impl Movie {
    /// Title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Overview text, if present and non-empty.
    pub fn overview(&self) -> Option<&str> {
        non_empty(&self.overview)
    }

    /// Poster URL, if present and not blank.
    pub fn poster(&self) -> Option<&str> {
        self.poster_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Average rating, if present and non-zero.
    pub fn rating(&self) -> Option<f64> {
        self.vote_average.filter(|v| *v != 0.0)
    }

    /// Release year, if present and meaningful.
    pub fn year(&self) -> Option<&ReleaseYear> {
        self.release_year.as_ref().filter(|y| !y.is_blank())
    }

    /// Number of votes, zero when unknown.
    pub fn votes(&self) -> u64 {
        self.vote_count.unwrap_or(0)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Release year as sent by the API: a number from the graph store, or a
/// string from older payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseYear {
    Number(i64),
    Text(String),
}

impl ReleaseYear {
    fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}
