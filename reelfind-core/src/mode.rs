//! Search modes and their input affordances

use crate::ReelfindError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest rating the number input accepts
pub const RATING_MIN: f64 = 0.0;
/// Highest rating the number input accepts
pub const RATING_MAX: f64 = 10.0;
/// Increment of the rating number input
pub const RATING_STEP: f64 = 0.1;

/// Field the recommendation service is queried by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Title,
    Rating,
    Budget,
    Country,
    Language,
}

/// How the value input is presented for a mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    Text,
    Number { min: f64, max: f64, step: f64 },
}

impl SearchMode {
    /// All modes, in selector order
    pub fn all() -> [SearchMode; 5] {
        [
            SearchMode::Title,
            SearchMode::Rating,
            SearchMode::Budget,
            SearchMode::Country,
            SearchMode::Language,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Title => "title",
            SearchMode::Rating => "rating",
            SearchMode::Budget => "budget",
            SearchMode::Country => "country",
            SearchMode::Language => "language",
        }
    }

    /// Query parameter key sent to the service.
    pub fn query_key(&self) -> &'static str {
        match self {
            SearchMode::Rating => "rating",
            other => other.as_str(),
        }
    }

    /// Resource path on the recommendation service
    pub fn path(&self) -> String {
        format!("/recommend/{}", self.as_str())
    }

    /// Selector label, e.g. "Search by Title"
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Title => "Search by Title",
            SearchMode::Rating => "Search by Rating",
            SearchMode::Budget => "Search by Budget",
            SearchMode::Country => "Search by Country",
            SearchMode::Language => "Search by Language",
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Enter {}", self.as_str())
    }

    pub fn input(&self) -> InputKind {
        match self {
            SearchMode::Rating => InputKind::Number {
                min: RATING_MIN,
                max: RATING_MAX,
                step: RATING_STEP,
            },
            _ => InputKind::Text,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = ReelfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SearchMode::all()
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReelfindError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Text => f.write_str("text"),
            InputKind::Number { min, max, step } => {
                write!(f, "number in [{}, {}], step {}", min, max, step)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("title".parse::<SearchMode>().unwrap(), SearchMode::Title);
        assert_eq!("Rating".parse::<SearchMode>().unwrap(), SearchMode::Rating);
        assert_eq!(" LANGUAGE ".parse::<SearchMode>().unwrap(), SearchMode::Language);
        assert!(matches!(
            "genre".parse::<SearchMode>(),
            Err(ReelfindError::UnknownMode(m)) if m == "genre"
        ));
    }

    #[test]
    fn test_query_key_and_path() {
        for mode in SearchMode::all() {
            assert_eq!(mode.query_key(), mode.as_str());
            assert_eq!(mode.path(), format!("/recommend/{}", mode));
        }
        assert_eq!(SearchMode::Rating.query_key(), "rating");
    }

    #[test]
    fn test_only_rating_is_numeric() {
        assert_eq!(
            SearchMode::Rating.input(),
            InputKind::Number {
                min: 0.0,
                max: 10.0,
                step: 0.1
            }
        );
        for mode in [
            SearchMode::Title,
            SearchMode::Budget,
            SearchMode::Country,
            SearchMode::Language,
        ] {
            assert_eq!(mode.input(), InputKind::Text);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(SearchMode::default(), SearchMode::Title);
        assert_eq!(SearchMode::Budget.label(), "Search by Budget");
        assert_eq!(SearchMode::Country.placeholder(), "Enter country");
    }
}
