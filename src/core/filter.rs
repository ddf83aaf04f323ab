use serde::{Deserialize, Serialize};

use crate::error::{ProxyError, Result};

/// Genre always implied when no explicit genre filter is supplied
pub const MANDATORY_TAG: &str = "indie";

pub const MIN_YEAR: u32 = 1980;
pub const MAX_YEAR: u32 = 2030;
pub const MAX_PAGE_SIZE: u32 = 40;

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

/// Structured game filter, as accepted by the list and random routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Genre slugs, used verbatim when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,

    /// Critic score floor (0-100)
    #[serde(rename = "minRating", default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u32>,

    /// Review count floor; only influences the default ordering upstream
    #[serde(rename = "minReviews", default, skip_serializing_if = "Option::is_none")]
    pub min_reviews: Option<u32>,

    #[serde(rename = "yearStart", default, skip_serializing_if = "Option::is_none")]
    pub year_start: Option<u32>,

    #[serde(rename = "yearEnd", default, skip_serializing_if = "Option::is_none")]
    pub year_end: Option<u32>,

    /// Parent platform ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<u32>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            genres: None,
            min_rating: None,
            min_reviews: None,
            year_start: None,
            year_end: None,
            platforms: None,
            ordering: None,
            search: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl Filter {
    /// Initial filter state of a browsing client: the mandatory tag is preselected.
    pub fn client_default() -> Self {
        Self {
            genres: Some(vec![MANDATORY_TAG.to_string()]),
            ..Self::default()
        }
    }

    /// Client-side rule: the mandatory tag is appended to the user's genre
    /// selection whenever it is missing. The translator never does this.
    pub fn with_mandatory_tag(mut self) -> Self {
        let genres = self.genres.get_or_insert_with(Vec::new);
        if !genres.iter().any(|g| g == MANDATORY_TAG) {
            genres.push(MANDATORY_TAG.to_string());
        }
        self
    }

    /// Non-empty genre list, if any
    pub fn selected_genres(&self) -> Option<&[String]> {
        self.genres.as_deref().filter(|g| !g.is_empty())
    }

    /// Non-empty platform list, if any
    pub fn selected_platforms(&self) -> Option<&[u32]> {
        self.platforms.as_deref().filter(|p| !p.is_empty())
    }

    /// Range checks for every bounded field
    pub fn validate(&self) -> Result<()> {
        if let Some(rating) = self.min_rating {
            if rating > 100 {
                return Err(ProxyError::Validation(format!(
                    "minRating must be between 0 and 100, got {}",
                    rating
                )));
            }
        }

        for (name, year) in [("yearStart", self.year_start), ("yearEnd", self.year_end)] {
            if let Some(year) = year {
                if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                    return Err(ProxyError::Validation(format!(
                        "{} must be between {} and {}, got {}",
                        name, MIN_YEAR, MAX_YEAR, year
                    )));
                }
            }
        }

        if self.page < 1 {
            return Err(ProxyError::Validation("page must be at least 1".to_string()));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ProxyError::Validation(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        Ok(())
    }

    /// Parse inbound query pairs into a validated filter.
    ///
    /// Repeated `genres`/`genres[]` and `platforms`/`platforms[]` keys
    /// accumulate in order. Empty values count as absent.
    pub fn from_query_pairs<K, V>(pairs: &[(K, V)]) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Filter::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "genres" | "genres[]" => filter
                    .genres
                    .get_or_insert_with(Vec::new)
                    .push(value.to_string()),
                "platforms" | "platforms[]" => filter
                    .platforms
                    .get_or_insert_with(Vec::new)
                    .push(parse_number("platforms", value)?),
                "minRating" => filter.min_rating = Some(parse_number("minRating", value)?),
                "minReviews" => filter.min_reviews = Some(parse_number("minReviews", value)?),
                "yearStart" => filter.year_start = Some(parse_number("yearStart", value)?),
                "yearEnd" => filter.year_end = Some(parse_number("yearEnd", value)?),
                "ordering" => filter.ordering = Some(value.to_string()),
                "search" => filter.search = Some(value.to_string()),
                "page" => filter.page = parse_number("page", value)?,
                "page_size" => filter.page_size = parse_number("page_size", value)?,
                _ => {}
            }
        }

        filter.validate()?;
        Ok(filter)
    }
}

fn parse_number(field: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ProxyError::Validation(format!("{} is not a valid number: {:?}", field, value)))
}
