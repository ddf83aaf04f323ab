use serde::{Deserialize, Serialize};

/// Named, slugged upstream entity (genre, developer, publisher, platform)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Developers, publishers and platforms share the genre shape
pub type NamedRef = Genre;

/// Platform association wrapper (`{"platform": {...}}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformEntry {
    pub platform: NamedRef,
}

/// Game as it appears in list responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSummary {
    /// Upstream numeric id
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    /// Cover image URL
    #[serde(default)]
    pub background_image: Option<String>,

    /// Release date (YYYY-MM-DD)
    #[serde(default)]
    pub released: Option<String>,

    /// Critic score (0-100)
    #[serde(default)]
    pub metacritic: Option<u32>,

    /// User rating (0.0-5.0)
    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub ratings_count: u64,

    #[serde(default)]
    pub genres: Vec<Genre>,

    #[serde(default)]
    pub platforms: Option<Vec<PlatformEntry>>,

    #[serde(default)]
    pub parent_platforms: Option<Vec<PlatformEntry>>,
}

impl GameSummary {
    /// Release year parsed from the release date
    pub fn year(&self) -> Option<i32> {
        self.released
            .as_deref()
            .and_then(|date| date.split('-').next())
            .and_then(|year| year.parse().ok())
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        match self.year() {
            Some(year) => format!("{} ({})", self.name, year),
            None => self.name.clone(),
        }
    }

    /// Genre slugs in source order
    pub fn genre_slugs(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(|g| g.slug.as_str())
    }
}

/// Game detail response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameDetail {
    #[serde(flatten)]
    pub summary: GameSummary,

    /// HTML description
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub description_raw: Option<String>,

    #[serde(default)]
    pub developers: Option<Vec<NamedRef>>,

    #[serde(default)]
    pub publishers: Option<Vec<NamedRef>>,
}

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GamePage<T = GameSummary> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> GamePage<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_from_upstream_json() {
        let detail: GameDetail = serde_json::from_value(json!({
            "id": 3328,
            "name": "Hollow Knight",
            "slug": "hollow-knight",
            "released": "2017-02-24",
            "metacritic": 87,
            "rating": 4.4,
            "ratings_count": 2800,
            "genres": [
                {"id": 51, "name": "Indie", "slug": "indie"},
                {"id": 83, "name": "Platformer", "slug": "platformer"}
            ],
            "developers": [{"id": 1, "name": "Team Cherry", "slug": "team-cherry"}],
            "esrb_rating": null
        }))
        .unwrap();

        assert_eq!(detail.summary.id, 3328);
        assert_eq!(detail.summary.display_name(), "Hollow Knight (2017)");
        assert_eq!(
            detail.summary.genre_slugs().collect::<Vec<_>>(),
            vec!["indie", "platformer"]
        );
        assert_eq!(detail.developers.unwrap()[0].name, "Team Cherry");
    }

    #[test]
    fn test_page_without_results() {
        let page: GamePage = serde_json::from_value(json!({"count": 0})).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_display_name_without_release() {
        let game: GameSummary = serde_json::from_value(json!({"id": 1, "name": "TBA"})).unwrap();
        assert_eq!(game.display_name(), "TBA");
    }
}
