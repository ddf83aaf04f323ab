use crate::core::{Filter, MANDATORY_TAG};
use crate::core::filter::{MAX_YEAR, MIN_YEAR};

/// Page size used to widen the random-sampling pool
pub const RANDOM_POOL_PAGE_SIZE: u32 = 40;

/// Page size of the genre-similarity fallback query
pub const SIMILAR_PAGE_SIZE: u32 = 6;

/// Ordering used as a stand-in for a review-count floor
pub const MOST_REVIEWED_ORDERING: &str = "-ratings_count";

/// Builds upstream RAWG URLs from filters. Pure: no network, no cache.
#[derive(Debug, Clone)]
pub struct QueryTranslator {
    base_url: String,
    api_key: String,
}

/// Genre clause: the comma-joined genres verbatim, or the mandatory tag when none are given
pub fn genre_clause(filter: &Filter) -> String {
    match filter.selected_genres() {
        Some(genres) => genres.join(","),
        None => MANDATORY_TAG.to_string(),
    }
}

/// Release-date clause; `None` when neither bound is set
pub fn date_clause(year_start: Option<u32>, year_end: Option<u32>) -> Option<String> {
    match (year_start, year_end) {
        (Some(start), Some(end)) => Some(format!("{}-01-01,{}-12-31", start, end)),
        (Some(start), None) => Some(format!("{}-01-01,{}-12-31", start, MAX_YEAR)),
        (None, Some(end)) => Some(format!("{}-01-01,{}-12-31", MIN_YEAR, end)),
        (None, None) => None,
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl QueryTranslator {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}?key={}", self.base_url, path, self.api_key)
    }

    /// Clauses shared by the list and random-pool queries
    fn push_filter_clauses(&self, url: &mut String, filter: &Filter, include_review_proxy: bool) {
        url.push_str("&genres=");
        url.push_str(&genre_clause(filter));

        if let Some(rating) = filter.min_rating {
            url.push_str(&format!("&metacritic={},100", rating));
        }

        // The API has no review-count filter; most-reviewed-first stands in for it
        if include_review_proxy && filter.min_reviews.is_some() && filter.ordering.is_none() {
            url.push_str("&ordering=");
            url.push_str(MOST_REVIEWED_ORDERING);
        }

        if let Some(dates) = date_clause(filter.year_start, filter.year_end) {
            url.push_str("&dates=");
            url.push_str(&dates);
        }

        if let Some(platforms) = filter.selected_platforms() {
            url.push_str("&parent_platforms=");
            url.push_str(&join_ids(platforms));
        }
    }

    /// Game list query for `/api/games`
    pub fn games_url(&self, filter: &Filter) -> String {
        let mut url = self.endpoint("/games");
        self.push_filter_clauses(&mut url, filter, true);

        if let Some(ordering) = &filter.ordering {
            url.push_str("&ordering=");
            url.push_str(ordering);
        }

        if let Some(search) = &filter.search {
            url.push_str("&search=");
            url.push_str(&urlencoding::encode(search));
        }

        url.push_str(&format!("&page={}&page_size={}", filter.page, filter.page_size));
        url
    }

    /// Oversized list query for random sampling
    pub fn random_pool_url(&self, filter: &Filter, ordering: &str, page: u32) -> String {
        let mut url = self.endpoint("/games");
        self.push_filter_clauses(&mut url, filter, false);
        url.push_str(&format!(
            "&ordering={}&page={}&page_size={}",
            ordering, page, RANDOM_POOL_PAGE_SIZE
        ));
        url
    }

    /// Game detail by id
    pub fn detail_url(&self, id: &str) -> String {
        self.endpoint(&format!("/games/{}", urlencoding::encode(id)))
    }

    /// Games of the same series/franchise
    pub fn series_url(&self, id: &str) -> String {
        self.endpoint(&format!("/games/{}/game-series", urlencoding::encode(id)))
    }

    /// Genre-similarity fallback query, DLC excluded
    pub fn similar_url(&self, genre_clause: &str) -> String {
        format!(
            "{}&genres={}&exclude_additions=true&page_size={}",
            self.endpoint("/games"),
            genre_clause,
            SIMILAR_PAGE_SIZE
        )
    }

    pub fn genres_url(&self) -> String {
        self.endpoint("/genres")
    }

    pub fn platforms_url(&self) -> String {
        self.endpoint("/platforms/lists/parents")
    }
}
