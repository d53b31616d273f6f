//! Catalog request construction

use crate::filter::Filters;

/// A catalog GET the effect runner must perform.
///
/// `seq` must be echoed back in [`crate::CatalogEvent::FetchCompleted`] so
/// the reducer can drop responses that were overtaken by a newer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub url: String,
}

/// Build `{api_base}/games` with the non-default server-side filters
pub fn games_url(api_base: &str, filters: &Filters) -> String {
    let mut query = vec![];
    if filters.platform != Default::default() {
        query.push(format!("platform={}", urlencoding::encode(filters.platform.as_param())));
    }
    if filters.category != Default::default() {
        query.push(format!("category={}", urlencoding::encode(filters.category.as_param())));
    }
    if filters.sort != Default::default() {
        query.push(format!("sort-by={}", urlencoding::encode(filters.sort.as_param())));
    }

    let base = api_base.trim_end_matches('/');
    if query.is_empty() {
        format!("{}/games", base)
    } else {
        format!("{}/games?{}", base, query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Category, Platform, SortKey};

    #[test]
    fn test_defaults_have_no_query() {
        assert_eq!(games_url("/api", &Filters::default()), "/api/games");
    }

    #[test]
    fn test_search_is_not_sent() {
        let filters = Filters { search: "dota".to_string(), ..Filters::default() };
        assert_eq!(games_url("/api", &filters), "/api/games");
    }

    #[test]
    fn test_param_order() {
        let filters = Filters {
            platform: Platform::Pc,
            category: Category::BattleRoyale,
            sort: SortKey::ReleaseDate,
            search: String::new(),
        };
        assert_eq!(
            games_url("https://www.freetogame.com/api", &filters),
            "https://www.freetogame.com/api/games?platform=pc&category=battle-royale&sort-by=release-date"
        );
    }

    #[test]
    fn test_single_param_and_trailing_slash() {
        let filters = Filters { sort: SortKey::Popularity, ..Filters::default() };
        assert_eq!(games_url("/api/", &filters), "/api/games?sort-by=popularity");
    }
}
