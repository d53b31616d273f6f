//! Title search and pagination over the fetched list
//!
//! Nothing here clamps `current_page`: an out-of-range page simply yields an
//! empty slice. Keeping the page in range is the reducer's job.

use crate::game::Game;

/// What one page of the grid shows
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub visible: Vec<&'a Game>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_len: usize,
}

/// Games whose title contains `search`, ignoring case, in input order
pub fn filter_by_title<'a>(games: &'a [Game], search: &str) -> Vec<&'a Game> {
    filter_by_needle(games, &search.to_lowercase())
}

/// Same as [`filter_by_title`] for an already lowercased needle
pub fn filter_by_needle<'a>(games: &'a [Game], needle: &str) -> Vec<&'a Game> {
    games.iter().filter(|g| g.title_contains(needle)).collect()
}

/// `ceil(len / page_size)`; zero for an empty list
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice of `filtered` shown on the 1-based `current_page`
pub fn page_slice<'a, T>(filtered: &'a [T], current_page: usize, page_size: usize) -> &'a [T] {
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    if current_page == 0 || start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(filtered.len());
    &filtered[start..end]
}

/// Filter then paginate.
///
/// The view borrows the games, not `filtered` itself:
///
/// ```
/// # use freeplay_core::{page, Game};
/// # let games: Vec<Game> = vec![];
/// let filtered = page::filter_by_title(&games, "dota");
/// let view = page::derive(&filtered, 1, 14);
/// assert_eq!(view.total_pages, 0);
/// ```
pub fn derive<'a>(filtered: &[&'a Game], current_page: usize, page_size: usize) -> PageView<'a> {
    PageView {
        visible: page_slice(filtered, current_page, page_size).to_vec(),
        current_page,
        total_pages: total_pages(filtered.len(), page_size),
        filtered_len: filtered.len(),
    }
}

/// One numbered button of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub page: usize,
    pub active: bool,
}

/// Render model for the pagination bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationModel {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub pages: Vec<PageButton>,
}

impl PaginationModel {
    /// `None` when there is at most one page and nothing should be rendered
    pub fn new(current_page: usize, total_pages: usize) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        Some(Self {
            prev_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
            pages: (1..=total_pages)
                .map(|page| PageButton { page, active: page == current_page })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::sample;

    fn catalog(n: usize) -> Vec<Game> {
        (0..n).map(|i| sample(i as i64, &format!("Game {}", i))).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let games = vec![sample(1, "Dota 2"), sample(2, "Fortnite")];
        let filtered = filter_by_title(&games, "dota");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Dota 2");

        let filtered = filter_by_title(&games, "FORT");
        assert_eq!(filtered[0].title, "Fortnite");

        assert!(filter_by_title(&games, "warframe").is_empty());
    }

    #[test]
    fn test_search_non_ascii() {
        let games = vec![sample(1, "Ärger im Dorf"), sample(2, "Tank")];
        assert_eq!(filter_by_title(&games, "ÄRGER").len(), 1);
    }

    #[test]
    fn test_filter_by_needle_expects_lowercase() {
        let games = vec![sample(1, "Dota 2"), sample(2, "Fortnite")];
        assert_eq!(filter_by_needle(&games, "dota").len(), 1);
        assert!(filter_by_needle(&games, "DOTA").is_empty());
    }

    #[test]
    fn test_empty_search_keeps_everything_in_order() {
        let games = catalog(5);
        let filtered = filter_by_title(&games, "");
        let ids: Vec<i64> = filtered.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 14), 0);
        assert_eq!(total_pages(1, 14), 1);
        assert_eq!(total_pages(14, 14), 1);
        assert_eq!(total_pages(15, 14), 2);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
    }

    #[test]
    fn test_exactly_one_page_has_no_controls() {
        let games = catalog(14);
        let filtered = filter_by_title(&games, "");
        let view = derive(&filtered, 1, 14);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.visible.len(), 14);
        assert!(PaginationModel::new(view.current_page, view.total_pages).is_none());
    }

    #[test]
    fn test_second_page_holds_the_remainder() {
        let games = catalog(15);
        let filtered = filter_by_title(&games, "");
        let view = derive(&filtered, 2, 14);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.visible[0].id, 14);
    }

    #[test]
    fn test_slices_are_contiguous_and_sized() {
        let games = catalog(40);
        let filtered = filter_by_title(&games, "");
        let page_size = 12;
        let pages = total_pages(filtered.len(), page_size);
        let mut seen = Vec::new();
        for page in 1..=pages {
            let view = derive(&filtered, page, page_size);
            let expected = page_size.min(filtered.len() - (page - 1) * page_size);
            assert_eq!(view.visible.len(), expected);
            seen.extend(view.visible.iter().map(|g| g.id));
        }
        let all: Vec<i64> = filtered.iter().map(|g| g.id).collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let games = catalog(3);
        let filtered = filter_by_title(&games, "");
        assert!(derive(&filtered, 2, 14).visible.is_empty());
        assert!(derive(&filtered, 0, 14).visible.is_empty());
    }

    #[test]
    fn test_empty_filter_result() {
        let games = catalog(3);
        let filtered = filter_by_title(&games, "zzz");
        let view = derive(&filtered, 1, 14);
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.filtered_len, 0);
        assert!(view.visible.is_empty());
    }

    #[test]
    fn test_pagination_model_edges() {
        let first = PaginationModel::new(1, 3).unwrap();
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);
        assert_eq!(first.pages.len(), 3);
        assert!(first.pages[0].active);

        let last = PaginationModel::new(3, 3).unwrap();
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);
        assert!(last.pages[2].active);

        assert!(PaginationModel::new(1, 0).is_none());
    }
}
