//! View state and its reducer
//!
//! All UI state lives in one [`ViewState`] value. Every input (user action or
//! network completion) is a [`CatalogEvent`], and [`ViewState::apply`] is the
//! only way to move from one state to the next. Network work is returned as a
//! [`FetchRequest`] for the caller to run; the reducer itself does no I/O.

use crate::config::CatalogConfig;
use crate::error::FetchError;
use crate::filter::{Category, Filters, Platform, SortKey};
use crate::game::Game;
use crate::page;
use crate::query::{games_url, FetchRequest};

/// Lifecycle of the most recent catalog request
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Loading,
    Ready,
    Failed(FetchError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// First render; loads the unfiltered catalog
    Mounted,
    SetPlatform(Platform),
    SetCategory(Category),
    SetSort(SortKey),
    SetSearch(String),
    GoToPage(usize),
    PrevPage,
    NextPage,
    ResetFilters,
    FetchCompleted {
        seq: u64,
        result: Result<Vec<Game>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    config: CatalogConfig,
    filters: Filters,
    current_page: usize,
    games: Vec<Game>,
    status: FetchStatus,
    latest_seq: u64,
}

impl ViewState {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            filters: Filters::default(),
            current_page: 1,
            games: Vec::new(),
            status: FetchStatus::Loading,
            latest_seq: 0,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Sequence number of the last request issued; 0 before the first one
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            FetchStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Games matching the current search, in catalog order
    pub fn filtered(&self) -> Vec<&Game> {
        page::filter_by_needle(&self.games, &self.filters.search_needle())
    }

    /// Search and pagination applied to the current list
    pub fn page_view(&self) -> page::PageView<'_> {
        page::derive(&self.filtered(), self.current_page, self.config.page_size)
    }

    pub fn total_pages(&self) -> usize {
        self.page_view().total_pages
    }

    /// Games on the current page
    pub fn visible(&self) -> Vec<&Game> {
        self.page_view().visible
    }

    pub fn pagination(&self) -> Option<page::PaginationModel> {
        page::PaginationModel::new(self.current_page, self.total_pages())
    }

    /// Pure transition. Returns the next state and, when the server-side
    /// filters changed, the request the caller must perform.
    pub fn apply(mut self, event: CatalogEvent) -> (Self, Option<FetchRequest>) {
        let request = match event {
            CatalogEvent::Mounted => Some(self.issue_fetch()),
            CatalogEvent::SetPlatform(platform) => {
                self.update_remote(|f| f.platform = platform)
            }
            CatalogEvent::SetCategory(category) => {
                self.update_remote(|f| f.category = category)
            }
            CatalogEvent::SetSort(sort) => self.update_remote(|f| f.sort = sort),
            CatalogEvent::SetSearch(search) => {
                if self.config.capabilities.search {
                    self.filters.search = search;
                    self.clamp_page();
                } else {
                    tracing::debug!("search disabled, ignoring input");
                }
                None
            }
            CatalogEvent::GoToPage(page) => {
                self.go_to_page(page);
                None
            }
            CatalogEvent::PrevPage => {
                self.go_to_page(self.current_page.saturating_sub(1));
                None
            }
            CatalogEvent::NextPage => {
                self.go_to_page(self.current_page + 1);
                None
            }
            CatalogEvent::ResetFilters => {
                let request = self.update_remote(|f| {
                    f.platform = Platform::All;
                    f.category = Category::All;
                    f.sort = SortKey::All;
                });
                self.filters.search.clear();
                self.clamp_page();
                request
            }
            CatalogEvent::FetchCompleted { seq, result } => {
                self.complete_fetch(seq, result);
                None
            }
        };
        (self, request)
    }

    /// Apply a change to the server-side filters, fetching only if it
    /// actually changed something
    fn update_remote(&mut self, change: impl FnOnce(&mut Filters)) -> Option<FetchRequest> {
        let before = self.filters.clone();
        change(&mut self.filters);
        if self.filters.same_remote_query(&before) {
            None
        } else {
            Some(self.issue_fetch())
        }
    }

    fn issue_fetch(&mut self) -> FetchRequest {
        self.latest_seq += 1;
        self.status = FetchStatus::Loading;
        let url = games_url(&self.config.api_base, &self.filters);
        tracing::debug!(seq = self.latest_seq, %url, "issuing catalog request");
        FetchRequest { seq: self.latest_seq, url }
    }

    /// A failed request empties the list instead of leaving the previous
    /// query's games next to the error.
    fn complete_fetch(&mut self, seq: u64, result: Result<Vec<Game>, FetchError>) {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "dropping stale catalog response");
            return;
        }
        match result {
            Ok(games) => {
                tracing::info!(count = games.len(), "catalog loaded");
                self.games = games;
                self.status = FetchStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog request failed");
                self.games.clear();
                self.status = FetchStatus::Failed(e);
            }
        }
        self.current_page = 1;
    }

    fn go_to_page(&mut self, page: usize) {
        if (1..=self.total_pages()).contains(&page) {
            self.current_page = page;
        }
    }

    fn clamp_page(&mut self) {
        let last = self.total_pages().max(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}
