//! Freeplay Core - Catalog model, view-state reducer and page derivation
//!
//! Everything here is target independent so the WASM frontend and the
//! native CLI share one implementation. The reqwest client is only built
//! with the `native-client` feature.

pub mod config;
pub mod decode;
pub mod error;
pub mod filter;
pub mod game;
pub mod page;
pub mod query;
pub mod state;

#[cfg(feature = "native-client")]
pub mod client;

pub use config::{Capabilities, CatalogConfig, Variant};
pub use decode::{decode_games, decode_games_text};
pub use error::{FetchError, ParseFilterError};
pub use filter::{Category, Filters, Platform, SortKey};
pub use game::{Game, VideoSource};
pub use page::{derive, filter_by_needle, filter_by_title, total_pages, PageView, PaginationModel};
pub use query::FetchRequest;
pub use state::{CatalogEvent, FetchStatus, ViewState};

#[cfg(feature = "native-client")]
pub use client::CatalogClient;
