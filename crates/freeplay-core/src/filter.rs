//! Filter selections: platform, category, sort order and title search

use std::fmt;
use std::str::FromStr;

use crate::error::ParseFilterError;

/// Platform select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    #[default]
    All,
    Pc,
    Browser,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::All, Platform::Pc, Platform::Browser];

    pub fn as_param(&self) -> &'static str {
        match self {
            Platform::All => "all",
            Platform::Pc => "pc",
            Platform::Browser => "browser",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::All => "All platforms",
            Platform::Pc => "PC games",
            Platform::Browser => "Browser games",
        }
    }
}

/// Category (genre) select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Mmorpg,
    Shooter,
    Mmo,
    Strategy,
    Moba,
    BattleRoyale,
    Card,
    Racing,
    Sports,
    Social,
    Fighting,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::All,
        Category::Mmorpg,
        Category::Shooter,
        Category::Mmo,
        Category::Strategy,
        Category::Moba,
        Category::BattleRoyale,
        Category::Card,
        Category::Racing,
        Category::Sports,
        Category::Social,
        Category::Fighting,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Mmorpg => "mmorpg",
            Category::Shooter => "shooter",
            Category::Mmo => "mmo",
            Category::Strategy => "strategy",
            Category::Moba => "moba",
            Category::BattleRoyale => "battle-royale",
            Category::Card => "card",
            Category::Racing => "racing",
            Category::Sports => "sports",
            Category::Social => "social",
            Category::Fighting => "fighting",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All categories",
            Category::Mmorpg => "MMORPG",
            Category::Shooter => "Shooter",
            Category::Mmo => "MMO",
            Category::Strategy => "Strategy",
            Category::Moba => "MOBA",
            Category::BattleRoyale => "Battle Royale",
            Category::Card => "Card",
            Category::Racing => "Racing",
            Category::Sports => "Sports",
            Category::Social => "Social",
            Category::Fighting => "Fighting",
        }
    }
}

/// Server-side sort order. `All` leaves the API's default order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    All,
    ReleaseDate,
    Popularity,
    Alphabetical,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::All,
        SortKey::ReleaseDate,
        SortKey::Popularity,
        SortKey::Alphabetical,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::All => "all",
            SortKey::ReleaseDate => "release-date",
            SortKey::Popularity => "popularity",
            SortKey::Alphabetical => "alphabetical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::All => "Sort by",
            SortKey::ReleaseDate => "Release date",
            SortKey::Popularity => "Popularity",
            SortKey::Alphabetical => "Alphabetical",
        }
    }
}

fn parse_param<T: Copy>(
    field: &'static str,
    value: &str,
    options: &[T],
    as_param: fn(&T) -> &'static str,
) -> Result<T, ParseFilterError> {
    options
        .iter()
        .copied()
        .find(|option| as_param(option) == value)
        .ok_or_else(|| ParseFilterError {
            field,
            value: value.to_string(),
            expected: options.iter().map(as_param).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for Platform {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_param("platform", s, &Platform::ALL, Platform::as_param)
    }
}

impl FromStr for Category {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_param("category", s, &Category::ALL, Category::as_param)
    }
}

impl FromStr for SortKey {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_param("sort", s, &SortKey::ALL, SortKey::as_param)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// All user-controlled filter inputs.
///
/// `platform`, `category` and `sort` are applied by the server; `search` is
/// applied locally to whatever the server returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub platform: Platform,
    pub category: Category,
    pub sort: SortKey,
    pub search: String,
}

impl Filters {
    /// Whether two filter sets would produce the same server request
    pub fn same_remote_query(&self, other: &Filters) -> bool {
        self.platform == other.platform && self.category == other.category && self.sort == other.sort
    }

    /// Lowercased search text, ready for [`crate::Game::title_contains`]
    pub fn search_needle(&self) -> String {
        self.search.to_lowercase()
    }
}
