//! Catalog viewer configuration

/// Same-origin proxy path served next to the app
pub const PROXY_API_BASE: &str = "/api";

/// Public FreeToGame API
pub const DIRECT_API_BASE: &str = "https://www.freetogame.com/api";

/// Optional UI features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Title search box
    pub search: bool,
    /// Swap the thumbnail for a looping video while hovered
    pub hover_preview: bool,
}

/// Built-in presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// 14 per page, with search and hover preview
    #[default]
    Full,
    /// 12 per page, filters only
    Compact,
}

impl Variant {
    pub fn page_size(&self) -> usize {
        match self {
            Variant::Full => 14,
            Variant::Compact => 12,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            Variant::Full => Capabilities { search: true, hover_preview: true },
            Variant::Compact => Capabilities { search: false, hover_preview: false },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Prefix for `/games`, without trailing slash
    pub api_base: String,
    pub page_size: usize,
    pub capabilities: Capabilities,
}

impl CatalogConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            api_base: PROXY_API_BASE.to_string(),
            page_size: variant.page_size(),
            capabilities: variant.capabilities(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Page size of zero would divide by zero in the page count
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}
