#![forbid(unsafe_code)]

//! Default sizes for newly added panels.

use tileboard_core::Size;

use crate::panel::PanelKind;

/// Maps a panel kind to the size a freshly added panel takes.
pub trait PanelCatalog {
    fn default_size(&self, kind: &PanelKind) -> Size;
}

impl<F> PanelCatalog for F
where
    F: Fn(&PanelKind) -> Size,
{
    fn default_size(&self, kind: &PanelKind) -> Size {
        self(kind)
    }
}

pub const PRICE_CHART: &str = "price_chart";
pub const VOLUME_BAR: &str = "volume_bar";
pub const COMPANY_INFO: &str = "company_info";
pub const NEWS_FEED: &str = "news_feed";
pub const WATCHLIST: &str = "watchlist";

/// Ticker symbols the dashboard offers as panel payloads.
pub const DASHBOARD_SYMBOLS: [&str; 8] =
    ["AAPL", "GOOGL", "MSFT", "AMZN", "TSLA", "META", "NVDA", "JPM"];

/// Catalog of the stock dashboard's panel kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardCatalog;

impl DashboardCatalog {
    /// Every kind this catalog sizes explicitly.
    pub const KINDS: [&'static str; 5] =
        [PRICE_CHART, VOLUME_BAR, COMPANY_INFO, NEWS_FEED, WATCHLIST];
}

impl PanelCatalog for DashboardCatalog {
    fn default_size(&self, kind: &PanelKind) -> Size {
        match kind.as_str() {
            PRICE_CHART => Size::new(300.0, 200.0),
            VOLUME_BAR => Size::new(300.0, 150.0),
            COMPANY_INFO => Size::new(280.0, 150.0),
            NEWS_FEED => Size::new(320.0, 250.0),
            WATCHLIST => Size::new(280.0, 200.0),
            _ => Size::new(300.0, 200.0),
        }
    }
}
