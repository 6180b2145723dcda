#![forbid(unsafe_code)]

//! The board: an ordered collection of panels addressed by stable id.
//!
//! Panel order is part of the contract. The collision resolver visits panels
//! in this order and breaks every tie by it, so the board keeps insertion
//! order (auto-arrange is the only operation that reorders, into its packing
//! order).

use serde::Serialize;
use tileboard_core::{PanelId, Position, Size, Viewport, ViewportSource, intersects};
use tracing::{debug, info_span};

use crate::arrange::auto_arrange_with;
use crate::catalog::{COMPANY_INFO, PRICE_CHART, PanelCatalog, VOLUME_BAR, WATCHLIST};
use crate::collision::{ResolveReport, overlapping_pairs, resolve_collisions_with};
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::panel::{Panel, PanelKind};
use crate::space::find_empty_space_with;

/// Ordered panel collection plus the configuration its operations use.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Board {
    panels: Vec<Panel>,
    config: BoardConfig,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty board with a custom configuration, validated first.
    pub fn with_config(config: BoardConfig) -> Result<Self, BoardError> {
        Self::from_panels(Vec::new(), config)
    }

    /// Build a board from panels in the given order.
    ///
    /// Fails if the configuration is invalid or two panels share an id.
    pub fn from_panels(panels: Vec<Panel>, config: BoardConfig) -> Result<Self, BoardError> {
        let config = config.validate()?;
        for (i, panel) in panels.iter().enumerate() {
            if panels[..i].iter().any(|p| p.id == panel.id) {
                return Err(BoardError::DuplicatePanel { panel: panel.id });
            }
        }
        Ok(Self { panels, config })
    }

    /// The stock dashboard's opening layout: four AAPL panels.
    #[must_use]
    pub fn default_dashboard() -> Self {
        let panel = |id, x, y, w, h, kind: &str| {
            Panel::new(
                PanelId::new(id),
                Position::new(x, y),
                Size::new(w, h),
                kind,
                "AAPL",
            )
        };
        Self {
            panels: vec![
                panel(0, 20.0, 20.0, 300.0, 200.0, PRICE_CHART),
                panel(1, 340.0, 20.0, 280.0, 150.0, COMPANY_INFO),
                panel(2, 20.0, 240.0, 300.0, 150.0, VOLUME_BAR),
                panel(3, 340.0, 190.0, 280.0, 200.0, WATCHLIST),
            ],
            config: BoardConfig::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Panels in board order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Look up a live panel, failing fast on an unknown id.
    pub fn panel(&self, id: PanelId) -> Result<&Panel, BoardError> {
        self.get(id).ok_or(BoardError::UnknownPanel { panel: id })
    }

    pub(crate) fn index_of(&self, id: PanelId) -> Result<usize, BoardError> {
        self.panels
            .iter()
            .position(|p| p.id == id)
            .ok_or(BoardError::UnknownPanel { panel: id })
    }

    pub(crate) fn panel_at_mut(&mut self, index: usize) -> &mut Panel {
        &mut self.panels[index]
    }

    /// Id the next added panel will get, or `None` once `u64::MAX` is live.
    #[must_use]
    pub fn next_id(&self) -> Option<PanelId> {
        PanelId::allocate(self.panels.iter().map(|p| p.id))
    }

    /// Add a panel of `kind` at the first free grid slot.
    ///
    /// The size comes from `catalog`; the panel is appended last in board
    /// order. In a packed viewport the fallback slot may overlap existing
    /// panels. Fails without touching the board when no id is left.
    pub fn add_panel(
        &mut self,
        kind: impl Into<PanelKind>,
        payload: impl Into<String>,
        catalog: &impl PanelCatalog,
        viewport: &impl ViewportSource,
    ) -> Result<PanelId, BoardError> {
        let kind = kind.into();
        let _span = info_span!("board.add_panel", kind = %kind).entered();

        let id = self.next_id().ok_or(BoardError::IdsExhausted)?;
        let viewport = viewport.viewport();
        let size = catalog.default_size(&kind);
        let position = find_empty_space_with(size, &self.panels, &viewport, &self.config);

        debug!(panel = %id, x = position.x, y = position.y, "panel added");
        self.panels.push(Panel::new(id, position, size, kind, payload.into()));
        Ok(id)
    }

    /// Remove a panel. No placement logic runs.
    pub fn remove(&mut self, id: PanelId) -> Result<Panel, BoardError> {
        let index = self.index_of(id)?;
        debug!(panel = %id, "panel removed");
        Ok(self.panels.remove(index))
    }

    /// Ids of panels currently intersecting `id`, in board order.
    pub fn colliding_with(&self, id: PanelId) -> Result<Vec<PanelId>, BoardError> {
        let rect = self.panel(id)?.rect();
        Ok(self
            .panels
            .iter()
            .filter(|p| p.id != id && intersects(&rect, &p.rect()))
            .map(|p| p.id)
            .collect())
    }

    /// Every intersecting pair, in board order.
    #[must_use]
    pub fn overlaps(&self) -> Vec<(PanelId, PanelId)> {
        overlapping_pairs(&self.panels)
    }

    /// Run the collision resolver with `id` as the mover.
    pub fn resolve(
        &mut self,
        id: PanelId,
        viewport: &impl ViewportSource,
    ) -> Result<ResolveReport, BoardError> {
        let index = self.index_of(id)?;
        let viewport = viewport.viewport();
        Ok(self.resolve_at(index, &viewport))
    }

    pub(crate) fn resolve_at(&mut self, index: usize, viewport: &Viewport) -> ResolveReport {
        resolve_collisions_with(&mut self.panels, index, viewport, &self.config)
    }

    /// First free slot for a panel of `size`.
    #[must_use]
    pub fn find_empty_space(&self, size: Size, viewport: &impl ViewportSource) -> Position {
        find_empty_space_with(size, &self.panels, &viewport.viewport(), &self.config)
    }

    /// Repack every panel by descending area. Board order becomes the packing
    /// order.
    pub fn auto_arrange(&mut self, viewport: &impl ViewportSource) -> &[Panel] {
        let _span = info_span!("board.auto_arrange", panels = self.panels.len()).entered();
        self.panels = auto_arrange_with(&self.panels, &viewport.viewport(), &self.config);
        &self.panels
    }
}
