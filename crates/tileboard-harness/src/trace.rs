//! Gesture traces: recorded pointer streams replayed against a board.
//!
//! ```json
//! {
//!   "viewport": { "left": 0, "top": 0, "width": 1000, "height": 800 },
//!   "events": [
//!     { "kind": "down", "panel": 0, "handle": "header", "position": { "x": 100, "y": 30 } },
//!     { "kind": "move", "position": { "x": 150, "y": 80 } },
//!     { "kind": "up", "position": { "x": 150, "y": 80 } }
//!   ]
//! }
//! ```
//!
//! `panels` is optional; without it the stock dashboard is used.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tileboard_core::{PanelId, PointerEvent, Viewport};
use tileboard_layout::{Board, BoardConfig, InteractionSession, Panel, SessionTransition};
use tracing::{info, info_span};

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureTrace {
    pub viewport: Viewport,
    #[serde(default)]
    pub panels: Option<Vec<Panel>>,
    pub events: Vec<PointerEvent>,
}

impl GestureTrace {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| HarnessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Replay every event through a fresh session.
    ///
    /// Stops at the first event the board rejects.
    pub fn replay(&self, config: BoardConfig) -> Result<ReplayOutcome> {
        let _span = info_span!("trace.replay", events = self.events.len()).entered();
        let mut board = board_from(self.panels.clone(), config)?;
        let mut session = InteractionSession::new();
        let mut transitions = Vec::with_capacity(self.events.len());
        for event in &self.events {
            transitions.push(session.handle(event, &mut board, &self.viewport)?);
        }
        info!(transitions = transitions.len(), "trace replayed");
        Ok(ReplayOutcome {
            layout: LayoutReport::new(&board, self.viewport),
            transitions,
        })
    }
}

/// Build a board from explicit panels, or the stock dashboard.
pub fn board_from(panels: Option<Vec<Panel>>, config: BoardConfig) -> Result<Board> {
    let panels = panels.unwrap_or_else(|| Board::default_dashboard().panels().to_vec());
    Ok(Board::from_panels(panels, config)?)
}

/// Final layout as printed by every subcommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub viewport: Viewport,
    pub panels: Vec<Panel>,
    pub overlaps: Vec<(PanelId, PanelId)>,
}

impl LayoutReport {
    #[must_use]
    pub fn new(board: &Board, viewport: Viewport) -> Self {
        Self {
            viewport,
            panels: board.panels().to_vec(),
            overlaps: board.overlaps(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayOutcome {
    pub layout: LayoutReport,
    pub transitions: Vec<SessionTransition>,
}
