#![forbid(unsafe_code)]

//! Pointer events consumed by the interaction session.
//!
//! The host's input binding translates raw mouse input into these values:
//! a press over a panel's header or resize handle, subsequent moves, and the
//! release. Coordinates share the board's coordinate space.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::id::PanelId;

/// Which part of a panel a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelHandle {
    /// The title bar; pressing here starts a move.
    Header,
    /// The bottom-right grip; pressing here starts a resize.
    Resize,
}

/// Canonical pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Button pressed over a panel handle.
    Down {
        panel: PanelId,
        handle: PanelHandle,
        position: Position,
    },
    /// Pointer moved while the button is held.
    Move { position: Position },
    /// Button released. Leaving the window is reported as a release too.
    Up { position: Position },
}

impl PointerEvent {
    #[must_use]
    pub const fn down(panel: PanelId, handle: PanelHandle, x: f64, y: f64) -> Self {
        Self::Down {
            panel,
            handle,
            position: Position::new(x, y),
        }
    }

    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Position::new(x, y),
        }
    }

    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::Up {
            position: Position::new(x, y),
        }
    }

    /// Pointer location carried by the event.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Down { position, .. } | Self::Move { position } | Self::Up { position } => {
                *position
            }
        }
    }
}
