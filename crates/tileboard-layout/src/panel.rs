#![forbid(unsafe_code)]

//! Panels: the rectangles the board lays out.

use std::fmt;

use serde::{Deserialize, Serialize};
use tileboard_core::{PanelId, Position, Rect, Size};

/// Presentation kind of a panel, opaque to the layout engine.
///
/// Only the [`PanelCatalog`](crate::PanelCatalog) looks inside, to pick a
/// default size when a panel is added.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelKind(String);

impl PanelKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelKind {
    fn from(kind: &str) -> Self {
        Self::new(kind)
    }
}

/// A positioned, sized panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    pub position: Position,
    pub size: Size,
    pub kind: PanelKind,
    /// Host data such as a ticker symbol; never inspected by the engine.
    #[serde(default)]
    pub payload: String,
}

impl Panel {
    pub fn new(
        id: PanelId,
        position: Position,
        size: Size,
        kind: impl Into<PanelKind>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            id,
            position,
            size,
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    /// Snapshot of the panel's current rectangle.
    ///
    /// The returned value does not follow later changes to the panel.
    #[inline]
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::of(self.position, self.size)
    }

    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.size.area()
    }
}
