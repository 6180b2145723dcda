#![forbid(unsafe_code)]

//! Board tuning knobs.

use serde::{Deserialize, Serialize};
use tileboard_core::{GRID_STEP, Size};

use crate::error::BoardError;

/// Smallest size any panel may take.
pub const MIN_PANEL_SIZE: Size = Size::new(150.0, 100.0);

/// Deepest cascade level the collision resolver will descend to.
pub const MAX_CASCADE_DEPTH: u32 = 10;

/// Gap between panels and around the edge in auto-arrange.
pub const ARRANGE_PADDING: f64 = 20.0;

/// Offset from the viewport origin used when no free slot exists.
pub const FALLBACK_OFFSET: f64 = 20.0;

/// Grid, floor and cascade settings shared by every board operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Snapping grid and space-finder stride (default: 20).
    pub grid_step: f64,
    /// Minimum panel size (default: 150×100).
    pub min_size: Size,
    /// Resolver recursion cap; cascades stop once depth exceeds it (default: 10).
    pub max_cascade_depth: u32,
    /// Auto-arrange padding (default: 20).
    pub arrange_padding: f64,
    /// Space-finder fallback offset from the viewport origin (default: 20).
    pub fallback_offset: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_step: GRID_STEP,
            min_size: MIN_PANEL_SIZE,
            max_cascade_depth: MAX_CASCADE_DEPTH,
            arrange_padding: ARRANGE_PADDING,
            fallback_offset: FALLBACK_OFFSET,
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by `TILEBOARD_*` environment variables.
    ///
    /// Unparseable values are ignored. The result is validated.
    pub fn from_env() -> Result<Self, BoardError> {
        let mut config = Self::default();
        if let Some(step) = env_f64("TILEBOARD_GRID_STEP") {
            config.grid_step = step;
        }
        if let Some(depth) = env_u32("TILEBOARD_MAX_CASCADE_DEPTH") {
            config.max_cascade_depth = depth;
        }
        if let Some(width) = env_f64("TILEBOARD_MIN_WIDTH") {
            config.min_size.width = width;
        }
        if let Some(height) = env_f64("TILEBOARD_MIN_HEIGHT") {
            config.min_size.height = height;
        }
        config.validate()
    }

    #[must_use]
    pub fn with_grid_step(mut self, grid_step: f64) -> Self {
        self.grid_step = grid_step;
        self
    }

    #[must_use]
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    #[must_use]
    pub fn with_max_cascade_depth(mut self, depth: u32) -> Self {
        self.max_cascade_depth = depth;
        self
    }

    /// Reject non-positive steps and floors, and negative padding.
    pub fn validate(self) -> Result<Self, BoardError> {
        let checks = [
            ("grid_step", self.grid_step),
            ("min_size.width", self.min_size.width),
            ("min_size.height", self.min_size.height),
        ];
        for (field, value) in checks {
            if !(value > 0.0) || !value.is_finite() {
                return Err(BoardError::InvalidConfig {
                    field,
                    value,
                    requirement: "finite and > 0",
                });
            }
        }
        let padding = self.arrange_padding;
        if !(padding >= 0.0) || !padding.is_finite() {
            return Err(BoardError::InvalidConfig {
                field: "arrange_padding",
                value: padding,
                requirement: "finite and >= 0",
            });
        }
        Ok(self)
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
