#![forbid(unsafe_code)]

//! Stable panel identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a live panel.
///
/// Unique among live panels for the lifetime of a board. New ids are
/// allocated as one past the largest live id, so an id freed by removal is
/// only ever reissued once every larger id is gone as well.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PanelId(u64);

impl PanelId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Next id after the largest of `live`, or `0` for an empty board.
    ///
    /// `None` once `u64::MAX` is live: there is no larger id to hand out.
    #[must_use]
    pub fn allocate<I>(live: I) -> Option<Self>
    where
        I: IntoIterator<Item = PanelId>,
    {
        match live.into_iter().max() {
            None => Some(Self(0)),
            Some(max) => max.0.checked_add(1).map(Self),
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
