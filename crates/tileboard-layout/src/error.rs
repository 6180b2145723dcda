#![forbid(unsafe_code)]

//! Board error type.

use std::fmt;

use tileboard_core::PanelId;

/// Failures surfaced by board operations.
///
/// Geometry never fails: degenerate viewports are handled by best-effort
/// clamping and cascade truncation is reported through
/// [`ResolveReport`](crate::ResolveReport). Errors are reserved for caller
/// mistakes.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// The referenced panel is not live on the board.
    UnknownPanel { panel: PanelId },
    /// Two panels handed to the board share an id.
    DuplicatePanel { panel: PanelId },
    /// Every panel id up to `u64::MAX` is taken by a live panel.
    IdsExhausted,
    /// A configuration value is out of range; `requirement` states the bound.
    InvalidConfig {
        field: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPanel { panel } => write!(f, "panel {panel} is not on the board"),
            Self::DuplicatePanel { panel } => write!(f, "panel id {panel} is used more than once"),
            Self::IdsExhausted => f.write_str("no panel id left to allocate"),
            Self::InvalidConfig {
                field,
                value,
                requirement,
            } => write!(f, "invalid board config: {field}={value} must be {requirement}"),
        }
    }
}

impl std::error::Error for BoardError {}
