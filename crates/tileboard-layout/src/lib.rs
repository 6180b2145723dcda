#![forbid(unsafe_code)]

//! Grid-snapping panel layout.
//!
//! # Role in Tileboard
//! `tileboard-layout` owns every rule that decides where panels end up:
//!
//! - [`constraints`]: keep panels inside the viewport and above the minimum
//!   size.
//! - [`collision`]: push neighbours out of a moved panel's way, recursively,
//!   up to a fixed cascade depth.
//! - [`space`]: first free grid slot for a new panel.
//! - [`arrange`]: repack everything by descending area.
//! - [`session`]: the drag/resize gesture state machine.
//!
//! [`Board`] ties these together over an ordered panel list. Nothing here
//! renders; hosts read [`Board::panels`] after each operation.

pub mod arrange;
pub mod board;
pub mod catalog;
pub mod collision;
pub mod config;
pub mod constraints;
pub mod error;
pub mod panel;
pub mod session;
pub mod space;

pub use arrange::{auto_arrange, auto_arrange_with};
pub use board::Board;
pub use catalog::{DASHBOARD_SYMBOLS, DashboardCatalog, PanelCatalog};
pub use collision::{
    Displacement, PushAxis, RejectedPush, ResolveReport, is_valid_position, overlapping_pairs,
    resolve_collisions, resolve_collisions_with,
};
pub use config::{
    ARRANGE_PADDING, BoardConfig, FALLBACK_OFFSET, MAX_CASCADE_DEPTH, MIN_PANEL_SIZE,
};
pub use constraints::{clamp_position, clamp_size, clamp_size_with_floor};
pub use error::BoardError;
pub use panel::{Panel, PanelKind};
pub use session::{
    InteractionSession, SessionEffect, SessionNoopReason, SessionState, SessionTransition,
};
pub use space::{find_empty_space, find_empty_space_with};

pub use tileboard_core::{
    GRID_STEP, PanelHandle, PanelId, PointerEvent, Position, Rect, Size, Viewport,
    ViewportSource, intersects, snap, snap_to,
};
