//! Property-based invariants for the collision resolver and session.
//!
//! 1. A resolve either leaves the board overlap-free, or reports why not
//!    (truncation or a rejected push)
//! 2. Every committed push lands inside the viewport
//! 3. Resolution is deterministic for identical inputs
//! 4. `clamp_position` keeps a panel inside the viewport whenever it fits
//! 5. Random gesture streams always end idle with pushed panels on-screen

use proptest::prelude::*;
use tileboard_layout::{
    Board, BoardConfig, InteractionSession, PanelCatalog, PanelHandle, PanelId, PanelKind,
    PointerEvent, Position, Rect, Size, SessionState, Viewport, clamp_position,
};

// ── Strategies ──────────────────────────────────────────────────────────

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (600i32..1_600, 400i32..1_200)
        .prop_map(|(w, h)| Viewport::from_size(f64::from(w), f64::from(h)))
}

fn size_strategy() -> impl Strategy<Value = Size> {
    (150i32..400, 100i32..300).prop_map(|(w, h)| Size::new(f64::from(w), f64::from(h)))
}

/// Sizes handed out in order, one per added panel.
struct SizeQueue(std::cell::RefCell<std::vec::IntoIter<Size>>);

impl PanelCatalog for SizeQueue {
    fn default_size(&self, _kind: &PanelKind) -> Size {
        self.0
            .borrow_mut()
            .next()
            .unwrap_or(Size::new(150.0, 100.0))
    }
}

/// Board packed by the space finder; only panels that found a free slot are
/// kept, so the result starts overlap-free.
fn packed_board(sizes: Vec<Size>, vp: &Viewport) -> Board {
    let count = sizes.len();
    let catalog = SizeQueue(std::cell::RefCell::new(sizes.into_iter()));
    let mut board = Board::new();
    for _ in 0..count {
        let id = board
            .add_panel("test", "", &catalog, vp)
            .expect("ids available");
        if !board.colliding_with(id).expect("just added").is_empty() {
            board.remove(id).expect("just added");
        }
    }
    board
}

fn inside(vp: &Viewport, rect: &Rect) -> bool {
    vp.contains_rect(rect)
}

// ═══════════════════════════════════════════════════════════════════════
// 1–3. Resolver outcome
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_clears_overlaps_or_explains_why(
        vp in viewport_strategy(),
        sizes in prop::collection::vec(size_strategy(), 2..8),
        pick in any::<prop::sample::Index>(),
        dx in -400i32..400,
        dy in -400i32..400,
    ) {
        let mut board = packed_board(sizes, &vp);
        prop_assume!(board.len() >= 2);
        prop_assert!(board.overlaps().is_empty());

        let idx = pick.index(board.len());
        let mut panels = board.panels().to_vec();
        let moved = &mut panels[idx];
        let mover = moved.id;
        moved.position = clamp_position(
            moved.position.offset(f64::from(dx), f64::from(dy)),
            moved.size,
            &vp,
        );
        board = Board::from_panels(panels, BoardConfig::default()).expect("unique ids");

        let report = board.resolve(mover, &vp).expect("known mover");

        prop_assert!(
            board.overlaps().is_empty() || report.truncated || !report.rejected.is_empty(),
            "unexplained overlap: {:?} report={:?}",
            board.overlaps(),
            report
        );
        for push in &report.displaced {
            let panel = board.panel(push.panel).expect("pushed panel");
            let landing = Rect::of(push.to, panel.size);
            prop_assert!(inside(&vp, &landing), "push left viewport: {:?}", push);
        }
        prop_assert!(report.max_depth <= board.config().max_cascade_depth);
    }

    #[test]
    fn resolve_is_deterministic(
        vp in viewport_strategy(),
        sizes in prop::collection::vec(size_strategy(), 2..8),
        pick in any::<prop::sample::Index>(),
        dx in -300i32..300,
        dy in -300i32..300,
    ) {
        let mut board = packed_board(sizes, &vp);
        prop_assume!(!board.is_empty());
        let idx = pick.index(board.len());
        let mut panels = board.panels().to_vec();
        panels[idx].position = panels[idx].position.offset(f64::from(dx), f64::from(dy));
        let mover = panels[idx].id;
        board = Board::from_panels(panels, BoardConfig::default()).expect("unique ids");

        let mut first = board.clone();
        let mut second = board;
        let a = first.resolve(mover, &vp).expect("known mover");
        let b = second.resolve(mover, &vp).expect("known mover");
        prop_assert_eq!(a, b);
        prop_assert_eq!(first, second);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Clamping
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_keeps_fitting_panels_inside(
        vp in viewport_strategy(),
        size in size_strategy(),
        x in -3_000i32..3_000,
        y in -3_000i32..3_000,
    ) {
        let clamped = clamp_position(Position::new(f64::from(x), f64::from(y)), size, &vp);
        prop_assert!(inside(&vp, &Rect::of(clamped, size)));
    }

    #[test]
    fn clamp_leaves_valid_positions_alone(
        vp in viewport_strategy(),
        size in size_strategy(),
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let x = fx * (vp.width - size.width).max(0.0);
        let y = fy * (vp.height - size.height).max(0.0);
        let position = Position::new(x, y);
        prop_assume!(inside(&vp, &Rect::of(position, size)));
        prop_assert_eq!(clamp_position(position, size, &vp), position);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Gesture streams
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
enum Step {
    Press { panel: u64, resize: bool, x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Release,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        1 => (0u64..6, any::<bool>(), 0i32..1_000, 0i32..800)
            .prop_map(|(panel, resize, x, y)| Step::Press { panel, resize, x, y }),
        4 => (-200i32..1_200, -200i32..1_000).prop_map(|(x, y)| Step::Move { x, y }),
        1 => Just(Step::Release),
    ]
}

proptest! {
    #[test]
    fn gesture_streams_settle_on_screen(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let vp = Viewport::from_size(1000.0, 800.0);
        let mut board = Board::default_dashboard();
        let mut session = InteractionSession::new();
        let mut last = Position::default();

        for step in &steps {
            let event = match *step {
                Step::Press { panel, resize, x, y } => {
                    let handle = if resize { PanelHandle::Resize } else { PanelHandle::Header };
                    PointerEvent::down(PanelId::new(panel), handle, f64::from(x), f64::from(y))
                }
                Step::Move { x, y } => {
                    last = Position::new(f64::from(x), f64::from(y));
                    PointerEvent::moved(last.x, last.y)
                }
                Step::Release => PointerEvent::up(last.x, last.y),
            };
            let Ok(transition) = session.handle(&event, &mut board, &vp) else {
                // Only presses on ids 4 and 5 can fail: the board holds 0..=3.
                let is_press = matches!(event, PointerEvent::Down { .. });
                prop_assert!(is_press, "only presses may fail: {:?}", event);
                prop_assert_eq!(session.state(), SessionState::Idle);
                continue;
            };
            if let Some(report) = transition.effect.report() {
                for push in &report.displaced {
                    let panel = board.panel(push.panel).expect("pushed panel");
                    prop_assert!(inside(&vp, &Rect::of(push.to, panel.size)));
                }
            }
        }

        session
            .handle(&PointerEvent::up(last.x, last.y), &mut board, &vp)
            .expect("release of a live panel");
        prop_assert_eq!(session.state(), SessionState::Idle);
        prop_assert_eq!(board.len(), 4);
        for panel in board.panels() {
            prop_assert!(panel.size.width >= 150.0 && panel.size.height >= 100.0);
        }
    }
}
