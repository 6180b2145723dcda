#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tileboard_core::{PanelHandle, PanelId, PointerEvent, Rect, Viewport};
use tileboard_layout::{Board, DashboardCatalog, InteractionSession, SessionState};

#[derive(Debug, Arbitrary)]
enum Op {
    Press { panel: u8, resize: bool, x: i16, y: i16 },
    Move { x: i16, y: i16 },
    Release,
    Add { kind: u8 },
    Remove { panel: u8 },
    Arrange,
}

#[derive(Debug, Arbitrary)]
struct Input {
    width: u16,
    height: u16,
    ops: Vec<Op>,
}

const KINDS: [&str; 6] = [
    "price_chart",
    "volume_bar",
    "company_info",
    "news_feed",
    "watchlist",
    "unknown",
];

fuzz_target!(|input: Input| {
    // Viewports between 200x150 and ~2200x1650.
    let vp = Viewport::from_size(
        f64::from(input.width % 2000) + 200.0,
        f64::from(input.height % 1500) + 150.0,
    );
    let mut board = Board::default_dashboard();
    let mut session = InteractionSession::new();

    for op in input.ops.iter().take(256) {
        match *op {
            Op::Press { panel, resize, x, y } => {
                let handle = if resize { PanelHandle::Resize } else { PanelHandle::Header };
                let event = PointerEvent::down(
                    PanelId::new(u64::from(panel % 8)),
                    handle,
                    f64::from(x),
                    f64::from(y),
                );
                let _ = session.handle(&event, &mut board, &vp);
            }
            Op::Move { x, y } => {
                let event = PointerEvent::moved(f64::from(x), f64::from(y));
                let Ok(step) = session.handle(&event, &mut board, &vp) else {
                    continue;
                };
                if let Some(report) = step.effect.report() {
                    assert!(report.max_depth <= board.config().max_cascade_depth);
                    for push in &report.displaced {
                        let size = board.panel(push.panel).expect("pushed panel").size;
                        assert!(vp.contains_rect(&Rect::of(push.to, size)), "push left viewport");
                    }
                }
            }
            Op::Release => {
                let _ = session.handle(&PointerEvent::up(0.0, 0.0), &mut board, &vp);
                assert_eq!(session.state(), SessionState::Idle);
            }
            Op::Add { kind } => {
                let kind = KINDS[usize::from(kind) % KINDS.len()];
                let before = board.len();
                let id = board
                    .add_panel(kind, "AAPL", &DashboardCatalog, &vp)
                    .expect("ids stay below u64::MAX");
                assert_eq!(board.len(), before + 1);
                assert!(board.panels().iter().filter(|p| p.id == id).count() == 1);
            }
            Op::Remove { panel } => {
                let _ = board.remove(PanelId::new(u64::from(panel % 8)));
            }
            Op::Arrange => {
                let before = board.len();
                board.auto_arrange(&vp);
                assert_eq!(board.len(), before);
            }
        }

        for panel in board.panels() {
            assert!(panel.position.x.is_finite() && panel.position.y.is_finite());
            assert!(panel.size.width >= 150.0 && panel.size.height >= 100.0);
        }
    }
});
