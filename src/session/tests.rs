use super::*;
use crate::grid::GridError;
use crate::host::testing::{HostCall, RecordingHost};
use crate::host::{Motion, StopAction};
use crate::logging::MemorySink;
use crate::render::{DrawCommand, DrawList};
use std::time::Duration;

fn code(text: &str) -> TileCode {
    text.parse().unwrap()
}

fn session() -> DragSession {
    DragSession::new(DragModeSettings::default()).unwrap()
}

/// Session showing a painted 800x600 grid of 60px tiles.
fn shown(variant: DragVariant) -> (DragSession, RecordingHost) {
    let mut host = RecordingHost::new(800.0, 600.0);
    let mut session = session();
    session.show(variant, &mut host).unwrap();
    repaint(&mut session, &host);
    host.take_calls();
    (session, host)
}

fn repaint(session: &mut DragSession, host: &RecordingHost) -> DrawList {
    let overlay = session.grid_overlay().unwrap();
    let mut list = DrawList::default();
    session.paint(overlay, host, &mut list).unwrap();
    list
}

#[test]
fn show_opens_grid_and_panel_and_enables_mode() {
    let mut host = RecordingHost::new(800.0, 600.0);
    let mut session = session();
    session.show(DragVariant::Drag, &mut host).unwrap();

    let grid = session.grid_overlay().unwrap();
    let panel = session.panel().overlay().unwrap();
    assert_eq!(
        host.calls,
        vec![
            HostCall::Open(OverlayKind::Grid, grid),
            HostCall::Freeze(grid),
            HostCall::Open(OverlayKind::Panel, panel),
            HostCall::Freeze(panel),
            HostCall::EnableMode(DragVariant::Drag),
        ]
    );
    assert!(session.is_enabled());
    assert!(session.is_active());
}

#[test]
fn showing_again_replaces_the_grid_overlay() {
    let mut host = RecordingHost::new(800.0, 600.0);
    let mut session = session();
    session.show(DragVariant::Drag, &mut host).unwrap();
    let first = session.grid_overlay().unwrap();
    session.show(DragVariant::Roll, &mut host).unwrap();
    let second = session.grid_overlay().unwrap();

    assert_ne!(first, second);
    assert!(host.calls.contains(&HostCall::Close(first)));
    let open = host.open_overlays();
    assert_eq!(open.len(), 2);
    assert!(open.contains(&second));
    assert_eq!(session.variant(), DragVariant::Roll);
}

#[test]
fn hide_closes_everything_and_clears_mapping() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    assert_eq!(session.resolve_str("aa").unwrap(), Point::new(30.0, 30.0));

    session.hide(&mut host);
    assert!(host.open_overlays().is_empty());
    assert!(session.grid().is_none());
    assert!(!session.is_enabled());
    assert!(host.calls.contains(&HostCall::Stop));
    assert_eq!(host.calls.last(), Some(&HostCall::DisableMode));
    assert!(matches!(
        session.resolve_str("aa"),
        Err(VoicegridError::UnknownTarget(_))
    ));
}

#[test]
fn paint_builds_the_grid_from_the_main_screen() {
    let (session, _host) = shown(DragVariant::Drag);
    let grid = session.grid().unwrap();
    assert_eq!(grid.geometry().columns, 13);
    assert_eq!(grid.geometry().rows, 10);
    assert_eq!(grid.len(), 130);
    assert_eq!(session.resolve_str("ez").unwrap(), Point::new(750.0, 570.0));
}

#[test]
fn variant_tints_tile_backgrounds() {
    let (mut session, host) = shown(DragVariant::Pan);
    let list = repaint(&mut session, &host);
    assert_eq!(
        list.commands()[0],
        DrawCommand::Color(DragVariant::Pan.tile_background())
    );
}

#[test]
fn unknown_and_malformed_targets_fail() {
    let (session, _host) = shown(DragVariant::Drag);
    assert!(matches!(
        session.resolve_str("zz"),
        Err(VoicegridError::UnknownTarget(code)) if code == "zz"
    ));
    assert!(matches!(
        session.resolve_str("a1"),
        Err(VoicegridError::MalformedCode(_))
    ));
}

#[test]
fn region_commands_are_ignored_while_hidden() {
    let mut host = RecordingHost::new(800.0, 600.0);
    let mut session = session();
    session.exclude_between(&code("aa"), &code("ab"), &mut host).unwrap();
    session.isolate_between(&code("aa"), &code("ab"), &mut host).unwrap();
    session.exclude_rows(&code("aa"), None, &mut host).unwrap();
    assert!(session.regions().is_empty());
    assert!(host.calls.is_empty());
}

#[test]
fn explicit_rectangles_are_recorded_while_hidden() {
    let mut host = RecordingHost::new(800.0, 600.0);
    let mut session = session();
    session.exclude_rect(Rect::new(0.0, 0.0, 100.0, 100.0), &mut host);
    assert_eq!(session.regions().excluded().len(), 1);
    assert!(host.calls.is_empty());
}

#[test]
fn excluding_between_two_tiles_renumbers_the_rest() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    session.exclude_between(&code("aa"), &code("ab"), &mut host).unwrap();
    let overlay = session.grid_overlay().unwrap();
    assert_eq!(host.calls, vec![HostCall::Freeze(overlay)]);

    repaint(&mut session, &host);
    let grid = session.grid().unwrap();
    assert_eq!(grid.len(), 128);
    assert_eq!(grid.suppressed(), 2);
    assert_eq!(session.resolve_str("aa").unwrap(), Point::new(150.0, 30.0));
}

#[test]
fn isolating_keeps_only_the_spanned_tiles() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    // `an` is the first tile of the second row.
    assert_eq!(session.resolve_str("an").unwrap(), Point::new(30.0, 90.0));
    session.isolate_between(&code("aa"), &code("an"), &mut host).unwrap();

    repaint(&mut session, &host);
    assert_eq!(session.grid().unwrap().len(), 2);
    assert_eq!(session.resolve_str("aa").unwrap(), Point::new(30.0, 30.0));
    assert_eq!(session.resolve_str("ab").unwrap(), Point::new(30.0, 90.0));
}

#[test]
fn clearing_a_line_spans_the_grid() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    session.exclude_rows(&code("ab"), None, &mut host).unwrap();
    assert_eq!(session.regions().excluded(), &[Rect::new(30.0, 30.0, 721.0, 1.0)]);

    repaint(&mut session, &host);
    assert_eq!(session.grid().unwrap().len(), 117);
    assert_eq!(session.resolve_str("aa").unwrap(), Point::new(30.0, 90.0));
}

fn row_codes(session: &DragSession, row: u32) -> Vec<String> {
    session
        .grid()
        .unwrap()
        .tiles()
        .iter()
        .filter(|tile| tile.cell.row == row)
        .map(|tile| tile.code.to_string())
        .collect()
}

#[test]
fn clearing_a_line_covers_offset_columns() {
    let settings = DragModeSettings {
        offset_x_y: "40 0".to_string(),
        ..DragModeSettings::default()
    };
    let mut host = RecordingHost::new(780.0, 600.0);
    let mut session = DragSession::new(settings).unwrap();
    session.show(DragVariant::Drag, &mut host).unwrap();
    repaint(&mut session, &host);
    assert_eq!(session.resolve_str("am").unwrap(), Point::new(790.0, 30.0));

    session.exclude_rows(&code("aa"), None, &mut host).unwrap();
    repaint(&mut session, &host);
    assert!(row_codes(&session, 0).is_empty());
    assert_eq!(session.grid().unwrap().len(), 117);
}

#[test]
fn clearing_a_line_ignores_the_screen_origin() {
    let mut host = RecordingHost::new(800.0, 600.0);
    host.screen = Rect::new(100.0, 0.0, 800.0, 600.0);
    let mut session = session();
    session.show(DragVariant::Drag, &mut host).unwrap();
    repaint(&mut session, &host);

    session.exclude_rows(&code("aa"), None, &mut host).unwrap();
    repaint(&mut session, &host);
    assert!(row_codes(&session, 0).is_empty());
    assert_eq!(session.grid().unwrap().len(), 117);
}

#[test]
fn clearing_lines_between_two_targets() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    // Rows 0..=1.
    session
        .exclude_rows(&code("an"), Some(&code("aa")), &mut host)
        .unwrap();
    repaint(&mut session, &host);
    assert_eq!(session.grid().unwrap().len(), 104);
}

#[test]
fn region_commands_need_known_targets() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    assert!(session
        .exclude_between(&code("aa"), &code("zz"), &mut host)
        .is_err());
    assert!(session.regions().is_empty());
}

#[test]
fn more_and_less_squares_step_by_the_increment() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    let overlay = session.grid_overlay().unwrap();

    session.more_squares(&mut host);
    assert_eq!(session.tile_size(), 50);
    session.less_squares(&mut host);
    session.less_squares(&mut host);
    assert_eq!(session.tile_size(), 70);
    assert_eq!(host.calls, vec![HostCall::Freeze(overlay); 3]);

    repaint(&mut session, &host);
    assert_eq!(session.grid().unwrap().geometry().columns, 11);
}

#[test]
fn more_squares_stops_at_one_increment() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    for _ in 0..10 {
        session.more_squares(&mut host);
    }
    assert_eq!(session.tile_size(), 10);
}

#[test]
fn overflowing_the_code_space_clears_the_grid() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    for _ in 0..5 {
        session.more_squares(&mut host);
    }
    assert_eq!(session.tile_size(), 10);

    let overlay = session.grid_overlay().unwrap();
    let mut list = DrawList::default();
    let err = session.paint(overlay, &host, &mut list).unwrap_err();
    assert!(matches!(
        err,
        VoicegridError::Grid(GridError::CodeSpaceExhausted {
            cells: 4800,
            capacity: 4056
        })
    ));
    assert!(list.commands().is_empty());
    assert!(session.grid().is_none());
    assert!(session.resolve_str("aa").is_err());
}

#[test]
fn reset_restores_size_and_clears_regions() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    session.less_squares(&mut host);
    session.exclude_between(&code("aa"), &code("ab"), &mut host).unwrap();
    host.take_calls();

    session.reset(&mut host).unwrap();
    assert_eq!(session.tile_size(), 60);
    assert!(session.regions().is_empty());
    let overlay = session.grid_overlay().unwrap();
    assert_eq!(host.calls, vec![HostCall::Stop, HostCall::Freeze(overlay)]);
}

#[test]
fn regions_survive_hide_and_show() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    session.exclude_between(&code("aa"), &code("ab"), &mut host).unwrap();
    session.less_squares(&mut host);
    session.hide(&mut host);
    session.show(DragVariant::Drag, &mut host).unwrap();

    assert_eq!(session.regions().excluded().len(), 1);
    assert_eq!(session.tile_size(), 60);
}

#[test]
fn dynamic_actions_follow_show_and_hide() {
    let settings = DragModeSettings {
        dynamic_actions_enabled: true,
        ..DragModeSettings::default()
    };
    let mut host = RecordingHost::new(800.0, 600.0);
    let mut session = DragSession::new(settings).unwrap();
    session.show(DragVariant::Drag, &mut host).unwrap();
    assert!(host.calls.contains(&HostCall::NoiseStop(true)));

    session.hide(&mut host);
    assert!(host.calls.contains(&HostCall::NoiseStop(false)));
}

#[test]
fn dynamic_actions_can_outlive_the_grid() {
    let settings = DragModeSettings {
        dynamic_actions_enabled: true,
        disable_dynamic_actions_on_grid_hide: false,
        ..DragModeSettings::default()
    };
    let mut host = RecordingHost::new(800.0, 600.0);
    let mut session = DragSession::new(settings).unwrap();
    session.show(DragVariant::Drag, &mut host).unwrap();
    session.hide(&mut host);
    assert!(!host.calls.contains(&HostCall::NoiseStop(false)));
}

#[test]
fn paint_routes_panel_overlay_to_the_cheat_sheet() {
    let mut host = RecordingHost::new(1920.0, 1080.0);
    let mut session = session();
    session.show(DragVariant::Drag, &mut host).unwrap();
    let panel = session.panel().overlay().unwrap();

    let mut list = DrawList::default();
    session.paint(panel, &host, &mut list).unwrap();
    assert!(list.texts().any(|text| text == "grid hide"));
    assert!(session.grid().is_none());
}

#[test]
fn move_along_starts_first_and_queues_the_rest() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    session
        .move_along(&[code("aa"), code("ab"), code("an")], &mut host)
        .unwrap();
    assert_eq!(
        host.calls,
        vec![
            HostCall::Start(Motion::to(Point::new(30.0, 30.0))),
            HostCall::Enqueue(Motion::to(Point::new(90.0, 30.0))),
            HostCall::Enqueue(Motion::to(Point::new(30.0, 90.0))),
        ]
    );
}

#[test]
fn move_along_issues_nothing_when_a_target_is_unknown() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    let result = session.move_along(&[code("aa"), code("zz")], &mut host);
    assert!(result.is_err());
    assert!(host.calls.is_empty());
}

#[test]
fn jump_warps_then_stops() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    session.jump_to(&code("ab"), &mut host).unwrap();
    assert_eq!(
        host.calls,
        vec![HostCall::Jump(Point::new(90.0, 30.0)), HostCall::Stop]
    );
}

#[test]
fn drag_and_drop_presses_with_the_variant_button() {
    let (mut session, mut host) = shown(DragVariant::Pan);
    session
        .drag_and_drop(&code("aa"), &code("ab"), &mut host)
        .unwrap();

    let leg = Duration::from_millis(200);
    let carry = Motion::between(Point::new(30.0, 30.0), Point::new(90.0, 30.0))
        .with_duration(leg)
        .then(StopAction::Release(MouseButton::Middle));
    let expected = Motion::to(Point::new(30.0, 30.0))
        .with_duration(leg)
        .then(StopAction::Press(MouseButton::Middle))
        .then(StopAction::Then(Box::new(carry)));
    assert_eq!(host.calls, vec![HostCall::Start(expected)]);
}

#[test]
fn bring_to_drags_from_the_pointer() {
    let (mut session, mut host) = shown(DragVariant::Roll);
    host.pointer = Point::new(400.0, 300.0);
    session.bring_to(&code("aa"), &mut host).unwrap();
    assert_eq!(
        host.calls,
        vec![
            HostCall::Press(MouseButton::Right),
            HostCall::Start(
                Motion::between(Point::new(400.0, 300.0), Point::new(30.0, 30.0))
                    .then(StopAction::Release(MouseButton::Right))
            ),
        ]
    );
}

#[test]
fn bring_to_center_targets_the_active_window() {
    let (mut session, mut host) = shown(DragVariant::Drag);
    host.window = Rect::new(100.0, 100.0, 200.0, 100.0);
    session.bring_to_center(&code("aa"), &mut host).unwrap();
    let Some(HostCall::Start(motion)) = host.calls.first() else {
        panic!("expected a motion, got {:?}", host.calls);
    };
    let Some(StopAction::Then(carry)) = motion.on_stop.last() else {
        panic!("expected a carry leg");
    };
    assert_eq!(carry.to, Point::new(200.0, 150.0));
}

#[test]
fn unchanged_inputs_reuse_the_built_grid() {
    let sink = MemorySink::new();
    let mut host = RecordingHost::new(800.0, 600.0);
    let mut session = session();
    session.config_mut().logger = Some(Logger::new(sink.clone()));
    session.config_mut().enable_metrics();
    session.show(DragVariant::Drag, &mut host).unwrap();

    repaint(&mut session, &host);
    repaint(&mut session, &host);
    session.less_squares(&mut host);
    repaint(&mut session, &host);

    let built = sink
        .messages()
        .into_iter()
        .filter(|message| message == "grid_built")
        .count();
    assert_eq!(built, 2);

    let snapshot = session
        .config_mut()
        .metrics_handle()
        .unwrap()
        .lock()
        .unwrap()
        .snapshot();
    assert_eq!(snapshot.draws, 3);
    assert_eq!(snapshot.tiles_drawn, 130 + 130 + 88);
}

#[test]
fn lookups_are_logged_and_counted() {
    let sink = MemorySink::new();
    let (mut session, mut host) = shown(DragVariant::Drag);
    session.config_mut().logger = Some(Logger::new(sink.clone()));
    session.config_mut().enable_metrics();

    session.move_to(&code("aa"), &mut host).unwrap();
    assert!(session.resolve_str("zz").is_err());

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "lookup_failed");
    assert_eq!(events[0].level, LogLevel::Warn);

    let snapshot = session
        .config_mut()
        .metrics_handle()
        .unwrap()
        .lock()
        .unwrap()
        .snapshot();
    assert_eq!(snapshot.lookups, 2);
    assert_eq!(snapshot.lookup_failures, 1);
    assert_eq!(snapshot.motions, 1);
}

#[test]
fn lifecycle_events_are_logged() {
    let sink = MemorySink::new();
    let mut host = RecordingHost::new(800.0, 600.0);
    let mut session = session();
    session.config_mut().logger = Some(Logger::new(sink.clone()));
    session.show(DragVariant::Drag, &mut host).unwrap();
    session.reset(&mut host).unwrap();
    session.hide(&mut host);
    assert_eq!(
        sink.messages(),
        vec!["grid_shown", "grid_reset", "grid_hidden"]
    );
}
