//! Unit tests for the polyline construction tool.

use bevy::prelude::*;

use super::input::{collect_tool_events, CanvasInput};
use super::machine::{ConstructionState, EventKind, PolylineTool, ToolEvent, ToolKey, ToolResponse};

const STATES: [ConstructionState; 3] = [
    ConstructionState::Idle,
    ConstructionState::OnePoint,
    ConstructionState::ManyPoints,
];

fn event_of(kind: EventKind) -> ToolEvent {
    match kind {
        EventKind::Click => ToolEvent::Click(Vec2::new(40.0, 40.0)),
        EventKind::Move => ToolEvent::Move(Vec2::new(41.0, 41.0)),
        EventKind::Cancel => ToolEvent::Key(ToolKey::Cancel),
        EventKind::Commit => ToolEvent::Key(ToolKey::Commit),
        EventKind::RemoveLast => ToolEvent::Key(ToolKey::RemoveLast),
    }
}

/// Drive a fresh tool into `state`; ManyPoints gets `vertices` committed points
fn tool_in(state: ConstructionState, vertices: usize) -> PolylineTool {
    let mut tool = PolylineTool::new(10);
    match state {
        ConstructionState::Idle => {}
        ConstructionState::OnePoint => {
            tool.dispatch(ToolEvent::Click(Vec2::ZERO));
        }
        ConstructionState::ManyPoints => {
            for i in 0..vertices {
                tool.dispatch(ToolEvent::Click(Vec2::new(i as f32, 0.0)));
            }
        }
    }
    assert_eq!(tool.state(), state);
    tool
}

#[test]
fn test_ignored_pairs_leave_tool_untouched() {
    let ignored = [
        (ConstructionState::Idle, EventKind::Move),
        (ConstructionState::Idle, EventKind::Cancel),
        (ConstructionState::Idle, EventKind::Commit),
        (ConstructionState::Idle, EventKind::RemoveLast),
        (ConstructionState::OnePoint, EventKind::Commit),
        (ConstructionState::OnePoint, EventKind::RemoveLast),
    ];

    for (state, kind) in ignored {
        let mut tool = tool_in(state, 2);
        let before = tool.draft().clone();

        assert_eq!(
            tool.dispatch(event_of(kind)),
            ToolResponse::Ignored,
            "{kind:?} in {state:?}"
        );
        assert_eq!(tool.state(), state);
        assert_eq!(tool.draft(), &before);
    }
}

#[test]
fn test_every_state_handles_click() {
    for state in STATES {
        let mut tool = tool_in(state, 2);
        assert_ne!(tool.dispatch(event_of(EventKind::Click)), ToolResponse::Ignored);
    }
}

#[test]
fn test_idle_click_starts_draft() {
    let mut tool = PolylineTool::default();
    let response = tool.dispatch(ToolEvent::Click(Vec2::new(3.0, 4.0)));

    assert_eq!(response, ToolResponse::Redraw);
    assert_eq!(tool.state(), ConstructionState::OnePoint);
    assert_eq!(tool.draft().committed(), &[Vec2::new(3.0, 4.0)]);
    assert_eq!(tool.draft().provisional(), Some(Vec2::new(3.0, 4.0)));
}

#[test]
fn test_move_updates_provisional_only() {
    for state in [ConstructionState::OnePoint, ConstructionState::ManyPoints] {
        let mut tool = tool_in(state, 3);
        let committed = tool.draft().committed().to_vec();

        tool.dispatch(ToolEvent::Move(Vec2::new(100.0, -5.0)));

        assert_eq!(tool.state(), state);
        assert_eq!(tool.draft().committed(), committed.as_slice());
        assert_eq!(tool.draft().provisional(), Some(Vec2::new(100.0, -5.0)));
    }
}

#[test]
fn test_cancel_discards_from_any_drawing_state() {
    for state in [ConstructionState::OnePoint, ConstructionState::ManyPoints] {
        let mut tool = tool_in(state, 4);

        assert_eq!(tool.dispatch(ToolEvent::Key(ToolKey::Cancel)), ToolResponse::Redraw);
        assert_eq!(tool.state(), ConstructionState::Idle);
        assert!(tool.draft().committed().is_empty());
        assert!(tool.draft().provisional().is_none());
    }
}

#[test]
fn test_second_click_enters_many_points() {
    let mut tool = tool_in(ConstructionState::OnePoint, 1);
    tool.dispatch(ToolEvent::Click(Vec2::ONE));

    assert_eq!(tool.state(), ConstructionState::ManyPoints);
    assert_eq!(tool.draft().committed(), &[Vec2::ZERO, Vec2::ONE]);
    assert_eq!(tool.draft().provisional(), Some(Vec2::ONE));
}

#[test]
fn test_commit_returns_committed_vertices_without_provisional() {
    let mut tool = tool_in(ConstructionState::ManyPoints, 3);
    tool.dispatch(ToolEvent::Move(Vec2::new(9.0, 9.0)));

    let response = tool.dispatch(ToolEvent::Key(ToolKey::Commit));

    assert_eq!(
        response,
        ToolResponse::Completed(vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)])
    );
    assert_eq!(tool.state(), ConstructionState::Idle);
    assert!(tool.draft().committed().is_empty());
}

#[test]
fn test_remove_last_with_three_points_stays_in_many_points() {
    let mut tool = tool_in(ConstructionState::ManyPoints, 3);
    tool.dispatch(ToolEvent::Move(Vec2::new(7.0, 7.0)));

    tool.dispatch(ToolEvent::Key(ToolKey::RemoveLast));

    assert_eq!(tool.state(), ConstructionState::ManyPoints);
    assert_eq!(tool.draft().committed_count(), 2);
    assert_eq!(tool.draft().provisional(), Some(Vec2::new(7.0, 7.0)));
}

#[test]
fn test_remove_last_with_two_points_falls_back_to_one_point() {
    let mut tool = tool_in(ConstructionState::ManyPoints, 2);

    tool.dispatch(ToolEvent::Key(ToolKey::RemoveLast));

    assert_eq!(tool.state(), ConstructionState::OnePoint);
    assert_eq!(tool.draft().committed(), &[Vec2::ZERO]);

    // OnePoint has no remove row
    assert_eq!(
        tool.dispatch(ToolEvent::Key(ToolKey::RemoveLast)),
        ToolResponse::Ignored
    );
}

#[test]
fn test_clicks_then_commit_produce_matching_vertex_count() {
    for n in 2..10 {
        let mut tool = PolylineTool::new(10);
        for i in 0..n {
            tool.dispatch(ToolEvent::Click(Vec2::new(i as f32, i as f32)));
        }
        match tool.dispatch(ToolEvent::Key(ToolKey::Commit)) {
            ToolResponse::Completed(points) => assert_eq!(points.len(), n),
            other => panic!("expected completion after {n} clicks, got {other:?}"),
        }
    }
}

#[test]
fn test_click_reaching_cap_finalizes() {
    let mut tool = PolylineTool::new(5);
    for i in 0..4 {
        assert_eq!(
            tool.dispatch(ToolEvent::Click(Vec2::new(i as f32, 0.0))),
            ToolResponse::Redraw
        );
    }
    assert_eq!(tool.state(), ConstructionState::ManyPoints);

    match tool.dispatch(ToolEvent::Click(Vec2::new(4.0, 0.0))) {
        ToolResponse::Completed(points) => {
            assert_eq!(points.len(), 5);
            assert_eq!(points[4], Vec2::new(4.0, 0.0));
        }
        other => panic!("expected completion, got {other:?}"),
    }
    assert_eq!(tool.state(), ConstructionState::Idle);
}

#[test]
fn test_draft_never_exceeds_cap() {
    let mut tool = PolylineTool::new(3);
    for i in 0..20 {
        tool.dispatch(ToolEvent::Click(Vec2::new(i as f32, 0.0)));
        assert!(tool.draft().committed_count() < tool.max_points());
    }
}

#[test]
fn test_max_points_is_clamped() {
    assert_eq!(PolylineTool::new(0).max_points(), 3);
    assert_eq!(PolylineTool::new(1000).max_points(), 64);

    let mut tool = PolylineTool::default();
    assert_eq!(tool.max_points(), 10);
    tool.set_max_points(2);
    assert_eq!(tool.max_points(), 3);
}

#[test]
fn test_max_points_change_waits_for_idle() {
    let mut tool = tool_in(ConstructionState::ManyPoints, 3);

    tool.set_max_points(4);
    assert_eq!(tool.max_points(), 10);

    // Still under the old cap, so this click does not finalize
    tool.dispatch(ToolEvent::Click(Vec2::new(3.0, 0.0)));
    assert_eq!(tool.state(), ConstructionState::ManyPoints);

    tool.dispatch(ToolEvent::Key(ToolKey::Cancel));
    assert_eq!(tool.max_points(), 4);
}

#[test]
fn test_ignored_event_does_not_apply_pending_cap() {
    let mut tool = tool_in(ConstructionState::OnePoint, 1);
    tool.set_max_points(6);

    tool.dispatch(ToolEvent::Key(ToolKey::Commit));
    assert_eq!(tool.max_points(), 10);
}

#[test]
fn test_key_mapping() {
    assert_eq!(ToolKey::from_key_code(KeyCode::Escape), Some(ToolKey::Cancel));
    assert_eq!(ToolKey::from_key_code(KeyCode::Enter), Some(ToolKey::Commit));
    assert_eq!(ToolKey::from_key_code(KeyCode::NumpadEnter), Some(ToolKey::Commit));
    assert_eq!(ToolKey::from_key_code(KeyCode::Backspace), Some(ToolKey::RemoveLast));
    assert_eq!(ToolKey::from_key_code(KeyCode::KeyA), None);
}

#[test]
fn test_collect_keeps_arrival_order() {
    let mut cursor = None;
    let events = collect_tool_events(
        &mut cursor,
        [
            CanvasInput::KeyPressed(KeyCode::Escape),
            CanvasInput::CursorMoved(Vec2::new(12.0, 8.0)),
            CanvasInput::LeftPressed,
            CanvasInput::KeyPressed(KeyCode::KeyQ),
            CanvasInput::KeyPressed(KeyCode::Enter),
        ],
    );

    assert_eq!(
        events,
        vec![
            ToolEvent::Key(ToolKey::Cancel),
            ToolEvent::Move(Vec2::new(12.0, 8.0)),
            ToolEvent::Click(Vec2::new(12.0, 8.0)),
            ToolEvent::Key(ToolKey::Commit),
        ]
    );
    assert_eq!(cursor, Some(Vec2::new(12.0, 8.0)));
}

#[test]
fn test_collect_key_order_follows_input() {
    let mut cursor = None;
    let forward = collect_tool_events(
        &mut cursor,
        [
            CanvasInput::KeyPressed(KeyCode::Backspace),
            CanvasInput::KeyPressed(KeyCode::Enter),
        ],
    );
    let reversed = collect_tool_events(
        &mut cursor,
        [
            CanvasInput::KeyPressed(KeyCode::Enter),
            CanvasInput::KeyPressed(KeyCode::Backspace),
        ],
    );

    assert_eq!(
        forward,
        vec![ToolEvent::Key(ToolKey::RemoveLast), ToolEvent::Key(ToolKey::Commit)]
    );
    assert_eq!(
        reversed,
        vec![ToolEvent::Key(ToolKey::Commit), ToolEvent::Key(ToolKey::RemoveLast)]
    );
}

#[test]
fn test_key_order_within_a_frame_changes_the_outcome() {
    let frame = |keys: [KeyCode; 2]| {
        let mut tool = tool_in(ConstructionState::ManyPoints, 3);
        let mut cursor = Some(Vec2::ZERO);
        let inputs = keys.map(CanvasInput::KeyPressed);
        collect_tool_events(&mut cursor, inputs)
            .into_iter()
            .map(|event| tool.dispatch(event))
            .collect::<Vec<ToolResponse>>()
    };

    // Remove then commit: two vertices survive
    let responses = frame([KeyCode::Backspace, KeyCode::Enter]);
    assert_eq!(
        responses.last(),
        Some(&ToolResponse::Completed(vec![Vec2::ZERO, Vec2::new(1.0, 0.0)]))
    );

    // Commit then remove: three vertices, and the removal lands in Idle
    let responses = frame([KeyCode::Enter, KeyCode::Backspace]);
    assert_eq!(
        responses,
        vec![
            ToolResponse::Completed(vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]),
            ToolResponse::Ignored,
        ]
    );
}

#[test]
fn test_collect_keeps_every_click_in_a_frame() {
    let mut cursor = None;
    let events = collect_tool_events(
        &mut cursor,
        [
            CanvasInput::CursorMoved(Vec2::ZERO),
            CanvasInput::LeftPressed,
            CanvasInput::CursorMoved(Vec2::ONE),
            CanvasInput::LeftPressed,
        ],
    );

    let clicks: Vec<Vec2> = events
        .iter()
        .filter_map(|event| match event {
            ToolEvent::Click(pos) => Some(*pos),
            _ => None,
        })
        .collect();
    assert_eq!(clicks, vec![Vec2::ZERO, Vec2::ONE]);
}

#[test]
fn test_collect_click_uses_last_known_cursor() {
    let mut cursor = Some(Vec2::new(4.0, 4.0));
    let events = collect_tool_events(&mut cursor, [CanvasInput::LeftPressed]);
    assert_eq!(events, vec![ToolEvent::Click(Vec2::new(4.0, 4.0))]);
}

#[test]
fn test_collect_without_cursor_keeps_keys_only() {
    let mut cursor = None;
    let events = collect_tool_events(
        &mut cursor,
        [
            CanvasInput::LeftPressed,
            CanvasInput::KeyPressed(KeyCode::Backspace),
        ],
    );
    assert_eq!(events, vec![ToolEvent::Key(ToolKey::RemoveLast)]);
}
