//! Construction state machine for the polyline tool.
//!
//! The machine is a static transition table over [`ConstructionState`]. For a
//! given state and event the first row whose guard passes wins; events with no
//! matching row are ignored. Rows are tried in table order, so the capacity
//! check on `ManyPoints + Click` and the `> 2` check on `RemoveLast` come
//! before their fallbacks.

use bevy::prelude::*;

use crate::constants::{DEFAULT_MAX_POINTS, MAX_MAX_POINTS, MIN_MAX_POINTS};

use super::draft::PolylineDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstructionState {
    /// No draft
    #[default]
    Idle,
    /// One committed vertex, provisional vertex following the pointer
    OnePoint,
    /// Two or more committed vertices, provisional vertex following the pointer
    ManyPoints,
}

impl ConstructionState {
    pub fn display_name(&self) -> &'static str {
        match self {
            ConstructionState::Idle => "Idle",
            ConstructionState::OnePoint => "One point",
            ConstructionState::ManyPoints => "Many points",
        }
    }

    /// Short usage hint for the status bar
    pub fn hint(&self) -> &'static str {
        match self {
            ConstructionState::Idle => "Click to start a polyline",
            ConstructionState::OnePoint => "Click to add a point, Esc to cancel",
            ConstructionState::ManyPoints => {
                "Click to add, Enter to finish, Backspace to remove the last point, Esc to cancel"
            }
        }
    }
}

/// Named key signals understood by the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKey {
    Cancel,
    Commit,
    RemoveLast,
}

impl ToolKey {
    pub fn from_key_code(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Escape => Some(ToolKey::Cancel),
            KeyCode::Enter | KeyCode::NumpadEnter => Some(ToolKey::Commit),
            KeyCode::Backspace => Some(ToolKey::RemoveLast),
            _ => None,
        }
    }
}

/// Input delivered to the machine, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolEvent {
    Click(Vec2),
    Move(Vec2),
    Key(ToolKey),
}

/// Payload-free event discriminant used as the table key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Move,
    Cancel,
    Commit,
    RemoveLast,
}

impl ToolEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ToolEvent::Click(_) => EventKind::Click,
            ToolEvent::Move(_) => EventKind::Move,
            ToolEvent::Key(ToolKey::Cancel) => EventKind::Cancel,
            ToolEvent::Key(ToolKey::Commit) => EventKind::Commit,
            ToolEvent::Key(ToolKey::RemoveLast) => EventKind::RemoveLast,
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        match self {
            ToolEvent::Click(pos) | ToolEvent::Move(pos) => Some(*pos),
            ToolEvent::Key(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// The click being handled will not fill the draft up to the cap
    HasRoom,
    MoreThanTwoPoints,
}

impl Guard {
    pub fn allows(self, draft: &PolylineDraft, max_points: usize) -> bool {
        match self {
            Guard::Always => true,
            Guard::HasRoom => draft.committed_count() + 1 < max_points,
            Guard::MoreThanTwoPoints => draft.committed_count() > 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartDraft,
    AddPoint,
    SetProvisional,
    Discard,
    AddPointAndFinalize,
    Finalize,
    RemoveLastPoint,
}

impl Action {
    /// Mutate the draft; returns the finished vertex list when the action finalizes
    fn apply(self, draft: &mut PolylineDraft, event: ToolEvent) -> Option<Vec<Vec2>> {
        match self {
            Action::StartDraft => {
                draft.start(event.position()?);
                None
            }
            Action::AddPoint => {
                draft.push(event.position()?);
                None
            }
            Action::SetProvisional => {
                draft.set_provisional(event.position()?);
                None
            }
            Action::Discard => {
                draft.clear();
                None
            }
            Action::AddPointAndFinalize => {
                draft.push(event.position()?);
                Some(draft.take_committed())
            }
            Action::Finalize => Some(draft.take_committed()),
            Action::RemoveLastPoint => {
                draft.pop_committed();
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ConstructionState,
    pub on: EventKind,
    pub guard: Guard,
    pub action: Action,
    pub to: ConstructionState,
}

const fn row(
    from: ConstructionState,
    on: EventKind,
    guard: Guard,
    action: Action,
    to: ConstructionState,
) -> Transition {
    Transition {
        from,
        on,
        guard,
        action,
        to,
    }
}

use ConstructionState::{Idle, ManyPoints, OnePoint};

pub const TRANSITIONS: &[Transition] = &[
    row(Idle, EventKind::Click, Guard::Always, Action::StartDraft, OnePoint),
    row(OnePoint, EventKind::Click, Guard::Always, Action::AddPoint, ManyPoints),
    row(OnePoint, EventKind::Move, Guard::Always, Action::SetProvisional, OnePoint),
    row(OnePoint, EventKind::Cancel, Guard::Always, Action::Discard, Idle),
    row(ManyPoints, EventKind::Click, Guard::HasRoom, Action::AddPoint, ManyPoints),
    row(ManyPoints, EventKind::Click, Guard::Always, Action::AddPointAndFinalize, Idle),
    row(ManyPoints, EventKind::Move, Guard::Always, Action::SetProvisional, ManyPoints),
    row(ManyPoints, EventKind::Cancel, Guard::Always, Action::Discard, Idle),
    row(ManyPoints, EventKind::Commit, Guard::Always, Action::Finalize, Idle),
    row(ManyPoints, EventKind::RemoveLast, Guard::MoreThanTwoPoints, Action::RemoveLastPoint, ManyPoints),
    row(ManyPoints, EventKind::RemoveLast, Guard::Always, Action::RemoveLastPoint, OnePoint),
];

/// What a dispatched event did
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResponse {
    /// No transition matched; nothing changed
    Ignored,
    /// The draft changed and the in-progress layer needs a redraw
    Redraw,
    /// A shape was finalized with these vertices; the draft is empty again
    Completed(Vec<Vec2>),
}

/// The polyline construction tool: current state, draft buffer and vertex cap.
///
/// Only [`PolylineTool::dispatch`] mutates the draft.
#[derive(Resource, Debug)]
pub struct PolylineTool {
    state: ConstructionState,
    draft: PolylineDraft,
    max_points: usize,
    pending_max_points: Option<usize>,
}

impl Default for PolylineTool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POINTS)
    }
}

impl PolylineTool {
    pub fn new(max_points: usize) -> Self {
        Self {
            state: ConstructionState::Idle,
            draft: PolylineDraft::default(),
            max_points: clamp_max_points(max_points),
            pending_max_points: None,
        }
    }

    pub fn state(&self) -> ConstructionState {
        self.state
    }

    pub fn draft(&self) -> &PolylineDraft {
        &self.draft
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    pub fn is_drawing(&self) -> bool {
        self.state != ConstructionState::Idle
    }

    /// Change the vertex cap. While a draft is active the change waits until
    /// the machine is back in `Idle`, so the current shape keeps its cap.
    pub fn set_max_points(&mut self, max_points: usize) {
        let max_points = clamp_max_points(max_points);
        if self.is_drawing() {
            self.pending_max_points = Some(max_points);
        } else {
            self.max_points = max_points;
            self.pending_max_points = None;
        }
    }

    /// Feed one event through the transition table
    pub fn dispatch(&mut self, event: ToolEvent) -> ToolResponse {
        let kind = event.kind();
        let Some(transition) = TRANSITIONS.iter().find(|t| {
            t.from == self.state && t.on == kind && t.guard.allows(&self.draft, self.max_points)
        }) else {
            trace!("Polyline tool ignored {:?} in {:?}", kind, self.state);
            return ToolResponse::Ignored;
        };

        let completed = transition.action.apply(&mut self.draft, event);

        if transition.from != transition.to {
            debug!(
                "Polyline tool: {:?} -> {:?} on {:?} ({:?})",
                transition.from, transition.to, kind, transition.action
            );
        }
        self.state = transition.to;

        if self.state == ConstructionState::Idle
            && let Some(max_points) = self.pending_max_points.take()
        {
            self.max_points = max_points;
        }

        match completed {
            Some(points) => ToolResponse::Completed(points),
            None => ToolResponse::Redraw,
        }
    }
}

fn clamp_max_points(max_points: usize) -> usize {
    max_points.clamp(MIN_MAX_POINTS, MAX_MAX_POINTS)
}
