// File: crates/thermo-core/src/interaction.rs
// Summary: Tooltip state machine driven by per-bar pointer events, and raw-pointer hover tracking.

use log::debug;

use crate::geometry::BarId;
use crate::scene::Scene;

/// Pointer events scoped to a bar. Coordinates are screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarEvent {
    Enter { bar: BarId, value: f64 },
    Move { bar: BarId, x: f64, y: f64 },
    Leave { bar: BarId },
}

/// What the host must do to its tooltip overlay.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipCommand {
    Show,
    Hide,
    SetContent(String),
    MoveTo { x: f64, y: f64 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    pub x: f64,
    pub y: f64,
    /// Bar that last entered; only its leave hides the tooltip.
    pub owner: Option<BarId>,
}

impl TooltipState {
    pub fn hidden() -> Self {
        Self::default()
    }
}

pub fn tooltip_text(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value }; // no "-0"
    format!("Temperature: {value}")
}

/// Pure transition: `(state, event) -> (state, commands)`.
pub fn transition(state: &TooltipState, event: &BarEvent, offset: (f64, f64)) -> (TooltipState, Vec<TooltipCommand>) {
    let mut next = state.clone();
    match *event {
        BarEvent::Enter { bar, value } => {
            next.visible = true;
            next.content = tooltip_text(value);
            next.owner = Some(bar);
            let cmds = vec![TooltipCommand::SetContent(next.content.clone()), TooltipCommand::Show];
            (next, cmds)
        }
        BarEvent::Move { x, y, .. } if state.visible => {
            next.x = x + offset.0;
            next.y = y + offset.1;
            let cmds = vec![TooltipCommand::MoveTo { x: next.x, y: next.y }];
            (next, cmds)
        }
        BarEvent::Leave { bar } if state.visible && state.owner == Some(bar) => {
            next.visible = false;
            next.owner = None;
            (next, vec![TooltipCommand::Hide])
        }
        _ => (next, Vec::new()),
    }
}

/// Owns the single tooltip state for one rendered chart.
#[derive(Clone, Debug)]
pub struct InteractionController {
    state: TooltipState,
    offset: (f64, f64),
}

impl InteractionController {
    pub fn new(offset: (f64, f64)) -> Self {
        Self { state: TooltipState::hidden(), offset }
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn dispatch(&mut self, event: BarEvent) -> Vec<TooltipCommand> {
        let (next, cmds) = transition(&self.state, &event, self.offset);
        if next.visible != self.state.visible {
            debug!("tooltip {} ({:?})", if next.visible { "shown" } else { "hidden" }, event);
        }
        self.state = next;
        cmds
    }

    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = BarEvent>) -> Vec<TooltipCommand> {
        events.into_iter().flat_map(|e| self.dispatch(e)).collect()
    }
}

/// Turns raw pointer positions into bar enter/move/leave events.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    hovered: Option<BarId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<BarId> {
        self.hovered
    }

    /// `chart` is the pointer in chart coordinates (for hit testing),
    /// `screen` the same point in screen pixels (for tooltip placement).
    pub fn pointer_moved(&mut self, scene: &Scene, chart: (f64, f64), screen: (f64, f64)) -> Vec<BarEvent> {
        let hit = scene.hit_test(chart.0, chart.1).map(|b| (b.id, b.value));
        let mut events = Vec::new();
        if hit.map(|(id, _)| id) != self.hovered {
            if let Some(old) = self.hovered.take() {
                events.push(BarEvent::Leave { bar: old });
            }
            if let Some((id, value)) = hit {
                events.push(BarEvent::Enter { bar: id, value });
                self.hovered = Some(id);
            }
        }
        if let Some(bar) = self.hovered {
            events.push(BarEvent::Move { bar, x: screen.0, y: screen.1 });
        }
        events
    }

    /// The pointer left the surface.
    pub fn pointer_left(&mut self) -> Vec<BarEvent> {
        self.hovered.take().map(|bar| BarEvent::Leave { bar }).into_iter().collect()
    }
}
