use serde::{Deserialize, Serialize};

use crate::core::ScenePrimitives;
use crate::interaction::tooltip_left;

/// Pointer input in container-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Move { x: f64 },
    DragStart { x: f64 },
    Drag { x: f64 },
    DragEnd,
    Out,
}

impl PointerEvent {
    /// Horizontal offset carried by move-like events.
    #[must_use]
    pub fn offset_x(self) -> Option<f64> {
        match self {
            Self::Move { x } | Self::DragStart { x } | Self::Drag { x } => Some(x),
            Self::DragEnd | Self::Out => None,
        }
    }

    /// Events that end tracking. These are never rate-limited.
    #[must_use]
    pub fn is_exit(self) -> bool {
        matches!(self, Self::DragEnd | Self::Out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerState {
    Idle,
    Tracking { index: usize },
}

/// Highlight and tooltip placement derived from the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub active_index: Option<usize>,
    /// Tooltip left edge in container pixels. Meaningful only when `visible`.
    pub tooltip_left: f64,
    pub visible: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            active_index: None,
            tooltip_left: 0.0,
            visible: false,
        }
    }
}

impl PointerState {
    #[must_use]
    pub fn tracker_state(self) -> TrackerState {
        match (self.visible, self.active_index) {
            (true, Some(index)) => TrackerState::Tracking { index },
            _ => TrackerState::Idle,
        }
    }
}

/// Outcome of feeding one event to [`PointerTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerUpdate {
    Tracking { index: usize },
    Idle,
    /// Offset fell outside the plotted extent; nothing changed.
    Ignored,
    /// Parked by the rate limiter until the next poll.
    Deferred,
}

/// Maps a plot-relative offset to a sample index, assuming evenly spaced samples.
///
/// Computes `round(mouse_x / (plotted_width / (item_count - 1)))` and rejects
/// offsets outside `[0, plotted_width]` as well as indices past the last item.
/// Actual sample times are deliberately ignored here. A single item is hit
/// anywhere in range; an empty series or a zero-width plot hits nothing.
#[must_use]
pub fn resolve_index(mouse_x: f64, plotted_width: f64, item_count: usize) -> Option<usize> {
    if item_count == 0 || !mouse_x.is_finite() || !plotted_width.is_finite() {
        return None;
    }
    if plotted_width <= 0.0 || mouse_x < 0.0 || mouse_x > plotted_width {
        return None;
    }
    if item_count == 1 {
        return Some(0);
    }

    let last = item_count - 1;
    let step = plotted_width / last as f64;
    let index = (mouse_x / step).round();
    if index < 0.0 || index > last as f64 {
        return None;
    }
    Some(index as usize)
}

/// Pointer state for a container-relative offset over `scene`.
///
/// `None` means the event is ignored and the previous state stays in effect.
#[must_use]
pub fn pointer_state_at(
    offset_x: f64,
    scene: &ScenePrimitives,
    tooltip_width: f64,
) -> Option<PointerState> {
    hit_test(offset_x, scene, tooltip_width).map(|(_, state)| state)
}

fn hit_test(
    offset_x: f64,
    scene: &ScenePrimitives,
    tooltip_width: f64,
) -> Option<(usize, PointerState)> {
    let mouse_x = offset_x - scene.margins.left;
    let index = resolve_index(mouse_x, scene.plotted_width, scene.item_count())?;
    let state = PointerState {
        active_index: Some(index),
        tooltip_left: tooltip_left(mouse_x, scene.margins, scene.plotted_width, tooltip_width),
        visible: true,
    };
    Some((index, state))
}

/// Idle/Tracking state machine over one scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    #[must_use]
    pub fn state(self) -> PointerState {
        self.state
    }

    #[must_use]
    pub fn tracker_state(self) -> TrackerState {
        self.state.tracker_state()
    }

    #[must_use]
    pub fn active_index(self) -> Option<usize> {
        self.state.active_index
    }

    /// Exit events always return to Idle, even without a scene.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        scene: Option<&ScenePrimitives>,
        tooltip_width: f64,
    ) -> PointerUpdate {
        let Some(offset_x) = event.offset_x() else {
            self.reset();
            return PointerUpdate::Idle;
        };
        let Some(scene) = scene else {
            return PointerUpdate::Ignored;
        };

        match hit_test(offset_x, scene, tooltip_width) {
            Some((index, next)) => {
                self.state = next;
                PointerUpdate::Tracking { index }
            }
            None => PointerUpdate::Ignored,
        }
    }

    pub fn reset(&mut self) {
        self.state = PointerState::default();
    }
}
