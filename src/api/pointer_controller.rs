use std::time::Duration;

use tracing::trace;

use crate::core::ScenePrimitives;
use crate::interaction::{
    PointerEvent, PointerState, PointerUpdate, TooltipContent, TrackerState,
};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Feeds one pointer event observed at host time `now`.
    ///
    /// Move and drag events pass through the rate limiter; a parked event is
    /// released by [`ChartEngine::poll_pointer`]. Exit events apply
    /// immediately and drop any parked move.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, now: Duration) -> PointerUpdate {
        if self.torn_down {
            return PointerUpdate::Ignored;
        }

        if event.is_exit() {
            self.throttle.cancel();
            return self.apply_pointer_event(event);
        }

        match self.throttle.submit(now, event) {
            Some(event) => self.apply_pointer_event(event),
            None => {
                trace!(?event, "pointer event parked by throttle");
                PointerUpdate::Deferred
            }
        }
    }

    pub fn pointer_move(&mut self, x: f64, now: Duration) -> PointerUpdate {
        self.handle_pointer_event(PointerEvent::Move { x }, now)
    }

    pub fn pointer_out(&mut self, now: Duration) -> PointerUpdate {
        self.handle_pointer_event(PointerEvent::Out, now)
    }

    pub fn drag_start(&mut self, x: f64, now: Duration) -> PointerUpdate {
        self.handle_pointer_event(PointerEvent::DragStart { x }, now)
    }

    pub fn drag(&mut self, x: f64, now: Duration) -> PointerUpdate {
        self.handle_pointer_event(PointerEvent::Drag { x }, now)
    }

    pub fn drag_end(&mut self, now: Duration) -> PointerUpdate {
        self.handle_pointer_event(PointerEvent::DragEnd, now)
    }

    /// Releases the parked pointer event once its throttle window has passed.
    pub fn poll_pointer(&mut self, now: Duration) -> Option<PointerUpdate> {
        if self.torn_down {
            return None;
        }
        let event = self.throttle.poll(now)?;
        Some(self.apply_pointer_event(event))
    }

    /// When the host should call [`ChartEngine::poll_pointer`] next.
    #[must_use]
    pub fn next_pointer_deadline(&self) -> Option<Duration> {
        if self.torn_down {
            return None;
        }
        self.throttle.next_deadline()
    }

    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.tracker.state()
    }

    #[must_use]
    pub fn tracker_state(&self) -> TrackerState {
        self.tracker.tracker_state()
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.tracker.active_index()
    }

    #[must_use]
    pub fn is_guide_active(&self, index: usize) -> bool {
        self.highlighted(index, |scene| scene.guides.len())
    }

    #[must_use]
    pub fn is_marker_active(&self, index: usize) -> bool {
        self.highlighted(index, |scene| scene.markers.len())
    }

    /// Content for the visible tooltip, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<TooltipContent> {
        let state = self.tracker.state();
        if !state.visible {
            return None;
        }
        let index = state.active_index?;
        self.scene.as_ref()?.point(index)?;
        let sample = self.samples.get(index)?;
        Some(TooltipContent::for_sample(index, *sample, self.utc_offset))
    }

    fn highlighted(
        &self,
        index: usize,
        handle_count: impl Fn(&ScenePrimitives) -> usize,
    ) -> bool {
        let Some(scene) = self.scene.as_ref() else {
            return false;
        };
        index < handle_count(scene) && self.tracker.active_index() == Some(index)
    }

    fn apply_pointer_event(&mut self, event: PointerEvent) -> PointerUpdate {
        let update = self.tracker.handle(
            event,
            self.scene.as_ref(),
            self.config.tooltip_size.width,
        );
        if update == PointerUpdate::Ignored {
            trace!(?event, "pointer offset outside plotted extent");
        }
        update
    }
}
