use chrono::FixedOffset;
use tracing::{debug, trace};

use crate::core::{Sample, ScenePrimitives, Viewport};
use crate::error::ChartResult;
use crate::interaction::{PointerEvent, PointerTracker, Throttle};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::ChartEngineConfig;

/// One mounted chart instance.
///
/// Owns the current sample sequence, the scene snapshot derived from it, the
/// pointer tracker and the pending rate-limited pointer event. Everything runs
/// synchronously on the caller's thread.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) utc_offset: FixedOffset,
    pub(super) samples: Vec<Sample>,
    pub(super) viewport: Viewport,
    pub(super) scene: Option<ScenePrimitives>,
    pub(super) tracker: PointerTracker,
    pub(super) throttle: Throttle<PointerEvent>,
    pub(super) recompute_count: u64,
    pub(super) torn_down: bool,
}

impl<R: Renderer> ChartEngine<R> {
    /// Mounts the engine and runs the first computation when the viewport is
    /// already measured.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let utc_offset = config.tooltip_utc_offset()?;

        let mut engine = Self {
            renderer,
            config,
            utc_offset,
            samples: Vec::new(),
            viewport: config.viewport,
            scene: None,
            tracker: PointerTracker::default(),
            throttle: Throttle::new(config.throttle_window()),
            recompute_count: 0,
            torn_down: false,
        };
        engine.recompute()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            ready = engine.is_ready(),
            "chart engine mounted"
        );
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Current scene snapshot; `None` until the container has a valid size.
    #[must_use]
    pub fn scene(&self) -> Option<&ScenePrimitives> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.scene.is_some()
    }

    /// Number of completed scene computations since mount.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Draws the current scene. Skipped while not ready or after teardown.
    pub fn render(&mut self) -> ChartResult<()> {
        let Some(frame) = self.build_render_frame() else {
            trace!(torn_down = self.torn_down, "render skipped: no scene");
            return Ok(());
        };
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let Some(frame) = self.build_render_frame() else {
            return Ok(());
        };
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Unmounts the engine: pending pointer work is dropped and every later
    /// event, poll or data change is ignored.
    pub fn teardown(&mut self) {
        self.throttle.reset();
        self.tracker.reset();
        self.scene = None;
        self.torn_down = true;
        debug!("chart engine torn down");
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
