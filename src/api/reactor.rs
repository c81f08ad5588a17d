use tracing::{debug, trace};

use crate::core::{Sample, Viewport, build_scene};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the sample sequence.
    ///
    /// Recomputes only when the new samples differ by value from the current
    /// ones. Returns whether a recompute happened.
    pub fn set_samples(&mut self, samples: Vec<Sample>) -> ChartResult<bool> {
        if self.torn_down {
            trace!("set_samples ignored after teardown");
            return Ok(false);
        }
        if samples == self.samples {
            trace!(count = samples.len(), "set_samples: unchanged");
            return Ok(false);
        }

        debug!(
            previous_count = self.samples.len(),
            count = samples.len(),
            "set samples"
        );
        self.samples = samples;
        self.recompute()?;
        Ok(true)
    }

    /// Records a new container measurement.
    ///
    /// Width changes recompute. Height-only changes recompute only when
    /// `ReactorDependencies::height` is set. The first valid measurement after
    /// a "not ready" period always recomputes.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<bool> {
        if self.torn_down {
            trace!("set_viewport ignored after teardown");
            return Ok(false);
        }

        let previous = self.viewport;
        self.viewport = viewport;

        let first_measurement = self.scene.is_none() && viewport.is_valid();
        let width_changed = previous.width != viewport.width;
        let height_tracked =
            self.config.reactor_dependencies.height && previous.height != viewport.height;

        if !(first_measurement || width_changed || height_tracked) {
            trace!(
                width = viewport.width,
                height = viewport.height,
                "viewport change below reactor threshold"
            );
            return Ok(false);
        }

        debug!(
            previous_width = previous.width,
            width = viewport.width,
            height = viewport.height,
            "viewport changed"
        );
        self.recompute()?;
        Ok(true)
    }

    /// Rebuilds the scene from the current samples and viewport, discarding
    /// the previous snapshot and returning the pointer to Idle.
    pub(super) fn recompute(&mut self) -> ChartResult<()> {
        let scene = build_scene(&self.samples, self.viewport, self.config.scene_options())?;
        self.tracker.reset();
        self.throttle.cancel();

        match &scene {
            Some(scene) => {
                self.recompute_count += 1;
                debug!(
                    items = scene.item_count(),
                    plotted_width = scene.plotted_width,
                    recompute_count = self.recompute_count,
                    "scene recomputed"
                );
            }
            None => debug!(
                width = self.viewport.width,
                height = self.viewport.height,
                "container not measured yet; scene deferred"
            ),
        }
        self.scene = scene;
        Ok(())
    }
}
