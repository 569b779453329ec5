use tracing::{debug, warn};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{FrameStats, Renderer};

use super::{ChartConfig, RenderStyle, build_render_frame};

/// Result of one render request.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The surface was cleared and repainted.
    Drawn(FrameStats),
    /// Nothing was painted and the surface was left untouched.
    Skipped(ChartError),
}

impl RenderOutcome {
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn(_))
    }
}

/// Immediate-mode chart renderer bound to one backend surface.
///
/// The only retained state is the last configuration and the style; every pass
/// rebuilds the full frame and overwrites the whole surface. Calls take
/// `&mut self`, so drawing onto one surface is always serialized.
pub struct ChartRenderer<R: Renderer> {
    backend: R,
    style: RenderStyle,
    config: Option<ChartConfig>,
}

impl<R: Renderer> ChartRenderer<R> {
    #[must_use]
    pub fn new(backend: R) -> Self {
        Self {
            backend,
            style: RenderStyle::default(),
            config: None,
        }
    }

    pub fn with_style(backend: R, style: RenderStyle) -> ChartResult<Self> {
        style.validate()?;
        Ok(Self {
            backend,
            style,
            config: None,
        })
    }

    /// Stores `config` and paints it.
    ///
    /// Malformed configs and zero-sized surfaces are skipped with a warning;
    /// only backend failures are returned as errors.
    pub fn render(&mut self, config: ChartConfig) -> ChartResult<RenderOutcome> {
        self.config = Some(config);
        self.draw()
    }

    /// Replaces the stored configuration and repaints synchronously.
    pub fn update(&mut self, config: ChartConfig) -> ChartResult<RenderOutcome> {
        self.render(config)
    }

    /// Edits the stored configuration in place and repaints.
    pub fn update_with<F>(&mut self, edit: F) -> ChartResult<RenderOutcome>
    where
        F: FnOnce(&mut ChartConfig),
    {
        match self.config.as_mut() {
            Some(config) => {
                edit(config);
                self.draw()
            }
            None => Ok(self.skip(ChartError::NotConfigured)),
        }
    }

    /// Repaints the stored configuration at the backend's current size.
    ///
    /// Size changes are not detected here; hosts resize the backend surface
    /// first and then call this.
    pub fn resize(&mut self) -> ChartResult<RenderOutcome> {
        self.draw()
    }

    #[must_use]
    pub fn config(&self) -> Option<&ChartConfig> {
        self.config.as_ref()
    }

    #[must_use]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Replaces the style used by subsequent passes. Does not repaint.
    pub fn set_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.backend.viewport()
    }

    #[must_use]
    pub fn backend(&self) -> &R {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut R {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> R {
        self.backend
    }

    fn draw(&mut self) -> ChartResult<RenderOutcome> {
        let Some(config) = self.config.as_ref() else {
            return Ok(self.skip(ChartError::NotConfigured));
        };
        let viewport = self.backend.viewport();
        let frame = match build_render_frame(config, &self.style, viewport) {
            Ok(frame) => frame,
            Err(err) => return Ok(self.skip(err)),
        };

        self.backend.render(&frame)?;
        let stats = frame.stats();
        debug!(
            kind = config.kind.as_str(),
            width = viewport.width,
            height = viewport.height,
            primitives = stats.total(),
            "chart rendered"
        );
        Ok(RenderOutcome::Drawn(stats))
    }

    fn skip(&self, reason: ChartError) -> RenderOutcome {
        warn!(error = %reason, "skipping chart render");
        RenderOutcome::Skipped(reason)
    }
}
