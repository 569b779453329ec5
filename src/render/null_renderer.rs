use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{FrameStats, RenderFrame, Renderer};

/// Headless renderer used by tests and geometry-only consumers.
///
/// It still validates frame content so tests catch invalid geometry, and keeps
/// the last accepted frame for inspection.
#[derive(Debug)]
pub struct NullRenderer {
    viewport: Viewport,
    last_frame: Option<RenderFrame>,
    render_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            last_frame: None,
            render_count: 0,
        }
    }

    /// Simulates the host resizing the surface.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn last_stats(&self) -> FrameStats {
        self.last_frame
            .as_ref()
            .map(RenderFrame::stats)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl Renderer for NullRenderer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_frame = Some(frame.clone());
        self.render_count += 1;
        Ok(())
    }
}
