use tracing::trace;

use crate::core::{HoverEvent, HoverState};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, SceneTheme};

use super::{ChartLayout, ChartRequest};

/// A laid-out chart bound to a renderer, plus the transient hover index.
///
/// Hover changes never touch the layout; they only change which frame is
/// built on the next [`ChartView::render`].
pub struct ChartView<R: Renderer> {
    renderer: R,
    request: ChartRequest,
    layout: ChartLayout,
    hover: HoverState,
    theme: SceneTheme,
}

impl<R: Renderer> ChartView<R> {
    pub fn new(renderer: R, request: ChartRequest) -> ChartResult<Self> {
        let layout = request.build()?;
        Ok(Self {
            renderer,
            request,
            layout,
            hover: HoverState::new(),
            theme: SceneTheme::default(),
        })
    }

    #[must_use]
    pub fn with_theme(mut self, theme: SceneTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    #[must_use]
    pub fn request(&self) -> &ChartRequest {
        &self.request
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Applies a pointer event and returns the new hover state.
    pub fn handle_hover(&mut self, event: HoverEvent) -> HoverState {
        self.hover = self.hover.apply(event, self.layout.len());
        trace!(?event, active = ?self.hover.active(), "hover updated");
        self.hover
    }

    /// Replaces the data and rebuilds the layout; a hover index past the new
    /// end is dropped.
    pub fn set_request(&mut self, request: ChartRequest) -> ChartResult<()> {
        let layout = request.build()?;
        self.hover = self.hover.clamp_to(layout.len());
        self.request = request;
        self.layout = layout;
        Ok(())
    }

    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        self.layout.frame(self.hover, &self.theme)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
