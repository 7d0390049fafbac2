//! Scroll-Zoom auf Mausposition.

use super::{local_pos, InputState, MapInputContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &MapInputContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = ctx.options.scroll_zoom_step;
        let delta = if scroll > 0.0 { step } else { -step };
        let focus = ctx
            .response
            .hover_pos()
            .map(|pos| local_pos(pos, ctx.response))
            .unwrap_or_else(|| ctx.scene.view.viewport_size * 0.5);
        events.push(AppIntent::ScrollZoom { delta, focus });
    }
}
