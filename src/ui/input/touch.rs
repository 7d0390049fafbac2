//! Touch-Punkte und Pinch-Gesten.

use super::{InputState, MapInputContext};
use crate::app::AppIntent;

impl InputState {
    /// Meldet aufgesetzte/abgehobene Touch-Punkte und setzt Pinch-Gesten
    /// in Zoom und Pan um.
    pub(crate) fn handle_touch(&mut self, ctx: &MapInputContext, events: &mut Vec<AppIntent>) {
        ctx.ui.input(|i| {
            for event in &i.events {
                if let egui::Event::Touch { id, phase, .. } = event {
                    match phase {
                        egui::TouchPhase::Start => {
                            events.push(AppIntent::TouchStarted { id: id.0 })
                        }
                        egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                            events.push(AppIntent::TouchEnded { id: id.0 })
                        }
                        egui::TouchPhase::Move => {}
                    }
                }
            }
        });

        let Some(multi_touch) = ctx.ui.input(|i| i.multi_touch()) else {
            return;
        };
        if multi_touch.zoom_delta != 1.0 && multi_touch.zoom_delta > 0.0 {
            let focus = super::local_pos(multi_touch.center_pos, ctx.response);
            events.push(AppIntent::ScrollZoom {
                delta: f64::from(multi_touch.zoom_delta).log2(),
                focus,
            });
        }
        let pan = multi_touch.translation_delta;
        if pan != egui::Vec2::ZERO {
            events.push(AppIntent::MapDragged {
                delta: glam::Vec2::new(pan.x, pan.y),
            });
        }
    }
}
