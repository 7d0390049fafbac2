//! Malt die RenderScene mit dem egui-Painter.
//!
//! Konkave Freihand-Polygone werden mit lyon tesselliert, da egui nur
//! konvexe Pfade selbst füllt.

use crate::core::MapView;
use crate::render::{LabelStyle, Rgba, StrokeStyle};
use crate::shared::{MeasurementView, RenderScene, ShapeRenderItem, SketchPreview};
use glam::{DVec2, Vec2};
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};

const SEA_COLOR: egui::Color32 = egui::Color32::from_rgb(170, 211, 223);
const SKETCH_WIDTH_PX: f32 = 2.0;
/// Zulässige Gitter-Abstände in Grad
const GRATICULE_STEPS: [f64; 9] = [0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0];
const GRATICULE_MAX_LINES: f64 = 12.0;

/// Wandelt eine Style-Farbe in eine egui-Farbe um.
pub(crate) fn to_color(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Lon/Lat → egui-Bildschirmposition innerhalb von `rect`.
pub(crate) fn to_screen(view: &MapView, rect: egui::Rect, lonlat: DVec2) -> egui::Pos2 {
    let local = view.lonlat_to_screen(lonlat);
    rect.min + egui::vec2(local.x, local.y)
}

/// Malt einen kompletten Frame: Hintergrund, Gitter, Shapes, Labels, Strich-Vorschau.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, SEA_COLOR);
    paint_graticule(painter, rect, &scene.view);

    for item in &scene.shapes {
        paint_shape(painter, rect, &scene.view, item);
    }

    // Labels über allen Flächen, nach z_index gestapelt
    let mut labels: Vec<(egui::Pos2, &LabelStyle)> = scene
        .shapes
        .iter()
        .filter_map(|item| {
            let anchor = item.style.label_anchor?;
            Some((to_screen(&scene.view, rect, anchor), &item.style.labels))
        })
        .flat_map(|(pos, labels)| labels.iter().map(move |label| (pos, label)))
        .collect();
    labels.sort_by_key(|(_, label)| label.z_index);
    for (pos, label) in labels {
        paint_label(painter, pos, label);
    }

    if let Some(sketch) = &scene.sketch {
        paint_sketch(painter, rect, &scene.view, sketch);
    }
    if let Some(measurement) = &scene.measurement {
        paint_measurement(painter, rect, &scene.view, measurement);
    }
}

fn paint_shape(painter: &egui::Painter, rect: egui::Rect, view: &MapView, item: &ShapeRenderItem) {
    let points: Vec<egui::Pos2> = item
        .geometry
        .iter()
        .map(|lonlat| to_screen(view, rect, *lonlat))
        .collect();
    if points.len() < 3 {
        return;
    }

    if let Some(mesh) = fill_mesh(&points, to_color(item.style.fill)) {
        painter.add(egui::Shape::mesh(mesh));
    }
    paint_outline(painter, points, &item.style.stroke);
}

fn paint_outline(painter: &egui::Painter, mut points: Vec<egui::Pos2>, stroke: &StrokeStyle) {
    let egui_stroke = egui::Stroke::new(stroke.width, to_color(stroke.color));
    match stroke.dash {
        Some([dash, gap]) => {
            if let Some(first) = points.first().copied() {
                points.push(first);
            }
            painter.extend(egui::Shape::dashed_line(&points, egui_stroke, dash, gap));
        }
        None => {
            painter.add(egui::Shape::closed_line(points, egui_stroke));
        }
    }
}

/// Tesselliert ein (ggf. konkaves oder selbstschneidendes) Polygon zu einem Mesh.
fn fill_mesh(points: &[egui::Pos2], color: egui::Color32) -> Option<egui::Mesh> {
    let (first, rest) = points.split_first()?;
    let mut builder = Path::builder();
    builder.begin(point(first.x, first.y));
    for p in rest {
        builder.line_to(point(p.x, p.y));
    }
    builder.end(true);
    let path = builder.build();

    let mut buffers: VertexBuffers<egui::Pos2, u32> = VertexBuffers::new();
    let options = FillOptions::default().with_fill_rule(FillRule::NonZero);
    let result = FillTessellator::new().tessellate_path(
        &path,
        &options,
        &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
            let p = vertex.position();
            egui::pos2(p.x, p.y)
        }),
    );
    if let Err(err) = result {
        log::debug!("Tessellierung fehlgeschlagen: {:?}", err);
        return None;
    }

    let mut mesh = egui::Mesh::default();
    for pos in buffers.vertices {
        mesh.colored_vertex(pos, color);
    }
    mesh.indices = buffers.indices;
    Some(mesh)
}

fn paint_label(painter: &egui::Painter, anchor: egui::Pos2, label: &LabelStyle) {
    let pos = anchor + egui::vec2(0.0, label.offset_y);
    let font = egui::FontId::proportional(label.font_px);
    let halo = to_color(label.halo);
    let w = label.halo_width;
    for offset in [
        egui::vec2(-w, 0.0),
        egui::vec2(w, 0.0),
        egui::vec2(0.0, -w),
        egui::vec2(0.0, w),
    ] {
        painter.text(
            pos + offset,
            egui::Align2::CENTER_CENTER,
            &label.text,
            font.clone(),
            halo,
        );
    }
    painter.text(
        pos,
        egui::Align2::CENTER_CENTER,
        &label.text,
        font,
        to_color(label.fill),
    );
}

fn paint_sketch(painter: &egui::Painter, rect: egui::Rect, view: &MapView, sketch: &SketchPreview) {
    let points: Vec<egui::Pos2> = sketch
        .points
        .iter()
        .map(|lonlat| to_screen(view, rect, *lonlat))
        .collect();
    let color = to_color(sketch.color);
    let stroke = egui::Stroke::new(SKETCH_WIDTH_PX, color);

    if points.len() >= 3 {
        if let Some(mesh) = fill_mesh(&points, to_color(sketch.color.with_alpha(0x33))) {
            painter.add(egui::Shape::mesh(mesh));
        }
    }
    if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
        // Implizite Schließkante
        painter.extend(egui::Shape::dashed_line(&[last, first], stroke, 4.0, 4.0));
    }
    painter.add(egui::Shape::line(points, stroke));
}

fn paint_measurement(
    painter: &egui::Painter,
    rect: egui::Rect,
    view: &MapView,
    measurement: &MeasurementView,
) {
    let pos = to_screen(view, rect, measurement.anchor) + egui::vec2(14.0, -14.0);
    let galley = painter.layout_no_wrap(
        measurement.text.clone(),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    let bg = egui::Rect::from_min_size(pos, galley.size()).expand(4.0);
    painter.rect_filled(bg, 4.0, egui::Color32::from_black_alpha(180));
    painter.galley(pos, galley, egui::Color32::WHITE);
}

/// Gradnetz in einer zum Zoom passenden Schrittweite.
fn paint_graticule(painter: &egui::Painter, rect: egui::Rect, view: &MapView) {
    let top_left = view.screen_to_lonlat(Vec2::ZERO);
    let bottom_right = view.screen_to_lonlat(view.viewport_size);
    let span = (bottom_right.x - top_left.x).abs().max(1e-9);
    let step = GRATICULE_STEPS
        .iter()
        .copied()
        .find(|step| span / step <= GRATICULE_MAX_LINES)
        .unwrap_or(30.0);

    let stroke = egui::Stroke::new(1.0, egui::Color32::from_white_alpha(70));
    let mut lon = (top_left.x / step).floor() * step;
    while lon <= bottom_right.x {
        let x = to_screen(view, rect, DVec2::new(lon, top_left.y)).x;
        painter.vline(x, rect.y_range(), stroke);
        lon += step;
    }

    let lat_min = bottom_right.y.max(-85.0);
    let lat_max = top_left.y.min(85.0);
    let mut lat = (lat_min / step).floor() * step;
    while lat <= lat_max {
        let y = to_screen(view, rect, DVec2::new(top_left.x, lat)).y;
        painter.hline(rect.x_range(), y, stroke);
        lat += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concave_polygon_is_tessellated() {
        // L-Form (konkav)
        let points = [
            egui::pos2(0.0, 0.0),
            egui::pos2(20.0, 0.0),
            egui::pos2(20.0, 10.0),
            egui::pos2(10.0, 10.0),
            egui::pos2(10.0, 20.0),
            egui::pos2(0.0, 20.0),
        ];

        let mesh = fill_mesh(&points, egui::Color32::RED).expect("Mesh");

        assert!(!mesh.indices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.vertices.iter().all(|v| v.color == egui::Color32::RED));
    }

    #[test]
    fn test_to_color_keeps_alpha() {
        let color = to_color(Rgba::new(255, 0, 0, 0x33));
        assert_eq!(color.a(), 0x33);
    }
}
