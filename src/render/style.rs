//! Style-Engine: Füllung, Kontur und gestapelte Labels eines Shapes.
//!
//! `compute_style` ist eine reine Funktion ihrer Eingaben; das Memoizing
//! übernimmt der `StyleCache`.

use crate::core::{geo, Shape};
use glam::DVec2;

// ── Konstanten ──────────────────────────────────────────────────────

/// Füll-Alpha selektierter Shapes (`#RRGGBBaa`).
pub const FILL_ALPHA_SELECTED: u8 = 0xaa;
/// Füll-Alpha nicht selektierter Shapes (`#RRGGBB33`).
pub const FILL_ALPHA_DEFAULT: u8 = 0x33;
/// Konturbreite selektierter Shapes in Pixeln.
pub const STROKE_WIDTH_SELECTED: f32 = 3.0;
/// Konturbreite nicht selektierter Shapes in Pixeln.
pub const STROKE_WIDTH_DEFAULT: f32 = 2.0;
/// Strich-/Lückenlänge der gestrichelten Kontur in Pixeln.
pub const STROKE_DASH: [f32; 2] = [6.0, 4.0];
/// Label-Textfarbe.
pub const LABEL_FILL: Rgba = Rgba::new(30, 30, 30, 217);
/// Label-Halo.
pub const LABEL_HALO: Rgba = Rgba::new(255, 255, 255, 153);
/// Halo-Breite in Pixeln.
pub const LABEL_HALO_WIDTH: f32 = 2.0;
/// Z-Basis der Labels selektierter Shapes.
pub const LABEL_Z_SELECTED: i32 = 1000;
/// Z-Basis der Labels nicht selektierter Shapes.
pub const LABEL_Z_DEFAULT: i32 = 100;
/// Schwelle, ab der Flächen in km² angezeigt werden.
pub const SQUARE_KM_THRESHOLD_M2: f64 = 1e6;

/// 8-Bit-RGBA-Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parst `#RGB`, `#RRGGBB` oder `#RRGGBBAA` (Groß-/Kleinschreibung egal).
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            3 => {
                let short = |i: usize| {
                    u8::from_str_radix(digits.get(i..i + 1)?, 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self::new(short(0)?, short(1)?, short(2)?, 255))
            }
            6 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Gleiche Farbe mit anderem Alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Kontur eines Shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f32,
    /// `None` = durchgezogen
    pub dash: Option<[f32; 2]>,
}

/// Art eines Labels (bestimmt Reihenfolge, Schriftgewicht und Versatz).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// `#N`
    Number,
    /// Zeilenname
    Name,
    /// Flächenangabe
    Area,
}

impl LabelKind {
    /// Index im Label-Stapel (bestimmt den Z-Versatz).
    fn stack_index(self) -> i32 {
        match self {
            LabelKind::Number => 0,
            LabelKind::Name => 1,
            LabelKind::Area => 2,
        }
    }
}

/// Ein Text-Label am Innenpunkt des Shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub kind: LabelKind,
    pub text: String,
    pub font_px: f32,
    /// CSS-artiges Schriftgewicht (400/500/600)
    pub weight: u16,
    /// Vertikaler Versatz in Pixeln (negativ = nach oben)
    pub offset_y: f32,
    pub z_index: i32,
    pub fill: Rgba,
    pub halo: Rgba,
    pub halo_width: f32,
}

/// Renderfertige Darstellung eines Shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub fill: Rgba,
    pub stroke: StrokeStyle,
    /// Nach `z_index` aufsteigend sortiert
    pub labels: Vec<LabelStyle>,
    /// Innenpunkt (Lon/Lat), an dem die Labels sitzen
    pub label_anchor: Option<DVec2>,
}

/// Ansichtsabhängige Eingaben der Style-Berechnung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParams {
    pub zoom_level: f64,
    pub show_labels: bool,
    pub is_selected: bool,
}

impl StyleParams {
    /// Zoom auf ganze Stufen gerundet (Cache-Schlüssel und Schriftgröße).
    pub fn zoom_bucket(&self) -> i32 {
        if self.zoom_level.is_finite() {
            self.zoom_level.round() as i32
        } else {
            0
        }
    }
}

/// Schriftgrößen-Grenzen und Label-Abstand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelMetrics {
    pub font_min_px: f32,
    pub font_max_px: f32,
    pub spacing_px: f32,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            font_min_px: crate::shared::options::LABEL_FONT_MIN_PX,
            font_max_px: crate::shared::options::LABEL_FONT_MAX_PX,
            spacing_px: crate::shared::options::LABEL_SPACING_PX,
        }
    }
}

impl LabelMetrics {
    /// Basis-Schriftgröße für eine Zoom-Stufe.
    pub fn base_font(&self, zoom_bucket: i32) -> f32 {
        let max = self.font_max_px.max(self.font_min_px);
        (zoom_bucket as f32).clamp(self.font_min_px, max)
    }
}

/// Berechnet die Darstellung eines Shapes.
pub fn compute_style(shape: &Shape, params: &StyleParams, metrics: &LabelMetrics) -> StyleDescriptor {
    let color = Rgba::parse_hex(shape.color()).unwrap_or(Rgba::BLACK);

    let (fill_alpha, width, dash, z_base) = if params.is_selected {
        (FILL_ALPHA_SELECTED, STROKE_WIDTH_SELECTED, None, LABEL_Z_SELECTED)
    } else {
        (
            FILL_ALPHA_DEFAULT,
            STROKE_WIDTH_DEFAULT,
            Some(STROKE_DASH),
            LABEL_Z_DEFAULT,
        )
    };

    let labels = if params.show_labels {
        build_labels(shape, params.zoom_bucket(), metrics, z_base)
    } else {
        Vec::new()
    };

    StyleDescriptor {
        fill: color.with_alpha(fill_alpha),
        stroke: StrokeStyle {
            color,
            width,
            dash,
        },
        labels,
        label_anchor: geo::interior_point(shape.geometry()),
    }
}

fn build_labels(shape: &Shape, zoom_bucket: i32, metrics: &LabelMetrics, z_base: i32) -> Vec<LabelStyle> {
    let base = metrics.base_font(zoom_bucket);
    let spacing = metrics.spacing_px;
    let has_number = shape.drawing_number() > 0;

    let candidates = [
        (
            LabelKind::Number,
            has_number.then(|| format!("#{}", shape.drawing_number())),
            base,
            500,
            0.0,
        ),
        (
            LabelKind::Name,
            (!shape.name().is_empty()).then(|| shape.name().to_string()),
            base + 1.0,
            600,
            if has_number { -spacing } else { 0.0 },
        ),
        (
            LabelKind::Area,
            (!shape.area_label().is_empty()).then(|| shape.area_label().to_string()),
            base,
            400,
            spacing,
        ),
    ];

    candidates
        .into_iter()
        .filter_map(|(kind, text, font_px, weight, offset_y)| {
            text.map(|text| LabelStyle {
                kind,
                text,
                font_px,
                weight,
                offset_y,
                z_index: z_base + kind.stack_index(),
                fill: LABEL_FILL,
                halo: LABEL_HALO,
                halo_width: LABEL_HALO_WIDTH,
            })
        })
        .collect()
}

// ── Flächenformat ───────────────────────────────────────────────────

/// Tausender- und Dezimaltrenner für Flächenangaben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    /// Formatiert eine nicht-negative Zahl mit höchstens `max_decimals` Nachkommastellen.
    /// Nachkommanullen entfallen.
    pub fn format(&self, value: f64, max_decimals: usize) -> String {
        let fixed = format!("{:.*}", max_decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, f.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(self.thousands_separator);
            }
            out.push(digit);
        }
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

/// Formatiert eine Fläche in m²: über 1 km² als km² mit 2 Nachkommastellen,
/// sonst ganzzahlig in m².
pub fn format_area_m2(area_m2: f64, format: &NumberFormat) -> String {
    if area_m2 > SQUARE_KM_THRESHOLD_M2 {
        format!("{} km²", format.format(area_m2 / SQUARE_KM_THRESHOLD_M2, 2))
    } else {
        format!("{} m²", format.format(area_m2, 0))
    }
}

/// Geodätische Fläche eines Lon/Lat-Rings als lesbarer Text.
pub fn format_area(ring: &[DVec2], format: &NumberFormat) -> String {
    format_area_m2(geo::geodesic_ring_area(ring), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeatureStore, ShapeDraft};
    use approx::assert_relative_eq;

    fn store_with_shape(name: &str, color: &str, area_label: &str) -> (FeatureStore, u64) {
        let mut store = FeatureStore::new();
        let uid = store.insert(
            ShapeDraft {
                row_id: 1,
                name: name.into(),
                color: color.into(),
                ring: vec![
                    DVec2::new(0.0, 0.0),
                    DVec2::new(1.0, 0.0),
                    DVec2::new(0.5, 1.0),
                ],
                area_label: area_label.into(),
                density: 50,
            },
            true,
        );
        (store, uid)
    }

    fn params(zoom: f64, show_labels: bool, is_selected: bool) -> StyleParams {
        StyleParams {
            zoom_level: zoom,
            show_labels,
            is_selected,
        }
    }

    #[test]
    fn test_parse_hex_variants() {
        assert_eq!(Rgba::parse_hex("#FF0000"), Some(Rgba::new(255, 0, 0, 255)));
        assert_eq!(Rgba::parse_hex("#0f0"), Some(Rgba::new(0, 255, 0, 255)));
        assert_eq!(
            Rgba::parse_hex("#11223344"),
            Some(Rgba::new(0x11, 0x22, 0x33, 0x44))
        );
        assert_eq!(Rgba::parse_hex("FF0000"), None);
        assert_eq!(Rgba::parse_hex("#GG0000"), None);
    }

    #[test]
    fn test_selected_vs_unselected_appearance() {
        let (store, uid) = store_with_shape("Coral Reef", "#FF0000", "12 m²");
        let shape = store.get(uid).expect("Shape vorhanden");
        let metrics = LabelMetrics::default();

        let selected = compute_style(shape, &params(8.0, true, true), &metrics);
        assert_eq!(selected.fill, Rgba::new(255, 0, 0, 0xaa));
        assert_eq!(selected.stroke.dash, None);
        assert_relative_eq!(selected.stroke.width, 3.0);

        let normal = compute_style(shape, &params(8.0, true, false), &metrics);
        assert_eq!(normal.fill, Rgba::new(255, 0, 0, 0x33));
        assert_eq!(normal.stroke.dash, Some([6.0, 4.0]));
        assert_relative_eq!(normal.stroke.width, 2.0);
    }

    #[test]
    fn test_labels_are_stacked_with_offsets_and_z_order() {
        let (store, uid) = store_with_shape("Coral Reef", "#FF0000", "12 m²");
        let shape = store.get(uid).expect("Shape vorhanden");
        let style = compute_style(shape, &params(5.0, true, false), &LabelMetrics::default());

        let texts: Vec<&str> = style.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["#1", "Coral Reef", "12 m²"]);
        let offsets: Vec<f32> = style.labels.iter().map(|l| l.offset_y).collect();
        assert_eq!(offsets, vec![0.0, -14.0, 14.0]);
        let z: Vec<i32> = style.labels.iter().map(|l| l.z_index).collect();
        assert_eq!(z, vec![100, 101, 102]);
        assert!(style.label_anchor.is_some());
    }

    #[test]
    fn test_font_size_is_clamped() {
        let (store, uid) = store_with_shape("Seagrass", "#00AA00", "");
        let shape = store.get(uid).expect("Shape vorhanden");
        let metrics = LabelMetrics::default();

        let low = compute_style(shape, &params(3.0, true, false), &metrics);
        assert_relative_eq!(low.labels[0].font_px, 11.0);
        assert_relative_eq!(low.labels[1].font_px, 12.0);

        let high = compute_style(shape, &params(40.0, true, true), &metrics);
        assert_relative_eq!(high.labels[0].font_px, 22.0);
        assert_eq!(high.labels.len(), 2, "leeres Flächenlabel entfällt");
        assert_eq!(high.labels[0].z_index, 1000);
    }

    #[test]
    fn test_hidden_labels() {
        let (store, uid) = store_with_shape("Seagrass", "#00AA00", "5 m²");
        let shape = store.get(uid).expect("Shape vorhanden");
        let style = compute_style(shape, &params(12.0, false, false), &LabelMetrics::default());
        assert!(style.labels.is_empty());
    }

    #[test]
    fn test_invalid_color_falls_back_to_black() {
        let (store, uid) = store_with_shape("X", "rot", "");
        let shape = store.get(uid).expect("Shape vorhanden");
        let style = compute_style(shape, &params(5.0, false, false), &LabelMetrics::default());
        assert_eq!(style.stroke.color, Rgba::BLACK);
    }

    #[test]
    fn test_number_format_grouping_and_trimming() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format(12_345.4, 0), "12,345");
        assert_eq!(fmt.format(999.6, 0), "1,000");
        assert_eq!(fmt.format(1.50, 2), "1.5");
        assert_eq!(fmt.format(1234.0, 2), "1,234");

        let de = NumberFormat {
            thousands_separator: '.',
            decimal_separator: ',',
        };
        assert_eq!(de.format(1_234_567.891, 2), "1.234.567,89");
    }

    #[test]
    fn test_format_area_units() {
        let fmt = NumberFormat::default();
        assert_eq!(format_area_m2(12_345.0, &fmt), "12,345 m²");
        assert_eq!(format_area_m2(1_000_000.0, &fmt), "1,000,000 m²");
        assert_eq!(format_area_m2(1_234_567.0, &fmt), "1.23 km²");
        assert_eq!(format_area_m2(2_500_000.0, &fmt), "2.5 km²");
    }

    #[test]
    fn test_format_area_of_ring() {
        // ~100 m × ~100 m am Äquator
        let d = 100.0 / (geo::EARTH_RADIUS_M.to_radians());
        let ring = [
            DVec2::new(0.0, 0.0),
            DVec2::new(d, 0.0),
            DVec2::new(d, d),
            DVec2::new(0.0, d),
        ];
        assert_eq!(format_area(&ring, &NumberFormat::default()), "10,000 m²");
    }
}
