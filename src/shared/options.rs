//! Zentrale Konfiguration des EcoMap Annotators.
//!
//! `SessionOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::render::{LabelMetrics, NumberFormat};
use serde::{Deserialize, Serialize};

// ── Shapes ──────────────────────────────────────────────────────────

/// Start-Dichte neuer Shapes.
pub const DEFAULT_DENSITY: u8 = 50;
/// Maximale Länge der Beschreibung in Zeichen.
pub const DESCRIPTION_MAX_CHARS: usize = 50;

// ── Popup ───────────────────────────────────────────────────────────

/// Angenommene Popup-Höhe für die Oben/Unten-Entscheidung.
pub const POPUP_HEIGHT_PX: f32 = 140.0;
/// Abstand zwischen Popup-Pfeil und Anker-Vertex.
pub const POPUP_OFFSET_PX: f32 = 8.0;

// ── Touch ───────────────────────────────────────────────────────────

/// Anzeigedauer der Pinch-Warnung in Sekunden.
pub const PINCH_WARNING_SECS: f32 = 5.0;

// ── Styling ─────────────────────────────────────────────────────────

/// Maximale Anzahl Einträge im Style-Cache.
pub const STYLE_CACHE_CAPACITY: usize = 2048;
/// Minimale Label-Schriftgröße.
pub const LABEL_FONT_MIN_PX: f32 = 11.0;
/// Maximale Label-Schriftgröße.
pub const LABEL_FONT_MAX_PX: f32 = 22.0;
/// Vertikaler Abstand gestapelter Labels.
pub const LABEL_SPACING_PX: f32 = 14.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Start-Mittelpunkt der Karte [Lon, Lat].
pub const INITIAL_CENTER: [f64; 2] = [-26.30, 59.99];
/// Start-Zoom.
pub const INITIAL_ZOOM: f64 = 5.0;
/// Minimaler Zoom.
pub const ZOOM_MIN: f64 = 1.0;
/// Maximaler Zoom.
pub const ZOOM_MAX: f64 = 22.0;
/// Zoom-Schritt der Plus/Minus-Buttons.
pub const ZOOM_STEP: f64 = 1.0;
/// Zoom-Schritt pro Mausrad-Raste.
pub const SCROLL_ZOOM_STEP: f64 = 0.25;
/// Rand beim Einpassen eines Shapes.
pub const FIT_PADDING_PX: f32 = 40.0;
/// Maximaler Zoom beim Einpassen eines Shapes.
pub const FIT_MAX_ZOOM: f64 = 6.0;

// ── Benachrichtigungen ──────────────────────────────────────────────

/// Maximale Anzahl wartender Benachrichtigungen.
pub const MAX_NOTIFICATIONS: usize = 20;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Session-Optionen.
/// Wird als `ecomap_annotator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    // ── Shapes ──────────────────────────────────────────────────
    /// Start-Dichte neuer Shapes (1–100)
    pub default_density: u8,
    /// Maximale Länge der Beschreibung
    pub description_max_chars: usize,

    // ── Popup ───────────────────────────────────────────────────
    pub popup_height_px: f32,
    pub popup_offset_px: f32,

    // ── Touch ───────────────────────────────────────────────────
    /// Auto-Hide der Pinch-Warnung in Sekunden
    pub pinch_warning_secs: f32,

    // ── Styling ─────────────────────────────────────────────────
    pub style_cache_capacity: usize,
    pub label_font_min_px: f32,
    pub label_font_max_px: f32,
    pub label_spacing_px: f32,
    /// Labels (Nummer, Name, Fläche) anzeigen
    pub show_labels: bool,
    pub thousands_separator: char,
    pub decimal_separator: char,

    // ── Kamera ──────────────────────────────────────────────────
    /// Start-Mittelpunkt [Lon, Lat]
    pub initial_center: [f64; 2],
    pub initial_zoom: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_step: f64,
    pub scroll_zoom_step: f64,
    pub fit_padding_px: f32,
    pub fit_max_zoom: f64,

    // ── Benachrichtigungen ──────────────────────────────────────
    pub max_notifications: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_density: DEFAULT_DENSITY,
            description_max_chars: DESCRIPTION_MAX_CHARS,

            popup_height_px: POPUP_HEIGHT_PX,
            popup_offset_px: POPUP_OFFSET_PX,

            pinch_warning_secs: PINCH_WARNING_SECS,

            style_cache_capacity: STYLE_CACHE_CAPACITY,
            label_font_min_px: LABEL_FONT_MIN_PX,
            label_font_max_px: LABEL_FONT_MAX_PX,
            label_spacing_px: LABEL_SPACING_PX,
            show_labels: true,
            thousands_separator: ',',
            decimal_separator: '.',

            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            fit_padding_px: FIT_PADDING_PX,
            fit_max_zoom: FIT_MAX_ZOOM,

            max_notifications: MAX_NOTIFICATIONS,
        }
    }
}

impl SessionOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::sibling_of_binary("ecomap_annotator.toml")
    }

    /// Pfad einer Datei im Verzeichnis der Binary (z.B. `catalog.json`).
    pub fn sibling_of_binary(file_name: &str) -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ecomap_annotator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(file_name)
    }

    /// Schriftgrößen und Abstände für die Style-Engine.
    pub fn label_metrics(&self) -> LabelMetrics {
        LabelMetrics {
            font_min_px: self.label_font_min_px,
            font_max_px: self.label_font_max_px,
            spacing_px: self.label_spacing_px,
        }
    }

    /// Trennzeichen für Flächenangaben.
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            thousands_separator: self.thousands_separator,
            decimal_separator: self.decimal_separator,
        }
    }

    /// Dauer der Pinch-Warnung (negative Werte werden zu 0).
    pub fn pinch_warning_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(self.pinch_warning_secs.max(0.0))
    }
}
