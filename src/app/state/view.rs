use crate::core::MapView;
use crate::shared::SessionOptions;
use glam::DVec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Kamera der Karte (Pan/Zoom)
    pub map: MapView,
    /// Ob Nummer, Name und Fläche an den Shapes angezeigt werden
    pub show_labels: bool,
}

impl ViewState {
    /// Erstellt den Start-View aus den Optionen.
    pub fn new(options: &SessionOptions) -> Self {
        let [lon, lat] = options.initial_center;
        Self {
            map: MapView::with_limits(
                DVec2::new(lon, lat),
                options.initial_zoom,
                options.zoom_min,
                options.zoom_max,
            ),
            show_labels: options.show_labels,
        }
    }
}
