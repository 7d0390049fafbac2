//! Kartenansicht (Pan/Zoom) in Web-Mercator-Projektion.

use super::geo::{self, Extent};
use glam::{DVec2, Vec2};

/// Auflösung (Meter pro Pixel) bei Zoom 0 mit 256-Pixel-Kacheln.
pub const RESOLUTION_AT_ZOOM_0: f64 = 156_543.033_928_040_97;

/// Kamera der Karte: Mittelpunkt in Lon/Lat, fraktionaler Zoom, Viewport in Pixeln.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// Kartenmittelpunkt (Lon/Lat)
    pub center: DVec2,
    /// Zoom-Stufe (0 = ganze Welt in einer Kachel)
    pub zoom: f64,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: Vec2,
    zoom_min: f64,
    zoom_max: f64,
}

impl MapView {
    /// Minimaler Zoom ohne Konfiguration.
    pub const ZOOM_MIN: f64 = 1.0;
    /// Maximaler Zoom ohne Konfiguration.
    pub const ZOOM_MAX: f64 = 22.0;

    /// Erstellt eine Ansicht mit Standard-Zoomgrenzen.
    pub fn new(center: DVec2, zoom: f64) -> Self {
        Self::with_limits(center, zoom, Self::ZOOM_MIN, Self::ZOOM_MAX)
    }

    /// Erstellt eine Ansicht mit eigenen Zoomgrenzen.
    pub fn with_limits(center: DVec2, zoom: f64, zoom_min: f64, zoom_max: f64) -> Self {
        let (zoom_min, zoom_max) = (zoom_min.min(zoom_max), zoom_max.max(zoom_min));
        Self {
            center,
            zoom: zoom.clamp(zoom_min, zoom_max),
            viewport_size: Vec2::new(800.0, 600.0),
            zoom_min,
            zoom_max,
        }
    }

    /// Zoom-Wert für das Styling (wird dort auf ganze Stufen gerundet).
    pub fn zoom_level(&self) -> f64 {
        self.zoom
    }

    /// Meter pro Pixel beim aktuellen Zoom.
    pub fn resolution(&self) -> f64 {
        RESOLUTION_AT_ZOOM_0 / 2f64.powf(self.zoom)
    }

    fn half_viewport(&self) -> DVec2 {
        self.viewport_size.as_dvec2() * 0.5
    }

    /// Lon/Lat → Screen-Pixel (Ursprung oben links, y nach unten).
    pub fn lonlat_to_screen(&self, lonlat: DVec2) -> Vec2 {
        let delta = (geo::lonlat_to_mercator(lonlat) - geo::lonlat_to_mercator(self.center))
            / self.resolution();
        let half = self.half_viewport();
        DVec2::new(half.x + delta.x, half.y - delta.y).as_vec2()
    }

    /// Screen-Pixel → Lon/Lat.
    pub fn screen_to_lonlat(&self, screen: Vec2) -> DVec2 {
        let delta = screen.as_dvec2() - self.half_viewport();
        let center = geo::lonlat_to_mercator(self.center);
        let res = self.resolution();
        geo::mercator_to_lonlat(center + DVec2::new(delta.x * res, -delta.y * res))
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Inhalt folgt dem Zeiger).
    pub fn pan_pixels(&mut self, delta: Vec2) {
        let new_center_screen = (self.half_viewport() - delta.as_dvec2()).as_vec2();
        self.center = self.screen_to_lonlat(new_center_screen);
    }

    /// Ändert den Zoom um `delta` Stufen (begrenzt).
    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = (self.zoom + delta).clamp(self.zoom_min, self.zoom_max);
    }

    /// Zoomt so, dass der Punkt unter `focus` (Screen) an derselben Stelle bleibt.
    pub fn zoom_towards(&mut self, delta: f64, focus: Vec2) {
        let anchor = geo::lonlat_to_mercator(self.screen_to_lonlat(focus));
        self.zoom_by(delta);
        let offset = focus.as_dvec2() - self.half_viewport();
        let res = self.resolution();
        let center = anchor - DVec2::new(offset.x * res, -offset.y * res);
        self.center = geo::mercator_to_lonlat(center);
    }

    /// Passt die Ansicht auf ein Rechteck an (mit Rand in Pixeln, Zoom nach oben begrenzt).
    pub fn fit_extent(&mut self, extent: &Extent, padding_px: f32, max_zoom: f64) {
        let min = geo::lonlat_to_mercator(extent.min);
        let max = geo::lonlat_to_mercator(extent.max);
        let size_m = (max - min).abs();
        let available = (self.viewport_size.as_dvec2() - DVec2::splat(2.0 * padding_px as f64))
            .max(DVec2::ONE);

        let res = (size_m.x / available.x).max(size_m.y / available.y);
        let upper = max_zoom.min(self.zoom_max);
        self.zoom = if res > 0.0 {
            (RESOLUTION_AT_ZOOM_0 / res).log2().clamp(self.zoom_min, upper)
        } else {
            upper.max(self.zoom_min)
        };
        self.center = geo::mercator_to_lonlat((min + max) * 0.5);
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_view() -> MapView {
        let mut view = MapView::new(DVec2::new(-26.3, 59.99), 5.0);
        view.viewport_size = Vec2::new(800.0, 600.0);
        view
    }

    #[test]
    fn test_center_maps_to_viewport_middle() {
        let view = test_view();
        let screen = view.lonlat_to_screen(view.center);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_screen_roundtrip() {
        let view = test_view();
        let p = DVec2::new(-25.0, 60.5);
        let back = view.screen_to_lonlat(view.lonlat_to_screen(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
    }

    #[test]
    fn test_north_is_up() {
        let view = test_view();
        let north = view.lonlat_to_screen(view.center + DVec2::new(0.0, 1.0));
        assert!(north.y < 300.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = MapView::with_limits(DVec2::ZERO, 5.0, 2.0, 10.0);
        view.zoom_by(20.0);
        assert_relative_eq!(view.zoom, 10.0);
        view.zoom_by(-20.0);
        assert_relative_eq!(view.zoom, 2.0);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_fixed() {
        let mut view = test_view();
        let focus = Vec2::new(650.0, 120.0);
        let before = view.screen_to_lonlat(focus);
        view.zoom_towards(1.0, focus);
        let after = view.screen_to_lonlat(focus);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-6);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-6);
    }

    #[test]
    fn test_pan_moves_content_with_pointer() {
        let mut view = test_view();
        let p = DVec2::new(-26.0, 60.0);
        let before = view.lonlat_to_screen(p);
        view.pan_pixels(Vec2::new(30.0, -10.0));
        let after = view.lonlat_to_screen(p);
        assert_relative_eq!(after.x - before.x, 30.0, epsilon = 1e-2);
        assert_relative_eq!(after.y - before.y, -10.0, epsilon = 1e-2);
    }

    #[test]
    fn test_fit_extent_respects_max_zoom() {
        let mut view = test_view();
        let tiny = Extent {
            min: DVec2::new(-26.0, 60.0),
            max: DVec2::new(-25.9999, 60.0001),
        };
        view.fit_extent(&tiny, 40.0, 6.0);
        assert_relative_eq!(view.zoom, 6.0);
        assert_relative_eq!(view.center.x, -25.99995, epsilon = 1e-6);
    }

    #[test]
    fn test_fit_extent_contains_extent() {
        let mut view = test_view();
        let extent = Extent {
            min: DVec2::new(-30.0, 55.0),
            max: DVec2::new(-20.0, 62.0),
        };
        view.fit_extent(&extent, 40.0, 22.0);
        let min = view.lonlat_to_screen(extent.min);
        let max = view.lonlat_to_screen(extent.max);
        assert!(min.x >= 39.0 && max.x <= 761.0);
        assert!(max.y >= 39.0 && min.y <= 561.0);
    }
}
