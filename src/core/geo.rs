//! Geographische Geometrie auf Lon/Lat-Ringen (EPSG:4326).
//!
//! Flächen werden geodätisch auf der Kugel berechnet, damit die Anzeige
//! unabhängig von der Mercator-Verzerrung der Kartenansicht ist.

use glam::DVec2;

/// Mittlerer Erdradius in Metern (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Halber Erdumfang in Web-Mercator-Metern.
pub const MERCATOR_HALF_EXTENT_M: f64 = 20_037_508.342_789_244;

/// Maximale Breite, die Web Mercator noch abbildet.
const MERCATOR_MAX_LAT: f64 = 85.051_128_779_806_6;

/// Achsenparalleles Rechteck in Lon/Lat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: DVec2,
    pub max: DVec2,
}

impl Extent {
    /// Ganze Welt in Lon/Lat (Breite wird bei der Projektion begrenzt).
    pub const WORLD: Self = Self {
        min: DVec2::new(-180.0, -90.0),
        max: DVec2::new(180.0, 90.0),
    };

    /// Berechnet das umschließende Rechteck einer Punktmenge.
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Breite und Höhe in Grad.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

/// Geodätische Fläche eines Rings in Quadratmetern (immer positiv).
///
/// Der Ring darf offen oder geschlossen sein; die Schlusskante wird implizit ergänzt.
pub fn geodesic_ring_area(ring: &[DVec2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    let mut previous = ring[ring.len() - 1];
    for &current in ring {
        area += (current.x - previous.x).to_radians()
            * (2.0 + previous.y.to_radians().sin() + current.y.to_radians().sin());
        previous = current;
    }

    (area * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0).abs()
}

/// Projiziert Lon/Lat nach Web Mercator (EPSG:3857, Meter).
pub fn lonlat_to_mercator(lonlat: DVec2) -> DVec2 {
    let lat = lonlat.y.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT);
    let x = lonlat.x * MERCATOR_HALF_EXTENT_M / 180.0;
    let y = (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0)
        .tan()
        .ln()
        * EARTH_RADIUS_MERCATOR;
    DVec2::new(x, y)
}

/// Inverse Web-Mercator-Projektion (Meter → Lon/Lat).
pub fn mercator_to_lonlat(meters: DVec2) -> DVec2 {
    let lon = meters.x * 180.0 / MERCATOR_HALF_EXTENT_M;
    let lat = (2.0 * (meters.y / EARTH_RADIUS_MERCATOR).exp().atan()
        - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    DVec2::new(lon, lat)
}

/// Kugelradius der Web-Mercator-Projektion (WGS84-Halbachse).
const EARTH_RADIUS_MERCATOR: f64 = 6_378_137.0;

/// Prüft ob ein Ring weniger als drei unterschiedliche Punkte hat.
pub fn is_degenerate_ring(ring: &[DVec2]) -> bool {
    let mut distinct: Vec<DVec2> = Vec::with_capacity(3);
    for point in ring {
        if !distinct.contains(point) {
            distinct.push(*point);
            if distinct.len() > 2 {
                return false;
            }
        }
    }
    true
}

/// Prüft ob ein Punkt innerhalb eines Rings liegt (Ray-Casting, Rand zählt als innen).
pub fn point_in_ring(point: DVec2, ring: &[DVec2]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = ring[ring.len() - 1];

    for &current in ring {
        if point_on_segment(point, previous, current) {
            return true;
        }

        let crosses = (current.y > point.y) != (previous.y > point.y);
        if crosses {
            let x_at_y = (previous.x - current.x) * (point.y - current.y)
                / (previous.y - current.y)
                + current.x;
            if point.x < x_at_y {
                inside = !inside;
            }
        }

        previous = current;
    }

    inside
}

fn point_on_segment(point: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    if ab.perp_dot(ap).abs() > 1e-12 {
        return false;
    }
    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}

/// Innenpunkt für Beschriftungen: Mitte des breitesten Abschnitts
/// der horizontalen Scanline durch die Rechteck-Mitte.
///
/// Liegt bei konkaven Freihand-Ringen garantiert im Inneren, anders als der Schwerpunkt.
pub fn interior_point(ring: &[DVec2]) -> Option<DVec2> {
    let extent = Extent::from_points(ring)?;
    let y = extent.center().y;

    let mut crossings = Vec::new();
    let mut previous = ring[ring.len() - 1];
    for &current in ring {
        if (current.y > y) != (previous.y > y) {
            let t = (y - previous.y) / (current.y - previous.y);
            crossings.push(previous.x + t * (current.x - previous.x));
        }
        previous = current;
    }
    crossings.sort_by(f64::total_cmp);

    let widest = crossings
        .chunks_exact(2)
        .max_by(|a, b| (a[1] - a[0]).total_cmp(&(b[1] - b[0])));

    Some(match widest {
        Some(pair) => DVec2::new((pair[0] + pair[1]) / 2.0, y),
        None => extent.center(),
    })
}

/// Nördlichster Punkt des Rings (größte Breite).
pub fn top_vertex(ring: &[DVec2]) -> Option<DVec2> {
    ring.iter().copied().reduce(|a, b| if b.y > a.y { b } else { a })
}

/// Südlichster Punkt des Rings (kleinste Breite).
pub fn bottom_vertex(ring: &[DVec2]) -> Option<DVec2> {
    ring.iter().copied().reduce(|a, b| if b.y < a.y { b } else { a })
}
