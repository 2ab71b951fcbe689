use crate::geopoint::GeoPoint;

/// Degrees added on every side of the covered area.
pub const COVERAGE_MARGIN_DEGREES: f64 = 0.0008;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageBounds {
    min: GeoPoint,
    max: GeoPoint,
}

impl CoverageBounds {
    pub fn extend(&mut self, point: &GeoPoint) {
        self.min.lat = self.min.lat.min(point.lat);
        self.min.lng = self.min.lng.min(point.lng);
        self.max.lat = self.max.lat.max(point.lat);
        self.max.lng = self.max.lng.max(point.lng);
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Self {
        let mut bounds = CoverageBounds::default();
        for point in points {
            bounds.extend(point);
        }
        bounds
    }

    pub fn widened(self, margin_degrees: f64) -> Self {
        if self.is_empty() {
            return self;
        }

        CoverageBounds {
            min: GeoPoint::new(self.min.lat - margin_degrees, self.min.lng - margin_degrees),
            max: GeoPoint::new(self.max.lat + margin_degrees, self.max.lng + margin_degrees),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.lat > self.max.lat || self.min.lng > self.max.lng
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.min.lat
            && point.lat <= self.max.lat
            && point.lng >= self.min.lng
            && point.lng <= self.max.lng
    }

    pub fn min(&self) -> GeoPoint {
        self.min
    }

    pub fn max(&self) -> GeoPoint {
        self.max
    }
}

impl Default for CoverageBounds {
    fn default() -> Self {
        CoverageBounds {
            min: GeoPoint::new(f64::MAX, f64::MAX),
            max: GeoPoint::new(f64::MIN, f64::MIN),
        }
    }
}
