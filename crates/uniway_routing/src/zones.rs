use rstar::{RTree, primitives::GeomWithData};
use serde::Serialize;

use crate::geopoint::GeoPoint;

pub const RESIDENTIAL_RADIUS_METERS: f64 = 200.0;
pub const CORE_RADIUS_METERS: f64 = 250.0;

// The projected search radius is widened, candidates are then confirmed with
// the haversine distance.
const PROJECTION_SLACK: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    /// Hostel blocks.
    Residential,
    /// Academic buildings, administration, sports and food outlets.
    AcademicCore,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZonePoint {
    pub name: String,
    pub zone: Zone,
    pub point: GeoPoint,
}

impl ZonePoint {
    pub fn new(name: impl Into<String>, zone: Zone, point: GeoPoint) -> Self {
        ZonePoint {
            name: name.into(),
            zone,
            point,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneMembership {
    pub residential: bool,
    pub core: bool,
}

type IndexedZonePoint = GeomWithData<[f64; 2], usize>;

pub struct ZoneIndex {
    points: Vec<ZonePoint>,
    tree: RTree<IndexedZonePoint>,
    reference_lat: f64,
    residential_radius: f64,
    core_radius: f64,
}

impl ZoneIndex {
    pub fn new(points: Vec<ZonePoint>) -> Self {
        ZoneIndex::with_radii(points, RESIDENTIAL_RADIUS_METERS, CORE_RADIUS_METERS)
    }

    pub fn with_radii(points: Vec<ZonePoint>, residential_radius: f64, core_radius: f64) -> Self {
        let reference_lat = if points.is_empty() {
            0.0
        } else {
            points.iter().map(|p| p.point.lat).sum::<f64>() / points.len() as f64
        };

        let tree = RTree::bulk_load(
            points
                .iter()
                .enumerate()
                .map(|(index, p)| IndexedZonePoint::new(p.point.project(reference_lat), index))
                .collect(),
        );

        ZoneIndex {
            points,
            tree,
            reference_lat,
            residential_radius,
            core_radius,
        }
    }

    fn radius(&self, zone: Zone) -> f64 {
        match zone {
            Zone::Residential => self.residential_radius,
            Zone::AcademicCore => self.core_radius,
        }
    }

    /// True when `point` is strictly closer than the zone radius to any
    /// representative point of `zone`.
    pub fn is_within(&self, point: &GeoPoint, zone: Zone) -> bool {
        let radius = self.radius(zone);
        let search_radius = radius * PROJECTION_SLACK + 1.0;

        self.tree
            .locate_within_distance(point.project(self.reference_lat), search_radius.powi(2))
            .any(|candidate| {
                let zone_point = &self.points[candidate.data];
                zone_point.zone == zone && point.haversine_distance(&zone_point.point) < radius
            })
    }

    pub fn classify(&self, point: &GeoPoint) -> ZoneMembership {
        ZoneMembership {
            residential: self.is_within(point, Zone::Residential),
            core: self.is_within(point, Zone::AcademicCore),
        }
    }

    /// One end residential and the other in the academic core, in either order.
    pub fn is_cross_zone(&self, from: &GeoPoint, to: &GeoPoint) -> bool {
        let from = self.classify(from);
        let to = self.classify(to);
        (from.residential && to.core) || (from.core && to.residential)
    }

    pub fn points(&self) -> &[ZonePoint] {
        &self.points
    }
}
