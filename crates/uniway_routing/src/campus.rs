//! Built-in dataset for the Manipal University Jaipur campus.

use crate::{
    category::Category,
    error::GraphBuildError,
    geopoint::GeoPoint,
    graph::{DEFAULT_PROXIMITY_THRESHOLD, Graph, Node},
    network::CampusNetwork,
    zones::{Zone, ZoneIndex, ZonePoint},
};

/// The underpass connecting the hostel blocks to the academic core.
pub const SUBWAY_NODE_ID: &str = "subway";

const CAMPUS_NODES: &[(&str, &str, f64, f64)] = &[
    ("main", "Main Building", 26.8429, 75.5654),
    ("library", "Library", 26.8433, 75.5659),
    ("auditorium", "Auditorium", 26.8425, 75.5648),
    ("cse", "Computer Science Block", 26.8436, 75.5651),
    ("mech", "Mechanical Block", 26.8438, 75.5646),
    ("civil", "Civil Block", 26.8430, 75.5642),
    ("admin", "Admin Office", 26.8427, 75.5650),
    ("hA_boys", "Boys Hostel A", 26.8440, 75.5670),
    ("hB_boys", "Boys Hostel B", 26.8443, 75.5665),
    ("hA_girls", "Girls Hostel A", 26.8420, 75.5672),
    ("hB_girls", "Girls Hostel B", 26.8417, 75.5667),
    ("foodcourt", "Food Court", 26.8432, 75.5662),
    ("cafeteria", "Cafeteria", 26.8422, 75.5658),
    ("sports", "Sports Complex", 26.8419, 75.5649),
    ("cricket", "Cricket Ground", 26.8414, 75.5661),
    ("football", "Football Ground", 26.8409, 75.5656),
    (SUBWAY_NODE_ID, "Subway", 26.841583, 75.563417),
];

const CAMPUS_EDGES: &[(&str, &str)] = &[
    // Core grid
    ("main", "library"),
    ("main", "auditorium"),
    ("main", "admin"),
    ("library", "cse"),
    ("cse", "mech"),
    ("mech", "civil"),
    ("civil", "auditorium"),
    ("admin", "library"),
    ("admin", "cafeteria"),
    // Sports area
    ("auditorium", "sports"),
    ("sports", "football"),
    ("sports", "civil"),
    // Food
    ("library", "foodcourt"),
    ("foodcourt", "cafeteria"),
    // Hostel spines
    ("hA_boys", "foodcourt"),
    ("hB_boys", "foodcourt"),
    ("hA_girls", "cafeteria"),
    ("hB_girls", "cafeteria"),
    // Cricket ground towards hostels
    ("cricket", "foodcourt"),
    ("cricket", "hB_girls"),
    // Subway connectors
    ("civil", SUBWAY_NODE_ID),
    ("sports", SUBWAY_NODE_ID),
    (SUBWAY_NODE_ID, "football"),
];

const RESIDENTIAL_POINTS: &[(&str, f64, f64)] = &[
    ("G2 Block (Girls Hostel)", 26.8406751, 75.5627091),
    ("G3 Block (Girls Hostel)", 26.8405018, 75.5629086),
    ("G4 Block (Girls Hostel)", 26.8405206, 75.5622397),
    ("B5 Block (Boys Hostel)", 26.8418084, 75.5619673),
    ("B6 Block (Boys Hostel)", 26.8422292, 75.5618891),
];

const CORE_POINTS: &[(&str, f64, f64)] = &[
    ("Central Library", 26.8415259, 75.5651891),
    ("TMA Pai Auditorium", 26.8433006, 75.5665613),
    ("Sharda Pai Auditorium", 26.8433339, 75.5657484),
    ("BABA Food Court", 26.8430271, 75.5630765),
    ("Zanak", 26.8461575, 75.5619849),
];

pub fn campus_nodes() -> Vec<Node> {
    CAMPUS_NODES
        .iter()
        .map(|&(id, label, lat, lng)| Node::new(id, GeoPoint::new(lat, lng)).with_label(label))
        .collect()
}

pub fn campus_graph() -> Result<Graph, GraphBuildError> {
    Graph::from_edges(campus_nodes(), CAMPUS_EDGES)
}

pub fn campus_zone_points() -> Vec<ZonePoint> {
    let residential = RESIDENTIAL_POINTS
        .iter()
        .map(|&(name, lat, lng)| ZonePoint::new(name, Zone::Residential, GeoPoint::new(lat, lng)));
    let core = CORE_POINTS
        .iter()
        .map(|&(name, lat, lng)| ZonePoint::new(name, Zone::AcademicCore, GeoPoint::new(lat, lng)));

    residential.chain(core).collect()
}

/// The routing network used for all campus routing decisions.
pub fn campus_network() -> Result<CampusNetwork, GraphBuildError> {
    CampusNetwork::new(
        campus_graph()?,
        ZoneIndex::new(campus_zone_points()),
        SUBWAY_NODE_ID,
    )
}

#[derive(Debug, Clone)]
pub struct SchematicLocation {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub x: f64,
    pub y: f64,
}

const fn schematic(
    id: &'static str,
    name: &'static str,
    category: Category,
    x: f64,
    y: f64,
) -> SchematicLocation {
    SchematicLocation {
        id,
        name,
        category,
        x,
        y,
    }
}

/// Locations of the schematic campus map, in percent of the map size.
pub const SCHEMATIC_LOCATIONS: &[SchematicLocation] = &[
    schematic("1", "Academic Block 1", Category::Academic, 25.0, 30.0),
    schematic("2", "Central Library", Category::Academic, 45.0, 35.0),
    schematic("3", "Food Court", Category::Dining, 35.0, 50.0),
    schematic("4", "Hostel A", Category::Hostels, 20.0, 70.0),
    schematic("5", "Hostel B", Category::Hostels, 15.0, 75.0),
    schematic("6", "Sports Complex", Category::Recreation, 70.0, 25.0),
    schematic("7", "Medical Center", Category::Medical, 60.0, 40.0),
    schematic("8", "Admin Office", Category::Admin, 50.0, 20.0),
    schematic("9", "Canteen", Category::Dining, 30.0, 60.0),
    schematic("10", "Gym", Category::Recreation, 75.0, 30.0),
    schematic("11", "B1", Category::Academic, 10.0, 15.0),
    schematic("12", "B2", Category::Academic, 5.0, 10.0),
    schematic("13", "B3", Category::Academic, 3.0, 10.0),
    schematic("14", "B4", Category::Academic, 4.0, 10.0),
    schematic("15", "B5", Category::Academic, 5.0, 10.0),
    schematic("16", "B6", Category::Academic, 6.0, 10.0),
    schematic("17", "B7", Category::Academic, 7.0, 10.0),
    schematic("18", "B8", Category::Academic, 8.0, 10.0),
    schematic("19", "G1", Category::Academic, 9.0, 10.0),
    schematic("20", "G2", Category::Academic, 10.0, 10.0),
    schematic("21", "G3", Category::Academic, 11.0, 10.0),
    schematic("22", "G4", Category::Academic, 12.0, 10.0),
    schematic("23", "G5", Category::Academic, 13.0, 10.0),
    schematic("24", "Cricket Ground", Category::Recreation, 14.0, 10.0),
];

/// Proximity graph of the schematic map. Only meant for drawing; routing
/// always goes through [`campus_network`].
pub fn schematic_graph() -> Result<Graph, GraphBuildError> {
    let nodes = SCHEMATIC_LOCATIONS
        .iter()
        .map(|location| Node::planar(location.id, location.x, location.y).with_label(location.name))
        .collect();

    Graph::from_proximity(nodes, DEFAULT_PROXIMITY_THRESHOLD)
}
