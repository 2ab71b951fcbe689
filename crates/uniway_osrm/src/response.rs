use serde::Deserialize;

use crate::{client::OsrmError, foot_router::ExternalRoute, instructions::step_instruction};

#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    pub code: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Meters
    pub distance: f64,

    /// Seconds
    pub duration: f64,

    #[serde(default)]
    pub geometry: Option<OsrmGeometry>,

    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

/// GeoJSON line string, `[lng, lat]` pairs.
#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmLeg {
    #[serde(default)]
    pub steps: Vec<OsrmStep>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmStep {
    #[serde(default)]
    pub name: String,

    pub maneuver: OsrmManeuver,
}

#[derive(Debug, Deserialize)]
pub struct OsrmManeuver {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub modifier: Option<String>,
}

impl OsrmRoute {
    pub fn into_external_route(self) -> ExternalRoute {
        let last_leg = self.legs.len().saturating_sub(1);
        let instructions = self
            .legs
            .iter()
            .enumerate()
            .flat_map(|(i, leg)| {
                leg.steps
                    .iter()
                    .map(move |step| step_instruction(step, i == last_leg))
            })
            .collect();

        let coordinates = self
            .geometry
            .map(|geometry| {
                geometry
                    .coordinates
                    .into_iter()
                    .map(|[lng, lat]| geo_types::Point::new(lng, lat))
                    .collect()
            })
            .unwrap_or_default();

        ExternalRoute {
            distance_meters: self.distance,
            duration_seconds: self.duration,
            instructions,
            coordinates,
        }
    }
}

impl RouteResponse {
    /// The shortest of the returned alternatives.
    pub fn into_shortest_route(self) -> Result<ExternalRoute, OsrmError> {
        if self.code != "Ok" {
            return Err(OsrmError::NoRoute(
                self.message.unwrap_or(self.code),
            ));
        }

        self.routes
            .into_iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
            .map(OsrmRoute::into_external_route)
            .ok_or_else(|| OsrmError::NoRoute(String::from("Response contained no routes")))
    }
}

pub fn parse_route_response(body: &str) -> Result<ExternalRoute, OsrmError> {
    let response: RouteResponse = serde_json::from_str(body)?;
    response.into_shortest_route()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ALTERNATIVES: &str = r#"{
        "code": "Ok",
        "routes": [
            {
                "distance": 812.4,
                "duration": 584.9,
                "geometry": { "type": "LineString", "coordinates": [[75.5654, 26.8429], [75.5634, 26.8416]] },
                "legs": [{ "steps": [
                    { "name": "", "distance": 812.4, "maneuver": { "type": "depart", "modifier": "left" } },
                    { "name": "", "distance": 0.0, "maneuver": { "type": "arrive" } }
                ]}]
            },
            {
                "distance": 640.0,
                "duration": 460.8,
                "geometry": { "type": "LineString", "coordinates": [[75.5654, 26.8429], [75.5641, 26.8420], [75.5634, 26.8416]] },
                "legs": [{ "steps": [
                    { "name": "Campus Road", "distance": 300.0, "maneuver": { "type": "depart", "modifier": "right" } },
                    { "name": "Hostel Lane", "distance": 340.0, "maneuver": { "type": "turn", "modifier": "left" } },
                    { "name": "", "distance": 0.0, "maneuver": { "type": "arrive" } }
                ]}]
            }
        ],
        "waypoints": []
    }"#;

    #[test]
    fn picks_the_shortest_alternative() {
        let route = parse_route_response(TWO_ALTERNATIVES).unwrap();

        assert_eq!(route.distance_meters, 640.0);
        assert_eq!(route.duration_seconds, 460.8);
        assert_eq!(route.coordinates.len(), 3);
        assert_eq!(route.coordinates[0], geo_types::Point::new(75.5654, 26.8429));
        assert_eq!(
            route.instructions,
            vec![
                "Head right on Campus Road",
                "Turn left onto Hostel Lane",
                "You have arrived at your destination",
            ]
        );
    }

    #[test]
    fn via_route_arrives_once() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 520.0,
                "duration": 374.4,
                "legs": [
                    { "steps": [
                        { "name": "Hostel Lane", "maneuver": { "type": "depart", "modifier": "left" } },
                        { "name": "", "maneuver": { "type": "arrive" } }
                    ]},
                    { "steps": [
                        { "name": "Library Walk", "maneuver": { "type": "depart", "modifier": "right" } },
                        { "name": "", "maneuver": { "type": "arrive" } }
                    ]}
                ]
            }]
        }"#;

        let route = parse_route_response(body).unwrap();
        assert_eq!(
            route.instructions,
            vec![
                "Head left on Hostel Lane",
                "You have reached the waypoint",
                "Head right on Library Walk",
                "You have arrived at your destination",
            ]
        );
        assert!(route.coordinates.is_empty());
    }

    #[test]
    fn service_error_code() {
        let body = r#"{ "code": "NoRoute", "message": "Impossible route between points" }"#;
        match parse_route_response(body) {
            Err(OsrmError::NoRoute(message)) => {
                assert_eq!(message, "Impossible route between points")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn zero_routes() {
        let body = r#"{ "code": "Ok", "routes": [] }"#;
        assert!(matches!(
            parse_route_response(body),
            Err(OsrmError::NoRoute(_))
        ));
    }

    #[test]
    fn malformed_body() {
        assert!(matches!(
            parse_route_response("<html>bad gateway</html>"),
            Err(OsrmError::Deserialize(_))
        ));
    }
}
