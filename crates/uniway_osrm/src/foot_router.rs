use std::future::Future;

use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalRoute {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub instructions: Vec<String>,
    /// `x` is the longitude, `y` the latitude.
    pub coordinates: Vec<geo_types::Point>,
}

/// A routing service that understands the real footpath network.
///
/// Implementations swallow their own failures: any network error, timeout or
/// empty answer is logged and reported as `None`.
pub trait FootRouter {
    fn route(
        &self,
        waypoints: &[geo_types::Point],
    ) -> impl Future<Output = Option<ExternalRoute>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparedRoute {
    pub route: ExternalRoute,
    pub via_waypoint: bool,
}

/// Routes `start -> end`, and when `via` is given also `start -> via -> end`
/// concurrently, keeping the via route only if it is strictly shorter. A
/// failed request counts as infinitely long.
pub async fn route_direct_or_via<R: FootRouter>(
    router: &R,
    start: geo_types::Point,
    via: Option<geo_types::Point>,
    end: geo_types::Point,
) -> Option<ComparedRoute> {
    let Some(via) = via else {
        return router.route(&[start, end]).await.map(|route| ComparedRoute {
            route,
            via_waypoint: false,
        });
    };

    let direct_waypoints = [start, end];
    let via_waypoints = [start, via, end];
    let (direct, via_route) = tokio::join!(
        router.route(&direct_waypoints),
        router.route(&via_waypoints)
    );

    let direct_distance = direct.as_ref().map_or(f64::INFINITY, |r| r.distance_meters);
    let via_distance = via_route
        .as_ref()
        .map_or(f64::INFINITY, |r| r.distance_meters);

    debug!(direct_distance, via_distance, "Compared external routes");

    match (direct, via_route) {
        (_, Some(route)) if via_distance < direct_distance => Some(ComparedRoute {
            route,
            via_waypoint: true,
        }),
        (Some(route), _) => Some(ComparedRoute {
            route,
            via_waypoint: false,
        }),
        (None, via_route) => via_route.map(|route| ComparedRoute {
            route,
            via_waypoint: true,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Answers with a fixed distance per number of waypoints.
    struct FixedRouter {
        direct: Option<f64>,
        via: Option<f64>,
        requests: Mutex<Vec<usize>>,
    }

    impl FixedRouter {
        fn new(direct: Option<f64>, via: Option<f64>) -> Self {
            FixedRouter {
                direct,
                via,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl FootRouter for FixedRouter {
        async fn route(&self, waypoints: &[geo_types::Point]) -> Option<ExternalRoute> {
            self.requests.lock().unwrap().push(waypoints.len());
            let distance = if waypoints.len() == 2 {
                self.direct
            } else {
                self.via
            }?;

            Some(ExternalRoute {
                distance_meters: distance,
                duration_seconds: distance / 1.3,
                instructions: vec![format!("{} waypoints", waypoints.len())],
                coordinates: waypoints.to_vec(),
            })
        }
    }

    fn points() -> (geo_types::Point, geo_types::Point, geo_types::Point) {
        (
            geo_types::Point::new(75.5620, 26.8418),
            geo_types::Point::new(75.563417, 26.841583),
            geo_types::Point::new(75.5652, 26.8415),
        )
    }

    #[tokio::test]
    async fn without_via_only_direct_is_requested() {
        let router = FixedRouter::new(Some(500.0), Some(100.0));
        let (start, _, end) = points();

        let result = route_direct_or_via(&router, start, None, end).await.unwrap();

        assert!(!result.via_waypoint);
        assert_eq!(*router.requests.lock().unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn via_wins_when_strictly_shorter() {
        let router = FixedRouter::new(Some(500.0), Some(420.0));
        let (start, via, end) = points();

        let result = route_direct_or_via(&router, start, Some(via), end)
            .await
            .unwrap();

        assert!(result.via_waypoint);
        assert_eq!(result.route.distance_meters, 420.0);
        assert_eq!(result.route.coordinates, vec![start, via, end]);
    }

    #[tokio::test]
    async fn ties_resolve_to_direct() {
        let router = FixedRouter::new(Some(500.0), Some(500.0));
        let (start, via, end) = points();

        let result = route_direct_or_via(&router, start, Some(via), end)
            .await
            .unwrap();
        assert!(!result.via_waypoint);
    }

    #[tokio::test]
    async fn failed_side_counts_as_infinite() {
        let (start, via, end) = points();

        let only_via = FixedRouter::new(None, Some(900.0));
        let result = route_direct_or_via(&only_via, start, Some(via), end)
            .await
            .unwrap();
        assert!(result.via_waypoint);

        let only_direct = FixedRouter::new(Some(900.0), None);
        let result = route_direct_or_via(&only_direct, start, Some(via), end)
            .await
            .unwrap();
        assert!(!result.via_waypoint);

        let nothing = FixedRouter::new(None, None);
        assert!(
            route_direct_or_via(&nothing, start, Some(via), end)
                .await
                .is_none()
        );
    }
}
