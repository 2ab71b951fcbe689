use tokio::sync::watch;
use tracing::debug;
use uniway_osrm::foot_router::FootRouter;

use crate::{
    location::Location,
    planner::CampusPlanner,
    route_result::RouteResult,
    sequencer::{RouteSequencer, Sequenced},
};

/// `None` values mean the request was answered but no route exists.
pub type RouteUpdates = watch::Receiver<Option<Sequenced<Option<RouteResult>>>>;

/// Front door for interactive routing: overlapping requests are allowed and
/// only the answer to the newest one is published.
pub struct RoutingSession<R> {
    planner: CampusPlanner<R>,
    sequencer: RouteSequencer<Option<RouteResult>>,
}

impl<R: FootRouter> RoutingSession<R> {
    pub fn new(planner: CampusPlanner<R>) -> (Self, RouteUpdates) {
        let (sequencer, updates) = RouteSequencer::new();
        (RoutingSession { planner, sequencer }, updates)
    }

    pub fn planner(&self) -> &CampusPlanner<R> {
        &self.planner
    }

    /// Plans a route and publishes it unless a newer request was issued in
    /// the meantime. Returns whether the result was published.
    pub async fn request(&self, from: &Location, to: &Location) -> bool {
        let sequence = self.sequencer.issue();
        debug!(sequence, %from, %to, "Route requested");

        let result = self.planner.plan(from, to).await;
        self.sequencer.publish(sequence, result)
    }
}
