pub mod location;
pub mod planner;
pub mod route_result;
pub mod sequencer;
pub mod session;
