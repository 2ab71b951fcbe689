use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EstimateError {
    #[error("At least 2 locations required for time calculation, got {0}")]
    NotEnoughLocations(usize),
}
