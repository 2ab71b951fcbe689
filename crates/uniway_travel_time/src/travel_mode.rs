use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::kmh::Kmh;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walking,
    Running,
    Cycling,
    Wheelchair,
}

impl TravelMode {
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Walking,
        TravelMode::Running,
        TravelMode::Cycling,
        TravelMode::Wheelchair,
    ];

    pub fn speed(&self) -> Kmh {
        match self {
            TravelMode::Walking => Kmh::new(5.0),
            TravelMode::Running => Kmh::new(12.0),
            TravelMode::Cycling => Kmh::new(15.0),
            TravelMode::Wheelchair => Kmh::new(4.0),
        }
    }

    /// Extra slowdown applied on top of the terrain and time-of-day factors.
    pub fn accessibility_factor(&self) -> f64 {
        match self {
            TravelMode::Wheelchair => 1.2,
            _ => 1.0,
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Walking => "walking",
                TravelMode::Running => "running",
                TravelMode::Cycling => "cycling",
                TravelMode::Wheelchair => "wheelchair",
            }
        )
    }
}
