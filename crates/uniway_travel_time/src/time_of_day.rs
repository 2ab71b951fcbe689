use std::fmt::Display;

use jiff::Zoned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 08:00 to 10:00
    Morning,
    /// 10:00 to 16:00
    Afternoon,
    /// 16:00 to 18:00
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: i8) -> TimeOfDay {
        match hour {
            8..10 => TimeOfDay::Morning,
            10..16 => TimeOfDay::Afternoon,
            16..18 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn of(now: &Zoned) -> TimeOfDay {
        TimeOfDay::from_hour(now.hour())
    }

    pub fn factor(&self) -> f64 {
        match self {
            TimeOfDay::Morning => 1.1,
            TimeOfDay::Afternoon => 1.0,
            TimeOfDay::Evening => 1.15,
            TimeOfDay::Night => 0.9,
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TimeOfDay::Morning => "morning",
                TimeOfDay::Afternoon => "afternoon",
                TimeOfDay::Evening => "evening",
                TimeOfDay::Night => "night",
            }
        )
    }
}
