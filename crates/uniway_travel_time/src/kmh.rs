use std::ops::Div;

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};
use uniway_routing::meters::Meters;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Kmh(f64);

impl Kmh {
    pub const fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Minutes needed to cover `distance`, unrounded.
    pub fn minutes_for(&self, distance: Meters) -> f64 {
        (distance / *self).as_secs_f64() / 60.0
    }
}

impl Div<Kmh> for Meters {
    type Output = SignedDuration;

    fn div(self, speed: Kmh) -> SignedDuration {
        let seconds = self.value() * 3.6 / speed.value();
        SignedDuration::try_from_secs_f64(seconds).unwrap_or(SignedDuration::MAX)
    }
}
