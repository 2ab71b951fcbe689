use jiff::{SignedDuration, Zoned};
use uniway_routing::meters::Meters;

pub const MISSING_VALUE: &str = "n/a";

pub fn format_time(minutes: f64) -> String {
    if !minutes.is_finite() {
        return MISSING_VALUE.to_string();
    }

    if minutes < 1.0 {
        return String::from("< 1 min");
    }

    if minutes < 60.0 {
        return format!("{} min", minutes.round());
    }

    // Rounding the total first keeps 119.6 at "2h" instead of "1h 60m"
    let total = minutes.round() as u64;
    let (hours, remaining) = (total / 60, total % 60);

    if remaining == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {remaining}m")
    }
}

pub fn format_distance(distance: Meters) -> String {
    let meters = distance.value();

    if meters < 1000.0 {
        format!("{}m", meters.round())
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

/// Clock time after travelling `minutes` from `now`, like `3:07 PM`.
pub fn format_arrival(now: &Zoned, minutes: f64) -> String {
    SignedDuration::try_from_secs_f64(minutes * 60.0)
        .ok()
        .and_then(|duration| now.checked_add(duration).ok())
        .map(|arrival| arrival.strftime("%-I:%M %p").to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}
