use crate::response::OsrmStep;

/// Renders an OSRM step maneuver as a short English sentence. Only the last
/// leg of a route arrives at the destination, earlier legs end at a waypoint.
pub fn step_instruction(step: &OsrmStep, final_leg: bool) -> String {
    let modifier = step.maneuver.modifier.as_deref();
    let name = (!step.name.is_empty()).then_some(step.name.as_str());

    match step.maneuver.kind.as_str() {
        "depart" => match (modifier, name) {
            (Some(modifier), Some(name)) => format!("Head {modifier} on {name}"),
            (Some(modifier), None) => format!("Head {modifier}"),
            (None, Some(name)) => format!("Start on {name}"),
            (None, None) => String::from("Start walking"),
        },
        "arrive" if final_leg => String::from("You have arrived at your destination"),
        "arrive" => String::from("You have reached the waypoint"),
        "roundabout" | "rotary" => match name {
            Some(name) => format!("Take the roundabout onto {name}"),
            None => String::from("Take the roundabout"),
        },
        "continue" | "new name" => match (modifier, name) {
            (Some("straight") | None, Some(name)) => format!("Continue onto {name}"),
            (Some(modifier), Some(name)) => format!("Continue {modifier} onto {name}"),
            (Some("straight") | None, None) => String::from("Continue straight"),
            (Some(modifier), None) => format!("Continue {modifier}"),
        },
        kind => {
            let action = match modifier {
                Some("straight") => String::from("Go straight"),
                Some("uturn") => String::from("Make a U-turn"),
                Some(modifier) => format!("Turn {modifier}"),
                None if kind == "turn" => String::from("Turn"),
                None => format!("Follow the {kind}"),
            };

            match name {
                Some(name) => format!("{action} onto {name}"),
                None => action,
            }
        }
    }
}
