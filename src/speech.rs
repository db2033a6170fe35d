//! Speech rendering for arrival predictions.
//!
//! Turns sorted [`ArrivalRecord`]s into the sentences read out by the voice
//! assistant. Everything here is pure; nothing touches the network.

use crate::arrivals::ArrivalRecord;

/// Spoken in the combined query for a direction with no predictions.
pub const NO_BUSES_SOON: &str = "no buses scheduled soon";

/// Converts seconds until arrival into a phrase such as `"in 2 minutes"`.
///
/// Anything under a minute is `"due now"`. From an hour up, the phrase
/// is split into hours and leftover minutes.
pub fn format_time_to_arrival(seconds: u64) -> String {
    if seconds < 60 {
        return "due now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("in {}", plural(minutes, "minute"));
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        format!("in {}", plural(hours, "hour"))
    } else {
        format!("in {} and {}", plural(hours, "hour"), plural(remaining, "minute"))
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// `"Route 25 in 2 minutes to Oxford Circus"`
pub fn format_single_bus(arrival: &ArrivalRecord) -> String {
    format!(
        "Route {} {} to {}",
        arrival.route,
        format_time_to_arrival(arrival.time_to_station),
        arrival.destination
    )
}

/// `"Route 25 in 2 minutes"`, used where the destination is implied.
pub fn format_short_bus(arrival: &ArrivalRecord) -> String {
    format!(
        "Route {} {}",
        arrival.route,
        format_time_to_arrival(arrival.time_to_station)
    )
}

/// Joins spoken items as `"a"`, `"a, and b"` or `"a, b, and c"`.
pub fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// Full sentence for the next buses towards one destination.
///
/// `destination_label` is the name the user asked about ("school",
/// "the station"); each bus still reports its own destination.
pub fn format_bus_list(arrivals: &[ArrivalRecord], destination_label: &str) -> String {
    match arrivals {
        [] => format!("No buses are scheduled to arrive at {destination_label} in the next hour"),
        [only] => format!(
            "The next bus to {destination_label} is {}.",
            format_single_bus(only)
        ),
        _ => {
            let descriptions: Vec<String> = arrivals.iter().map(format_single_bus).collect();
            format!(
                "The next {} buses to {destination_label} are: {}.",
                arrivals.len(),
                join_with_and(&descriptions)
            )
        }
    }
}

/// Two-part sentence covering both directions at once.
///
/// `"To school: Route 25 in 3 minutes. To the station: no buses scheduled soon."`
pub fn format_both_directions(
    first_label: &str,
    first: &[ArrivalRecord],
    second_label: &str,
    second: &[ArrivalRecord],
) -> String {
    format!(
        "To {first_label}: {}. To {second_label}: {}.",
        direction_part(first),
        direction_part(second)
    )
}

fn direction_part(arrivals: &[ArrivalRecord]) -> String {
    if arrivals.is_empty() {
        return NO_BUSES_SOON.to_string();
    }
    let parts: Vec<String> = arrivals.iter().map(format_short_bus).collect();
    join_with_and(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bus(route: &str, destination: &str, secs: u64) -> ArrivalRecord {
        ArrivalRecord::new(route, destination, secs)
    }

    #[test]
    fn test_time_under_a_minute() {
        assert_eq!(format_time_to_arrival(0), "due now");
        assert_eq!(format_time_to_arrival(59), "due now");
    }

    #[test]
    fn test_time_minutes() {
        assert_eq!(format_time_to_arrival(60), "in 1 minute");
        assert_eq!(format_time_to_arrival(119), "in 1 minute");
        assert_eq!(format_time_to_arrival(120), "in 2 minutes");
        assert_eq!(format_time_to_arrival(420), "in 7 minutes");
        assert_eq!(format_time_to_arrival(3599), "in 59 minutes");
    }

    #[test]
    fn test_time_whole_hours() {
        assert_eq!(format_time_to_arrival(3600), "in 1 hour");
        assert_eq!(format_time_to_arrival(3659), "in 1 hour");
        assert_eq!(format_time_to_arrival(7200), "in 2 hours");
    }

    #[test]
    fn test_time_hours_and_minutes() {
        assert_eq!(format_time_to_arrival(3660), "in 1 hour and 1 minute");
        assert_eq!(format_time_to_arrival(3720), "in 1 hour and 2 minutes");
        assert_eq!(format_time_to_arrival(7260), "in 2 hours and 1 minute");
        assert_eq!(format_time_to_arrival(7320), "in 2 hours and 2 minutes");
    }

    #[test]
    fn test_format_single_bus() {
        assert_eq!(
            format_single_bus(&bus("25", "Oxford Circus", 120)),
            "Route 25 in 2 minutes to Oxford Circus"
        );
        assert_eq!(
            format_single_bus(&bus("N73", "Victoria", 30)),
            "Route N73 due now to Victoria"
        );
    }

    #[test]
    fn test_join_with_and() {
        let items = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(join_with_and(&[]), "");
        assert_eq!(join_with_and(&items(&["a"])), "a");
        assert_eq!(join_with_and(&items(&["a", "b"])), "a, and b");
        assert_eq!(join_with_and(&items(&["a", "b", "c", "d"])), "a, b, c, and d");
    }

    #[test]
    fn test_bus_list_empty() {
        assert_eq!(
            format_bus_list(&[], "the station"),
            "No buses are scheduled to arrive at the station in the next hour"
        );
    }

    #[test]
    fn test_bus_list_single() {
        assert_eq!(
            format_bus_list(&[bus("25", "Oxford Circus", 120)], "school"),
            "The next bus to school is Route 25 in 2 minutes to Oxford Circus."
        );
    }

    #[test]
    fn test_bus_list_two() {
        let buses = [bus("25", "Oxford Circus", 120), bus("73", "Victoria", 300)];
        assert_eq!(
            format_bus_list(&buses, "school"),
            "The next 2 buses to school are: Route 25 in 2 minutes to Oxford Circus, \
             and Route 73 in 5 minutes to Victoria."
        );
    }

    #[test]
    fn test_bus_list_three_keeps_each_destination() {
        let buses = [
            bus("25", "Oxford Circus", 120),
            bus("25", "Oxford Circus", 420),
            bus("73", "Victoria", 720),
        ];
        assert_eq!(
            format_bus_list(&buses, "school"),
            "The next 3 buses to school are: Route 25 in 2 minutes to Oxford Circus, \
             Route 25 in 7 minutes to Oxford Circus, and Route 73 in 12 minutes to Victoria."
        );
    }

    #[test]
    fn test_both_directions_with_buses() {
        let school = [bus("25", "Oxford Circus", 180), bus("25", "Oxford Circus", 420)];
        let station = [bus("73", "Victoria", 120), bus("388", "Elephant and Castle", 540)];
        assert_eq!(
            format_both_directions("school", &school, "the station", &station),
            "To school: Route 25 in 3 minutes, and Route 25 in 7 minutes. \
             To the station: Route 73 in 2 minutes, and Route 388 in 9 minutes."
        );
    }

    #[test]
    fn test_both_directions_empty_school() {
        let station = [bus("73", "Victoria", 120)];
        assert_eq!(
            format_both_directions("school", &[], "the station", &station),
            "To school: no buses scheduled soon. To the station: Route 73 in 2 minutes."
        );
    }

    #[test]
    fn test_both_directions_all_empty() {
        assert_eq!(
            format_both_directions("school", &[], "the station", &[]),
            "To school: no buses scheduled soon. To the station: no buses scheduled soon."
        );
    }

    #[test]
    fn test_both_directions_custom_labels() {
        let work = [bus("38", "Clapton Pond", 60)];
        assert_eq!(
            format_both_directions("work", &work, "the gym", &[]),
            "To work: Route 38 in 1 minute. To the gym: no buses scheduled soon."
        );
    }

    proptest! {
        #[test]
        fn prop_under_a_minute_is_due_now(s in 0u64..60) {
            prop_assert_eq!(format_time_to_arrival(s), "due now");
        }

        #[test]
        fn prop_empty_list_names_label(label in "[a-zA-Z ]{1,30}") {
            let sentence = format_bus_list(&[], &label);
            prop_assert!(sentence.contains(&label));
        }

        #[test]
        fn prop_single_and_per_list(count in 2usize..10) {
            let buses: Vec<_> = (0..count).map(|i| bus("25", "Ilford", 60 * i as u64)).collect();
            let sentence = format_bus_list(&buses, "school");
            prop_assert_eq!(sentence.matches(" and ").count(), 1);
            prop_assert!(sentence.contains(", and Route"));
        }
    }
}
