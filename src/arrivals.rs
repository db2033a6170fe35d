//! Arrival records and the selection of the next few buses at a stop.

use serde::Serialize;

/// Fewest buses a query may ask for.
pub const MIN_BUS_COUNT: usize = 1;
/// Most buses a query may ask for.
pub const MAX_BUS_COUNT: usize = 10;

/// One predicted arrival at a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrivalRecord {
    /// Line identifier, e.g. `"25"` or `"N25"`.
    pub route: String,
    /// The bus's own destination, as shown on its blind.
    pub destination: String,
    /// Predicted seconds until the bus reaches the stop.
    pub time_to_station: u64,
}

impl ArrivalRecord {
    pub fn new(route: impl Into<String>, destination: impl Into<String>, time_to_station: u64) -> Self {
        Self {
            route: route.into(),
            destination: destination.into(),
            time_to_station,
        }
    }
}

/// A request for the next `count` buses at `stop_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopQuery {
    pub stop_id: String,
    pub count: usize,
}

impl StopQuery {
    /// Builds a query, clamping `count` into `[MIN_BUS_COUNT, MAX_BUS_COUNT]`.
    pub fn new(stop_id: impl Into<String>, count: usize) -> Self {
        Self {
            stop_id: stop_id.into(),
            count: count.clamp(MIN_BUS_COUNT, MAX_BUS_COUNT),
        }
    }

    /// Builds a query from an optional spoken "count" slot.
    pub fn from_slot(stop_id: impl Into<String>, slot: Option<&str>, default: usize) -> Self {
        Self::new(stop_id, parse_count(slot, default))
    }
}

/// Reads the requested number of buses from a slot value.
///
/// Integers are clamped into `[1, 10]`. Missing, blank or non-numeric values
/// fall back to `default`.
pub fn parse_count(slot: Option<&str>, default: usize) -> usize {
    let Some(raw) = slot.map(str::trim).filter(|s| !s.is_empty()) else {
        return default;
    };
    match raw.parse::<i64>() {
        Ok(n) => {
            let n = n.clamp(MIN_BUS_COUNT as i64, MAX_BUS_COUNT as i64);
            usize::try_from(n).unwrap_or(default)
        }
        Err(_) => default,
    }
}

/// Sorts arrivals soonest first. Ties keep their payload order.
pub fn sort_by_arrival(arrivals: &mut [ArrivalRecord]) {
    arrivals.sort_by_key(|a| a.time_to_station);
}

/// Keeps the first `count` of an already sorted list.
///
/// Returns every record when fewer than `count` are available.
pub fn select_next(mut arrivals: Vec<ArrivalRecord>, count: usize) -> Vec<ArrivalRecord> {
    arrivals.truncate(count);
    arrivals
}
