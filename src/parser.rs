//! JSON parser for StopPoint arrival predictions.

use serde::Deserialize;

use crate::arrivals::{ArrivalRecord, sort_by_arrival};
use crate::error::FetchError;

const UNKNOWN: &str = "Unknown";

/// The subset of a TfL `Prediction` object the skill reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArrival {
    line_name: Option<String>,
    destination_name: Option<String>,
    time_to_station: Option<i64>,
}

impl From<RawArrival> for ArrivalRecord {
    fn from(raw: RawArrival) -> Self {
        // Predictions occasionally go negative once a bus has left.
        let time_to_station = raw
            .time_to_station
            .map_or(0, |t| u64::try_from(t).unwrap_or(0));

        ArrivalRecord {
            route: raw.line_name.unwrap_or_else(|| UNKNOWN.to_string()),
            destination: raw.destination_name.unwrap_or_else(|| UNKNOWN.to_string()),
            time_to_station,
        }
    }
}

/// Decodes an arrivals payload into records sorted soonest first.
///
/// # Errors
///
/// Returns [`FetchError::UnexpectedData`] if the bytes are not a JSON array of
/// prediction objects.
pub fn parse_arrivals(bytes: &[u8]) -> Result<Vec<ArrivalRecord>, FetchError> {
    let raw: Vec<RawArrival> =
        serde_json::from_slice(bytes).map_err(|e| FetchError::UnexpectedData(e.to_string()))?;

    let mut arrivals: Vec<ArrivalRecord> = raw.into_iter().map(ArrivalRecord::from).collect();
    sort_by_arrival(&mut arrivals);
    Ok(arrivals)
}
