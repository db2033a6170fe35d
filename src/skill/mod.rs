//! Voice skill: maps requests to bus lookups and spoken answers.
//!
//! [`BusSkill`] is generic over [`ArrivalsApi`] so tests can swap the TfL
//! client for a stub. Request routing is a plain `match` over
//! [`SkillRequest`] and [`SkillIntent`].

pub mod messages;
pub mod request;
pub mod response;

pub use request::{Intent, RequestEnvelope, SkillIntent, SkillRequest};
pub use response::SkillResponse;

use tracing::{error, info, instrument, warn};

use crate::arrivals::StopQuery;
use crate::config::{Destination, SkillConfig};
use crate::services::arrivals_api::ArrivalsApi;
use crate::speech::{format_both_directions, format_bus_list};

/// Name of the slot carrying the requested number of buses.
pub const COUNT_SLOT: &str = "count";

pub struct BusSkill<A> {
    api: A,
    config: SkillConfig,
}

impl<A> std::fmt::Debug for BusSkill<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusSkill")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<A: ArrivalsApi> BusSkill<A> {
    pub fn new(api: A, config: SkillConfig) -> Self {
        Self { api, config }
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    /// Handles a raw JSON request envelope.
    ///
    /// A body that cannot be parsed gets the generic apology rather than an
    /// error.
    pub async fn handle_json(&self, body: &str) -> SkillResponse {
        match serde_json::from_str::<RequestEnvelope>(body) {
            Ok(envelope) => self.handle(&envelope.request).await,
            Err(e) => {
                error!(error = %e, "Malformed skill request");
                generic_failure()
            }
        }
    }

    pub async fn handle(&self, request: &SkillRequest) -> SkillResponse {
        match request {
            SkillRequest::LaunchRequest => {
                SkillResponse::speak(messages::WELCOME).ask(messages::WELCOME)
            }
            SkillRequest::IntentRequest { intent } => self.handle_intent(intent).await,
            SkillRequest::SessionEndedRequest => SkillResponse::empty(),
            SkillRequest::Unknown => {
                warn!("Unsupported request type");
                generic_failure()
            }
        }
    }

    async fn handle_intent(&self, intent: &Intent) -> SkillResponse {
        info!(intent = %intent.name, "Handling intent");
        match SkillIntent::from(intent.name.as_str()) {
            SkillIntent::CheckSchoolBuses => SkillResponse::speak(
                self.check_destination(Destination::School, intent.slot_value(COUNT_SLOT))
                    .await,
            ),
            SkillIntent::CheckStationBuses => SkillResponse::speak(
                self.check_destination(Destination::Station, intent.slot_value(COUNT_SLOT))
                    .await,
            ),
            SkillIntent::CheckBoth => SkillResponse::speak(self.check_both().await),
            SkillIntent::Help => SkillResponse::speak(messages::HELP).ask(messages::HELP),
            SkillIntent::CancelOrStop => SkillResponse::speak(messages::GOODBYE),
            SkillIntent::Other(name) => SkillResponse::speak(messages::unhandled_intent(&name)),
        }
    }

    /// Next buses towards one destination, as a sentence.
    ///
    /// `count_slot` is the raw spoken count; see [`crate::arrivals::parse_count`].
    #[instrument(skip(self))]
    pub async fn check_destination(&self, destination: Destination, count_slot: Option<&str>) -> String {
        let stop = self.config.stop(destination);
        let query = StopQuery::from_slot(&stop.stop_id, count_slot, self.config.default_bus_count);

        match self.api.get_next_buses(&query).await {
            Ok(buses) => {
                info!(stop_id = %query.stop_id, count = buses.len(), "Buses found");
                format_bus_list(&buses, &stop.label)
            }
            Err(e) => {
                error!(stop_id = %query.stop_id, error = %e, "Error fetching buses");
                messages::apology_for(&e).to_string()
            }
        }
    }

    /// Next buses in both directions, fetched concurrently.
    ///
    /// If one side fails the other is still reported.
    #[instrument(skip(self))]
    pub async fn check_both(&self) -> String {
        let school = self.config.stop(Destination::School);
        let station = self.config.stop(Destination::Station);
        let count = self.config.combined_bus_count;

        let school_query = StopQuery::new(&school.stop_id, count);
        let station_query = StopQuery::new(&station.stop_id, count);

        let (school_result, station_result) = tokio::join!(
            self.api.get_next_buses(&school_query),
            self.api.get_next_buses(&station_query),
        );

        match (school_result, station_result) {
            (Ok(school_buses), Ok(station_buses)) => format_both_directions(
                &school.label,
                &school_buses,
                &station.label,
                &station_buses,
            ),
            (Err(school_err), Ok(station_buses)) => {
                warn!(stop_id = %school.stop_id, error = %school_err, "Error fetching school buses");
                messages::partial_result(&station.label, &school.label)
                    + &format_bus_list(&station_buses, &station.label)
            }
            (Ok(school_buses), Err(station_err)) => {
                warn!(stop_id = %station.stop_id, error = %station_err, "Error fetching station buses");
                messages::partial_result(&school.label, &station.label)
                    + &format_bus_list(&school_buses, &school.label)
            }
            (Err(school_err), Err(station_err)) => {
                error!(%school_err, %station_err, "Both bus lookups failed");
                messages::BOTH_FAILED.to_string()
            }
        }
    }
}

fn generic_failure() -> SkillResponse {
    SkillResponse::speak(messages::GENERIC_FAILURE).ask(messages::GENERIC_FAILURE)
}
