//! Trait for looking up live arrival predictions at a stop.

use std::time::Duration;

use crate::arrivals::{ArrivalRecord, StopQuery, select_next};
use crate::error::FetchError;

/// Abstraction over a live arrivals provider (e.g., the TfL Unified API).
#[async_trait::async_trait]
pub trait ArrivalsApi: Send + Sync {
    /// Returns every predicted arrival at `stop_id`, soonest first.
    ///
    /// `timeout` overrides the provider's default deadline.
    async fn get_arrivals(
        &self,
        stop_id: &str,
        timeout: Option<Duration>,
    ) -> Result<Vec<ArrivalRecord>, FetchError>;

    /// Returns at most `query.count` of the soonest arrivals.
    async fn get_next_buses(&self, query: &StopQuery) -> Result<Vec<ArrivalRecord>, FetchError> {
        let arrivals = self.get_arrivals(&query.stop_id, None).await?;
        Ok(select_next(arrivals, query.count))
    }
}
