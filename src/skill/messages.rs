//! Fixed spoken texts.

use crate::error::FetchError;

pub const WELCOME: &str = "I can check buses to school or the station. Which would you like?";

pub const HELP: &str = "I can check buses to school or the station. \
    You can say things like: check school buses, \
    next five buses to the station, or check both directions. \
    What would you like?";

pub const GOODBYE: &str = "Goodbye!";

pub const NOT_RESPONDING: &str = "Sorry, Transport for London isn't responding. Please try again.";
pub const TOO_FREQUENT: &str =
    "I'm checking buses too frequently. Please wait a moment and try again.";
pub const CONFIGURATION_PROBLEM: &str =
    "There's a problem with the bus stop configuration. Please contact support.";
pub const SERVICE_ISSUES: &str =
    "Transport for London is experiencing issues. Please try again later.";
pub const CANT_REACH: &str = "I can't reach the bus information service right now.";
pub const CANT_CONNECT: &str = "I can't connect to the bus information service right now.";
pub const UNEXPECTED_DATA: &str = "I received unexpected data from Transport for London.";

/// Spoken when neither half of the combined query succeeded.
pub const BOTH_FAILED: &str = "Sorry, I can't reach the bus information service right now.";

pub const GENERIC_FAILURE: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Picks the apology for a failed lookup.
pub fn apology_for(err: &FetchError) -> &'static str {
    match err {
        FetchError::Timeout { .. } => NOT_RESPONDING,
        FetchError::Request { status: Some(429), .. } => TOO_FREQUENT,
        FetchError::Request {
            status: Some(400..=499),
            ..
        } => CONFIGURATION_PROBLEM,
        FetchError::Request {
            status: Some(500..=599),
            ..
        } => SERVICE_ISSUES,
        FetchError::Request { status: Some(_), .. } => CANT_REACH,
        FetchError::Request { status: None, .. } => CANT_CONNECT,
        FetchError::UnexpectedData(_) => UNEXPECTED_DATA,
    }
}

/// `"You just triggered SomeIntent. I'm not sure how to handle that."`
pub fn unhandled_intent(name: &str) -> String {
    format!("You just triggered {name}. I'm not sure how to handle that.")
}

/// Lead-in for the combined query when only one side answered.
pub fn partial_result(found_label: &str, missing_label: &str) -> String {
    format!("I found buses to {found_label}, but couldn't check {missing_label}. ")
}
