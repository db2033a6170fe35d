pub mod arrivals;
pub mod config;
pub mod error;
pub mod fetch;
pub mod infra;
pub mod parser;
pub mod services;
pub mod skill;
pub mod speech;
