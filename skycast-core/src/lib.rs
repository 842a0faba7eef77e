//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & API key handling
//! - The forecast provider abstraction and its Visual Crossing implementation
//! - Shared domain models (day/hour records, moon phases, compass directions)
//! - The sky observability scoring heuristic
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod moon;
pub mod provider;
pub mod score;

pub use config::Config;
pub use model::{DayRecord, ForecastRequest, HourRecord, degrees_to_cardinal};
pub use moon::MoonPhase;
pub use provider::{FetchError, ForecastProvider};
pub use provider::visualcrossing::VisualCrossingProvider;
pub use score::sky_observability;
