//! toggl_client - HTTP clients for the Toggl Reports and Track APIs.

pub mod client;
pub mod config;
pub mod context;
pub mod error;

pub use client::reports::ReportsClient;
pub use client::track::TrackClient;
pub use client::ClientBuilder;
pub use config::Config;
pub use context::Context;
pub use error::{ClientError, Result, TrackError};
pub use toggl_core::{reports, track, Credentials};
