//! toggl_core - Pure request/response types for the Toggl APIs.
//!
//! Everything in this crate is data and pure functions: parameter structs and
//! their query encoding, error payloads, resource models and endpoint paths.
//! The HTTP side lives in `toggl_client`.

pub mod credentials;
pub mod reports;
pub mod track;

pub use credentials::{Credentials, API_TOKEN_PASSWORD};
