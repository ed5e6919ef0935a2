//! Reports API v2 request parameters and error payloads.
//!
//! The three reports share [`StandardRequestParameters`]; each report type adds
//! its own fields and knows which endpoint it targets through [`ReportRequest`].
//! Response bodies are not modelled here: callers decode them into their own
//! types.

mod error;
mod params;
mod requests;

pub use error::ReportsError;
pub use params::{Billable, DisplayHours, QueryPairs, QueryParams, StandardRequestParameters};
pub use requests::{
    DetailedRequestParameters, ReportRequest, SummaryGrouping, SummaryRequestParameters,
    SummarySubgrouping, WeeklyCalculate, WeeklyGrouping, WeeklyRequestParameters,
};

/// Default base URL of the Reports API.
pub const DEFAULT_BASE_URL: &str = "https://toggl.com";

pub const DETAILED_PATH: &str = "/reports/api/v2/details";
pub const SUMMARY_PATH: &str = "/reports/api/v2/summary";
pub const WEEKLY_PATH: &str = "/reports/api/v2/weekly";
