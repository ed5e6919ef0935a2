//! Query parameters shared by every report.
//!
//! Only fields holding a non-default value are encoded. `user_agent` and
//! `workspace_id` are required by the API and always emitted.

use chrono::NaiveDate;
use url::form_urlencoded;

/// Ordered `(key, value)` pairs ready to be URL-encoded.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Types that encode themselves into a query string.
pub trait QueryParams {
    /// Returns the non-default fields as query pairs, in a stable order.
    fn query_pairs(&self) -> QueryPairs;

    /// Returns the `application/x-www-form-urlencoded` query string.
    fn url_encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

/// Billable filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Billable {
    Yes,
    No,
    Both,
}

impl Billable {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Both => "both",
        }
    }
}

/// How durations are rendered in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayHours {
    Decimal,
    Minutes,
}

impl DisplayHours {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Minutes => "minutes",
        }
    }
}

/// Request parameters used by all of the reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardRequestParameters {
    /// Name of the application or contact email. Required.
    pub user_agent: String,
    /// Workspace the report is generated for. Required.
    pub workspace_id: u64,
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub billable: Option<Billable>,
    pub client_ids: Vec<u64>,
    pub project_ids: Vec<u64>,
    pub user_ids: Vec<u64>,
    pub members_of_group_ids: Vec<u64>,
    pub or_members_of_group_ids: Vec<u64>,
    pub tag_ids: Vec<u64>,
    pub task_ids: Vec<u64>,
    pub time_entry_ids: Vec<u64>,
    /// Matches against time entry descriptions.
    pub description: Option<String>,
    pub without_description: bool,
    pub order_field: Option<String>,
    pub order_desc: bool,
    pub distinct_rates: bool,
    pub rounding: bool,
    pub display_hours: Option<DisplayHours>,
}

impl StandardRequestParameters {
    /// Create parameters holding only the required fields.
    pub fn new(user_agent: impl Into<String>, workspace_id: u64) -> Self {
        Self {
            user_agent: user_agent.into(),
            workspace_id,
            ..Default::default()
        }
    }

    /// Restrict the report to the inclusive `since..=until` date range.
    pub fn with_range(mut self, since: NaiveDate, until: NaiveDate) -> Self {
        self.since = Some(since);
        self.until = Some(until);
        self
    }
}

impl QueryParams for StandardRequestParameters {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![
            ("user_agent", self.user_agent.clone()),
            ("workspace_id", self.workspace_id.to_string()),
        ];

        // Dates are ISO 8601 (YYYY-MM-DD)
        if let Some(since) = self.since {
            pairs.push(("since", since.format("%Y-%m-%d").to_string()));
        }
        if let Some(until) = self.until {
            pairs.push(("until", until.format("%Y-%m-%d").to_string()));
        }
        if let Some(billable) = self.billable {
            pairs.push(("billable", billable.as_str().to_string()));
        }
        push_ids(&mut pairs, "client_ids", &self.client_ids);
        push_ids(&mut pairs, "project_ids", &self.project_ids);
        push_ids(&mut pairs, "user_ids", &self.user_ids);
        push_ids(&mut pairs, "members_of_group_ids", &self.members_of_group_ids);
        push_ids(
            &mut pairs,
            "or_members_of_group_ids",
            &self.or_members_of_group_ids,
        );
        push_ids(&mut pairs, "tag_ids", &self.tag_ids);
        push_ids(&mut pairs, "task_ids", &self.task_ids);
        push_ids(&mut pairs, "time_entry_ids", &self.time_entry_ids);
        push_text(&mut pairs, "description", self.description.as_deref());
        push_flag(
            &mut pairs,
            "without_description",
            self.without_description,
            "true",
        );
        push_text(&mut pairs, "order_field", self.order_field.as_deref());
        push_flag(&mut pairs, "order_desc", self.order_desc, "on");
        push_flag(&mut pairs, "distinct_rates", self.distinct_rates, "on");
        push_flag(&mut pairs, "rounding", self.rounding, "on");
        if let Some(display_hours) = self.display_hours {
            pairs.push(("display_hours", display_hours.as_str().to_string()));
        }

        pairs
    }
}

/// Push a comma-separated id list, skipping empty lists.
pub(crate) fn push_ids(pairs: &mut QueryPairs, key: &'static str, ids: &[u64]) {
    if ids.is_empty() {
        return;
    }
    let joined = ids
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    pairs.push((key, joined));
}

/// Push a text value, skipping `None` and empty strings.
pub(crate) fn push_text(pairs: &mut QueryPairs, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

/// Push `on_value` when the flag is set.
pub(crate) fn push_flag(pairs: &mut QueryPairs, key: &'static str, flag: bool, on_value: &str) {
    if flag {
        pairs.push((key, on_value.to_string()));
    }
}
