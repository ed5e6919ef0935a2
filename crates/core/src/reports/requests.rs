//! Per-report request parameters.

use super::params::{push_flag, QueryPairs, QueryParams, StandardRequestParameters};
use super::{DETAILED_PATH, SUMMARY_PATH, WEEKLY_PATH};

/// A report request: query parameters bound to a Reports API endpoint.
pub trait ReportRequest: QueryParams {
    /// Endpoint path, relative to the API base URL.
    fn path(&self) -> &'static str;
}

/// Parameters of the detailed report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailedRequestParameters {
    pub standard: StandardRequestParameters,
    /// 1-based page number; 0 leaves it to the API default.
    pub page: u32,
}

impl DetailedRequestParameters {
    pub fn new(standard: StandardRequestParameters) -> Self {
        Self { standard, page: 0 }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

impl QueryParams for DetailedRequestParameters {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = self.standard.query_pairs();
        if self.page != 0 {
            pairs.push(("page", self.page.to_string()));
        }
        pairs
    }
}

impl ReportRequest for DetailedRequestParameters {
    fn path(&self) -> &'static str {
        DETAILED_PATH
    }
}

/// Top-level grouping of the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryGrouping {
    Projects,
    Clients,
    Users,
}

impl SummaryGrouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Clients => "clients",
            Self::Users => "users",
        }
    }
}

/// Second-level grouping of the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySubgrouping {
    TimeEntries,
    Tasks,
    Projects,
    Users,
    Clients,
}

impl SummarySubgrouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TimeEntries => "time_entries",
            Self::Tasks => "tasks",
            Self::Projects => "projects",
            Self::Users => "users",
            Self::Clients => "clients",
        }
    }
}

/// Parameters of the summary report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRequestParameters {
    pub standard: StandardRequestParameters,
    pub grouping: Option<SummaryGrouping>,
    pub subgrouping: Option<SummarySubgrouping>,
    /// Include subgroup ids in the response.
    pub subgrouping_ids: bool,
    /// Include the ids of grouped time entries in the response.
    pub grouped_time_entry_ids: bool,
}

impl SummaryRequestParameters {
    pub fn new(standard: StandardRequestParameters) -> Self {
        Self {
            standard,
            ..Default::default()
        }
    }

    pub fn with_grouping(
        mut self,
        grouping: SummaryGrouping,
        subgrouping: Option<SummarySubgrouping>,
    ) -> Self {
        self.grouping = Some(grouping);
        self.subgrouping = subgrouping;
        self
    }
}

impl QueryParams for SummaryRequestParameters {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = self.standard.query_pairs();
        if let Some(grouping) = self.grouping {
            pairs.push(("grouping", grouping.as_str().to_string()));
        }
        if let Some(subgrouping) = self.subgrouping {
            pairs.push(("subgrouping", subgrouping.as_str().to_string()));
        }
        push_flag(&mut pairs, "subgrouping_ids", self.subgrouping_ids, "true");
        push_flag(
            &mut pairs,
            "grouped_time_entry_ids",
            self.grouped_time_entry_ids,
            "true",
        );
        pairs
    }
}

impl ReportRequest for SummaryRequestParameters {
    fn path(&self) -> &'static str {
        SUMMARY_PATH
    }
}

/// Grouping of the weekly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeeklyGrouping {
    Users,
    Projects,
}

impl WeeklyGrouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Projects => "projects",
        }
    }
}

/// What the weekly report sums up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeeklyCalculate {
    Time,
    Earnings,
}

impl WeeklyCalculate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Earnings => "earnings",
        }
    }
}

/// Parameters of the weekly report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyRequestParameters {
    pub standard: StandardRequestParameters,
    pub grouping: Option<WeeklyGrouping>,
    pub calculate: Option<WeeklyCalculate>,
}

impl WeeklyRequestParameters {
    pub fn new(standard: StandardRequestParameters) -> Self {
        Self {
            standard,
            grouping: None,
            calculate: None,
        }
    }
}

impl QueryParams for WeeklyRequestParameters {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = self.standard.query_pairs();
        if let Some(grouping) = self.grouping {
            pairs.push(("grouping", grouping.as_str().to_string()));
        }
        if let Some(calculate) = self.calculate {
            pairs.push(("calculate", calculate.as_str().to_string()));
        }
        pairs
    }
}

impl ReportRequest for WeeklyRequestParameters {
    fn path(&self) -> &'static str {
        WEEKLY_PATH
    }
}
