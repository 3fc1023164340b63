//! Test fixtures and report builders for integration testing

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use waitline::types::{LineCategory, LineReading, Report};
use waitline::utils::generate_report_id;

/// Fixed evaluation instant so tests never depend on the wall clock
pub fn evaluation_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 23, 15, 0).unwrap()
}

/// Builder for wait reports
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    /// Fresh report with a minute reading and no votes
    pub fn minutes(minutes: i32) -> Self {
        Self {
            report: Report {
                id: generate_report_id(),
                venue_id: "test-venue".to_string(),
                reading: LineReading::Minutes {
                    minutes,
                    category: None,
                },
                timestamp: evaluation_time(),
                upvotes: 0,
                downvotes: 0,
                submitter_reliability: None,
            },
        }
    }

    /// Fresh report carrying only a category
    pub fn category(category: LineCategory) -> Self {
        let mut builder = Self::minutes(0);
        builder.report.reading = LineReading::Category { category };
        builder
    }

    pub fn venue(mut self, venue_id: &str) -> Self {
        self.report.venue_id = venue_id.to_string();
        self
    }

    pub fn aged(mut self, age: Duration) -> Self {
        self.report.timestamp = evaluation_time() - age;
        self
    }

    pub fn votes(mut self, upvotes: u32, downvotes: u32) -> Self {
        self.report.upvotes = upvotes;
        self.report.downvotes = downvotes;
        self
    }

    pub fn reliability(mut self, reliability: f64) -> Self {
        self.report.submitter_reliability = Some(reliability);
        self
    }

    pub fn build(self) -> Report {
        self.report
    }
}
