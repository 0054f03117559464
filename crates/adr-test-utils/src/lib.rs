//! Testing utilities for the ADR analyzer workspace
//!
//! Sample records for the reference scenarios, plus helpers that put them on
//! disk for tests that go through file paths.

#![allow(missing_docs)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Scenario A: every mandatory section populated, explicit Alternatives and
/// Risks sections, rationale throughout, YAML frontmatter
pub const COMPLETE_ADR: &str = "---
adr: 12
owner: platform-team
---
# ADR-012: Adopt PostgreSQL for the order service

## Status
Accepted

## Context
The order service stores data in a single MySQL instance that the team inherited in 2019. Write latency during sales peaks exceeds 400 ms and replication lag breaks read-after-write guarantees for customers. We need transactional integrity, JSON columns for flexible order metadata, and a managed offering with point-in-time recovery. See PLAT-341 for the incident history and https://wiki.example.com/orders/latency for the measurements.

## Decision
We will use PostgreSQL 16 on the managed cloud service for the order service because the platform team already operates it for billing, which avoids new on-call runbooks. Orders move with a dual-write migration so that rollback stays possible until the cutover is verified. The schema keeps JSONB metadata since product teams add attributes every sprint.

## Consequences
Write latency should drop below 50 ms at peak, and the billing and order teams share one set of monitoring dashboards. Migration costs roughly three engineer-weeks. Engineers need training on PostgreSQL query plans, and the old MySQL instance is retired after a 30 day rollback window.

## Alternatives Considered
We considered tuning MySQL instead, but replication lag is structural rather than a configuration problem. A document database was another option; compared with PostgreSQL it weakens transactional guarantees across orders and payments.

## Risks
The main risk is data loss during the dual-write phase. We mitigate it with nightly reconciliation jobs and a fallback to MySQL reads. A second risk is a performance regression under sales peaks, mitigated by load testing at twice the expected peak.
";

/// Scenario B: a title heading and one sentence, about twenty words
pub const TITLE_ONLY_ADR: &str = "# Use Redis

We want to put Redis in front of the orders database to make the product pages load much faster.
";

/// Scenario C: uniform sentences dense with stock phrases and jargon
pub const BOILERPLATE_ADR: &str = "Furthermore, the platform will leverage a scalable solution for every team.

Additionally, the design will leverage seamless integration across all services.

In summary, the approach will empower teams with a robust architecture.

It is important to note that synergy drives holistic platform value.

In conclusion, the ecosystem will streamline delivery for all stakeholders.

The implementation of best practices will empower every product team.
";

/// Inputs normalization must reject
pub const EMPTY_INPUTS: &[&str] = &["", "   ", "\n\t\r\n", "\u{feff}", "# \n\n---\n\n**"];

/// All three scenario fixtures
pub fn scenarios() -> [(&'static str, &'static str); 3] {
    [
        ("complete", COMPLETE_ADR),
        ("title-only", TITLE_ONLY_ADR),
        ("boilerplate", BOILERPLATE_ADR),
    ]
}

/// Write `contents` to a temporary file with the given extension
pub fn fixture_file(contents: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("adr-")
        .suffix(&format!(".{extension}"))
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
