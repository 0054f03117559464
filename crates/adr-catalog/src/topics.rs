//! The 24-topic standards checklist
//!
//! Topics are listed in checklist order. `importance` ranks them for the
//! priority-improvement list (1 is most important); it is independent of
//! checklist order.

use serde::Serialize;

/// One checklist topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicSpec {
    /// Topic name as reported
    pub name: &'static str,
    /// What the topic requires
    pub description: &'static str,
    /// Section keys that cover the topic
    pub section_terms: &'static [&'static str],
    /// Body phrases that cover the topic without a dedicated section
    pub content_terms: &'static [&'static str],
    /// The document title heading satisfies this topic
    pub title_heading: bool,
    /// Rank for prioritizing missing topics (1 = most important)
    pub importance: u8,
    /// Advice when the topic is missing
    pub recommendation: &'static str,
}

/// Checklist size
pub const TOPIC_COUNT: usize = 24;

/// Number of missing topics surfaced as priority improvements
pub const PRIORITY_IMPROVEMENT_COUNT: usize = 5;

/// Checklist in order
pub static COMPLIANCE_TOPICS: &[TopicSpec] = &[
    TopicSpec {
        name: "Title and Identifier",
        description: "A concise title and a stable identifier for the record",
        section_terms: &["title"],
        content_terms: &[],
        title_heading: true,
        importance: 5,
        recommendation: "Start the record with a level-1 heading such as '# ADR-001: <decision>'",
    },
    TopicSpec {
        name: "Status",
        description: "Current lifecycle state of the decision",
        section_terms: &["status"],
        content_terms: &["accepted", "proposed", "superseded", "deprecated"],
        title_heading: false,
        importance: 4,
        recommendation: "Add a Status section (Proposed, Accepted, Deprecated or Superseded)",
    },
    TopicSpec {
        name: "Context and Background",
        description: "The forces and problem that motivate the decision",
        section_terms: &["context", "background", "problem*", "motivation"],
        content_terms: &["problem statement"],
        title_heading: false,
        importance: 2,
        recommendation: "Describe the problem, the forces at play and why a decision is needed now",
    },
    TopicSpec {
        name: "Decision Statement",
        description: "The decision itself, stated unambiguously",
        section_terms: &["decision", "resolution", "chosen option"],
        content_terms: &["we decided", "we have decided", "decided to", "we will adopt", "we will use"],
        title_heading: false,
        importance: 1,
        recommendation: "State the decision in a dedicated section using active voice",
    },
    TopicSpec {
        name: "Consequences",
        description: "Positive and negative results of the decision",
        section_terms: &["consequence*", "implication*", "impact*"],
        content_terms: &["consequently", "as a consequence"],
        title_heading: false,
        importance: 3,
        recommendation: "List what becomes easier and what becomes harder after the decision",
    },
    TopicSpec {
        name: "Alternatives Considered",
        description: "Options evaluated and why they were not chosen",
        section_terms: &["alternative*", "option*"],
        content_terms: &["alternative*", "considered options"],
        title_heading: false,
        importance: 6,
        recommendation: "Document at least two alternatives with their pros and cons",
    },
    TopicSpec {
        name: "Assumptions",
        description: "Conditions taken as true when deciding",
        section_terms: &["assumption*"],
        content_terms: &["assum*"],
        title_heading: false,
        importance: 14,
        recommendation: "List the assumptions the decision depends on",
    },
    TopicSpec {
        name: "Constraints",
        description: "Technical, organizational or regulatory limits on the solution",
        section_terms: &["constraint*", "limitation*"],
        content_terms: &["constraint*", "must comply", "limited by"],
        title_heading: false,
        importance: 15,
        recommendation: "Record the constraints that shaped the decision",
    },
    TopicSpec {
        name: "Risks and Mitigations",
        description: "Known risks and how they are mitigated",
        section_terms: &["risk*"],
        content_terms: &["risk*", "mitigat*", "threat*"],
        title_heading: false,
        importance: 7,
        recommendation: "Add a Risks section pairing each risk with a mitigation",
    },
    TopicSpec {
        name: "Stakeholders",
        description: "Who decided, who was consulted and who is affected",
        section_terms: &["stakeholder*", "decider*", "owner*"],
        content_terms: &["stakeholder*", "decider*", "product owner"],
        title_heading: false,
        importance: 13,
        recommendation: "Name the deciders and the stakeholders consulted",
    },
    TopicSpec {
        name: "Timeline and Milestones",
        description: "When the decision takes effect and key milestones",
        section_terms: &["timeline", "milestone*", "schedule"],
        content_terms: &["timeline", "milestone*", "schedule*", "deadline*"],
        title_heading: false,
        importance: 20,
        recommendation: "Add a timeline with the milestones for implementing the decision",
    },
    TopicSpec {
        name: "Success Metrics",
        description: "How success of the decision will be measured",
        section_terms: &["metric*", "success criteria", "kpi*"],
        content_terms: &["metric*", "kpi*", "measur*", "success criteria"],
        title_heading: false,
        importance: 21,
        recommendation: "Define measurable success criteria for the decision",
    },
    TopicSpec {
        name: "Dependencies",
        description: "Systems, teams or decisions this one depends on",
        section_terms: &["dependenc*"],
        content_terms: &["depends on", "dependenc*", "prerequisite*"],
        title_heading: false,
        importance: 12,
        recommendation: "List upstream dependencies and related decisions",
    },
    TopicSpec {
        name: "Cost Analysis",
        description: "Build, run and licensing costs",
        section_terms: &["cost*", "budget", "pricing"],
        content_terms: &["cost*", "budget*", "licens*", "pricing"],
        title_heading: false,
        importance: 19,
        recommendation: "Estimate build, operating and licensing costs",
    },
    TopicSpec {
        name: "Security Considerations",
        description: "Security implications and controls",
        section_terms: &["security"],
        content_terms: &["security", "encrypt*", "authenticat*", "authoriz*"],
        title_heading: false,
        importance: 8,
        recommendation: "Describe the security implications and the controls that address them",
    },
    TopicSpec {
        name: "Compliance Requirements",
        description: "Regulatory and policy obligations",
        section_terms: &["compliance", "regulat*"],
        content_terms: &["compliance", "regulat*", "gdpr", "hipaa", "pci", "sox", "audit*"],
        title_heading: false,
        importance: 9,
        recommendation: "Identify the regulations and internal policies the decision must satisfy",
    },
    TopicSpec {
        name: "Scalability Considerations",
        description: "Behavior as load and data grow",
        section_terms: &["scalab*"],
        content_terms: &["scalab*", "scale*", "horizontal*"],
        title_heading: false,
        importance: 17,
        recommendation: "Explain how the solution scales with load and data volume",
    },
    TopicSpec {
        name: "Performance Impact",
        description: "Latency, throughput and resource effects",
        section_terms: &["performance"],
        content_terms: &["performance", "latency", "throughput"],
        title_heading: false,
        importance: 16,
        recommendation: "State the expected latency and throughput impact",
    },
    TopicSpec {
        name: "Maintainability Impact",
        description: "Effect on long-term maintenance effort",
        section_terms: &["maintainab*", "maintenance"],
        content_terms: &["maintainab*", "maintenance", "technical debt"],
        title_heading: false,
        importance: 22,
        recommendation: "Describe how the decision affects long-term maintenance",
    },
    TopicSpec {
        name: "Testing Strategy",
        description: "How the decision will be validated",
        section_terms: &["test*", "validation"],
        content_terms: &["test*", "validat*"],
        title_heading: false,
        importance: 11,
        recommendation: "Describe how the decision will be tested and validated",
    },
    TopicSpec {
        name: "Rollback Plan",
        description: "How to back out if the decision fails",
        section_terms: &["rollback", "fallback", "exit strategy"],
        content_terms: &["rollback", "roll back", "fallback", "revert*"],
        title_heading: false,
        importance: 10,
        recommendation: "Document how to roll back if the decision does not work out",
    },
    TopicSpec {
        name: "Monitoring and Observability",
        description: "Signals that show the decision working in production",
        section_terms: &["monitoring", "observability"],
        content_terms: &["monitor*", "observab*", "alert*", "dashboard*"],
        title_heading: false,
        importance: 18,
        recommendation: "List the metrics, logs and alerts that will track the decision",
    },
    TopicSpec {
        name: "Documentation and Knowledge Transfer",
        description: "Supporting documents and hand-over",
        section_terms: &["documentation", "knowledge transfer", "references"],
        content_terms: &["runbook*", "knowledge transfer", "onboarding", "wiki"],
        title_heading: false,
        importance: 23,
        recommendation: "Link supporting documents and plan knowledge transfer",
    },
    TopicSpec {
        name: "Review and Approval Process",
        description: "Who reviewed and approved the decision",
        section_terms: &["review*", "approval*", "sign-off"],
        content_terms: &["approved by", "reviewed by", "sign-off", "review board"],
        title_heading: false,
        importance: 24,
        recommendation: "Record the reviewers, the approval body and the approval date",
    },
];
