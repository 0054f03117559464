//! Keyword lists consumed by the scoring heuristics
//!
//! All terms are lowercase. Matching is word-bounded; a trailing `*` turns a
//! term into a prefix.

/// Words that mark a sentence as carrying rationale
pub static RATIONALE_TERMS: &[&str] = &[
    "because",
    "since",
    "therefore",
    "trade-off*",
    "tradeoff*",
    "due to",
    "rationale",
    "reason*",
    "so that",
    "in order to",
    "thus",
    "hence",
    "justif*",
    "given that",
    "as a result",
];

/// Section keys (besides Decision/Context) whose sentences count toward
/// justification
pub static RATIONALE_SECTION_TERMS: &[&str] = &["rationale", "justification", "driver*"];

/// Ambiguous hedge words that weaken clarity
pub static HEDGE_TERMS: &[&str] = &[
    "maybe",
    "perhaps",
    "possibly",
    "probably",
    "might",
    "somewhat",
    "fairly",
    "various",
    "etc",
    "tbd",
    "and so on",
    "as needed",
    "as appropriate",
    "sort of",
    "kind of",
];

/// Phrases that explicitly point at other sections or records
pub static BACK_REFERENCE_TERMS: &[&str] = &[
    "see section",
    "see above",
    "see below",
    "refer to",
    "as described in",
    "as discussed in",
    "related adr*",
    "supersedes",
    "superseded by",
];

/// Status values; a Status section naming more than one is ambiguous
pub static STATUS_VALUES: &[&str] = &[
    "proposed",
    "accepted",
    "rejected",
    "deprecated",
    "superseded",
    "draft",
    "approved",
    "implemented",
];

/// Keyword pairs that contradict each other when both appear
pub static CONTRADICTORY_PAIRS: &[(&str, &str)] = &[
    ("proposed", "implemented"),
    ("proposed", "superseded"),
    ("draft", "approved"),
    ("deprecated", "recommended"),
];

/// Stock phrases over-represented in machine-generated prose
pub static BOILERPLATE_PHRASES: &[&str] = &[
    "it is important to note that",
    "in conclusion",
    "furthermore",
    "in summary",
    "it should be noted that",
    "the significance of",
    "in light of",
    "as a result",
    "additionally",
    "in this context",
    "the implementation of",
    "positive impacts",
    "negative impacts",
    "various stakeholders",
    "best practices",
    "comprehensive approach",
    "scalable solution",
    "seamless integration",
    "robust architecture",
    "innovative approach",
];

/// Corporate jargon
pub static JARGON_TERMS: &[&str] = &[
    "leverag*",
    "synerg*",
    "paradigm*",
    "ecosystem*",
    "holistic*",
    "seamless*",
    "cutting-edge",
    "best-in-class",
    "world-class",
    "game-changer*",
    "streamlin*",
    "empower*",
    "transformative",
    "next-generation",
    "mission-critical",
    "value-add*",
    "future-proof*",
];

/// Risk vocabulary for the maturity risk dimension
pub static RISK_TERMS: &[&str] = &[
    "risk*",
    "mitigat*",
    "threat*",
    "vulnerab*",
    "failure*",
    "contingenc*",
    "fallback*",
    "downside*",
    "exposure",
];

/// Alternative-analysis vocabulary for the maturity alternatives dimension
pub static ALTERNATIVE_TERMS: &[&str] = &[
    "alternative*",
    "option*",
    "considered",
    "instead",
    "versus",
    "vs",
    "compared",
    "comparison",
    "trade-off*",
    "tradeoff*",
    "pros",
    "cons",
    "rejected",
];

/// Testing vocabulary; absence signals test debt
pub static TEST_TERMS: &[&str] = &[
    "test*",
    "validat*",
    "verif*",
    "qa",
    "quality assurance",
    "acceptance criteria",
];

/// Operational vocabulary; absence signals infrastructure debt
pub static INFRASTRUCTURE_TERMS: &[&str] = &[
    "deploy*",
    "infrastructure",
    "environment*",
    "provision*",
    "kubernetes",
    "container*",
    "cloud",
    "server*",
    "cluster*",
    "pipeline*",
    "ci/cd",
    "terraform",
    "hosting",
    "hosted",
];

/// Ownership vocabulary; absence signals knowledge debt
pub static KNOWLEDGE_TERMS: &[&str] = &[
    "stakeholder*",
    "decider*",
    "owner*",
    "author*",
    "team*",
    "approved by",
    "reviewed by",
    "consulted",
    "architect*",
];

/// Words that admit to shortcuts taken
pub static DEBT_SIGNAL_TERMS: &[&str] = &[
    "workaround*",
    "temporary",
    "tactical",
    "interim",
    "shortcut*",
    "quick fix*",
    "hack*",
    "legacy",
    "tight coupling",
    "tightly coupled",
    "technical debt",
    "tech debt",
    "stopgap",
];
