//! Enterprise-architecture concern categories
//!
//! Declared in importance order; the advisor reports gaps in this order.

use crate::ordinal::Priority;
use serde::Serialize;

/// One enterprise concern with its detection keywords and gap template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnterpriseCategory {
    /// Category label
    pub name: &'static str,
    /// Priority assigned to a gap in this category
    pub priority: Priority,
    /// Keywords that count as addressing the concern
    pub keywords: &'static [&'static str],
    /// Gap description
    pub description: &'static str,
    /// Why the concern matters
    pub rationale: &'static str,
    /// How to address the gap
    pub implementation_guidance: &'static str,
    /// What closing the gap buys
    pub impact_assessment: &'static str,
}

/// The six categories, most important first
pub static ENTERPRISE_CATEGORIES: &[EnterpriseCategory] = &[
    EnterpriseCategory {
        name: "Security",
        priority: Priority::High,
        keywords: &[
            "security",
            "secure*",
            "authenticat*",
            "authoriz*",
            "encrypt*",
            "threat*",
            "vulnerab*",
            "access control",
            "secret*",
            "privacy",
            "tls",
        ],
        description: "Decision does not address security implications",
        rationale: "Security must be architected in, not added after",
        implementation_guidance: "Conduct threat modeling and document the security controls the decision relies on",
        impact_assessment: "Prevents costly security fixes and compliance findings",
    },
    EnterpriseCategory {
        name: "Governance",
        priority: Priority::High,
        keywords: &[
            "governance",
            "approv*",
            "review board",
            "architecture board",
            "policy",
            "policies",
            "accountab*",
            "audit*",
            "compliance",
            "standard*",
        ],
        description: "Governance and approval routing are not described",
        rationale: "Clear governance ensures consistency and accountability",
        implementation_guidance: "Define the approval body, review criteria and escalation paths",
        impact_assessment: "Reduces rework and keeps decisions auditable",
    },
    EnterpriseCategory {
        name: "Strategic Alignment",
        priority: Priority::Medium,
        keywords: &[
            "business",
            "strateg*",
            "roadmap",
            "objective*",
            "goal*",
            "customer*",
            "revenue",
            "mission",
            "value",
        ],
        description: "Decision is not linked to business goals",
        rationale: "Architecture decisions should directly support strategic objectives",
        implementation_guidance: "Map the decision to two or three business drivers and quantify the expected value",
        impact_assessment: "Enables better portfolio management and resource allocation",
    },
    EnterpriseCategory {
        name: "Data Management",
        priority: Priority::Medium,
        keywords: &[
            "data",
            "database*",
            "schema*",
            "storage",
            "retention",
            "backup*",
            "migration*",
            "record*",
        ],
        description: "Data ownership and lifecycle are not addressed",
        rationale: "Consistent data management enables informed decision-making",
        implementation_guidance: "Define data ownership, quality standards, retention and migration rules",
        impact_assessment: "Improves data quality and accessibility",
    },
    EnterpriseCategory {
        name: "Integration",
        priority: Priority::Medium,
        keywords: &[
            "integrat*",
            "api",
            "apis",
            "interface*",
            "contract*",
            "protocol*",
            "message*",
            "event*",
            "queue*",
            "endpoint*",
            "interoperab*",
        ],
        description: "Integration with existing systems is not planned",
        rationale: "Integration considerations prevent silos and data fragmentation",
        implementation_guidance: "Document integration patterns, data flows and API contracts",
        impact_assessment: "Reduces integration cost and time-to-value",
    },
    EnterpriseCategory {
        name: "Scalability",
        priority: Priority::Low,
        keywords: &[
            "scal*",
            "throughput",
            "load",
            "capacity",
            "performance",
            "latency",
            "horizontal*",
            "elastic*",
            "concurren*",
        ],
        description: "Growth and scaling behavior are not considered",
        rationale: "Architecture should support future growth without major rework",
        implementation_guidance: "Define the scaling strategy, capacity plan and performance targets",
        impact_assessment: "Reduces the need to re-architect as usage grows",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_categories_in_priority_order() {
        assert_eq!(ENTERPRISE_CATEGORIES.len(), 6);
        let ranks: Vec<_> = ENTERPRISE_CATEGORIES.iter().map(|c| c.priority).collect();
        let mut sorted = ranks.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn security_and_governance_outrank_scalability() {
        let find = |n: &str| ENTERPRISE_CATEGORIES.iter().find(|c| c.name == n).unwrap();
        assert!(find("Security").priority > find("Scalability").priority);
        assert!(find("Governance").priority > find("Scalability").priority);
    }
}
