//! Design pattern catalog
//!
//! Each pattern carries one or more [`MatchRule`]s. A rule holds when every
//! one of its term groups has at least one hit; a pattern applies when any of
//! its rules holds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternCategory {
    /// Overall system shape
    Architectural,
    /// Communication between components
    Integration,
    /// Storage and state
    Data,
    /// Failure handling
    Resilience,
    /// Protection of assets
    Security,
    /// Growth under load
    Scalability,
}

impl PatternCategory {
    /// All categories in catalog order
    pub const ALL: [Self; 6] = [
        Self::Architectural,
        Self::Integration,
        Self::Data,
        Self::Resilience,
        Self::Security,
        Self::Scalability,
    ];
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Conjunction of synonym groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchRule {
    /// Every group needs at least one term present
    pub all_of: &'static [&'static [&'static str]],
}

/// Catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternSpec {
    /// Pattern name
    pub name: &'static str,
    /// Family
    pub category: PatternCategory,
    /// When the pattern fits
    pub applicability: &'static str,
    /// What it buys
    pub benefits: &'static [&'static str],
    /// What it costs
    pub considerations: &'static [&'static str],
    /// Where to start
    pub implementation_hints: &'static str,
    /// Applicability rules (any)
    pub rules: &'static [MatchRule],
}

/// The catalog, grouped by category in [`PatternCategory::ALL`] order
pub static PATTERNS: &[PatternSpec] = &[
    // Architectural
    PatternSpec {
        name: "Microservices",
        category: PatternCategory::Architectural,
        applicability: "Large systems whose parts must scale and deploy independently",
        benefits: &["Independent scaling", "Technology diversity", "Fault isolation"],
        considerations: &["Distributed system complexity", "Data consistency challenges"],
        implementation_hints: "Establish API contracts, add circuit breakers, automate per-service delivery",
        rules: &[
            MatchRule { all_of: &[&["microservice*"]] },
            MatchRule {
                all_of: &[
                    &["service*"],
                    &["independent deploy*", "independently deploy*", "deployed independently", "deploy independently"],
                ],
            },
        ],
    },
    PatternSpec {
        name: "Layered Architecture",
        category: PatternCategory::Architectural,
        applicability: "Applications with a clear separation between presentation, domain and persistence",
        benefits: &["Clear separation of concerns", "Ease of organization", "Team structure alignment"],
        considerations: &["Tends toward a monolith", "Layer skipping erodes boundaries"],
        implementation_hints: "Enforce layer boundaries, forbid skipping layers, document layer interfaces",
        rules: &[
            MatchRule { all_of: &[&["layered", "n-tier", "three-tier"]] },
            MatchRule {
                all_of: &[&["layer*"], &["presentation", "persistence", "business logic", "domain"]],
            },
        ],
    },
    PatternSpec {
        name: "Event-Driven Architecture",
        category: PatternCategory::Architectural,
        applicability: "Systems that need loose coupling and near-real-time reactions",
        benefits: &["Loose coupling", "Real-time processing", "Independent consumers"],
        considerations: &["Event ordering complexity", "Harder end-to-end testing"],
        implementation_hints: "Use an event broker, make consumers idempotent, version event schemas",
        rules: &[
            MatchRule { all_of: &[&["event-driven", "event driven"]] },
            MatchRule {
                all_of: &[&["event*"], &["publish*", "subscrib*", "consumer*", "producer*", "broker*"]],
            },
        ],
    },
    PatternSpec {
        name: "Hexagonal Architecture",
        category: PatternCategory::Architectural,
        applicability: "Domains that must stay independent of frameworks and infrastructure",
        benefits: &["Testable domain core", "Swappable adapters"],
        considerations: &["More indirection", "Extra mapping code"],
        implementation_hints: "Define ports as interfaces owned by the domain and keep adapters at the edge",
        rules: &[
            MatchRule { all_of: &[&["hexagonal", "ports and adapters", "clean architecture", "onion architecture"]] },
        ],
    },
    PatternSpec {
        name: "Modular Monolith",
        category: PatternCategory::Architectural,
        applicability: "Teams that want module boundaries without distributed deployment",
        benefits: &["Simple operations", "Enforced module boundaries", "Cheap refactoring"],
        considerations: &["Single deployment unit", "Boundaries need tooling to stay honest"],
        implementation_hints: "Give each module a public interface and check dependency rules in CI",
        rules: &[
            MatchRule { all_of: &[&["modular monolith"]] },
            MatchRule { all_of: &[&["monolith*"], &["module*"]] },
        ],
    },
    PatternSpec {
        name: "Serverless",
        category: PatternCategory::Architectural,
        applicability: "Spiky or event-triggered workloads with short-lived executions",
        benefits: &["No server management", "Pay-per-use cost model", "Automatic scaling"],
        considerations: &["Cold starts", "Vendor lock-in", "Execution time limits"],
        implementation_hints: "Keep functions stateless, bound execution time, externalize state",
        rules: &[
            MatchRule { all_of: &[&["serverless", "lambda*", "cloud function*", "azure function*", "faas"]] },
        ],
    },
    // Integration
    PatternSpec {
        name: "API Gateway",
        category: PatternCategory::Integration,
        applicability: "Managing external access to a set of backend services",
        benefits: &["Simplified clients", "Centralized cross-cutting concerns"],
        considerations: &["Single point of failure", "Potential performance bottleneck"],
        implementation_hints: "Implement caching, rate limiting and request routing at the gateway",
        rules: &[
            MatchRule { all_of: &[&["api gateway", "gateway"]] },
            MatchRule { all_of: &[&["api*"], &["rate limit*", "routing", "single entry point"]] },
        ],
    },
    PatternSpec {
        name: "Service Mesh",
        category: PatternCategory::Integration,
        applicability: "Managing service-to-service communication at scale",
        benefits: &["Observability", "Traffic management", "Security policies without code changes"],
        considerations: &["Added operational complexity", "Per-hop latency overhead"],
        implementation_hints: "Use sidecar proxies and roll out mTLS and traffic policies incrementally",
        rules: &[
            MatchRule { all_of: &[&["service mesh", "istio", "linkerd", "sidecar*"]] },
        ],
    },
    PatternSpec {
        name: "Publish-Subscribe Messaging",
        category: PatternCategory::Integration,
        applicability: "Broadcasting changes to multiple independent consumers",
        benefits: &["Decoupled producers and consumers", "Asynchronous processing", "Load leveling"],
        considerations: &["At-least-once delivery semantics", "Message ordering"],
        implementation_hints: "Define topic ownership, use dead-letter queues, document message contracts",
        rules: &[
            MatchRule {
                all_of: &[&["kafka", "rabbitmq", "pub/sub", "pubsub", "message queue*", "message broker*", "sqs", "nats"]],
            },
            MatchRule { all_of: &[&["queue*", "topic*"], &["asynchronous*", "async"]] },
        ],
    },
    PatternSpec {
        name: "Backend for Frontend",
        category: PatternCategory::Integration,
        applicability: "Several client types with diverging data needs",
        benefits: &["Client-tailored APIs", "Independent client evolution"],
        considerations: &["Duplicated logic across backends", "More services to operate"],
        implementation_hints: "Keep BFFs thin and owned by the client team; push shared logic down",
        rules: &[
            MatchRule { all_of: &[&["backend for frontend", "backends for frontends", "bff"]] },
            MatchRule { all_of: &[&["mobile"], &["web"], &["client*"]] },
        ],
    },
    PatternSpec {
        name: "Anti-Corruption Layer",
        category: PatternCategory::Integration,
        applicability: "Integrating with legacy or third-party models you do not control",
        benefits: &["Protects the domain model", "Localizes translation logic"],
        considerations: &["Translation overhead", "Another component to maintain"],
        implementation_hints: "Translate at the boundary and keep foreign types out of the domain",
        rules: &[
            MatchRule { all_of: &[&["anti-corruption", "anticorruption"]] },
            MatchRule { all_of: &[&["legacy", "third-party", "third party", "vendor"], &["integrat*", "adapter*", "translat*"]] },
        ],
    },
    PatternSpec {
        name: "Strangler Fig",
        category: PatternCategory::Integration,
        applicability: "Incrementally replacing a legacy system",
        benefits: &["Incremental, low-risk migration", "Continuous delivery of value"],
        considerations: &["Two systems run in parallel for a while", "Routing complexity"],
        implementation_hints: "Route by capability, migrate one slice at a time, retire old paths promptly",
        rules: &[
            MatchRule { all_of: &[&["strangler*"]] },
            MatchRule { all_of: &[&["legacy"], &["migrat*", "replac*", "incremental*"]] },
        ],
    },
    // Data
    PatternSpec {
        name: "Event Sourcing",
        category: PatternCategory::Data,
        applicability: "Systems requiring audit trails and temporal queries",
        benefits: &["Complete audit trail", "Event replay capability", "Temporal queries"],
        considerations: &["Eventual consistency", "Storage growth", "Schema evolution of events"],
        implementation_hints: "Use append-only logs, take snapshots, build read projections",
        rules: &[
            MatchRule { all_of: &[&["event sourcing", "event-sourced", "event store"]] },
            MatchRule { all_of: &[&["audit*"], &["replay*", "append-only", "history"]] },
        ],
    },
    PatternSpec {
        name: "CQRS",
        category: PatternCategory::Data,
        applicability: "Systems whose read and write workloads differ sharply",
        benefits: &["Independent read/write scaling", "Query flexibility"],
        considerations: &["Eventual consistency", "More moving parts"],
        implementation_hints: "Separate read and write models and feed read models from events",
        rules: &[
            MatchRule { all_of: &[&["cqrs", "command query"]] },
            MatchRule { all_of: &[&["read model*", "read side", "read-heavy", "read heavy"], &["write*"]] },
        ],
    },
    PatternSpec {
        name: "Database per Service",
        category: PatternCategory::Data,
        applicability: "Services that must own and evolve their data independently",
        benefits: &["Loose coupling at the data level", "Independent schema evolution"],
        considerations: &["Cross-service queries", "Distributed transactions"],
        implementation_hints: "Expose data only through service APIs; replicate read data via events",
        rules: &[
            MatchRule { all_of: &[&["database per service", "own database", "own its data", "owns its data"]] },
            MatchRule { all_of: &[&["shared database"], &["service*"]] },
        ],
    },
    PatternSpec {
        name: "Saga",
        category: PatternCategory::Data,
        applicability: "Business transactions spanning several services",
        benefits: &["Consistency without distributed locks", "Explicit compensation logic"],
        considerations: &["Compensation design effort", "Harder debugging"],
        implementation_hints: "Model each step with a compensating action; prefer orchestration for long flows",
        rules: &[
            MatchRule { all_of: &[&["saga*", "compensating transaction*"]] },
            MatchRule { all_of: &[&["distributed transaction*", "two-phase commit", "2pc"]] },
        ],
    },
    PatternSpec {
        name: "Cache-Aside",
        category: PatternCategory::Data,
        applicability: "Read-heavy data that tolerates short staleness",
        benefits: &["Lower read latency", "Reduced database load"],
        considerations: &["Cache invalidation", "Stale reads"],
        implementation_hints: "Set explicit TTLs, invalidate on write, guard against stampedes",
        rules: &[
            MatchRule { all_of: &[&["cache*", "redis", "memcached"]] },
        ],
    },
    PatternSpec {
        name: "Transactional Outbox",
        category: PatternCategory::Data,
        applicability: "Publishing events reliably alongside database writes",
        benefits: &["No lost or phantom events", "Atomic state change and publication"],
        considerations: &["Relay process to operate", "Duplicate delivery handling"],
        implementation_hints: "Write events to an outbox table in the same transaction and relay them asynchronously",
        rules: &[
            MatchRule { all_of: &[&["outbox"]] },
            MatchRule { all_of: &[&["dual write*"]] },
        ],
    },
    // Resilience
    PatternSpec {
        name: "Circuit Breaker",
        category: PatternCategory::Resilience,
        applicability: "Calls to dependencies that can fail or slow down",
        benefits: &["Fail fast", "Prevents resource exhaustion", "Self-healing"],
        considerations: &["State management", "Threshold tuning"],
        implementation_hints: "Define failure thresholds, half-open probing and state-change monitoring",
        rules: &[
            MatchRule { all_of: &[&["circuit breaker*"]] },
            MatchRule { all_of: &[&["cascad*"], &["failure*", "fail*"]] },
        ],
    },
    PatternSpec {
        name: "Bulkhead",
        category: PatternCategory::Resilience,
        applicability: "Isolating critical resources from noisy neighbours",
        benefits: &["Fault isolation", "Resource protection"],
        considerations: &["Resource overhead", "Capacity planning per partition"],
        implementation_hints: "Use separate pools or containers per dependency and monitor saturation",
        rules: &[
            MatchRule { all_of: &[&["bulkhead*"]] },
            MatchRule { all_of: &[&["isolat*"], &["thread pool*", "connection pool*", "resource*"]] },
        ],
    },
    PatternSpec {
        name: "Retry with Backoff",
        category: PatternCategory::Resilience,
        applicability: "Transient failures in remote calls",
        benefits: &["Recovers from transient faults", "Smooths load after outages"],
        considerations: &["Retry storms", "Requires idempotent operations"],
        implementation_hints: "Use exponential backoff with jitter and cap total attempts",
        rules: &[
            MatchRule { all_of: &[&["retry", "retries", "retried", "backoff", "back-off"]] },
        ],
    },
    PatternSpec {
        name: "Timeouts and Deadlines",
        category: PatternCategory::Resilience,
        applicability: "Any synchronous dependency whose latency is unbounded",
        benefits: &["Bounded waiting", "Predictable resource usage"],
        considerations: &["Choosing sensible limits", "Partial work on timeout"],
        implementation_hints: "Propagate deadlines across calls and set timeouts below caller budgets",
        rules: &[
            MatchRule { all_of: &[&["timeout*", "time-out*", "deadline*"]] },
        ],
    },
    PatternSpec {
        name: "Health Check",
        category: PatternCategory::Resilience,
        applicability: "Services behind orchestrators or load balancers",
        benefits: &["Automatic failover", "Faster incident detection"],
        considerations: &["Shallow checks hide real failures", "Check cost"],
        implementation_hints: "Separate liveness from readiness and include critical dependencies in readiness",
        rules: &[
            MatchRule { all_of: &[&["health check*", "healthcheck*", "liveness", "readiness"]] },
        ],
    },
    // Security
    PatternSpec {
        name: "Zero Trust",
        category: PatternCategory::Security,
        applicability: "Networks where no component is trusted by location alone",
        benefits: &["Limits lateral movement", "Consistent policy enforcement"],
        considerations: &["Identity infrastructure required", "Migration effort"],
        implementation_hints: "Authenticate every request, use mTLS between services, enforce least privilege",
        rules: &[
            MatchRule { all_of: &[&["zero trust", "zero-trust", "mtls", "mutual tls"]] },
        ],
    },
    PatternSpec {
        name: "Federated Identity",
        category: PatternCategory::Security,
        applicability: "Delegating authentication to a trusted identity provider",
        benefits: &["Single sign-on", "Centralized credential management"],
        considerations: &["Dependency on the identity provider", "Token lifetime management"],
        implementation_hints: "Use OAuth 2.0 / OpenID Connect and validate tokens at every boundary",
        rules: &[
            MatchRule { all_of: &[&["oauth*", "openid", "oidc", "saml", "single sign-on", "sso", "identity provider"]] },
            MatchRule { all_of: &[&["authenticat*"], &["token*"]] },
        ],
    },
    PatternSpec {
        name: "Secrets Management",
        category: PatternCategory::Security,
        applicability: "Applications that handle credentials, keys or certificates",
        benefits: &["No secrets in code or config", "Auditable rotation"],
        considerations: &["Availability of the secret store", "Bootstrap credentials"],
        implementation_hints: "Store secrets in a vault, inject at runtime, rotate automatically",
        rules: &[
            MatchRule { all_of: &[&["vault", "secrets manager", "key management", "kms"]] },
            MatchRule { all_of: &[&["secret*", "credential*"], &["rotat*", "store*", "manag*"]] },
        ],
    },
    PatternSpec {
        name: "Defense in Depth",
        category: PatternCategory::Security,
        applicability: "Systems handling sensitive data or exposed to the internet",
        benefits: &["No single control failure is fatal", "Layered detection"],
        considerations: &["Operational overhead", "Control sprawl"],
        implementation_hints: "Combine network, identity, application and data controls with monitoring",
        rules: &[
            MatchRule { all_of: &[&["defense in depth", "defence in depth"]] },
            MatchRule { all_of: &[&["encrypt*"], &["firewall*", "waf", "network polic*"]] },
        ],
    },
    // Scalability
    PatternSpec {
        name: "Horizontal Scaling",
        category: PatternCategory::Scalability,
        applicability: "Stateless workloads with growing or variable load",
        benefits: &["Near-linear capacity growth", "Redundancy"],
        considerations: &["Requires stateless instances", "Coordination costs"],
        implementation_hints: "Keep instances stateless and configure autoscaling on load metrics",
        rules: &[
            MatchRule { all_of: &[&["horizontal scal*", "scale out", "scale horizontally", "autoscal*", "auto-scal*"]] },
        ],
    },
    PatternSpec {
        name: "Sharding",
        category: PatternCategory::Scalability,
        applicability: "Datasets or write volumes beyond a single node",
        benefits: &["Write scalability", "Smaller failure domains"],
        considerations: &["Cross-shard queries", "Rebalancing"],
        implementation_hints: "Choose a high-cardinality shard key and plan rebalancing up front",
        rules: &[
            MatchRule { all_of: &[&["shard*", "partitioning", "partitioned"]] },
        ],
    },
    PatternSpec {
        name: "Read Replicas",
        category: PatternCategory::Scalability,
        applicability: "Read-dominated databases",
        benefits: &["Read throughput", "Offloads reporting queries"],
        considerations: &["Replication lag", "Read-your-writes semantics"],
        implementation_hints: "Route only lag-tolerant reads to replicas and monitor replication delay",
        rules: &[
            MatchRule { all_of: &[&["read replica*", "replica*", "replication"]] },
        ],
    },
    PatternSpec {
        name: "Load Balancing",
        category: PatternCategory::Scalability,
        applicability: "Distributing requests across multiple instances",
        benefits: &["Even resource usage", "Higher availability"],
        considerations: &["Session affinity", "Balancer as a bottleneck"],
        implementation_hints: "Pair balancers with health checks and avoid sticky sessions where possible",
        rules: &[
            MatchRule { all_of: &[&["load balanc*", "load-balanc*"]] },
        ],
    },
    PatternSpec {
        name: "Content Delivery Network",
        category: PatternCategory::Scalability,
        applicability: "Static or cacheable content served to distributed users",
        benefits: &["Lower latency for users", "Origin offload"],
        considerations: &["Cache invalidation", "Cost at high egress"],
        implementation_hints: "Version static assets and set cache headers deliberately",
        rules: &[
            MatchRule { all_of: &[&["cdn", "content delivery", "edge cach*"]] },
        ],
    },
];

/// Patterns of a single category, in catalog order
pub fn by_category(category: PatternCategory) -> impl Iterator<Item = &'static PatternSpec> {
    PATTERNS.iter().filter(move |p| p.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_at_least_25_patterns() {
        assert!(PATTERNS.len() >= 25);
    }

    #[test]
    fn every_category_is_populated() {
        for category in PatternCategory::ALL {
            assert!(by_category(category).count() >= 3, "{category} is thin");
        }
    }

    #[test]
    fn catalog_is_grouped_in_category_order() {
        let order: Vec<_> = PATTERNS.iter().map(|p| p.category).collect();
        let mut grouped = Vec::new();
        for category in PatternCategory::ALL {
            grouped.extend(by_category(category).map(|p| p.category));
        }
        assert_eq!(order, grouped);
    }

    #[test]
    fn names_are_unique_and_rules_non_empty() {
        let mut names = HashSet::new();
        for p in PATTERNS {
            assert!(names.insert(p.name), "duplicate pattern {}", p.name);
            assert!(!p.rules.is_empty());
            for rule in p.rules {
                assert!(rule.all_of.iter().all(|g| !g.is_empty()));
            }
            assert!(!p.benefits.is_empty());
            assert!(!p.considerations.is_empty());
        }
    }
}
