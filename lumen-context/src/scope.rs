//! Agent → business-metric scope mapping.
//!
//! Which metrics to fetch for a given agent is a static table: the sales
//! agent gets pipeline metrics, finance gets cash metrics, and so on.
//! The executive scope carries the headline metric of every department so
//! top-level reviews (and the insight analyzers) see the whole business.

use lumen_core::models::{Agent, AgentTier, MetricScope};

/// Resolve the metric scope for an agent.
///
/// Unknown ids fall back by tier so a TOML-configured catalog with custom
/// agents still gets a sensible default scope.
pub fn scope_for(agent: &Agent) -> MetricScope {
    match agent.id.as_str() {
        "sales" => MetricScope::new(
            "sales",
            &["pipeline_value", "open_deals", "win_rate", "avg_deal_size"],
        ),
        "finance" => MetricScope::new(
            "finance",
            &["mrr", "burn_rate", "runway_months", "outstanding_invoices"],
        ),
        "operations" => MetricScope::new(
            "operations",
            &[
                "active_integrations",
                "available_integrations",
                "automation_count",
                "task_backlog",
            ],
        ),
        "marketing" => MetricScope::new(
            "marketing",
            &["site_visits", "conversion_rate", "campaign_spend", "email_open_rate"],
        ),
        "email-deliverability" => MetricScope::new(
            "email",
            &[
                "total_emails",
                "generic_domain_count",
                "custom_domain_count",
                "bounce_rate",
            ],
        ),
        "integrations" => MetricScope::new(
            "integrations",
            &["active_integrations", "available_integrations", "connector_errors"],
        ),
        "security" => MetricScope::new(
            "security",
            &["mfa_enabled_count", "seat_count", "security_incidents", "custom_domain_count"],
        ),
        "automation" => MetricScope::new(
            "automation",
            &["manual_task_hours", "automation_count", "repetitive_task_count"],
        ),
        _ => default_scope(agent.tier),
    }
}

/// The executive scope: every department's headline metrics.
pub fn executive_scope() -> MetricScope {
    MetricScope::new(
        "executive",
        &[
            "mrr",
            "pipeline_value",
            "total_emails",
            "generic_domain_count",
            "custom_domain_count",
            "active_integrations",
            "available_integrations",
            "mfa_enabled_count",
            "seat_count",
            "manual_task_hours",
            "automation_count",
        ],
    )
}

fn default_scope(tier: AgentTier) -> MetricScope {
    match tier {
        AgentTier::Executive => executive_scope(),
        AgentTier::Departmental => MetricScope::new("department", &["mrr", "pipeline_value"]),
        AgentTier::Specialist => MetricScope::new("specialist", &[]),
    }
}
