//! Built-in agent catalog.
//!
//! One executive, four departmental directors, four specialists. Each
//! specialist hangs off the department that owns its domain, so every
//! parent chain terminates at the executive tier.

use std::collections::BTreeSet;

use lumen_core::models::{Agent, AgentId, AgentTier, ToolId};

fn keywords(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn tools(ids: &[&str]) -> BTreeSet<ToolId> {
    ids.iter().map(|t| ToolId::new(*t)).collect()
}

fn agent(
    id: &str,
    tier: AgentTier,
    display_name: &str,
    domain_keywords: &[&str],
    tool_ids: &[&str],
    prompt: &str,
    parent: Option<&str>,
) -> Agent {
    Agent {
        id: AgentId::new(id),
        tier,
        display_name: display_name.to_string(),
        domain_keywords: keywords(domain_keywords),
        tools: tools(tool_ids),
        system_prompt_template: prompt.to_string(),
        parent_agent_id: parent.map(AgentId::new),
    }
}

/// The default agent catalog shipped with the product.
pub fn builtin_agents() -> Vec<Agent> {
    vec![
        agent(
            "executive",
            AgentTier::Executive,
            "Chief Strategy Advisor",
            &[
                "strategy", "strategic", "priorities", "priority", "growth", "vision", "roadmap",
                "goals", "direction", "overview", "big picture",
            ],
            &["business_overview", "goal_tracker"],
            "You are the Chief Strategy Advisor for a small business. Weigh trade-offs across \
             departments and answer at the level of priorities and direction, grounded in the \
             provided context.",
            None,
        ),
        agent(
            "sales",
            AgentTier::Departmental,
            "Sales Director",
            &[
                "sales", "pipeline", "deal", "deals", "lead", "leads", "prospect", "quota",
                "crm", "closing", "conversion",
            ],
            &["crm_query", "pipeline_report"],
            "You are the Sales Director. Answer questions about pipeline, deals, and conversion \
             using the sales metrics and documents in the provided context.",
            Some("executive"),
        ),
        agent(
            "finance",
            AgentTier::Departmental,
            "Finance Director",
            &[
                "finance", "financial", "cash", "burn", "runway", "invoice", "invoices",
                "expenses", "budget", "mrr", "margin", "profit",
            ],
            &["ledger_query", "cashflow_report"],
            "You are the Finance Director. Answer questions about cash, revenue, and spending \
             using the financial metrics in the provided context.",
            Some("executive"),
        ),
        agent(
            "operations",
            AgentTier::Departmental,
            "Operations Director",
            &[
                "operations", "operational", "workflow", "process", "efficiency", "tasks",
                "tooling", "vendors", "capacity",
            ],
            &["task_report", "vendor_directory"],
            "You are the Operations Director. Answer questions about processes, tooling, and \
             day-to-day execution using the provided context.",
            Some("executive"),
        ),
        agent(
            "marketing",
            AgentTier::Departmental,
            "Marketing Director",
            &[
                "marketing", "campaign", "campaigns", "brand", "audience", "seo", "content",
                "social", "engagement", "website",
            ],
            &["campaign_report", "audience_insights"],
            "You are the Marketing Director. Answer questions about campaigns, brand, and \
             audience using the marketing metrics in the provided context.",
            Some("executive"),
        ),
        agent(
            "email-deliverability",
            AgentTier::Specialist,
            "Email Deliverability Specialist",
            &[
                "email", "deliverability", "domain", "dns", "spf", "dkim", "dmarc", "inbox",
                "bounce", "spam", "mailbox",
            ],
            &["dns_inspector", "mailbox_audit"],
            "You are the Email Deliverability Specialist. Diagnose sending-domain and inbox \
             placement issues using the email metrics in the provided context.",
            Some("marketing"),
        ),
        agent(
            "integrations",
            AgentTier::Specialist,
            "Integrations Specialist",
            &[
                "integration", "integrations", "connect", "connector", "sync", "api",
                "webhook", "zapier",
            ],
            &["connector_catalog", "sync_status"],
            "You are the Integrations Specialist. Recommend and troubleshoot connections \
             between the business's tools using the provided context.",
            Some("operations"),
        ),
        agent(
            "security",
            AgentTier::Specialist,
            "Security Specialist",
            &[
                "security", "secure", "mfa", "password", "passwords", "phishing", "access",
                "permissions", "breach", "compliance",
            ],
            &["access_audit", "mfa_report"],
            "You are the Security Specialist. Assess account and data protection posture \
             using the security metrics in the provided context.",
            Some("operations"),
        ),
        agent(
            "automation",
            AgentTier::Specialist,
            "Automation Specialist",
            &[
                "automation", "automate", "automatic", "repetitive", "manual", "bots",
                "scheduled", "recurring",
            ],
            &["workflow_builder", "task_miner"],
            "You are the Automation Specialist. Identify repetitive work worth automating \
             using the task metrics in the provided context.",
            Some("operations"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_executive() {
        let execs: Vec<_> = builtin_agents()
            .into_iter()
            .filter(|a| a.tier == AgentTier::Executive)
            .collect();
        assert_eq!(execs.len(), 1);
        assert_eq!(execs[0].id.as_str(), "executive");
    }

    #[test]
    fn every_agent_has_keywords_and_tools() {
        for agent in builtin_agents() {
            assert!(!agent.domain_keywords.is_empty(), "{} has no keywords", agent.id);
            assert!(!agent.tools.is_empty(), "{} has no tools", agent.id);
            assert!(!agent.system_prompt_template.is_empty());
        }
    }
}
