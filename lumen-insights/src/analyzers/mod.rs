//! Built-in analyzers.
//!
//! Each reads the business snapshot on the bundle and emits at most one
//! observation. Metrics a snapshot does not carry count as zero — a
//! degraded bundle simply produces fewer findings.

mod automation;
mod email_domain;
mod email_security;
mod integration_coverage;
mod security_posture;

pub use automation::AutomationAnalyzer;
pub use email_domain::EmailDomainAnalyzer;
pub use email_security::EmailSecurityAnalyzer;
pub use integration_coverage::IntegrationCoverageAnalyzer;
pub use security_posture::SecurityPostureAnalyzer;

use crate::analyzer::Analyzer;

/// The default analyzer set, in registration order.
pub fn default_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(EmailDomainAnalyzer),
        Box::new(EmailSecurityAnalyzer),
        Box::new(IntegrationCoverageAnalyzer),
        Box::new(SecurityPostureAnalyzer),
        Box::new(AutomationAnalyzer),
    ]
}
