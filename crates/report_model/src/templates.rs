//! Built-in report templates
//!
//! Section skeletons for the report types the application ships with.
//! Instantiating a template yields a ready-to-edit [`Project`].

use crate::{Project, Section};

/// A named section skeleton
#[derive(Debug, Clone, Copy)]
pub struct ReportTemplate {
    /// Stable key used by the UI and stored project metadata
    pub key: &'static str,
    /// Human-readable template name
    pub name: &'static str,
    /// (title, placeholder content) pairs in document order
    pub sections: &'static [(&'static str, &'static str)],
}

impl ReportTemplate {
    /// Build a project from this template
    pub fn instantiate(&self, id: impl Into<String>) -> Project {
        let mut project = Project::new(id, self.name);
        project.sections = self
            .sections
            .iter()
            .map(|(title, content)| Section::new(*title, *content))
            .collect();
        project
    }
}

/// All built-in templates, in menu order
pub fn builtin_templates() -> &'static [ReportTemplate] {
    BUILTIN
}

/// Look up a template by its key
pub fn template_by_key(key: &str) -> Option<&'static ReportTemplate> {
    BUILTIN.iter().find(|t| t.key == key)
}

static BUILTIN: &[ReportTemplate] = &[
    ReportTemplate {
        key: "techdoc",
        name: "Technical Report",
        sections: &[
            (
                "Executive Summary",
                "Provide a high-level overview of the penetration test findings...",
            ),
            (
                "Recommendations",
                "Provide actionable recommendations for remediation...",
            ),
            ("Conclusion", "Summarize the overall security posture..."),
        ],
    },
    ReportTemplate {
        key: "pentest",
        name: "Penetration Test Report",
        sections: &[
            (
                "Executive Summary",
                "Provide a high-level overview of the penetration test findings...",
            ),
            (
                "Methodology",
                "Describe the testing methodology and approach...",
            ),
            (
                "Findings",
                "Detail all security findings and vulnerabilities...",
            ),
            ("Risk Assessment", "Assess the risk level of each finding..."),
            (
                "Recommendations",
                "Provide actionable recommendations for remediation...",
            ),
            ("Conclusion", "Summarize the overall security posture..."),
        ],
    },
    ReportTemplate {
        key: "audit",
        name: "Security Audit Report",
        sections: &[
            ("Audit Scope", "Define the scope and objectives of the audit..."),
            (
                "Compliance Assessment",
                "Evaluate compliance with relevant standards...",
            ),
            (
                "Control Testing",
                "Results of control testing and validation...",
            ),
            ("Gap Analysis", "Identify gaps in security controls..."),
            (
                "Remediation Plan",
                "Develop a plan to address identified gaps...",
            ),
        ],
    },
    ReportTemplate {
        key: "assessment",
        name: "Risk Assessment",
        sections: &[
            (
                "Risk Context",
                "Define the risk assessment context and scope...",
            ),
            (
                "Asset Inventory",
                "Identify and categorize critical assets...",
            ),
            (
                "Threat Analysis",
                "Analyze potential threats and attack vectors...",
            ),
            (
                "Vulnerability Assessment",
                "Identify and assess vulnerabilities...",
            ),
            (
                "Risk Calculation",
                "Calculate risk scores and prioritize risks...",
            ),
            ("Risk Treatment", "Develop risk treatment strategies..."),
        ],
    },
    ReportTemplate {
        key: "compliance",
        name: "Compliance Report",
        sections: &[
            (
                "Compliance Framework",
                "Define the compliance framework and requirements...",
            ),
            (
                "Current State Assessment",
                "Assess current compliance status...",
            ),
            (
                "Gap Analysis",
                "Identify compliance gaps and deficiencies...",
            ),
            (
                "Remediation Roadmap",
                "Develop a roadmap for achieving compliance...",
            ),
            (
                "Monitoring Plan",
                "Establish ongoing compliance monitoring...",
            ),
        ],
    },
];
