//! Filename-driven classification of documentation pages.
//!
//! Every page lands in exactly one category. The rules are evaluated top to
//! bottom and the first matching rule wins, so the order of `RULES` is the
//! precedence order: developer-only pages are caught before any of the public
//! feature-guide patterns get a chance to claim them.

use std::fmt;

/// The fixed set of categories a page can be classified into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CategoryKey {
    Start,
    Using,
    Deployment,
    Reference,
    Operations,
    Developer,
}

impl CategoryKey {
    pub fn key(&self) -> &'static str {
        match self {
            CategoryKey::Start => "start",
            CategoryKey::Using => "using",
            CategoryKey::Deployment => "deployment",
            CategoryKey::Reference => "reference",
            CategoryKey::Operations => "operations",
            CategoryKey::Developer => "developer",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Category assigned when no rule matches.
pub const DEFAULT_CATEGORY: CategoryKey = CategoryKey::Reference;

/// Filenames that always belong to the "start here" section.
const START_FILES: &[&str] = &[
    "readme.html",
    "showcase.html",
    "demo-quickstart.html",
    "showcase-readme.html",
];

type Predicate = fn(&str) -> bool;

/// Ordered classification rules; first match wins.
const RULES: &[(Predicate, CategoryKey)] = &[
    (is_developer_doc, CategoryKey::Developer),
    (is_start_doc, CategoryKey::Start),
    (is_vertical_guide, CategoryKey::Using),
    (is_feature_guide, CategoryKey::Using),
    (is_deployment_doc, CategoryKey::Deployment),
    (is_reference_doc, CategoryKey::Reference),
    (is_operations_doc, CategoryKey::Operations),
];

/// Classify a page by its filename.
///
/// The title is accepted so rules can grow to consider it, but none of the
/// current rules look at it. Never fails: anything unmatched falls through to
/// [`DEFAULT_CATEGORY`].
pub fn classify(filename: &str, _title: &str) -> CategoryKey {
    RULES
        .iter()
        .find(|(matches, _)| matches(filename))
        .map(|(_, key)| *key)
        .unwrap_or(DEFAULT_CATEGORY)
}

fn contains_any(filename: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| filename.contains(needle))
}

fn is_developer_doc(filename: &str) -> bool {
    filename.starts_with("claude-")
        || contains_any(
            filename,
            &[
                "-summary.html",
                "implementation-",
                "hardening",
                "autonomous",
                "pull-request",
                "agents.html",
                "contributing",
                "dev-setup",
            ],
        )
}

fn is_start_doc(filename: &str) -> bool {
    START_FILES.contains(&filename)
}

fn is_vertical_guide(filename: &str) -> bool {
    filename.contains("verticals-")
        && contains_any(filename, &["-readme.html", "-quickstart.html"])
}

fn is_feature_guide(filename: &str) -> bool {
    contains_any(
        filename,
        &["showcase-", "demo-", "-examples.html", "-wiring-guide.html"],
    )
}

fn is_deployment_doc(filename: &str) -> bool {
    contains_any(
        filename,
        &[
            "deployment",
            "vercel",
            "cloudflare",
            "database-quickstart",
            "environment-setup",
            "github-workflows",
        ],
    )
}

fn is_reference_doc(filename: &str) -> bool {
    contains_any(filename, &["architecture", "api-"])
        || (filename.contains("compliance-") && !filename.contains("claude-"))
        || (filename.contains("packages-") && filename.contains("-readme"))
        || (filename.contains("docs-")
            && contains_any(filename, &["security", "performance"]))
}

fn is_operations_doc(filename: &str) -> bool {
    contains_any(
        filename,
        &["operations-", "runbook", "disaster", "monitoring", "backup"],
    )
}
