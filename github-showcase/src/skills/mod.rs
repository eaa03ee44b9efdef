//! Skills extraction for the tag-cloud view.
//!
//! Tallies technology tokens across all projects — primary languages, topic
//! labels, and keywords sniffed from project names — then keeps the tokens
//! that recur and groups them into technology families. Family matching uses
//! substring containment rather than the gallery's exact matching: a tag
//! cloud tolerates over-inclusion, a gallery tab does not.

mod taxonomy;

pub use taxonomy::SkillFamily;

use crate::projects::Project;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Minimum number of projects a token must appear in to be kept.
const MIN_OCCURRENCES: u32 = 2;

/// Short labels overriding the default first-letter icon.
const ICON_OVERRIDES: &[(&str, &str)] = &[
    ("javascript", "JS"),
    ("typescript", "TS"),
    ("react", "R"),
    ("vue", "V"),
    ("nextjs", "N"),
    ("node", "N"),
    ("python", "PY"),
    ("html", "H"),
    ("css", "C"),
];

/// A technology token that recurs across projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Technology {
    /// Token with its first letter upper-cased.
    pub name: String,

    /// Number of occurrences across all projects.
    pub count: u32,

    /// Short label for icon rendering.
    pub icon: String,
}

/// Technologies grouped by family, each family sorted by occurrence count.
#[derive(Debug, Clone, Serialize)]
pub struct SkillProfile {
    /// One group per family, in taxonomy order.
    pub families: Vec<SkillGroup>,
}

/// The technologies assigned to one family.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub family: SkillFamily,
    pub technologies: Vec<Technology>,
}

impl SkillProfile {
    /// Returns the technologies assigned to a family.
    pub fn family(&self, family: SkillFamily) -> &[Technology] {
        self.families
            .iter()
            .find(|group| group.family == family)
            .map(|group| group.technologies.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates the families that received at least one technology.
    pub fn non_empty(&self) -> impl Iterator<Item = &SkillGroup> {
        self.families
            .iter()
            .filter(|group| !group.technologies.is_empty())
    }
}

/// Derives the skill profile from a list of projects.
pub fn extract_technologies(projects: &[Project]) -> SkillProfile {
    let counts = tally_tokens(projects);
    debug!(tokens = counts.len(), "Tallied technology tokens");
    group_technologies(counts)
}

/// Counts token occurrences across all projects.
///
/// Per project: +1 for the primary language, +1 per topic, and +1 per known
/// keyword contained in the project's own name. Name sniffing is applied
/// here only — never in the project categorizer.
fn tally_tokens(projects: &[Project]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();

    for project in projects {
        if let Some(language) = &project.language {
            *counts.entry(language.clone()).or_insert(0) += 1;
        }

        for topic in &project.topics {
            *counts.entry(topic.clone()).or_insert(0) += 1;
        }

        // A project called "react-dashboard" counts towards "react" even
        // without the topic.
        let name = project.name.to_lowercase();
        for family in SkillFamily::ALL {
            for keyword in family.keywords() {
                if name.contains(keyword) {
                    *counts.entry((*keyword).to_string()).or_insert(0) += 1;
                }
            }
        }
    }

    counts
}

/// Drops rare tokens, then groups the rest by family, sorted by count.
fn group_technologies(counts: HashMap<String, u32>) -> SkillProfile {
    let mut technologies: Vec<Technology> = counts
        .into_iter()
        .filter(|(_, count)| *count >= MIN_OCCURRENCES)
        .map(|(token, count)| Technology {
            icon: icon_label(&token),
            name: capitalize(&token),
            count,
        })
        .collect();

    // The tally map is unordered; sort before grouping so equal counts keep
    // a stable order.
    technologies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

    let families = SkillFamily::ALL
        .iter()
        .map(|&family| SkillGroup {
            family,
            technologies: technologies
                .iter()
                .filter(|tech| classify_token(&tech.name) == family)
                .cloned()
                .collect(),
        })
        .collect();

    SkillProfile { families }
}

/// Assigns a token to a family by substring containment. First family in
/// taxonomy order with a contained keyword wins.
pub fn classify_token(token: &str) -> SkillFamily {
    let lowered = token.to_lowercase();
    for family in SkillFamily::ALL {
        if family
            .keywords()
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            return family;
        }
    }
    SkillFamily::Other
}

/// Short icon label for a token: a known override, else its first letter.
fn icon_label(token: &str) -> String {
    let lowered = token.to_lowercase();
    for (needle, label) in ICON_OVERRIDES {
        if lowered.contains(needle) {
            return (*label).to_string();
        }
    }
    token
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

/// Upper-cases the first letter, leaving the rest untouched.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
