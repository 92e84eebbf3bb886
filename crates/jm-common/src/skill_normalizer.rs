use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Built-in synonym groups: canonical name followed by its accepted aliases.
///
/// An alias may sit in more than one group ("ai", "ml"); equivalence is "shares a
/// group", which is not transitive across groups.
pub const DEFAULT_SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("python", &["py", "python3"]),
    ("javascript", &["js", "node", "nodejs", "ecmascript"]),
    ("machine learning", &["ml", "machinelearning", "ai"]),
    ("artificial intelligence", &["ai", "ml", "deep learning"]),
    ("sql", &["mysql", "postgresql", "database"]),
    ("aws", &["amazon web services", "cloud"]),
    ("docker", &["containers", "containerization"]),
    ("kubernetes", &["k8s", "container orchestration"]),
];

/// Lowercase, trim and collapse internal whitespace runs to one space.
pub fn normalize_skill(skill: &str) -> String {
    RE_WHITESPACE
        .replace_all(skill.to_lowercase().trim(), " ")
        .into_owned()
}

/// Normalize every entry, keeping order and duplicates.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| normalize_skill(s)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    pub canonical: String,
    pub aliases: Vec<String>,
}

/// Immutable skill-equivalence table. Terms are stored normalized and indexed by
/// the groups they belong to, so an equivalence check is two lookups plus a
/// small set intersection.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
    membership: HashMap<String, Vec<usize>>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::from_groups(DEFAULT_SYNONYM_GROUPS)
    }
}

impl SynonymTable {
    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            membership: HashMap::new(),
        }
    }

    pub fn from_groups(groups: &[(&str, &[&str])]) -> Self {
        let mut table = Self::empty();
        for (canonical, aliases) in groups {
            table.push_group(canonical, aliases);
        }
        table
    }

    fn push_group(&mut self, canonical: &str, aliases: &[&str]) {
        let index = self.groups.len();
        let group = SynonymGroup {
            canonical: normalize_skill(canonical),
            aliases: aliases.iter().map(|a| normalize_skill(a)).collect(),
        };

        for term in std::iter::once(&group.canonical).chain(group.aliases.iter()) {
            let entry = self.membership.entry(term.clone()).or_default();
            if !entry.contains(&index) {
                entry.push(index);
            }
        }
        self.groups.push(group);
    }

    /// Canonical names of every group `skill` belongs to (already normalized input).
    pub fn canonical_names(&self, skill: &str) -> Vec<&str> {
        self.membership
            .get(skill)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| self.groups[i].canonical.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Two normalized skills are equivalent when equal or when some group lists both.
    /// The relation is symmetric by construction.
    pub fn are_equivalent(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (self.membership.get(a), self.membership.get(b)) {
            (Some(groups_a), Some(groups_b)) => groups_a.iter().any(|g| groups_b.contains(g)),
            _ => false,
        }
    }

    /// True when any candidate skill is equivalent to `required`.
    pub fn matches_any(&self, required: &str, candidates: &[String]) -> bool {
        candidates.iter().any(|c| self.are_equivalent(required, c))
    }
}

/// Normalized, de-duplicated skill set (for order-free comparisons).
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_skill(s))
        .collect()
}
