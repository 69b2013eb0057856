use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the project-local rule file, looked up at the project root.
pub const RULES_FILE: &str = ".depscope-rules.json";

/// One forbidden-dependency rule: an edge whose endpoints match both
/// patterns is flagged with the rule's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArchRule {
    pub name: String,
    pub description: String,
    pub forbidden: ForbiddenDep,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForbiddenDep {
    /// Regex pattern matched (search, not full-match) against the source id
    pub from: String,
    /// Regex pattern matched against the target id
    pub to: String,
}

/// Built-in hexagonal-architecture layering rules, used whenever no valid
/// project rule file is present.
pub fn default_rules() -> Vec<ArchRule> {
    vec![
        ArchRule {
            name: "Domain Independence".to_string(),
            description: "Domain layer cannot import from Infrastructure/Adapters".to_string(),
            forbidden: ForbiddenDep {
                from: r".*/(Domain|domain)/.*".to_string(),
                to: r".*/([Aa]dapters?|[Ii]nfrastructure)/.*".to_string(),
            },
        },
        ArchRule {
            name: "No Reverse Dependencies".to_string(),
            description: "Infrastructure cannot import from Application layer".to_string(),
            forbidden: ForbiddenDep {
                from: r".*/([Ii]nfrastructure|adapters/driven)/.*".to_string(),
                to: r".*/([Aa]pplication|use[_-]?cases)/.*".to_string(),
            },
        },
    ]
}

/// Load architecture rules from `<project_root>/.depscope-rules.json`.
///
/// Missing file, unreadable file, or malformed JSON all fall back to the
/// built-in defaults; a build never fails over its rule configuration.
pub fn load_arch_rules(project_root: &Path) -> Vec<ArchRule> {
    let path = project_root.join(RULES_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return default_rules(),
    };
    match serde_json::from_str::<Vec<ArchRule>>(&content) {
        Ok(rules) => rules,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid rule file, using defaults");
            default_rules()
        }
    }
}

/// Check an edge against the rules, in order. Returns the name of the first
/// rule whose `from` pattern matches the source id and whose `to` pattern
/// matches the target id.
pub fn validate_edge<'r>(source_id: &str, target_id: &str, rules: &'r [ArchRule]) -> Option<&'r str> {
    for rule in rules {
        let (from, to) = match (Regex::new(&rule.forbidden.from), Regex::new(&rule.forbidden.to)) {
            (Ok(f), Ok(t)) => (f, t),
            _ => {
                tracing::warn!(rule = %rule.name, "unparseable rule pattern, skipping");
                continue;
            }
        };
        if from.is_match(source_id) && to.is_match(target_id) {
            return Some(&rule.name);
        }
    }
    None
}
