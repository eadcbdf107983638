//! Skill synonym dictionary: canonical skill name -> surface-form variants

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub canonical: String,
    pub variants: Vec<String>,
}

/// Ordered synonym table. Entry order decides which canonical wins when a
/// variant is listed under more than one entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymDictionary {
    entries: Vec<SynonymEntry>,
}

impl SynonymDictionary {
    pub fn new(entries: Vec<SynonymEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an already lower-cased, trimmed token to its canonical name.
    ///
    /// Exact canonical names are checked before variants so a canonical name
    /// always resolves to itself.
    pub fn canonical_for(&self, token: &str) -> Option<&str> {
        if let Some(entry) = self.entries.iter().find(|e| e.canonical == token) {
            return Some(entry.canonical.as_str());
        }

        self.entries
            .iter()
            .find(|e| e.variants.iter().any(|v| v == token))
            .map(|e| e.canonical.as_str())
    }

    /// Every surface form, canonical names included, in declaration order.
    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().flat_map(|e| {
            std::iter::once(e.canonical.as_str()).chain(e.variants.iter().map(|v| v.as_str()))
        })
    }
}

fn entry(canonical: &str, variants: &[&str]) -> SynonymEntry {
    SynonymEntry {
        canonical: canonical.to_string(),
        variants: variants.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn builtin_synonyms() -> SynonymDictionary {
    SynonymDictionary::new(vec![
        entry("python", &["python", "py", "programming"]),
        entry("javascript", &["javascript", "js", "node.js", "react", "vue", "angular"]),
        entry("java", &["java", "spring", "android"]),
        entry("sql", &["sql", "database", "mysql", "postgresql"]),
        entry("machine learning", &["ml", "machine learning", "ai", "artificial intelligence"]),
        entry("data analysis", &["data analysis", "analytics", "excel", "tableau", "power bi"]),
        entry("cloud", &["aws", "azure", "gcp", "cloud", "docker", "kubernetes"]),
        entry("devops", &["devops", "ci/cd", "jenkins", "gitlab", "github actions"]),
        entry("security", &["cybersecurity", "security", "penetration testing", "ethical hacking"]),
        entry("design", &["ui", "ux", "design", "figma", "sketch", "adobe"]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_resolves_to_canonical() {
        let dict = builtin_synonyms();
        assert_eq!(dict.canonical_for("py"), Some("python"));
        assert_eq!(dict.canonical_for("postgresql"), Some("sql"));
        assert_eq!(dict.canonical_for("kubernetes"), Some("cloud"));
        assert_eq!(dict.canonical_for("rust"), None);
    }

    #[test]
    fn test_canonical_wins_over_earlier_variant() {
        let dict = SynonymDictionary::new(vec![
            entry("cloud", &["aws", "docker"]),
            entry("docker", &["containers"]),
        ]);
        assert_eq!(dict.canonical_for("docker"), Some("docker"));
        assert_eq!(dict.canonical_for("containers"), Some("docker"));
        assert_eq!(dict.canonical_for("aws"), Some("cloud"));
    }

    #[test]
    fn test_surface_forms_include_canonical_names() {
        let dict = SynonymDictionary::new(vec![entry("go", &["golang"])]);
        let forms: Vec<&str> = dict.surface_forms().collect();
        assert_eq!(forms, vec!["go", "golang"]);
    }
}
