//! Skill normalization through the synonym dictionary

use crate::knowledge::SynonymDictionary;
use std::collections::BTreeSet;

/// Maps raw skill tokens to canonical skill identifiers.
///
/// Tokens are lower-cased and trimmed first. Known surface forms become their
/// canonical name, anything else passes through in lower case. Blank tokens
/// are dropped. Normalizing an already normalized set returns it unchanged.
pub struct SkillNormalizer<'a> {
    dictionary: &'a SynonymDictionary,
}

impl<'a> SkillNormalizer<'a> {
    pub fn new(dictionary: &'a SynonymDictionary) -> Self {
        Self { dictionary }
    }

    pub fn normalize_one(&self, raw: &str) -> Option<String> {
        let token = raw.trim().to_lowercase();
        if token.is_empty() {
            return None;
        }

        Some(match self.dictionary.canonical_for(&token) {
            Some(canonical) => canonical.to_string(),
            None => token,
        })
    }

    pub fn normalize<I, S>(&self, skills: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        skills
            .into_iter()
            .filter_map(|skill| self.normalize_one(skill.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::synonyms::builtin_synonyms;

    #[test]
    fn test_normalization_maps_variants() {
        let dict = builtin_synonyms();
        let normalizer = SkillNormalizer::new(&dict);

        let result = normalizer.normalize(["  Py ", "MySQL", "React", "Rust", "rust", ""]);
        let expected: BTreeSet<String> = ["python", "sql", "javascript", "rust"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let dict = builtin_synonyms();
        let normalizer = SkillNormalizer::new(&dict);

        let inputs: Vec<Vec<&str>> = vec![
            vec![],
            vec!["programming", "Docker", "Kubernetes", "figma"],
            vec!["machine learning", "ML", "AI", "statistics", "Power BI"],
            vec!["ci/cd", "ethical hacking", "unknown skill", "  SPACED  "],
        ];

        for input in inputs {
            let once = normalizer.normalize(&input);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_programming_maps_to_python() {
        let dict = builtin_synonyms();
        let normalizer = SkillNormalizer::new(&dict);
        assert_eq!(normalizer.normalize_one("Programming").as_deref(), Some("python"));
    }
}
