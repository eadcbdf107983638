//! Learning resource catalog

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub provider: String,
    pub reference: String,
}

impl LearningResource {
    pub fn new(title: &str, provider: &str, reference: &str) -> Self {
        Self {
            title: title.to_string(),
            provider: provider.to_string(),
            reference: reference.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    #[serde(default)]
    pub courses: Vec<LearningResource>,
    #[serde(default)]
    pub books: Vec<LearningResource>,
    #[serde(default)]
    pub practice: Vec<LearningResource>,
}

pub fn builtin_resources() -> ResourceCatalog {
    ResourceCatalog {
        courses: vec![
            LearningResource::new("Coursera Specializations", "Coursera", "coursera.org"),
            LearningResource::new("Udemy Best Sellers", "Udemy", "udemy.com"),
            LearningResource::new("edX MicroMasters", "edX", "edx.org"),
            LearningResource::new("DataCamp Tracks", "DataCamp", "datacamp.com"),
        ],
        books: vec![
            LearningResource::new("Industry Standard Books", "Various Publishers", "amazon.com"),
            LearningResource::new("O'Reilly Learning", "O'Reilly", "oreilly.com"),
        ],
        practice: vec![
            LearningResource::new("LeetCode Problems", "LeetCode", "leetcode.com"),
            LearningResource::new("HackerRank Challenges", "HackerRank", "hackerrank.com"),
            LearningResource::new("Kaggle Competitions", "Kaggle", "kaggle.com"),
            LearningResource::new("GitHub Projects", "GitHub", "github.com"),
        ],
    }
}
