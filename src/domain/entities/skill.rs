use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    /// Free-text grouping label, e.g. "Programming Languages".
    pub category: String,
    pub years_of_experience: i16,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SkillInsert {
    pub name: String,
    pub category: String,
    pub years_of_experience: i16,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SkillRequest {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 50), custom(function = "validate_not_blank"))]
    pub category: String,

    #[serde(default)]
    #[validate(range(min = 0, max = 80, message = "Years of experience must be between 0 and 80"))]
    pub years_of_experience: i16,
}

impl SkillRequest {
    pub fn prepare_for_insert(self, now: DateTime<Utc>) -> SkillInsert {
        SkillInsert {
            name: self.name,
            category: self.category,
            years_of_experience: self.years_of_experience,
            created_at: now,
        }
    }
}

/// Groups skills by category.
///
/// Categories appear in the order they are first seen and every list keeps
/// the input order, so the store's ordering carries through unchanged.
pub fn group_skills_by_category(skills: Vec<Skill>) -> IndexMap<String, Vec<Skill>> {
    let mut grouped: IndexMap<String, Vec<Skill>> = IndexMap::new();
    for skill in skills {
        grouped.entry(skill.category.clone()).or_default().push(skill);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: &str, years: i16) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            years_of_experience: years,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn groups_five_skills_into_two_categories_in_fetch_order() {
        let skills = vec![
            skill("Python", "Languages", 8),
            skill("Rust", "Languages", 4),
            skill("Docker", "Tools", 5),
            skill("Go", "Languages", 2),
            skill("Git", "Tools", 10),
        ];

        let grouped = group_skills_by_category(skills);

        assert_eq!(grouped.len(), 2);
        let keys: Vec<&String> = grouped.keys().collect();
        assert_eq!(keys, vec!["Languages", "Tools"]);

        let languages: Vec<&str> = grouped["Languages"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(languages, vec!["Python", "Rust", "Go"]);

        let tools: Vec<&str> = grouped["Tools"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(tools, vec!["Docker", "Git"]);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(group_skills_by_category(Vec::new()).is_empty());
    }

    #[test]
    fn years_out_of_range_fail_validation() {
        let req = SkillRequest {
            name: "Rust".into(),
            category: "Languages".into(),
            years_of_experience: 120,
        };
        assert!(req.validate().is_err());
    }
}
