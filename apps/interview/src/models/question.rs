use std::fmt;

use serde::{Deserialize, Serialize};

/// Job category an interview session targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleTag {
    Backend,
    Frontend,
    Fullstack,
    #[serde(alias = "datascientist")]
    DataScientist,
    Devops,
    #[serde(alias = "productmanager")]
    ProductManager,
    #[serde(alias = "uiux")]
    UiUx,
    Mobile,
}

impl RoleTag {
    pub const ALL: [RoleTag; 8] = [
        RoleTag::Backend,
        RoleTag::Frontend,
        RoleTag::Fullstack,
        RoleTag::DataScientist,
        RoleTag::Devops,
        RoleTag::ProductManager,
        RoleTag::UiUx,
        RoleTag::Mobile,
    ];

    /// Lenient parse: trimmed, case-insensitive, and `-`/`_`/no separator all accepted
    /// ("data-scientist", "data_scientist", "datascientist").
    pub fn parse(raw: &str) -> Option<Self> {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        match folded.as_str() {
            "backend" => Some(RoleTag::Backend),
            "frontend" => Some(RoleTag::Frontend),
            "fullstack" => Some(RoleTag::Fullstack),
            "datascientist" => Some(RoleTag::DataScientist),
            "devops" => Some(RoleTag::Devops),
            "productmanager" => Some(RoleTag::ProductManager),
            "uiux" => Some(RoleTag::UiUx),
            "mobile" => Some(RoleTag::Mobile),
            _ => None,
        }
    }

    /// Canonical slug, used in question ids and the corpus asset.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleTag::Backend => "backend",
            RoleTag::Frontend => "frontend",
            RoleTag::Fullstack => "fullstack",
            RoleTag::DataScientist => "data-scientist",
            RoleTag::Devops => "devops",
            RoleTag::ProductManager => "product-manager",
            RoleTag::UiUx => "ui-ux",
            RoleTag::Mobile => "mobile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleTag::Backend => "Backend Developer",
            RoleTag::Frontend => "Frontend Developer",
            RoleTag::Fullstack => "Full Stack Developer",
            RoleTag::DataScientist => "Data Scientist",
            RoleTag::Devops => "DevOps Engineer",
            RoleTag::ProductManager => "Product Manager",
            RoleTag::UiUx => "UI/UX Designer",
            RoleTag::Mobile => "Mobile Developer",
        }
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question sub-bank selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTag {
    Easy,
    #[serde(alias = "medium")]
    Intermediate,
    Hard,
}

impl DifficultyTag {
    pub const ALL: [DifficultyTag; 3] = [
        DifficultyTag::Easy,
        DifficultyTag::Intermediate,
        DifficultyTag::Hard,
    ];

    /// Trimmed, case-insensitive. "medium" is the legacy spelling of intermediate.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "easy" => Some(DifficultyTag::Easy),
            "intermediate" | "medium" => Some(DifficultyTag::Intermediate),
            "hard" => Some(DifficultyTag::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTag::Easy => "easy",
            DifficultyTag::Intermediate => "intermediate",
            DifficultyTag::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyTag::Easy => "Easy",
            DifficultyTag::Intermediate => "Intermediate",
            DifficultyTag::Hard => "Hard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DifficultyTag::Easy => "Basic concepts and fundamentals",
            DifficultyTag::Intermediate => "Practical experience questions",
            DifficultyTag::Hard => "Advanced and complex scenarios",
        }
    }
}

impl fmt::Display for DifficultyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single interview question with its reference answer.
///
/// Personal questions carry no role and are always graded correct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub role: Option<RoleTag>,
    pub difficulty: DifficultyTag,
    pub is_personal: bool,
    pub reference_answer: String,
}

impl Question {
    pub fn technical(
        role: RoleTag,
        difficulty: DifficultyTag,
        index: usize,
        text: impl Into<String>,
        reference_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: technical_id(role, difficulty, index),
            text: text.into(),
            role: Some(role),
            difficulty,
            is_personal: false,
            reference_answer: reference_answer.into(),
        }
    }
}

/// `{role}_{difficulty}_{index}`, e.g. `backend_easy_0`.
pub fn technical_id(role: RoleTag, difficulty: DifficultyTag, index: usize) -> String {
    format!("{role}_{difficulty}_{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_accepts_legacy_spellings() {
        assert_eq!(RoleTag::parse("datascientist"), Some(RoleTag::DataScientist));
        assert_eq!(RoleTag::parse("data-scientist"), Some(RoleTag::DataScientist));
        assert_eq!(RoleTag::parse(" Data_Scientist "), Some(RoleTag::DataScientist));
        assert_eq!(RoleTag::parse("productmanager"), Some(RoleTag::ProductManager));
        assert_eq!(RoleTag::parse("UIUX"), Some(RoleTag::UiUx));
    }

    #[test]
    fn test_role_parse_unknown_is_none() {
        assert_eq!(RoleTag::parse("astronaut"), None);
        assert_eq!(RoleTag::parse(""), None);
    }

    #[test]
    fn test_role_parse_round_trips_canonical_slug() {
        for role in RoleTag::ALL {
            assert_eq!(RoleTag::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_difficulty_medium_is_intermediate() {
        assert_eq!(DifficultyTag::parse("medium"), Some(DifficultyTag::Intermediate));
        assert_eq!(
            DifficultyTag::parse("INTERMEDIATE"),
            Some(DifficultyTag::Intermediate)
        );
        assert_eq!(DifficultyTag::parse("expert"), None);
    }

    #[test]
    fn test_serde_uses_kebab_slugs_and_aliases() {
        let role: RoleTag = serde_json::from_str(r#""product-manager""#).unwrap();
        assert_eq!(role, RoleTag::ProductManager);
        let legacy: RoleTag = serde_json::from_str(r#""uiux""#).unwrap();
        assert_eq!(legacy, RoleTag::UiUx);
        let diff: DifficultyTag = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(diff, DifficultyTag::Intermediate);
        assert_eq!(
            serde_json::to_string(&RoleTag::DataScientist).unwrap(),
            r#""data-scientist""#
        );
    }

    #[test]
    fn test_technical_id_format() {
        assert_eq!(
            technical_id(RoleTag::UiUx, DifficultyTag::Intermediate, 3),
            "ui-ux_intermediate_3"
        );
    }
}
