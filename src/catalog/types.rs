use serde::{Deserialize, Serialize};

/// A brand surveys are written about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    /// Short badge text shown in place of a logo.
    #[serde(default)]
    pub code: String,
    /// HSL triple for the badge background, e.g. "145 70% 40%".
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub id: String,
    pub name: String,
    pub companies: Vec<Company>,
}

impl Industry {
    pub fn has_company(&self, name: &str) -> bool {
        self.companies.iter().any(|c| c.name == name)
    }
}

/// One multiple-choice question template with the options it is asked with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTemplate {
    pub template: String,
    pub options: Vec<String>,
}

/// A named pool of question templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPool {
    pub kind: String,
    pub templates: Vec<QuestionTemplate>,
}

impl QuestionPool {
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
