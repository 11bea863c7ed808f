//! Static reference data: industries, their companies and the template
//! pools surveys are synthesized from.
//!
//! A [`Catalog`] is built once at startup (from the embedded document or a
//! file named by `CATALOG_PATH`) and handed to the generator by reference.
//! Nothing mutates it afterwards.

pub mod types;

pub use types::*;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::errors::AppError;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    industries: Vec<Industry>,
    titles: Vec<String>,
    descriptions: Vec<String>,
    questions: QuestionPool,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        log::info!(
            "Loaded catalog from {}: {} industries, {} question templates",
            path.display(),
            catalog.industries.len(),
            catalog.questions.len()
        );
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG)
            .unwrap_or_else(|e| panic!("Bad built-in catalog: {}", e))
    }

    fn validate(&self) -> Result<(), AppError> {
        let mut ids = HashSet::new();
        for industry in &self.industries {
            if !ids.insert(industry.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "duplicate industry id '{}'",
                    industry.id
                )));
            }
            let mut names = HashSet::new();
            for company in &industry.companies {
                if !names.insert(company.name.as_str()) {
                    return Err(AppError::Catalog(format!(
                        "duplicate company '{}' in industry '{}'",
                        company.name, industry.id
                    )));
                }
            }
        }
        for (i, q) in self.questions.templates.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(AppError::Catalog(format!(
                    "question template #{} needs at least 2 options, has {}",
                    i,
                    q.options.len()
                )));
            }
        }
        Ok(())
    }

    pub fn new(
        industries: Vec<Industry>,
        titles: Vec<String>,
        descriptions: Vec<String>,
        questions: QuestionPool,
    ) -> Result<Self, AppError> {
        let catalog = Catalog { industries, titles, descriptions, questions };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn find_industry(&self, id: &str) -> Option<&Industry> {
        self.industries.iter().find(|i| i.id == id)
    }

    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    /// Companies of an industry in catalog order; empty for an unknown id.
    pub fn companies(&self, industry_id: &str) -> &[Company] {
        self.find_industry(industry_id)
            .map(|i| i.companies.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_company(&self, industry_id: &str, name: &str) -> Option<&Company> {
        self.companies(industry_id).iter().find(|c| c.name == name)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    pub fn questions(&self) -> &QuestionPool {
        &self.questions
    }
}

/// Replace the first `{company}` in `template` with `company`.
/// Templates without the placeholder come back unchanged.
pub fn substitute(template: &str, company: &str) -> String {
    template.replacen("{company}", company, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert!(catalog.industries().len() >= 10);
        assert!(!catalog.titles().is_empty());
        assert!(!catalog.descriptions().is_empty());
        assert!(catalog.questions().len() >= 7);
    }

    #[test]
    fn banking_has_twelve_companies() {
        let catalog = Catalog::builtin();
        let banking = catalog.find_industry("banking").expect("banking");
        assert_eq!(banking.companies.len(), 12);
        assert!(banking.has_company("KCB Bank"));
    }

    #[test]
    fn unknown_industry_has_no_companies() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_industry("astrology").is_none());
        assert!(catalog.companies("astrology").is_empty());
        assert!(catalog.find_company("banking", "Nairobi Water").is_none());
    }

    #[test]
    fn substitute_replaces_first_placeholder_only() {
        assert_eq!(substitute("Rate {company}", "KCB Bank"), "Rate KCB Bank");
        assert_eq!(substitute("{company} vs {company}", "EY"), "EY vs {company}");
        assert_eq!(substitute("No placeholder here", "EY"), "No placeholder here");
    }

    #[test]
    fn duplicate_industry_ids_rejected() {
        let json = r#"{
            "industries": [
                {"id": "a", "name": "A", "companies": []},
                {"id": "a", "name": "A again", "companies": []}
            ],
            "titles": [], "descriptions": [],
            "questions": {"kind": "general", "templates": []}
        }"#;
        assert!(matches!(Catalog::from_json(json), Err(AppError::Catalog(_))));
    }

    #[test]
    fn single_option_template_rejected() {
        let json = r#"{
            "industries": [],
            "titles": [], "descriptions": [],
            "questions": {"kind": "general", "templates": [
                {"template": "Do you like {company}?", "options": ["Yes"]}
            ]}
        }"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Catalog::from_json("{ not json").is_err());
    }
}
