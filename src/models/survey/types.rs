use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    Text,
}

/// A question as shown to the respondent.
/// `options` is set for multiple choice and absent for free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl GeneratedQuestion {
    pub fn multiple_choice(text: String, options: Vec<String>) -> Self {
        Self { text, kind: QuestionKind::MultipleChoice, options: Some(options) }
    }

    pub fn free_text(text: String) -> Self {
        Self { text, kind: QuestionKind::Text, options: None }
    }
}

/// A survey row handed in by the storage layer. Read-only to the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSurvey {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub payout: f64,
    /// Rows without a company never match a bucket and are dropped.
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub questions: Vec<GeneratedQuestion>,
}

/// A survey fabricated from templates for the current request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSurvey {
    pub id: String,
    pub title: String,
    pub description: String,
    pub payout: u32,
    pub company: String,
    pub industry: String,
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Survey {
    Persisted(PersistedSurvey),
    Synthetic(SyntheticSurvey),
}

impl Survey {
    pub fn id(&self) -> &str {
        match self {
            Survey::Persisted(s) => &s.id,
            Survey::Synthetic(s) => &s.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Survey::Persisted(s) => &s.title,
            Survey::Synthetic(s) => &s.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Survey::Persisted(s) => &s.description,
            Survey::Synthetic(s) => &s.description,
        }
    }

    pub fn payout(&self) -> f64 {
        match self {
            Survey::Persisted(s) => s.payout,
            Survey::Synthetic(s) => f64::from(s.payout),
        }
    }

    pub fn company(&self) -> Option<&str> {
        match self {
            Survey::Persisted(s) => s.company.as_deref(),
            Survey::Synthetic(s) => Some(&s.company),
        }
    }

    pub fn industry(&self) -> Option<&str> {
        match self {
            Survey::Persisted(s) => s.industry.as_deref(),
            Survey::Synthetic(s) => Some(&s.industry),
        }
    }

    pub fn questions(&self) -> &[GeneratedQuestion] {
        match self {
            Survey::Persisted(s) => &s.questions,
            Survey::Synthetic(s) => &s.questions,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Survey::Synthetic(_))
    }
}

impl From<PersistedSurvey> for Survey {
    fn from(s: PersistedSurvey) -> Self {
        Survey::Persisted(s)
    }
}

impl From<SyntheticSurvey> for Survey {
    fn from(s: SyntheticSurvey) -> Self {
        Survey::Synthetic(s)
    }
}

/// Flat wire shape shared by both survey origins.
#[derive(Serialize)]
struct SurveyView<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    payout: f64,
    company: Option<&'a str>,
    industry: Option<&'a str>,
    questions: &'a [GeneratedQuestion],
    is_generated: bool,
}

impl Serialize for Survey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SurveyView {
            id: self.id(),
            title: self.title(),
            description: self.description(),
            payout: self.payout(),
            company: self.company(),
            industry: self.industry(),
            questions: self.questions(),
            is_generated: self.is_generated(),
        }
        .serialize(serializer)
    }
}
