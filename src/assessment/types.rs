use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a question is answered.
///
/// Unrecognized kind strings in a catalog file deserialize to `Unknown`
/// rather than failing; the engine scores those answers as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Linear-scale rating (likert or numeric rating)
    #[serde(alias = "likert", alias = "rating")]
    Scale,
    /// Pick one option from an enumerated list
    #[serde(alias = "multiple-choice")]
    SingleChoice,
    /// Pick one option from a forced trade-off list
    ForcedChoice,
    #[serde(other)]
    Unknown,
}

impl QuestionKind {
    pub fn is_choice(self) -> bool {
        matches!(self, QuestionKind::SingleChoice | QuestionKind::ForcedChoice)
    }
}

/// Top-level grouping a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Psychometric,
    Technical,
    #[serde(alias = "wiscar-competency")]
    Wiscar,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Psychometric => "psychometric",
            Category::Technical => "technical",
            Category::Wiscar => "wiscar",
        };
        f.write_str(name)
    }
}

/// One of the six WISCAR competency dimensions.
///
/// Trait tags outside the six (`openness`, `work-style` and the like)
/// deserialize to `Other` and feed no dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Construct {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    #[serde(alias = "realWorld", alias = "real_world")]
    RealWorld,
    #[serde(other)]
    Other,
}

impl Construct {
    /// The six scored dimensions, in report order
    pub const ALL: [Construct; 6] = [
        Construct::Will,
        Construct::Interest,
        Construct::Skill,
        Construct::Cognitive,
        Construct::Ability,
        Construct::RealWorld,
    ];

    /// Whether this tag is one of the six scored dimensions
    pub fn is_dimension(self) -> bool {
        self != Construct::Other
    }

    /// Human-readable dimension name for reports
    pub fn label(self) -> &'static str {
        match self {
            Construct::Will => "Will",
            Construct::Interest => "Interest",
            Construct::Skill => "Skill",
            Construct::Cognitive => "Cognitive readiness",
            Construct::Ability => "Ability to learn",
            Construct::RealWorld => "Real-world alignment",
            Construct::Other => "Other",
        }
    }
}

/// A labelled anchor point on a rating scale (presentation only).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleLabel {
    pub value: f64,
    pub label: String,
}

/// Inclusive bounds of a linear-scale question.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Scale {
    pub min: f64,
    pub max: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<ScaleLabel>,
}

impl Scale {
    pub const DEFAULT_MIN: f64 = 1.0;
    pub const DEFAULT_MAX: f64 = 5.0;

    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            labels: Vec::new(),
        }
    }

    pub fn with_labels(mut self, labels: &[(f64, &str)]) -> Self {
        self.labels = labels
            .iter()
            .map(|(value, label)| ScaleLabel {
                value: *value,
                label: label.to_string(),
            })
            .collect();
        self
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// A single catalog entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,

    #[serde(alias = "type")]
    pub kind: QuestionKind,

    pub category: Category,

    /// Section heading the question is shown under
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub section: String,

    /// Question text
    #[serde(default, alias = "question", skip_serializing_if = "String::is_empty")]
    pub prompt: String,

    /// WISCAR dimension this question feeds, independent of category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construct: Option<Construct>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Weight in category aggregation (default: 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Question {
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(Self::DEFAULT_WEIGHT)
    }

    /// Scale bounds, falling back to 1..=5 when the question declares none
    pub fn effective_scale(&self) -> (f64, f64) {
        match &self.scale {
            Some(scale) => (scale.min, scale.max),
            None => (Scale::DEFAULT_MIN, Scale::DEFAULT_MAX),
        }
    }
}

/// Raw answer payload: a number for scale questions, option text for choices.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// Numeric reading of the value. Numeric strings are accepted.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Number(_) => None,
            AnswerValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Answer {
    #[serde(alias = "questionId")]
    pub question_id: String,
    pub value: AnswerValue,

    /// Capture time, kept for audit; scoring ignores it
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            timestamp: Utc::now(),
        }
    }
}
