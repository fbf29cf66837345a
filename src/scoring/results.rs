use serde::{Deserialize, Serialize};
use std::fmt;

use super::normalize::Rule;
use crate::assessment::{Category, Construct};

/// Tiered career-suitability verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    #[serde(alias = "yes")]
    Positive,
    #[serde(alias = "maybe")]
    Conditional,
    #[serde(alias = "no")]
    Negative,
}

impl Recommendation {
    /// Stable machine-readable name, same as the serialized form
    pub fn key(self) -> &'static str {
        match self {
            Recommendation::Positive => "positive",
            Recommendation::Conditional => "conditional",
            Recommendation::Negative => "negative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Recommendation::Positive => "Recommended",
            Recommendation::Conditional => "Conditionally recommended",
            Recommendation::Negative => "Not recommended",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-dimension WISCAR scores, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    /// Score for one dimension; `Other` has none and reads as 0
    pub fn get(&self, construct: Construct) -> u8 {
        match construct {
            Construct::Will => self.will,
            Construct::Interest => self.interest,
            Construct::Skill => self.skill,
            Construct::Cognitive => self.cognitive,
            Construct::Ability => self.ability,
            Construct::RealWorld => self.real_world,
            Construct::Other => 0,
        }
    }

    pub fn set(&mut self, construct: Construct, score: u8) {
        let slot = match construct {
            Construct::Will => &mut self.will,
            Construct::Interest => &mut self.interest,
            Construct::Skill => &mut self.skill,
            Construct::Cognitive => &mut self.cognitive,
            Construct::Ability => &mut self.ability,
            Construct::RealWorld => &mut self.real_world,
            Construct::Other => return,
        };
        *slot = score;
    }

    /// Unweighted mean of all six dimensions
    pub fn average(&self) -> f64 {
        let total: u32 = Construct::ALL.iter().map(|&c| u32::from(self.get(c))).sum();
        f64::from(total) / Construct::ALL.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (Construct, u8)> + '_ {
        Construct::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Scores {
    pub psychometric: u8,
    pub technical: u8,
    pub overall: u8,
    pub wiscar: WiscarScores,
}

/// Final record handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssessmentResults {
    pub scores: Scores,
    pub recommendation: Recommendation,
    pub confidence: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub career_paths: Vec<String>,
    pub next_steps: Vec<String>,
}

/// How one resolved answer fed into aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerContribution {
    pub question_id: String,
    pub category: Category,
    pub construct: Option<Construct>,
    pub weight: f64,
    pub normalized: f64,
    pub rule: Rule,
}

/// Bookkeeping from the answer resolution step. Never affects the results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreDiagnostics {
    /// Answers passed in, duplicates included
    pub submitted: usize,
    /// Older answers dropped because a later one had the same question id
    pub superseded: usize,
    /// Question ids of live answers with no catalog entry
    pub excluded: Vec<String>,
    /// Catalog question ids without a live answer
    pub unanswered: Vec<String>,
    pub contributions: Vec<AnswerContribution>,
}

impl ScoreDiagnostics {
    /// Number of answers that took part in aggregation
    pub fn considered(&self) -> usize {
        self.contributions.len()
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }
}
