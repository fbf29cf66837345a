use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::types::Answer;

/// Ordered collection of answers holding at most one live answer per question.
///
/// Recording an answer for a question that already has one replaces the old
/// answer in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Answer>", into = "Vec<Answer>")]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Returns the superseded answer, if any.
    pub fn record(&mut self, answer: Answer) -> Option<Answer> {
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == answer.question_id)
        {
            Some(slot) => Some(std::mem::replace(slot, answer)),
            None => {
                self.answers.push(answer);
                None
            }
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.answers.iter()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.record(answer);
        }
        set
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        answers.into_iter().collect()
    }
}

impl From<AnswerSet> for Vec<Answer> {
    fn from(set: AnswerSet) -> Self {
        set.answers
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}

/// Load an answer file.
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML. Both
/// hold a plain list of answers; duplicates collapse to the last entry.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let answers: Vec<Answer> = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid YAML in {}", path.display()))?
    };

    Ok(AnswerSet::from(answers))
}
