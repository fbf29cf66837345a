use std::collections::HashMap;

use super::rubric::Rubric;
use crate::assessment::{default_questions, Question};

/// Read-only question catalog paired with its grading rubric.
///
/// Questions keep their presentation order; lookups by id go through an
/// index built once at construction. If two questions share an id the first
/// one wins (validation reports the duplicate).
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
    rubric: Rubric,
}

impl Catalog {
    pub fn new(questions: Vec<Question>, rubric: Rubric) -> Self {
        let mut index = HashMap::with_capacity(questions.len());
        for (i, question) in questions.iter().enumerate() {
            index.entry(question.id.clone()).or_insert(i);
        }
        Self {
            questions,
            index,
            rubric,
        }
    }

    /// The built-in questionnaire with its rubric
    pub fn builtin() -> Self {
        Self::new(default_questions(), Rubric::builtin())
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
