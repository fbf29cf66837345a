use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answer grading tables, keyed by question id.
///
/// Kept apart from the questions themselves so the engine carries no
/// question-specific strings.
///
/// Example YAML:
/// ```yaml
/// rubric:
///   answer_key:
///     t5: "Hugging Face Transformers"
///   desirability:
///     w3:
///       "Complete beginner": 0.2
///       "Advanced practitioner with research experience": 1.0
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Rubric {
    /// Correct option text for graded technical questions
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub answer_key: BTreeMap<String, String>,

    /// Judged desirability in [0, 1] of each option text, per question
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub desirability: BTreeMap<String, BTreeMap<String, f64>>,
}

impl Rubric {
    pub fn correct_option(&self, question_id: &str) -> Option<&str> {
        self.answer_key.get(question_id).map(String::as_str)
    }

    pub fn desirability_table(&self, question_id: &str) -> Option<&BTreeMap<String, f64>> {
        self.desirability.get(question_id)
    }

    /// Grading tables for the built-in questionnaire
    pub fn builtin() -> Self {
        let answer_key = [
            ("t1", "Fine-tuning allows model weights to be updated for specific tasks"),
            ("t2", "Allowing the model to focus on relevant parts of the input sequence"),
            ("t3", "Combining a retrieval system with a language model"),
            ("t5", "Hugging Face Transformers"),
        ]
        .into_iter()
        .map(|(id, option)| (id.to_string(), option.to_string()))
        .collect();

        let desirability = [
            (
                "p3",
                &[
                    ("Build a working prototype quickly", 0.7),
                    ("Write a comprehensive research paper", 0.9),
                    ("Create detailed documentation", 0.6),
                    ("Optimize existing systems", 0.8),
                ][..],
            ),
            (
                "p5",
                &[
                    ("The cutting-edge technology and innovation", 0.9),
                    ("Solving real-world problems at scale", 0.8),
                    ("The intellectual challenge", 0.9),
                    ("Career advancement opportunities", 0.5),
                    ("Building products people will use", 0.7),
                ][..],
            ),
            (
                "w3",
                &[
                    ("Complete beginner", 0.2),
                    ("Taken courses, no practical experience", 0.4),
                    ("Built simple projects and experiments", 0.6),
                    ("Professional experience with ML systems", 0.8),
                    ("Advanced practitioner with research experience", 1.0),
                ][..],
            ),
            (
                "w6",
                &[
                    ("Computational costs and latency", 0.7),
                    ("Ensuring accuracy and reducing hallucinations", 0.8),
                    ("Data privacy and security concerns", 0.7),
                    ("Integration with existing systems", 0.6),
                    ("All of the above", 1.0),
                ][..],
            ),
        ]
        .into_iter()
        .map(|(id, table)| {
            let table = table
                .iter()
                .map(|(option, value)| (option.to_string(), *value))
                .collect();
            (id.to_string(), table)
        })
        .collect();

        Self {
            answer_key,
            desirability,
        }
    }
}
