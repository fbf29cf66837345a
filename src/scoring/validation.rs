use std::collections::HashSet;
use tracing::warn;

use super::catalog::Catalog;
use crate::assessment::{Category, Construct, QuestionKind};

/// Validate a catalog and its rubric at startup.
/// Returns all validation errors at once (not just the first).
///
/// The engine never requires this; it degrades to neutral scores on bad
/// input. Validation exists so authoring mistakes surface before anyone
/// takes the questionnaire.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, question) in catalog.questions().iter().enumerate() {
        let at = format!("catalog[{}] ({})", i, question.id);

        if question.id.trim().is_empty() {
            errors.push(format!("catalog[{}].id: must not be empty", i));
        } else if !seen.insert(question.id.as_str()) {
            errors.push(format!("{}.id: duplicate question id '{}'", at, question.id));
        }

        if let Some(weight) = question.weight {
            if !weight.is_finite() || weight <= 0.0 {
                errors.push(format!("{}.weight: must be a positive number, got {}", at, weight));
            }
        }

        if let Some(ref scale) = question.scale {
            if !scale.min.is_finite() || !scale.max.is_finite() || scale.max <= scale.min {
                errors.push(format!(
                    "{}.scale: max must be greater than min (min {}, max {})",
                    at, scale.min, scale.max
                ));
            }
        }

        if question.kind.is_choice() && question.options.is_empty() {
            errors.push(format!("{}.options: choice question has no options", at));
        }

        if question.kind == QuestionKind::Unknown {
            errors.push(format!("{}.kind: unrecognized question kind", at));
        }

        if question.construct == Some(Construct::Other) {
            warn!(
                question_id = %question.id,
                "construct is not a WISCAR dimension, question feeds no dimension score"
            );
        }
    }

    let rubric = catalog.rubric();

    for (id, correct) in &rubric.answer_key {
        let Some(question) = catalog.question(id) else {
            errors.push(format!("rubric.answer_key.{}: unknown question id", id));
            continue;
        };
        if question.category != Category::Technical {
            errors.push(format!(
                "rubric.answer_key.{}: only technical questions are graded, '{}' is {}",
                id, id, question.category
            ));
        }
        if !question.kind.is_choice() {
            errors.push(format!("rubric.answer_key.{}: question is not a choice question", id));
        }
        if !question.options.iter().any(|o| o == correct) {
            errors.push(format!(
                "rubric.answer_key.{}: correct option '{}' is not one of the question's options",
                id, correct
            ));
        }
    }

    for (id, table) in &rubric.desirability {
        let question = catalog.question(id);
        if question.is_none() {
            errors.push(format!("rubric.desirability.{}: unknown question id", id));
        }

        for (option, value) in table {
            if !(0.0..=1.0).contains(value) {
                errors.push(format!(
                    "rubric.desirability.{}['{}']: must be within 0..=1, got {}",
                    id, option, value
                ));
            }
            if let Some(q) = question {
                if !q.options.iter().any(|o| o == option) {
                    errors.push(format!(
                        "rubric.desirability.{}['{}']: not one of the question's options",
                        id, option
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{default_questions, Question, Scale};
    use crate::scoring::Rubric;

    fn choice_question(id: &str, category: Category, options: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            kind: QuestionKind::SingleChoice,
            category,
            section: String::new(),
            prompt: String::new(),
            construct: None,
            scale: None,
            options: options.iter().map(|o| o.to_string()).collect(),
            weight: None,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::builtin()).is_ok());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::new(vec![], Rubric::default())).is_ok());
    }

    #[test]
    fn test_trait_construct_is_not_an_error() {
        let mut q = choice_question("p1", Category::Psychometric, &[]);
        q.kind = QuestionKind::Scale;
        q.construct = Some(Construct::Other);
        assert!(validate_catalog(&Catalog::new(vec![q], Rubric::default())).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut questions = default_questions();
        questions.push(questions[0].clone());
        let errors = validate_catalog(&Catalog::new(questions, Rubric::builtin())).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duplicate question id 'p1'"));
    }

    #[test]
    fn test_bad_weight_and_scale() {
        let mut q = choice_question("q", Category::Psychometric, &[]);
        q.kind = QuestionKind::Scale;
        q.weight = Some(0.0);
        q.scale = Some(Scale::new(5.0, 1.0));

        let errors = validate_catalog(&Catalog::new(vec![q], Rubric::default())).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("catalog[0] (q).weight"));
        assert!(errors[1].contains("catalog[0] (q).scale"));
    }

    #[test]
    fn test_choice_without_options() {
        let q = choice_question("q", Category::Technical, &[]);
        let errors = validate_catalog(&Catalog::new(vec![q], Rubric::default())).unwrap_err();
        assert!(errors[0].contains("options"));
    }

    #[test]
    fn test_answer_key_problems() {
        let mut rubric = Rubric::default();
        rubric.answer_key.insert("missing".to_string(), "A".to_string());
        rubric.answer_key.insert("psy".to_string(), "A".to_string());
        rubric.answer_key.insert("tech".to_string(), "C".to_string());

        let catalog = Catalog::new(
            vec![
                choice_question("psy", Category::Psychometric, &["A", "B"]),
                choice_question("tech", Category::Technical, &["A", "B"]),
            ],
            rubric,
        );

        let errors = validate_catalog(&catalog).unwrap_err();
        // BTreeMap order: missing, psy, tech
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("rubric.answer_key.missing: unknown question id"));
        assert!(errors[1].contains("only technical questions are graded"));
        assert!(errors[2].contains("correct option 'C'"));
    }

    #[test]
    fn test_desirability_problems() {
        let mut rubric = Rubric::default();
        rubric.desirability.insert(
            "q".to_string(),
            [("A".to_string(), 1.5), ("Z".to_string(), 0.5)].into_iter().collect(),
        );

        let catalog = Catalog::new(
            vec![choice_question("q", Category::Wiscar, &["A", "B"])],
            rubric,
        );

        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("must be within 0..=1"));
        assert!(errors[1].contains("rubric.desirability.q['Z']"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut q = choice_question("q", Category::Technical, &[]);
        q.weight = Some(-1.0);
        let mut rubric = Rubric::default();
        rubric.answer_key.insert("nope".to_string(), "x".to_string());

        let errors = validate_catalog(&Catalog::new(vec![q], rubric)).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
