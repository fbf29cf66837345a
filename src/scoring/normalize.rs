use serde::Serialize;

use super::rubric::Rubric;
use crate::assessment::{AnswerValue, Category, Question, QuestionKind};

/// Score used whenever an answer cannot be graded
pub const NEUTRAL: f64 = 0.5;

/// Which rule produced a normalized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Linear position within the scale bounds
    Scale,
    /// Exact match against the answer key
    Graded,
    /// Option looked up in the desirability table
    Desirability,
    /// Nothing applied; neutral default
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub value: f64,
    pub rule: Rule,
}

impl Normalized {
    fn new(value: f64, rule: Rule) -> Self {
        Self { value, rule }
    }

    fn neutral() -> Self {
        Self::new(NEUTRAL, Rule::Neutral)
    }
}

/// Map a raw answer onto [0, 1] according to its question.
///
/// Scale answers are not clamped: a value outside the declared bounds maps
/// outside [0, 1]. Never fails; anything ungradable is `NEUTRAL`.
pub fn normalize(question: &Question, value: &AnswerValue, rubric: &Rubric) -> Normalized {
    match question.kind {
        QuestionKind::Scale => normalize_scale(question, value),
        QuestionKind::SingleChoice | QuestionKind::ForcedChoice => {
            normalize_choice(question, value, rubric)
        }
        QuestionKind::Unknown => Normalized::neutral(),
    }
}

fn normalize_scale(question: &Question, value: &AnswerValue) -> Normalized {
    let Some(raw) = value.as_number() else {
        return Normalized::neutral();
    };
    let (min, max) = question.effective_scale();
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || !raw.is_finite() {
        return Normalized::neutral();
    }
    Normalized::new((raw - min) / span, Rule::Scale)
}

fn normalize_choice(question: &Question, value: &AnswerValue, rubric: &Rubric) -> Normalized {
    if question.category == Category::Technical {
        if let Some(correct) = rubric.correct_option(&question.id) {
            let hit = value.as_text() == Some(correct);
            return Normalized::new(if hit { 1.0 } else { 0.0 }, Rule::Graded);
        }
    }

    let found = rubric
        .desirability_table(&question.id)
        .zip(value.as_text())
        .and_then(|(table, text)| table.get(text));

    match found {
        Some(&desirability) => Normalized::new(desirability, Rule::Desirability),
        None => Normalized::neutral(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Scale;

    fn question(id: &str, kind: QuestionKind, category: Category) -> Question {
        Question {
            id: id.to_string(),
            kind,
            category,
            section: String::new(),
            prompt: String::new(),
            construct: None,
            scale: None,
            options: vec![],
            weight: None,
        }
    }

    fn scale_question(min: f64, max: f64) -> Question {
        let mut q = question("s", QuestionKind::Scale, Category::Psychometric);
        q.scale = Some(Scale::new(min, max));
        q
    }

    #[test]
    fn test_scale_linear() {
        let q = scale_question(0.0, 20.0);
        let rubric = Rubric::default();
        assert_eq!(normalize(&q, &10.0.into(), &rubric).value, 0.5);
        assert_eq!(normalize(&q, &0.0.into(), &rubric).value, 0.0);
        assert_eq!(normalize(&q, &20.0.into(), &rubric).value, 1.0);
        assert_eq!(normalize(&q, &5.0.into(), &rubric).rule, Rule::Scale);
    }

    #[test]
    fn test_scale_defaults_to_one_to_five() {
        let q = question("s", QuestionKind::Scale, Category::Wiscar);
        let n = normalize(&q, &4.0.into(), &Rubric::default());
        assert_eq!(n.value, 0.75);
    }

    #[test]
    fn test_scale_out_of_range_not_clamped() {
        let q = scale_question(1.0, 5.0);
        let n = normalize(&q, &7.0.into(), &Rubric::default());
        assert_eq!(n.value, 1.5);
    }

    #[test]
    fn test_scale_numeric_string() {
        let q = scale_question(1.0, 5.0);
        assert_eq!(normalize(&q, &"3".into(), &Rubric::default()).value, 0.5);
    }

    #[test]
    fn test_scale_unparseable_is_neutral() {
        let q = scale_question(1.0, 5.0);
        let n = normalize(&q, &"often".into(), &Rubric::default());
        assert_eq!(n, Normalized::neutral());
    }

    #[test]
    fn test_degenerate_scale_is_neutral() {
        let q = scale_question(3.0, 3.0);
        assert_eq!(normalize(&q, &3.0.into(), &Rubric::default()).value, NEUTRAL);
    }

    #[test]
    fn test_non_finite_scale_is_neutral() {
        let q = scale_question(f64::NAN, 5.0);
        assert_eq!(normalize(&q, &3.0.into(), &Rubric::default()), Normalized::neutral());
        let q = scale_question(1.0, f64::INFINITY);
        assert_eq!(normalize(&q, &3.0.into(), &Rubric::default()), Normalized::neutral());
    }

    #[test]
    fn test_graded_exact_match() {
        let rubric = Rubric::builtin();
        let q = question("t5", QuestionKind::SingleChoice, Category::Technical);

        let right = normalize(&q, &"Hugging Face Transformers".into(), &rubric);
        assert_eq!(right.value, 1.0);
        assert_eq!(right.rule, Rule::Graded);

        assert_eq!(normalize(&q, &"PyTorch".into(), &rubric).value, 0.0);
        // Near misses are wrong
        assert_eq!(normalize(&q, &"Hugging Face transformers".into(), &rubric).value, 0.0);
        assert_eq!(normalize(&q, &"Hugging Face Transformers ".into(), &rubric).value, 0.0);
        assert_eq!(normalize(&q, &1.0.into(), &rubric).value, 0.0);
    }

    #[test]
    fn test_answer_key_ignored_outside_technical() {
        let mut rubric = Rubric::default();
        rubric.answer_key.insert("x1".to_string(), "A".to_string());
        let q = question("x1", QuestionKind::SingleChoice, Category::Psychometric);
        let n = normalize(&q, &"B".into(), &rubric);
        assert_eq!(n, Normalized::neutral());
    }

    #[test]
    fn test_technical_without_key_is_neutral() {
        let q = question("t9", QuestionKind::ForcedChoice, Category::Technical);
        let n = normalize(&q, &"anything".into(), &Rubric::builtin());
        assert_eq!(n.value, NEUTRAL);
        assert_eq!(n.rule, Rule::Neutral);
    }

    #[test]
    fn test_desirability_lookup() {
        let rubric = Rubric::builtin();
        let q = question("w6", QuestionKind::SingleChoice, Category::Wiscar);
        let n = normalize(&q, &"All of the above".into(), &rubric);
        assert_eq!(n.value, 1.0);
        assert_eq!(n.rule, Rule::Desirability);

        let p3 = question("p3", QuestionKind::ForcedChoice, Category::Psychometric);
        assert_eq!(
            normalize(&p3, &"Create detailed documentation".into(), &rubric).value,
            0.6
        );
    }

    #[test]
    fn test_desirability_miss_is_neutral() {
        let rubric = Rubric::builtin();
        let q = question("w3", QuestionKind::SingleChoice, Category::Wiscar);
        assert_eq!(normalize(&q, &"Something else".into(), &rubric).value, NEUTRAL);
        assert_eq!(normalize(&q, &2.0.into(), &rubric).value, NEUTRAL);
    }

    #[test]
    fn test_unknown_kind_is_neutral() {
        let q = question("u", QuestionKind::Unknown, Category::Technical);
        assert_eq!(normalize(&q, &9.0.into(), &Rubric::builtin()).value, NEUTRAL);
    }
}
