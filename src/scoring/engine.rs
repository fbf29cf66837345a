use std::collections::HashMap;
use tracing::debug;

use super::catalog::Catalog;
use super::feedback;
use super::normalize::normalize;
use super::results::{
    AnswerContribution, AssessmentResults, Recommendation, ScoreDiagnostics, Scores, WiscarScores,
};
use crate::assessment::{Answer, Category, Construct};

const PSYCHOMETRIC_SHARE: f64 = 0.30;
const TECHNICAL_SHARE: f64 = 0.40;
const WISCAR_SHARE: f64 = 0.30;

const POSITIVE_OVERALL: u8 = 75;
const POSITIVE_PSYCHOMETRIC: u8 = 70;
const POSITIVE_TECHNICAL: u8 = 65;

const CONDITIONAL_OVERALL: u8 = 60;
const CONDITIONAL_PSYCHOMETRIC: u8 = 65;
const CONDITIONAL_TECHNICAL: u8 = 60;

const CONFIDENCE_FLOOR: u8 = 50;
const CONFIDENCE_CAP: u8 = 95;

/// Results plus the resolution bookkeeping that produced them.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub results: AssessmentResults,
    pub diagnostics: ScoreDiagnostics,
}

/// Score a completed answer set against a catalog.
///
/// Pure and deterministic: the same catalog and answers always give the same
/// results. Incomplete or partly invalid input still produces a well-formed
/// record.
pub fn score(catalog: &Catalog, answers: &[Answer]) -> AssessmentResults {
    evaluate(catalog, answers).results
}

/// Like [`score`], but also returns the diagnostics gathered along the way.
pub fn evaluate(catalog: &Catalog, answers: &[Answer]) -> Evaluation {
    let diagnostics = resolve(catalog, answers);
    let contributions = &diagnostics.contributions;

    let psychometric = category_score(contributions, Category::Psychometric);
    let technical = category_score(contributions, Category::Technical);

    let mut wiscar = WiscarScores::default();
    for construct in Construct::ALL {
        wiscar.set(construct, construct_score(contributions, construct));
    }

    let overall = overall_score(psychometric, technical, &wiscar);
    let recommendation = recommend(overall, psychometric, technical);

    let scores = Scores {
        psychometric,
        technical,
        overall,
        wiscar,
    };

    debug!(
        considered = diagnostics.considered(),
        excluded = diagnostics.excluded_count(),
        superseded = diagnostics.superseded,
        overall,
        "scored answer set"
    );

    let results = AssessmentResults {
        scores,
        recommendation,
        confidence: if diagnostics.considered() == 0 {
            // No answer took part, so there is no signal to be confident in
            CONFIDENCE_FLOOR
        } else {
            confidence(overall)
        },
        strengths: feedback::strengths(&scores),
        improvements: feedback::improvements(&scores),
        career_paths: feedback::career_paths(recommendation),
        next_steps: feedback::next_steps(recommendation, &scores),
    };

    Evaluation {
        results,
        diagnostics,
    }
}

/// Keep the last answer per question id, drop ids the catalog doesn't know,
/// and normalize what remains.
fn resolve(catalog: &Catalog, answers: &[Answer]) -> ScoreDiagnostics {
    let mut latest: HashMap<&str, usize> = HashMap::with_capacity(answers.len());
    for (i, answer) in answers.iter().enumerate() {
        latest.insert(answer.question_id.as_str(), i);
    }

    let mut diagnostics = ScoreDiagnostics {
        submitted: answers.len(),
        ..Default::default()
    };

    for (i, answer) in answers.iter().enumerate() {
        let id = answer.question_id.as_str();
        if latest.get(id) != Some(&i) {
            debug!(question_id = id, "answer superseded by a later one");
            diagnostics.superseded += 1;
            continue;
        }

        let Some(question) = catalog.question(id) else {
            debug!(question_id = id, "answer excluded: unknown question");
            diagnostics.excluded.push(id.to_string());
            continue;
        };

        let normalized = normalize(question, &answer.value, catalog.rubric());
        diagnostics.contributions.push(AnswerContribution {
            question_id: question.id.clone(),
            category: question.category,
            construct: question.construct,
            weight: question.effective_weight(),
            normalized: normalized.value,
            rule: normalized.rule,
        });
    }

    // Only the question an id resolves to counts, so duplicate ids list once
    diagnostics.unanswered = catalog
        .questions()
        .iter()
        .filter(|q| catalog.question(&q.id).is_some_and(|first| std::ptr::eq(first, *q)))
        .filter(|q| !latest.contains_key(q.id.as_str()))
        .map(|q| q.id.clone())
        .collect();

    diagnostics
}

/// Round to the nearest integer and pin into 0..=100
fn to_percent(value: f64) -> u8 {
    // NaN saturates to 0 in the cast
    value.round().clamp(0.0, 100.0) as u8
}

/// Weighted mean of normalized values for one category, as a percentage.
fn category_score(contributions: &[AnswerContribution], category: Category) -> u8 {
    let (weighted, total_weight) = contributions
        .iter()
        .filter(|c| c.category == category)
        .fold((0.0, 0.0), |(sum, weight), c| {
            (sum + c.normalized * c.weight, weight + c.weight)
        });

    if !total_weight.is_finite() || total_weight <= 0.0 {
        return 0;
    }
    to_percent(weighted / total_weight * 100.0)
}

/// Unweighted mean for one WISCAR dimension; question weights do not apply.
fn construct_score(contributions: &[AnswerContribution], construct: Construct) -> u8 {
    let (sum, count) = contributions
        .iter()
        .filter(|c| c.construct == Some(construct))
        .fold((0.0, 0usize), |(sum, count), c| {
            (sum + c.normalized * 100.0, count + 1)
        });

    if count == 0 {
        return 0;
    }
    to_percent(sum / count as f64)
}

pub fn overall_score(psychometric: u8, technical: u8, wiscar: &WiscarScores) -> u8 {
    to_percent(
        f64::from(psychometric) * PSYCHOMETRIC_SHARE
            + f64::from(technical) * TECHNICAL_SHARE
            + wiscar.average() * WISCAR_SHARE,
    )
}

/// First matching tier wins.
pub fn recommend(overall: u8, psychometric: u8, technical: u8) -> Recommendation {
    if overall >= POSITIVE_OVERALL
        && psychometric >= POSITIVE_PSYCHOMETRIC
        && technical >= POSITIVE_TECHNICAL
    {
        Recommendation::Positive
    } else if overall >= CONDITIONAL_OVERALL
        && (psychometric >= CONDITIONAL_PSYCHOMETRIC || technical >= CONDITIONAL_TECHNICAL)
    {
        Recommendation::Conditional
    } else {
        Recommendation::Negative
    }
}

/// Grows with distance from the midpoint; capped below certainty.
pub fn confidence(overall: u8) -> u8 {
    (CONFIDENCE_FLOOR + overall.abs_diff(50)).min(CONFIDENCE_CAP)
}
