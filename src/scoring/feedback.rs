//! Narrative feedback: fixed statements selected by score thresholds.

use super::results::{Recommendation, Scores};
use crate::assessment::Construct;

#[derive(Debug, Clone, Copy)]
pub enum Metric {
    Psychometric,
    Technical,
    Dimension(Construct),
}

impl Metric {
    pub fn value(self, scores: &Scores) -> u8 {
        match self {
            Metric::Psychometric => scores.psychometric,
            Metric::Technical => scores.technical,
            Metric::Dimension(construct) => scores.wiscar.get(construct),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Threshold {
    AtLeast(u8),
    Below(u8),
}

impl Threshold {
    pub fn matches(self, score: u8) -> bool {
        match self {
            Threshold::AtLeast(n) => score >= n,
            Threshold::Below(n) => score < n,
        }
    }
}

struct Rule {
    metric: Metric,
    threshold: Threshold,
    statement: &'static str,
}

const fn rule(metric: Metric, threshold: Threshold, statement: &'static str) -> Rule {
    Rule {
        metric,
        threshold,
        statement,
    }
}

const STRENGTH_RULES: &[Rule] = &[
    rule(
        Metric::Psychometric,
        Threshold::AtLeast(75),
        "Strong psychological fit for LLM development",
    ),
    rule(
        Metric::Technical,
        Threshold::AtLeast(75),
        "Solid technical foundation",
    ),
    rule(
        Metric::Dimension(Construct::Will),
        Threshold::AtLeast(80),
        "High motivation and commitment",
    ),
    rule(
        Metric::Dimension(Construct::Interest),
        Threshold::AtLeast(80),
        "Genuine passion for AI technology",
    ),
    rule(
        Metric::Dimension(Construct::Cognitive),
        Threshold::AtLeast(75),
        "Excellent problem-solving abilities",
    ),
    rule(
        Metric::Dimension(Construct::Ability),
        Threshold::AtLeast(75),
        "Strong learning and adaptation skills",
    ),
];

const STRENGTH_FALLBACK: &str = "Willingness to learn and improve";

const IMPROVEMENT_RULES: &[Rule] = &[
    rule(
        Metric::Technical,
        Threshold::Below(60),
        "Strengthen technical knowledge in AI/ML fundamentals",
    ),
    rule(
        Metric::Dimension(Construct::Skill),
        Threshold::Below(60),
        "Gain more hands-on experience with coding projects",
    ),
    rule(
        Metric::Dimension(Construct::RealWorld),
        Threshold::Below(60),
        "Learn about production challenges and best practices",
    ),
    rule(
        Metric::Psychometric,
        Threshold::Below(60),
        "Develop deeper interest in research and complex problem-solving",
    ),
    rule(
        Metric::Dimension(Construct::Will),
        Threshold::Below(60),
        "Build more consistent learning and practice habits",
    ),
];

const IMPROVEMENT_FALLBACK: &str = "Continue building on your existing foundation";

/// Sub-score below which a conditional candidate gets targeted next steps
const TARGETED_STEP_THRESHOLD: u8 = 70;

fn apply_rules(rules: &[Rule], scores: &Scores, fallback: &str) -> Vec<String> {
    let fired: Vec<String> = rules
        .iter()
        .filter(|r| r.threshold.matches(r.metric.value(scores)))
        .map(|r| r.statement.to_string())
        .collect();

    if fired.is_empty() {
        vec![fallback.to_string()]
    } else {
        fired
    }
}

pub fn strengths(scores: &Scores) -> Vec<String> {
    apply_rules(STRENGTH_RULES, scores, STRENGTH_FALLBACK)
}

pub fn improvements(scores: &Scores) -> Vec<String> {
    apply_rules(IMPROVEMENT_RULES, scores, IMPROVEMENT_FALLBACK)
}

pub fn career_paths(recommendation: Recommendation) -> Vec<String> {
    let paths: &[&str] = match recommendation {
        Recommendation::Positive => &[
            "LLM Developer/Engineer",
            "Prompt Engineer",
            "AI Research Engineer",
            "NLP Engineer",
            "MLOps + LLM Integration Specialist",
        ],
        Recommendation::Conditional => &[
            "Junior LLM Developer (with mentorship)",
            "AI Integration Specialist",
            "Data Engineer (AI focus)",
            "Technical AI Product Manager",
            "AI Research Assistant",
        ],
        Recommendation::Negative => &[
            "Data Analyst/Scientist",
            "Software Developer (with AI components)",
            "AI Product Manager",
            "Technical Writer (AI documentation)",
            "AI Ethics and Policy Specialist",
        ],
    };
    paths.iter().map(|p| p.to_string()).collect()
}

pub fn next_steps(recommendation: Recommendation, scores: &Scores) -> Vec<String> {
    let mut steps: Vec<&str> = Vec::new();

    match recommendation {
        Recommendation::Positive => steps.extend([
            "Start building LLM projects with Hugging Face Transformers",
            "Contribute to open-source LLM repositories",
            "Join LLM/AI communities (EleutherAI, Cohere Discord)",
            "Apply for LLM developer positions or internships",
        ]),
        Recommendation::Conditional => {
            if scores.technical < TARGETED_STEP_THRESHOLD {
                steps.push("Complete a comprehensive ML/AI course");
            }
            if scores.psychometric < TARGETED_STEP_THRESHOLD {
                steps.push("Engage more deeply with AI research and experimentation");
            }
            steps.extend([
                "Build 2-3 substantial AI projects for your portfolio",
                "Seek mentorship from experienced LLM developers",
            ]);
        }
        Recommendation::Negative => steps.extend([
            "Start with AI fundamentals and programming basics",
            "Explore adjacent technical roles in the AI ecosystem",
            "Consider AI-focused product or business roles",
            "Re-evaluate after 6-12 months of learning",
        ]),
    }

    steps.into_iter().map(str::to_string).collect()
}
