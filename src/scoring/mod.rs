pub mod catalog;
pub mod engine;
pub mod feedback;
pub mod normalize;
pub mod results;
pub mod rubric;
pub mod validation;

pub use catalog::Catalog;
pub use engine::{evaluate, score, Evaluation};
pub use normalize::{normalize, Normalized, Rule, NEUTRAL};
pub use results::{
    AnswerContribution, AssessmentResults, Recommendation, ScoreDiagnostics, Scores, WiscarScores,
};
pub use rubric::Rubric;
pub use validation::validate_catalog;
