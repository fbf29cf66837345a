use serde::{Deserialize, Serialize};

use crate::assessment::{default_questions, Question};
use crate::scoring::{Catalog, Rubric};

/// Top-level config file.
///
/// Both sections are optional; whatever is left out falls back to the
/// built-in questionnaire and rubric.
///
/// Example YAML:
/// ```yaml
/// catalog:
///   - id: t1
///     kind: single-choice
///     category: technical
///     options: ["A", "B"]
///     weight: 1.5
/// rubric:
///   answer_key:
///     t1: "B"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<Question>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<Rubric>,
}

impl Config {
    /// Fully spelled-out built-in configuration (what `init` writes)
    pub fn builtin() -> Self {
        Self {
            catalog: Some(default_questions()),
            rubric: Some(Rubric::builtin()),
        }
    }

    /// Build the effective catalog, filling gaps from the built-ins
    pub fn catalog(&self) -> Catalog {
        let questions = self.catalog.clone().unwrap_or_else(default_questions);
        let rubric = self.rubric.clone().unwrap_or_else(Rubric::builtin);
        Catalog::new(questions, rubric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_builtins() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let catalog = config.catalog();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.rubric(), &Rubric::builtin());
    }

    #[test]
    fn test_builtin_config_serde_roundtrip() {
        let config = Config::builtin();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_custom_catalog_keeps_builtin_rubric() {
        let yaml = r#"
catalog:
  - id: t5
    kind: multiple-choice
    category: technical
    options: ["TensorFlow", "Hugging Face Transformers"]
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.rubric().correct_option("t5"),
            Some("Hugging Face Transformers")
        );
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let yaml = r#"
questions: []
"#;
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
