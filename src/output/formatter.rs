use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::assessment::{section_info, Construct};
use crate::scoring::{
    AssessmentResults, Catalog, Recommendation, Rubric, ScoreDiagnostics, WiscarScores,
};

/// Bar width used when stdout is not a terminal
const DEFAULT_BAR_WIDTH: usize = 20;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;
/// Label column (24) + brackets, spacing and the score itself
const SCORE_LINE_OVERHEAD: usize = 34;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

fn bar_width(term_width: Option<usize>) -> usize {
    match term_width {
        Some(width) => width
            .saturating_sub(SCORE_LINE_OVERHEAD)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Render a 0-100 score as a fixed-width bar: "#####-----"
pub fn format_bar(score: u8, width: usize) -> String {
    let filled = (usize::from(score.min(100)) * width + 50) / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    High,
    Mid,
    Low,
}

fn band(score: u8) -> Band {
    if score >= 75 {
        Band::High
    } else if score >= 60 {
        Band::Mid
    } else {
        Band::Low
    }
}

fn paint(text: &str, band: Band, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match band {
        Band::High => text.green().to_string(),
        Band::Mid => text.yellow().to_string(),
        Band::Low => text.red().to_string(),
    }
}

fn format_score_line(label: &str, score: u8, width: usize, use_colors: bool) -> String {
    let bar = paint(&format_bar(score, width), band(score), use_colors);
    format!("  {:<24}[{}] {:>3}", label, bar, score)
}

fn recommendation_band(recommendation: Recommendation) -> Band {
    match recommendation {
        Recommendation::Positive => Band::High,
        Recommendation::Conditional => Band::Mid,
        Recommendation::Negative => Band::Low,
    }
}

fn format_list(title: &str, items: &[String], bullet: &str, use_colors: bool) -> String {
    let heading = if use_colors {
        title.bold().to_string()
    } else {
        title.to_string()
    };
    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("  {} {}", bullet, item))
        .collect();
    format!("{}\n{}", heading, lines.join("\n"))
}

/// Format the full human-readable report
pub fn format_report(results: &AssessmentResults, use_colors: bool) -> String {
    let width = bar_width(get_terminal_width());
    let scores = &results.scores;

    let verdict = paint(
        results.recommendation.label(),
        recommendation_band(results.recommendation),
        use_colors,
    );
    let headline = format!(
        "Overall: {}/100  {}  (confidence {}%)",
        scores.overall, verdict, results.confidence
    );
    let headline = if use_colors {
        headline.bold().to_string()
    } else {
        headline
    };

    let mut sections = vec![headline];

    let mut score_lines = vec![
        format_score_line("Psychometric fit", scores.psychometric, width, use_colors),
        format_score_line("Technical readiness", scores.technical, width, use_colors),
    ];
    score_lines.extend(
        scores
            .wiscar
            .iter()
            .map(|(construct, score)| format_score_line(construct.label(), score, width, use_colors)),
    );
    sections.push(score_lines.join("\n"));

    sections.push(format_list("Strengths", &results.strengths, "+", use_colors));
    sections.push(format_list("Areas to improve", &results.improvements, "-", use_colors));
    sections.push(format_list("Suggested career paths", &results.career_paths, "*", use_colors));

    let numbered: Vec<String> = results
        .next_steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect();
    sections.push(format_list("Next steps", &numbered, " ", use_colors));

    sections.join("\n\n")
}

/// Pretty JSON for machine consumption
pub fn format_json(results: &AssessmentResults) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Format scores as a single tab-separated line for scripting
/// Columns: overall, psychometric, technical, the six WISCAR dimensions,
/// recommendation, confidence (no headers, no colors)
pub fn format_tsv(results: &AssessmentResults) -> String {
    let scores = &results.scores;
    let mut columns = vec![
        scores.overall.to_string(),
        scores.psychometric.to_string(),
        scores.technical.to_string(),
    ];
    columns.extend(scores.wiscar.iter().map(|(_, score)| score.to_string()));
    columns.push(results.recommendation.key().to_string());
    columns.push(results.confidence.to_string());
    columns.join("\t")
}

/// List catalog questions grouped by section, in catalog order
pub fn format_catalog(catalog: &Catalog, use_colors: bool) -> String {
    if catalog.is_empty() {
        return "No questions in catalog.".to_string();
    }

    let term_width = get_terminal_width();
    let rubric: &Rubric = catalog.rubric();
    let mut out: Vec<String> = Vec::new();
    let mut current_section: Option<&str> = None;

    for question in catalog.questions() {
        if current_section != Some(question.section.as_str()) {
            current_section = Some(question.section.as_str());
            let name = if question.section.is_empty() {
                "(no section)"
            } else {
                question.section.as_str()
            };
            let mut heading = if use_colors {
                name.bold().to_string()
            } else {
                name.to_string()
            };
            let info = section_info(&question.section);
            if let Some(info) = info {
                heading = format!("{} ({})", heading, info.duration);
            }
            if !out.is_empty() {
                out.push(String::new());
            }
            out.push(heading);
            if let Some(info) = info {
                let description = match term_width {
                    Some(width) => truncate_text(info.description, width.max(20)),
                    None => info.description.to_string(),
                };
                if use_colors {
                    out.push(description.dimmed().to_string());
                } else {
                    out.push(description);
                }
            }
        }

        let mut tags = vec![question.category.to_string()];
        if let Some(construct) = question.construct {
            tags.push(construct_tag(construct).to_string());
        }
        if rubric.correct_option(&question.id).is_some() {
            tags.push("graded".to_string());
        }
        let tags = format!("[{}]", tags.join(", "));

        let prefix = format!("  {:<4}", question.id);
        let fixed = prefix.chars().count() + tags.chars().count() + 2;
        let prompt = match term_width {
            Some(width) if width > fixed + 10 => truncate_text(&question.prompt, width - fixed),
            Some(_) => truncate_text(&question.prompt, 20),
            None => question.prompt.clone(),
        };

        if use_colors {
            out.push(format!("{} {} {}", prefix.dimmed(), prompt, tags.cyan()));
        } else {
            out.push(format!("{} {} {}", prefix, prompt, tags));
        }
    }

    out.join("\n")
}

fn construct_tag(construct: Construct) -> &'static str {
    match construct {
        Construct::Will => "will",
        Construct::Interest => "interest",
        Construct::Skill => "skill",
        Construct::Cognitive => "cognitive",
        Construct::Ability => "ability",
        Construct::RealWorld => "real-world",
        Construct::Other => "other",
    }
}

/// Per-answer breakdown for verbose mode
pub fn format_diagnostics(diagnostics: &ScoreDiagnostics) -> String {
    let mut lines = vec![format!(
        "Answers: {} submitted, {} considered, {} excluded, {} superseded, {} unanswered",
        diagnostics.submitted,
        diagnostics.considered(),
        diagnostics.excluded_count(),
        diagnostics.superseded,
        diagnostics.unanswered.len()
    )];

    for c in &diagnostics.contributions {
        let construct = c.construct.map(construct_tag).unwrap_or("-");
        lines.push(format!(
            "  {:<4} {:<12} {:<10} w={:<4} {:.2} ({:?})",
            c.question_id,
            c.category.to_string(),
            construct,
            c.weight,
            c.normalized,
            c.rule
        ));
    }

    if !diagnostics.excluded.is_empty() {
        lines.push(format!("  excluded: {}", diagnostics.excluded.join(", ")));
    }
    if !diagnostics.unanswered.is_empty() {
        lines.push(format!("  unanswered: {}", diagnostics.unanswered.join(", ")));
    }

    lines.join("\n")
}

/// Compact WISCAR summary: "W 80 I 75 S 60 C 90 A 70 R 55"
pub fn format_wiscar_compact(wiscar: &WiscarScores) -> String {
    wiscar
        .iter()
        .map(|(construct, score)| {
            let initial = construct.label().chars().next().unwrap_or('?');
            format!("{} {}", initial, score)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Answer;
    use crate::scoring::{evaluate, score, Scores};

    fn sample_results() -> AssessmentResults {
        AssessmentResults {
            scores: Scores {
                psychometric: 72,
                technical: 64,
                overall: 68,
                wiscar: WiscarScores {
                    will: 80,
                    interest: 75,
                    skill: 60,
                    cognitive: 90,
                    ability: 70,
                    real_world: 55,
                },
            },
            recommendation: Recommendation::Conditional,
            confidence: 68,
            strengths: vec!["High motivation and commitment".to_string()],
            improvements: vec!["Learn about production challenges and best practices".to_string()],
            career_paths: vec!["AI Integration Specialist".to_string()],
            next_steps: vec![
                "Complete a comprehensive ML/AI course".to_string(),
                "Seek mentorship from experienced LLM developers".to_string(),
            ],
        }
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0, 10), "----------");
        assert_eq!(format_bar(100, 10), "##########");
        assert_eq!(format_bar(50, 10), "#####-----");
        assert_eq!(format_bar(66, 10), "#######---");
        assert_eq!(format_bar(64, 10), "######----");
    }

    #[test]
    fn test_bar_width_bounds() {
        assert_eq!(bar_width(None), DEFAULT_BAR_WIDTH);
        assert_eq!(bar_width(Some(20)), MIN_BAR_WIDTH);
        assert_eq!(bar_width(Some(60)), 26);
        assert_eq!(bar_width(Some(300)), MAX_BAR_WIDTH);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Short", 20), "Short");
        assert_eq!(truncate_text("This is a very long prompt", 15), "This is a ve...");
        assert_eq!(truncate_text("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_report_plain() {
        let report = format_report(&sample_results(), false);
        assert!(report.starts_with("Overall: 68/100  Conditionally recommended  (confidence 68%)"));
        assert!(report.contains("Psychometric fit"));
        assert!(report.contains("Real-world alignment"));
        assert!(report.contains(" 55"));
        assert!(report.contains("Strengths\n  + High motivation and commitment"));
        assert!(report.contains("Areas to improve\n  - Learn about production"));
        assert!(report.contains("Suggested career paths\n  * AI Integration Specialist"));
        assert!(report.contains("1. Complete a comprehensive ML/AI course"));
        assert!(report.contains("2. Seek mentorship"));
    }

    #[test]
    fn test_format_report_has_eight_score_lines() {
        let report = format_report(&sample_results(), false);
        let bars = report.lines().filter(|l| l.contains('[') && l.contains(']')).count();
        assert_eq!(bars, 8);
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample_results()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scores"]["overall"], 68);
        assert_eq!(value["scores"]["wiscar"]["real_world"], 55);
        assert_eq!(value["recommendation"], "conditional");
        assert_eq!(value["next_steps"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_format_tsv() {
        assert_eq!(
            format_tsv(&sample_results()),
            "68\t72\t64\t80\t75\t60\t90\t70\t55\tconditional\t68"
        );
    }

    #[test]
    fn test_format_tsv_empty_answers() {
        let results = score(&Catalog::builtin(), &[]);
        assert_eq!(format_tsv(&results), "0\t0\t0\t0\t0\t0\t0\t0\t0\tnegative\t50");
    }

    #[test]
    fn test_format_catalog_groups_sections() {
        let listing = format_catalog(&Catalog::builtin(), false);
        assert!(listing.starts_with(
            "Personality & Motivation (8-10 minutes)\nUnderstanding your psychological fit"
        ));
        assert!(listing.contains("Tools & Frameworks (2-3 minutes)\nAssessing familiarity"));
        assert!(listing.contains("  t5   Which library"));
        assert!(listing.contains("[technical, graded]"));
        assert!(listing.contains("[psychometric, interest]"));
        assert!(listing.contains("[wiscar, real-world]"));
        assert_eq!(listing.lines().filter(|l| l.starts_with("  ")).count(), 16);
    }

    #[test]
    fn test_format_catalog_empty() {
        let catalog = Catalog::new(vec![], Rubric::default());
        assert_eq!(format_catalog(&catalog, false), "No questions in catalog.");
    }

    #[test]
    fn test_format_diagnostics() {
        let answers = vec![
            Answer::new("t5", "PyTorch"),
            Answer::new("t5", "Hugging Face Transformers"),
            Answer::new("zz", 1.0),
        ];
        let evaluation = evaluate(&Catalog::builtin(), &answers);
        let text = format_diagnostics(&evaluation.diagnostics);
        assert!(text.starts_with(
            "Answers: 3 submitted, 1 considered, 1 excluded, 1 superseded, 15 unanswered"
        ));
        assert!(text.contains("t5"));
        assert!(text.contains("Graded"));
        assert!(text.contains("excluded: zz"));
    }

    #[test]
    fn test_format_wiscar_compact() {
        assert_eq!(
            format_wiscar_compact(&sample_results().scores.wiscar),
            "W 80 I 75 S 60 C 90 A 70 R 55"
        );
    }
}
