use serde::Serialize;

use super::types::{Category, Construct, Question, QuestionKind, Scale};

/// Description shown above a group of questions.
#[derive(Debug, Clone, Serialize)]
pub struct SectionInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

const SECTIONS: &[SectionInfo] = &[
    SectionInfo {
        name: "Personality & Motivation",
        description: "Understanding your psychological fit and motivation for LLM development",
        duration: "8-10 minutes",
    },
    SectionInfo {
        name: "Core Knowledge",
        description: "Assessing your technical understanding of LLMs and AI concepts",
        duration: "6-8 minutes",
    },
    SectionInfo {
        name: "Practical Application",
        description: "Evaluating your practical knowledge and problem-solving approach",
        duration: "4-6 minutes",
    },
    SectionInfo {
        name: "Programming Skills",
        description: "Understanding your coding abilities and technical toolkit",
        duration: "3-5 minutes",
    },
    SectionInfo {
        name: "Tools & Frameworks",
        description: "Assessing familiarity with LLM development tools",
        duration: "2-3 minutes",
    },
    SectionInfo {
        name: "Will & Motivation",
        description: "Measuring your drive and commitment to the field",
        duration: "3-4 minutes",
    },
    SectionInfo {
        name: "Interest & Curiosity",
        description: "Evaluating your genuine interest in AI and LLMs",
        duration: "2-3 minutes",
    },
    SectionInfo {
        name: "Skill Assessment",
        description: "Current skill level and experience evaluation",
        duration: "3-4 minutes",
    },
    SectionInfo {
        name: "Cognitive Readiness",
        description: "Problem-solving and analytical thinking capabilities",
        duration: "3-4 minutes",
    },
    SectionInfo {
        name: "Learning Ability",
        description: "Growth mindset and adaptability assessment",
        duration: "2-3 minutes",
    },
    SectionInfo {
        name: "Real-World Understanding",
        description: "Practical awareness of industry challenges",
        duration: "2-3 minutes",
    },
];

pub fn section_info(name: &str) -> Option<&'static SectionInfo> {
    SECTIONS.iter().find(|s| s.name == name)
}

fn likert(low: &str, mid: &str, high: &str) -> Scale {
    Scale::new(1.0, 5.0).with_labels(&[(1.0, low), (3.0, mid), (5.0, high)])
}

struct Entry<'a> {
    id: &'a str,
    kind: QuestionKind,
    category: Category,
    section: &'a str,
    prompt: &'a str,
    construct: Option<Construct>,
    scale: Option<Scale>,
    options: &'a [&'a str],
    weight: f64,
}

impl From<Entry<'_>> for Question {
    fn from(entry: Entry<'_>) -> Self {
        Question {
            id: entry.id.to_string(),
            kind: entry.kind,
            category: entry.category,
            section: entry.section.to_string(),
            prompt: entry.prompt.to_string(),
            construct: entry.construct,
            scale: entry.scale,
            options: entry.options.iter().map(|o| o.to_string()).collect(),
            weight: Some(entry.weight),
        }
    }
}

/// The built-in LLM-developer readiness questionnaire, in presentation order.
pub fn default_questions() -> Vec<Question> {
    use Category::*;

    let entries = vec![
        // Psychometric
        Entry {
            id: "p1",
            kind: QuestionKind::Scale,
            category: Psychometric,
            section: "Personality & Motivation",
            prompt: "I enjoy solving abstract, complex problems for extended periods.",
            construct: None,
            scale: Some(likert("Strongly Disagree", "Neutral", "Strongly Agree")),
            options: &[],
            weight: 1.2,
        },
        Entry {
            id: "p2",
            kind: QuestionKind::Scale,
            category: Psychometric,
            section: "Personality & Motivation",
            prompt: "I prefer working on projects that require deep research and experimentation.",
            construct: None,
            scale: Some(likert("Strongly Disagree", "Neutral", "Strongly Agree")),
            options: &[],
            weight: 1.0,
        },
        Entry {
            id: "p3",
            kind: QuestionKind::ForcedChoice,
            category: Psychometric,
            section: "Personality & Motivation",
            prompt: "Given the choice, I would rather:",
            construct: None,
            scale: None,
            options: &[
                "Build a working prototype quickly",
                "Write a comprehensive research paper",
                "Create detailed documentation",
                "Optimize existing systems",
            ],
            weight: 1.1,
        },
        Entry {
            id: "p4",
            kind: QuestionKind::Scale,
            category: Psychometric,
            section: "Personality & Motivation",
            prompt: "I actively follow AI research news and developments.",
            construct: Some(Construct::Interest),
            scale: Some(likert("Never", "Sometimes", "Daily")),
            options: &[],
            weight: 1.3,
        },
        Entry {
            id: "p5",
            kind: QuestionKind::SingleChoice,
            category: Psychometric,
            section: "Personality & Motivation",
            prompt: "What motivates you most about working with LLMs?",
            construct: None,
            scale: None,
            options: &[
                "The cutting-edge technology and innovation",
                "Solving real-world problems at scale",
                "The intellectual challenge",
                "Career advancement opportunities",
                "Building products people will use",
            ],
            weight: 1.0,
        },
        // Technical
        Entry {
            id: "t1",
            kind: QuestionKind::SingleChoice,
            category: Technical,
            section: "Core Knowledge",
            prompt: "What is the primary advantage of fine-tuning over prompt engineering?",
            construct: None,
            scale: None,
            options: &[
                "Fine-tuning is always faster",
                "Fine-tuning allows model weights to be updated for specific tasks",
                "Prompt engineering requires more computational resources",
                "Fine-tuning works better with smaller datasets",
            ],
            weight: 1.5,
        },
        Entry {
            id: "t2",
            kind: QuestionKind::SingleChoice,
            category: Technical,
            section: "Core Knowledge",
            prompt: "In transformer architecture, what does \"attention\" primarily help with?",
            construct: None,
            scale: None,
            options: &[
                "Reducing memory usage",
                "Allowing the model to focus on relevant parts of the input sequence",
                "Speeding up training time",
                "Preventing overfitting",
            ],
            weight: 1.4,
        },
        Entry {
            id: "t3",
            kind: QuestionKind::SingleChoice,
            category: Technical,
            section: "Practical Application",
            prompt: "Which approach would be most effective for a RAG (Retrieval-Augmented Generation) system?",
            construct: None,
            scale: None,
            options: &[
                "Using only the largest available language model",
                "Combining a retrieval system with a language model",
                "Fine-tuning on all available data",
                "Using multiple small models in parallel",
            ],
            weight: 1.3,
        },
        Entry {
            id: "t4",
            kind: QuestionKind::Scale,
            category: Technical,
            section: "Programming Skills",
            prompt: "Rate your proficiency with Python for data science and ML tasks:",
            construct: None,
            scale: Some(Scale::new(1.0, 10.0).with_labels(&[
                (1.0, "Beginner"),
                (5.0, "Intermediate"),
                (10.0, "Expert"),
            ])),
            options: &[],
            weight: 1.2,
        },
        Entry {
            id: "t5",
            kind: QuestionKind::SingleChoice,
            category: Technical,
            section: "Tools & Frameworks",
            prompt: "Which library is most commonly used for working with pre-trained transformers?",
            construct: None,
            scale: None,
            options: &[
                "TensorFlow",
                "PyTorch",
                "Hugging Face Transformers",
                "Scikit-learn",
            ],
            weight: 1.1,
        },
        // WISCAR
        Entry {
            id: "w1",
            kind: QuestionKind::Scale,
            category: Wiscar,
            section: "Will & Motivation",
            prompt: "How many hours per week do you currently spend on coding or AI-related projects?",
            construct: Some(Construct::Will),
            scale: Some(Scale::new(0.0, 20.0).with_labels(&[
                (0.0, "0 hours"),
                (10.0, "10 hours"),
                (20.0, "20+ hours"),
            ])),
            options: &[],
            weight: 1.3,
        },
        Entry {
            id: "w2",
            kind: QuestionKind::Scale,
            category: Wiscar,
            section: "Interest & Curiosity",
            prompt: "I regularly experiment with new AI tools and models in my free time.",
            construct: Some(Construct::Interest),
            scale: Some(likert("Never", "Sometimes", "Very Often")),
            options: &[],
            weight: 1.2,
        },
        Entry {
            id: "w3",
            kind: QuestionKind::SingleChoice,
            category: Wiscar,
            section: "Skill Assessment",
            prompt: "Which best describes your current experience with machine learning?",
            construct: Some(Construct::Skill),
            scale: None,
            options: &[
                "Complete beginner",
                "Taken courses, no practical experience",
                "Built simple projects and experiments",
                "Professional experience with ML systems",
                "Advanced practitioner with research experience",
            ],
            weight: 1.4,
        },
        Entry {
            id: "w4",
            kind: QuestionKind::Scale,
            category: Wiscar,
            section: "Cognitive Readiness",
            prompt: "I can easily break down complex problems into smaller, manageable components.",
            construct: Some(Construct::Cognitive),
            scale: Some(likert("Rarely", "Sometimes", "Always")),
            options: &[],
            weight: 1.2,
        },
        Entry {
            id: "w5",
            kind: QuestionKind::Scale,
            category: Wiscar,
            section: "Learning Ability",
            prompt: "I actively seek feedback and use it to improve my work.",
            construct: Some(Construct::Ability),
            scale: Some(likert("Rarely", "Sometimes", "Always")),
            options: &[],
            weight: 1.1,
        },
        Entry {
            id: "w6",
            kind: QuestionKind::SingleChoice,
            category: Wiscar,
            section: "Real-World Understanding",
            prompt: "What do you think is the biggest challenge in deploying LLMs in production?",
            construct: Some(Construct::RealWorld),
            scale: None,
            options: &[
                "Computational costs and latency",
                "Ensuring accuracy and reducing hallucinations",
                "Data privacy and security concerns",
                "Integration with existing systems",
                "All of the above",
            ],
            weight: 1.3,
        },
    ];

    entries.into_iter().map(Question::from).collect()
}
