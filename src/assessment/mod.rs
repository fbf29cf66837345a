pub mod answers;
pub mod catalog;
pub mod types;

pub use answers::{load_answers, AnswerSet};
pub use catalog::{default_questions, section_info, SectionInfo};
pub use types::*;
