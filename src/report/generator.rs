//! Assembles report text from a diagnosis

use super::diagnosis::Diagnosis;
use super::wording;
use crate::core::types::Language;
use crate::simulation::{HormoneState, Stimulus};

/// Builds the diagnostic sentence for a freshly stepped state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportGenerator {
    language: Language,
}

impl ReportGenerator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn assess(&self, stimulus: Stimulus, state: &HormoneState) -> Diagnosis {
        Diagnosis::new(stimulus, state)
    }

    /// Prefix, then the trend clause, then the feedback clause
    pub fn generate(&self, stimulus: Stimulus, state: &HormoneState) -> String {
        self.render(&self.assess(stimulus, state))
    }

    pub fn render(&self, diagnosis: &Diagnosis) -> String {
        let language = self.language;
        format!(
            "{}{}{}{}",
            wording::prefix(language),
            wording::trend_clause(diagnosis.trend, language),
            wording::clause_separator(language),
            wording::feedback_clause(diagnosis.feedback, language),
        )
    }

    pub fn placeholder(&self) -> &'static str {
        wording::placeholder(self.language)
    }
}

/// English report for one tick
pub fn generate(stimulus: Stimulus, state: &HormoneState) -> String {
    ReportGenerator::default().generate(stimulus, state)
}
