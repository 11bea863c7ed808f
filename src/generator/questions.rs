use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{SurveyGenerator, pick_unused};
use crate::catalog::substitute;
use crate::models::survey::GeneratedQuestion;

/// The free-text question closing every generated survey.
pub const SUGGESTION_TEMPLATE: &str =
    "What suggestions do you have for {company} to improve their services?";

impl<R: Rng> SurveyGenerator<'_, R> {
    /// Up to `count - 1` distinct multiple-choice questions plus the
    /// suggestion question, in shuffled order. Stops short when the
    /// template pool runs out.
    pub fn generate_questions(&mut self, company: &str, count: usize) -> Vec<GeneratedQuestion> {
        let catalog = self.catalog;
        let pool = &catalog.questions().templates;
        let wanted = count.saturating_sub(1).min(pool.len());

        let mut used = HashSet::with_capacity(wanted);
        let mut questions = Vec::with_capacity(wanted + 1);
        while questions.len() < wanted {
            let Some(index) = pick_unused(&mut self.rng, pool.len(), &used) else {
                break;
            };
            used.insert(index);
            let template = &pool[index];
            questions.push(GeneratedQuestion::multiple_choice(
                substitute(&template.template, company),
                template.options.clone(),
            ));
        }

        questions.push(GeneratedQuestion::free_text(substitute(SUGGESTION_TEMPLATE, company)));
        questions.shuffle(&mut self.rng);
        questions
    }
}
