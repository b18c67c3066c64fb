//! The fixed analysis prompt.

use rhetorica_core::{ContextLabel, Locale};

/// Build the prompt sent alongside the sampled frames.
///
/// The model is asked to answer in the user's language but the
/// instruction itself, including the `SCORE:`/`ANALYSIS:` format
/// markers the parser looks for, stays fixed.
pub fn build_prompt(context: ContextLabel, locale: Locale) -> String {
    format!(
        "Expert body language analysis for {}. Language: {}. \
         Return SCORE: [0-100] and ANALYSIS: [detailed feedback].",
        context.as_str(),
        locale.prompt_language()
    )
}
