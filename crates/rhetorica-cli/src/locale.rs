//! Localized label strings for terminal output and the PDF report.

use rhetorica_core::{ContextLabel, Locale};

/// Presentational strings for one locale.
pub struct Labels {
    pub purpose: &'static str,
    pub spinner: &'static str,
    pub score_label: &'static str,
    pub feedback_header: &'static str,
    pub report_title: &'static str,
    pub report_saved: &'static str,
}

static ENGLISH: Labels = Labels {
    purpose: "Goal",
    spinner: "AI is analyzing your performance...",
    score_label: "Performance Score",
    feedback_header: "Analysis",
    report_title: "Rhetorica Pro Analysis Report",
    report_saved: "PDF report saved to",
};

static HEBREW: Labels = Labels {
    purpose: "מטרת הסרטון",
    spinner: "ה-AI מנתח את שפת הגוף שלך...",
    score_label: "ציון ביצוע",
    feedback_header: "ניתוח",
    report_title: "דו\"ח ניתוח Rhetorica Pro",
    report_saved: "דו\"ח PDF נשמר אל",
};

pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Hebrew => &HEBREW,
    }
}

/// Localized display name of a context label.
pub fn purpose_name(locale: Locale, context: ContextLabel) -> &'static str {
    match (locale, context) {
        (Locale::English, c) => c.as_str(),
        (Locale::Hebrew, ContextLabel::JobInterview) => "ראיון עבודה",
        (Locale::Hebrew, ContextLabel::PublicSpeaking) => "דיבור מול קהל",
        (Locale::Hebrew, ContextLabel::SalesPitch) => "שיחת מכירה",
        (Locale::Hebrew, ContextLabel::General) => "כללי",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_locales_have_labels() {
        assert!(!labels(Locale::English).spinner.is_empty());
        assert!(!labels(Locale::Hebrew).spinner.is_empty());
    }

    #[test]
    fn test_purpose_names_localized() {
        assert_eq!(
            purpose_name(Locale::English, ContextLabel::General),
            "General"
        );
        assert_eq!(purpose_name(Locale::Hebrew, ContextLabel::General), "כללי");
    }
}
