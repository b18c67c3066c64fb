//! Core domain types for Rhetorica.

use serde::{Deserialize, Serialize};

/// The purpose of the recorded video, embedded into the analysis prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextLabel {
    JobInterview,
    PublicSpeaking,
    SalesPitch,
    General,
}

impl ContextLabel {
    /// English phrase used inside the model prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextLabel::JobInterview => "Job Interview",
            ContextLabel::PublicSpeaking => "Public Speaking",
            ContextLabel::SalesPitch => "Sales Pitch",
            ContextLabel::General => "General",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "job-interview" | "interview" => Some(ContextLabel::JobInterview),
            "public-speaking" | "speaking" => Some(ContextLabel::PublicSpeaking),
            "sales-pitch" | "sales" => Some(ContextLabel::SalesPitch),
            "general" => Some(ContextLabel::General),
            _ => None,
        }
    }

    /// All labels, in presentation order.
    pub fn all() -> &'static [ContextLabel] {
        &[
            ContextLabel::JobInterview,
            ContextLabel::PublicSpeaking,
            ContextLabel::SalesPitch,
            ContextLabel::General,
        ]
    }
}

impl std::fmt::Display for ContextLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reading direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::RightToLeft)
    }
}

/// Supported output locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    English,
    Hebrew,
}

impl Locale {
    /// Language name spelled out for the model prompt.
    pub fn prompt_language(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Hebrew => "Hebrew",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Locale::English => TextDirection::LeftToRight,
            Locale::Hebrew => TextDirection::RightToLeft,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Hebrew => "he",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "he" | "hebrew" | "עברית" => Some(Locale::Hebrew),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsed result of one model response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Performance score in 0..=100.
    pub score: u8,
    /// True when the response carried no usable score and the default stood in.
    pub score_defaulted: bool,
    /// Free-text feedback from the model.
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_label_from_str() {
        assert_eq!(
            ContextLabel::from_str("Job Interview"),
            Some(ContextLabel::JobInterview)
        );
        assert_eq!(
            ContextLabel::from_str("public-speaking"),
            Some(ContextLabel::PublicSpeaking)
        );
        assert_eq!(ContextLabel::from_str("sales"), Some(ContextLabel::SalesPitch));
        assert_eq!(ContextLabel::from_str("general"), Some(ContextLabel::General));
        assert_eq!(ContextLabel::from_str("karaoke"), None);
    }

    #[test]
    fn test_locale_direction() {
        assert!(!Locale::English.direction().is_rtl());
        assert!(Locale::Hebrew.direction().is_rtl());
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!(Locale::from_str("en"), Some(Locale::English));
        assert_eq!(Locale::from_str("Hebrew"), Some(Locale::Hebrew));
        assert_eq!(Locale::from_str("fr"), None);
    }

    #[test]
    fn test_context_label_display() {
        assert_eq!(ContextLabel::SalesPitch.to_string(), "Sales Pitch");
    }
}
