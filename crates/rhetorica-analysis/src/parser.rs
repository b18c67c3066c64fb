//! Parsing the model's free-form reply into score and feedback.

use regex::Regex;
use rhetorica_core::Analysis;
use std::sync::OnceLock;
use tracing::debug;

/// Score substituted when the reply carries no `SCORE:` marker.
pub const DEFAULT_SCORE: u8 = 70;

const ANALYSIS_MARKER: &str = "ANALYSIS:";

fn score_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"SCORE:\s*(\d+)").expect("valid score pattern"))
}

/// Extract score and feedback from raw response text.
///
/// The markers are a convention with the model, not a contract: a
/// missing score becomes [`DEFAULT_SCORE`] (flagged on the result), a
/// missing analysis marker makes the whole text the feedback, and
/// out-of-range scores are clamped into 0..=100.
pub fn parse_response(raw: &str) -> Analysis {
    let (score, score_defaulted) = match score_regex()
        .captures(raw)
        .and_then(|c| c.get(1))
    {
        Some(m) => match m.as_str().parse::<u64>() {
            Ok(n) => (n.min(100) as u8, false),
            // More digits than u64 holds still means "way above 100".
            Err(_) => (100, false),
        },
        None => {
            debug!("Response carried no SCORE: marker, defaulting to {}", DEFAULT_SCORE);
            (DEFAULT_SCORE, true)
        }
    };

    let feedback = match raw.split_once(ANALYSIS_MARKER) {
        Some((_, after)) => after.trim().to_string(),
        None => raw.trim().to_string(),
    };

    Analysis {
        score,
        score_defaulted,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_response() {
        let analysis = parse_response("SCORE: 85\nANALYSIS: foo");
        assert_eq!(analysis.score, 85);
        assert!(!analysis.score_defaulted);
        assert_eq!(analysis.feedback, "foo");
    }

    #[test]
    fn test_missing_score_defaults() {
        let raw = "The posture is upright and engaged throughout.";
        let analysis = parse_response(raw);
        assert_eq!(analysis.score, DEFAULT_SCORE);
        assert!(analysis.score_defaulted);
        assert_eq!(analysis.feedback, raw);
    }

    #[test]
    fn test_missing_analysis_marker_keeps_whole_text() {
        let raw = "SCORE: 42\nGreat energy, weak eye contact.";
        let analysis = parse_response(raw);
        assert_eq!(analysis.score, 42);
        assert_eq!(analysis.feedback, raw);
    }

    #[test]
    fn test_first_score_occurrence_wins() {
        let analysis = parse_response("SCORE: 10 then later SCORE: 90\nANALYSIS: mixed");
        assert_eq!(analysis.score, 10);
    }

    #[test]
    fn test_out_of_range_score_clamped() {
        assert_eq!(parse_response("SCORE: 150").score, 100);
        assert_eq!(parse_response("SCORE: 100").score, 100);
        assert_eq!(parse_response("SCORE: 0").score, 0);
    }

    #[test]
    fn test_absurdly_long_score_clamped() {
        let analysis = parse_response("SCORE: 99999999999999999999999");
        assert_eq!(analysis.score, 100);
        assert!(!analysis.score_defaulted);
    }

    #[test]
    fn test_split_on_first_analysis_marker() {
        let analysis = parse_response("SCORE: 50\nANALYSIS: part one ANALYSIS: part two");
        assert_eq!(analysis.feedback, "part one ANALYSIS: part two");
    }

    #[test]
    fn test_mocked_end_to_end_response() {
        let analysis = parse_response("SCORE: 92\nANALYSIS: Good posture.");
        assert_eq!(analysis.score, 92);
        assert_eq!(analysis.feedback, "Good posture.");
        assert_eq!(format!("{}/100", analysis.score), "92/100");
    }
}
