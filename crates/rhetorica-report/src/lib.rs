//! Rhetorica Report - PDF rendering of an analysis result.
//!
//! Lays out the score, context, and feedback onto an A4 page. For
//! right-to-left locales every visual line is reordered with the
//! Unicode bidi algorithm before placement.

mod error;
mod pdf;

pub use error::{ReportError, ReportResult};
pub use pdf::{render_report, ReportContent, ReportOptions};
