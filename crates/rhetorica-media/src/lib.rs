//! Rhetorica Media - Video probing and frame sampling.
//!
//! Relies on ffmpeg and ffprobe being installed on the system.

mod error;
mod ffmpeg;

pub use error::{MediaError, MediaResult};
pub use ffmpeg::{get_video_info, sample_frames, sample_timestamps, Frame, VideoInfo};

/// Check which required external tools are available.
pub fn check_dependencies() -> Vec<(&'static str, bool)> {
    vec![
        ("ffmpeg", which::which("ffmpeg").is_ok()),
        ("ffprobe", which::which("ffprobe").is_ok()),
    ]
}
