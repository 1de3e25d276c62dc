//! ffprobe/ffmpeg subprocess implementation of `VideoProcessor`.

use crate::error::ProcessingError;
use crate::traits::VideoProcessor;
use async_trait::async_trait;
use reelvault_core::models::Orientation;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Suffix appended to an input path to form the fast-start output path.
const PROCESSING_SUFFIX: &str = ".processing";

/// Output path for the fast-start rewrite of `input`.
///
/// Distinct from the input so both files coexist during the rewrite; also
/// used by callers to clean up a partial artifact after a failed run.
pub fn faststart_output_path(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(PROCESSING_SUFFIX);
    PathBuf::from(path)
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    width: Option<i64>,
    height: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

/// Extract (width, height) of the first stream from ffprobe JSON output.
fn parse_probe_dimensions(stdout: &[u8]) -> Result<(i64, i64), ProcessingError> {
    let probe: ProbeOutput = serde_json::from_slice(stdout)
        .map_err(|e| ProcessingError::MalformedOutput(e.to_string()))?;

    let stream = probe.streams.first().ok_or(ProcessingError::NoStreams)?;

    match (stream.width, stream.height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(ProcessingError::MalformedOutput(
            "first stream has no width/height".to_string(),
        )),
    }
}

/// `VideoProcessor` backed by the ffmpeg tool suite.
#[derive(Clone)]
pub struct FfmpegVideoProcessor {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl FfmpegVideoProcessor {
    pub fn new(ffmpeg_path: String, ffprobe_path: String) -> Self {
        Self {
            ffmpeg_path,
            ffprobe_path,
        }
    }
}

#[async_trait]
impl VideoProcessor for FfmpegVideoProcessor {
    async fn probe_orientation(&self, path: &Path) -> Result<Orientation, ProcessingError> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .output()
            .await
            .map_err(|source| ProcessingError::Spawn {
                tool: "ffprobe",
                source,
            })?;

        if !output.status.success() {
            return Err(ProcessingError::ToolFailed {
                tool: "ffprobe",
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let (width, height) = parse_probe_dimensions(&output.stdout)?;
        let orientation = Orientation::classify(width, height);

        tracing::info!(
            path = %path.display(),
            width,
            height,
            orientation = %orientation,
            duration_ms = start.elapsed().as_millis() as u64,
            "Probe completed"
        );

        Ok(orientation)
    }

    async fn normalize_faststart(&self, path: &Path) -> Result<PathBuf, ProcessingError> {
        let start = std::time::Instant::now();
        let output_path = faststart_output_path(path);

        let output = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(path)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(&output_path)
            .output()
            .await
            .map_err(|source| ProcessingError::Spawn {
                tool: "ffmpeg",
                source,
            })?;

        if !output.status.success() {
            return Err(ProcessingError::ToolFailed {
                tool: "ffmpeg",
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        tracing::info!(
            input = %path.display(),
            output = %output_path.display(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fast-start rewrite completed"
        );

        Ok(output_path)
    }
}
