//! JSONL transcript writer.
//!
//! One line per [`TranscriptEvent`], stamped with the wall-clock time the
//! line was written:
//!
//! ```text
//! {"at":"2026-10-18T09:00:00.123Z","type":"speak","participant":"p1","text":"(1 remaining) great idea"}
//! {"at":"2026-10-18T09:00:02.456Z","type":"hear","participant":"p1","text":"a"}
//! {"at":"2026-10-18T09:00:02.457Z","type":"response_recorded","statement":{"text":"great idea"},"response":"a","id":"p1","timestamp":1792314002457}
//! ```
//!
//! `at` is when the line was logged; a recorded response keeps its own
//! capture `timestamp`.

use chrono::{SecondsFormat, Utc};
use foreach_application::{TranscriptEvent, TranscriptLogger};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

#[derive(Serialize)]
struct TranscriptLine<'a> {
    at: String,
    #[serde(flatten)]
    event: &'a TranscriptEvent,
}

struct Sink {
    writer: BufWriter<File>,
    lines: u64,
    broken: bool,
}

impl Sink {
    fn append(&mut self, line: &TranscriptLine<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer.write_all(b"\n")?;
        // Flushed per line so an interrupted session still leaves a readable transcript
        self.writer.flush()
    }
}

/// Transcript logger appending JSON lines to a file.
///
/// After the first failed write the logger warns once and drops every
/// later event; the session itself is never affected.
pub struct JsonlTranscriptLogger {
    path: PathBuf,
    sink: Mutex<Sink>,
}

impl JsonlTranscriptLogger {
    /// Create (or truncate) the transcript file, creating parent directories
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            sink: Mutex::new(Sink {
                writer: BufWriter::new(File::create(path)?),
                lines: 0,
                broken: false,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of events written so far
    pub fn lines_written(&self) -> u64 {
        self.sink.lock().map(|sink| sink.lines).unwrap_or(0)
    }
}

impl TranscriptLogger for JsonlTranscriptLogger {
    fn log(&self, event: TranscriptEvent) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if sink.broken {
            return;
        }

        let line = TranscriptLine {
            at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event: &event,
        };
        match sink.append(&line) {
            Ok(()) => sink.lines += 1,
            Err(e) => {
                sink.broken = true;
                warn!(
                    "Transcript {} stopped after {} lines: {}",
                    self.path.display(),
                    sink.lines,
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foreach_domain::{CompletionReason, Response, Statement};

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_stamped_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("session.transcript.jsonl");
        let logger = JsonlTranscriptLogger::open(&path).unwrap();

        logger.log(TranscriptEvent::speak("p1", "(1 remaining) great idea"));
        logger.log(TranscriptEvent::hear("p1", "a"));
        assert_eq!(logger.lines_written(), 2);

        // Readable without dropping the logger
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "speak");
        assert_eq!(lines[0]["participant"], "p1");
        assert_eq!(lines[0]["text"], "(1 remaining) great idea");
        assert_eq!(lines[1]["type"], "hear");
        assert!(lines.iter().all(|l| l["at"].as_str().is_some_and(|at| at.ends_with('Z'))));
    }

    #[test]
    fn test_recorded_response_keeps_its_capture_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.jsonl");
        let logger = JsonlTranscriptLogger::open(&path).unwrap();

        logger.log(TranscriptEvent::ResponseRecorded(Response::at(
            Statement::new("great idea"),
            "a",
            "p1",
            42,
        )));
        logger.log(TranscriptEvent::SessionComplete {
            reason: CompletionReason::Timeout,
            responses: 1,
            expected: 2,
        });

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "response_recorded");
        assert_eq!(lines[0]["timestamp"], 42);
        assert_eq!(lines[0]["statement"]["text"], "great idea");
        assert!(lines[0]["at"].is_string());
        assert_eq!(lines[1]["type"], "session_complete");
        assert_eq!(lines[1]["reason"], "timeout");
        assert_eq!(lines[1]["expected"], 2);
    }

    #[test]
    fn test_open_truncates_previous_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.jsonl");
        std::fs::write(&path, "stale\n").unwrap();

        let logger = JsonlTranscriptLogger::open(&path).unwrap();
        logger.log(TranscriptEvent::hear("p1", "a"));

        assert_eq!(read_lines(&path).len(), 1);
        assert_eq!(logger.path(), path.as_path());
    }

    #[test]
    fn test_open_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlTranscriptLogger::open(dir.path()).is_err());
    }
}
