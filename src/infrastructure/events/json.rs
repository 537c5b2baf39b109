//! JSON Event Sink
//!
//! Outputs publish events as NDJSON for scripts and CI.

use crate::domain::ports::{PublishEvent, PublishEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PublishEventSink for JsonEventSink {
    fn on_event(&self, event: PublishEvent) {
        let json = match event {
            PublishEvent::Started {
                root,
                selection,
                strictness,
            } => serde_json::json!({
                "event": "start",
                "command": "publish",
                "root": root.display().to_string(),
                "selection": selection,
                "strictness": strictness,
            }),

            PublishEvent::AssetChecked { name, present } => serde_json::json!({
                "event": "asset_checked",
                "name": name,
                "present": present,
            }),

            PublishEvent::AssetsMissing { missing } => serde_json::json!({
                "event": "assets_missing",
                "missing": missing,
            }),

            PublishEvent::Cancelled => serde_json::json!({
                "event": "complete",
                "command": "publish",
                "status": "cancelled",
            }),

            PublishEvent::StagingStarted { operations } => serde_json::json!({
                "event": "staging",
                "operations": operations,
            }),

            PublishEvent::Staged {
                label,
                pathspecs,
                matched,
            } => serde_json::json!({
                "event": "item_staged",
                "selector": label,
                "pathspecs": pathspecs,
                "matched": matched,
            }),

            PublishEvent::StageSkipped { label, reason } => serde_json::json!({
                "event": "item_skipped",
                "selector": label,
                "reason": reason,
            }),

            PublishEvent::StageWarning { label, error } => serde_json::json!({
                "event": "item_error",
                "selector": label,
                "error": error,
            }),

            PublishEvent::NothingStaged => serde_json::json!({
                "event": "nothing_staged",
            }),

            PublishEvent::NothingToCommit => serde_json::json!({
                "event": "complete",
                "command": "publish",
                "status": "nothing-to-commit",
            }),

            PublishEvent::Committing { message } => serde_json::json!({
                "event": "committing",
                "message": message,
            }),

            PublishEvent::Committed { output } => serde_json::json!({
                "event": "committed",
                "output": output,
            }),

            PublishEvent::Pushing => serde_json::json!({
                "event": "pushing",
            }),

            PublishEvent::Pushed { output } => serde_json::json!({
                "event": "pushed",
                "output": output,
            }),

            PublishEvent::Completed {
                guessed_url,
                remote_url,
            } => serde_json::json!({
                "event": "complete",
                "command": "publish",
                "status": "published",
                "url": guessed_url,
                "remote": remote_url,
            }),
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PublishEvent::Started {
            root: PathBuf::from("site"),
            selection: "*.html".to_string(),
            strictness: "strict".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["root"], "site");
        assert_eq!(events[0]["strictness"], "strict");
    }

    #[test]
    fn json_sink_writes_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PublishEvent::Pushing);
        sink.on_event(PublishEvent::Completed {
            guessed_url: Some("https://owner.github.io".to_string()),
            remote_url: Some("git@github.com:owner/owner.github.io.git".to_string()),
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1]["status"], "published");
        assert_eq!(events[1]["url"], "https://owner.github.io");
    }

    #[test]
    fn json_sink_reports_nothing_to_commit_as_completion() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PublishEvent::NothingToCommit);

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "complete");
        assert_eq!(events[0]["status"], "nothing-to-commit");
    }

    #[test]
    fn json_sink_reports_unknown_match_count_as_null() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PublishEvent::Staged {
            label: "*.html".to_string(),
            pathspecs: vec!["*.html".to_string()],
            matched: None,
        });

        let events = lines(&buffer);
        assert!(events[0]["matched"].is_null());
        assert_eq!(events[0]["pathspecs"][0], "*.html");
    }
}
