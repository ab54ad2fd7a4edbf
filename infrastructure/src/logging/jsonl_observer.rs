//! JSONL file writer for answer traces.
//!
//! Each answered question is serialized as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer.

use evaluation_application::AnswerObserver;
use evaluation_domain::Context;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

const EVENT_TYPE: &str = "answer";

/// Answer observer that writes one JSON object per answered question.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAnswerObserver {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnswerObserver {
    /// Create an observer appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create answer log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open answer log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnswerObserver for JsonlAnswerObserver {
    fn on_answered(&self, context: &Context) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = context.to_json();
        if let serde_json::Value::Object(map) = &mut record {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(EVENT_TYPE.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
        }

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAnswerObserver {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(question: &str, answer: i32) -> Context {
        let mut context = Context::new(question, &'A');
        context.set_strategy("aggregator strategy");
        context.set_aggregator("expression aggregator with seed '0'");
        context.record_expression("1 Apple", &1);
        context.record_expression("2 Ananas", &2);
        context.set_answer(&answer);
        context
    }

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_observer_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.jsonl");
        let observer = JsonlAnswerObserver::new(&path).unwrap();

        observer.on_answered(&answered("how many fruits?", 3));
        observer.on_answered(&answered("how many apples?", 1));
        drop(observer);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);

        for line in &lines {
            assert_eq!(line["type"], "answer");
            assert!(line.get("timestamp").is_some());
        }

        let first = &lines[0];
        assert_eq!(first["question"], "how many fruits?");
        assert_eq!(first["parameter"], "'A'");
        assert_eq!(first["strategy"], "aggregator strategy");
        assert_eq!(first["answer"], "3");
        assert_eq!(first["expressions"][1]["expression"], "2 Ananas");
        assert_eq!(first["expressions"][1]["result"], "2");

        assert_eq!(lines[1]["question"], "how many apples?");
    }

    #[test]
    fn test_jsonl_observer_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("answers.jsonl");

        let observer = JsonlAnswerObserver::new(&path).unwrap();
        observer.on_answered(&answered("first", 1));
        drop(observer);

        let observer = JsonlAnswerObserver::new(&path).unwrap();
        assert_eq!(observer.path(), path.as_path());
        observer.on_answered(&answered("second", 2));
        drop(observer);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["question"], "first");
        assert_eq!(lines[1]["question"], "second");
    }
}
