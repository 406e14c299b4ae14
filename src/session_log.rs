//! Session log: game events appended to a file as JSON lines.
//!
//! Records are sent over an unbounded channel to a writer task, so the board
//! lock is never held across file I/O. If the file cannot be opened or a
//! write fails, the writer stops and later records are dropped.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::StepReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionRecord {
    Start {
        episode_id: u32,
        seed: u32,
    },
    Lock {
        episode_id: u32,
        piece_id: u32,
        shape: String,
        lines_cleared: u32,
        line_clear_score: u32,
        score: u32,
        level: u32,
        lines: u32,
    },
    TopOut {
        episode_id: u32,
        score: u32,
        level: u32,
    },
    Reset {
        episode_id: u32,
    },
}

impl SessionRecord {
    /// Records for one board step, in the order they happened.
    pub fn from_report(report: &StepReport) -> Vec<SessionRecord> {
        let mut out = Vec::new();

        if let Some(lock) = report.lock {
            out.push(SessionRecord::Lock {
                // A lock always belongs to the episode it happened in.
                episode_id: report.episode_id,
                piece_id: lock.piece_id,
                shape: lock.kind.as_str().to_string(),
                lines_cleared: lock.lines_cleared,
                line_clear_score: lock.line_clear_score,
                score: lock.score,
                level: lock.level,
                lines: lock.lines,
            });
        }
        if report.ended {
            out.push(SessionRecord::TopOut {
                episode_id: report.episode_id,
                score: report.score,
                level: report.level,
            });
        }
        if report.restarted {
            out.push(SessionRecord::Reset {
                episode_id: report.episode_id,
            });
        }

        out
    }
}

/// Cloneable sender side of the session log. Disabled logs drop everything.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    tx: Option<mpsc::UnboundedSender<SessionRecord>>,
}

impl SessionLog {
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Start the writer task. Must be called inside a tokio runtime.
    pub fn spawn(path: Option<PathBuf>) -> (Self, Option<JoinHandle<()>>) {
        let Some(path) = path else {
            return (Self::disabled(), None);
        };

        let (tx, rx) = mpsc::unbounded_channel::<SessionRecord>();
        let handle = tokio::spawn(write_records(path, rx));
        (Self { tx: Some(tx) }, Some(handle))
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn send(&self, record: SessionRecord) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(record);
        }
    }

    pub fn record(&self, report: &StepReport) {
        if self.tx.is_none() {
            return;
        }
        for record in SessionRecord::from_report(report) {
            self.send(record);
        }
    }
}

async fn write_records(path: PathBuf, mut rx: mpsc::UnboundedReceiver<SessionRecord>) {
    use tokio::fs::OpenOptions;
    use tokio::io::AsyncWriteExt;

    let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
        Ok(f) => f,
        Err(_) => return,
    };

    let mut buf: Vec<u8> = Vec::with_capacity(512);

    while let Some(record) = rx.recv().await {
        buf.clear();
        if serde_json::to_writer(&mut buf, &record).is_err() {
            continue;
        }
        buf.push(b'\n');
        if file.write_all(&buf).await.is_err() {
            break;
        }
    }

    let _ = file.flush().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LockEvent, ShapeKind};

    fn report() -> StepReport {
        StepReport {
            changed: true,
            lock: None,
            ended: false,
            restarted: false,
            episode_id: 0,
            score: 0,
            level: 0,
        }
    }

    #[test]
    fn plain_move_produces_no_records() {
        assert!(SessionRecord::from_report(&report()).is_empty());
    }

    #[test]
    fn lock_then_top_out_are_ordered() {
        let lock = LockEvent {
            piece_id: 7,
            kind: ShapeKind::T,
            lines_cleared: 2,
            line_clear_score: 100,
            score: 140,
            level: 0,
            lines: 3,
        };
        let records = SessionRecord::from_report(&StepReport {
            lock: Some(lock),
            ended: true,
            score: 140,
            ..report()
        });

        assert_eq!(records.len(), 2);
        assert!(matches!(
            &records[0],
            SessionRecord::Lock { piece_id: 7, shape, lines_cleared: 2, .. } if shape == "t"
        ));
        assert_eq!(
            records[1],
            SessionRecord::TopOut {
                episode_id: 0,
                score: 140,
                level: 0
            }
        );
    }

    #[test]
    fn records_serialize_with_event_tag() {
        let json = serde_json::to_string(&SessionRecord::Reset { episode_id: 3 }).unwrap();
        assert_eq!(json, r#"{"event":"reset","episode_id":3}"#);

        let back: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SessionRecord::Reset { episode_id: 3 });
    }

    #[test]
    fn disabled_log_drops_records() {
        let log = SessionLog::disabled();
        assert!(!log.is_enabled());
        log.send(SessionRecord::Reset { episode_id: 1 });
    }
}
