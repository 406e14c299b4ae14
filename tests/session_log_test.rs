//! Session log writer end to end

use std::path::PathBuf;

use tetris_board::core::SharedBoard;
use tetris_board::session_log::{SessionLog, SessionRecord};

fn temp_log(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tetris-board-{}-{}.jsonl",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[tokio::test]
async fn session_log_writes_json_lines() {
    let path = temp_log("session");
    let (log, task) = SessionLog::spawn(Some(path.clone()));
    assert!(log.is_enabled());

    let board = SharedBoard::new(17);
    log.send(SessionRecord::Start {
        episode_id: 0,
        seed: 17,
    });
    loop {
        let report = board.gravity_step();
        log.record(&report);
        if report.lock.is_some() {
            break;
        }
    }
    log.record(&board.reset());

    drop(log);
    task.unwrap().await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let events: Vec<String> = text
        .lines()
        .map(|line| {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            v["event"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(events, ["start", "lock", "reset"]);

    let lock: SessionRecord = serde_json::from_str(text.lines().nth(1).unwrap()).unwrap();
    assert!(matches!(lock, SessionRecord::Lock { lines_cleared: 0, score: 0, .. }));

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn session_log_without_path_is_disabled() {
    let (log, task) = SessionLog::spawn(None);
    assert!(!log.is_enabled());
    assert!(task.is_none());
    log.send(SessionRecord::Reset { episode_id: 1 });
}

#[tokio::test]
async fn session_log_unwritable_path_stops_quietly() {
    let path = std::env::temp_dir()
        .join("tetris-board-missing-dir")
        .join("nested")
        .join("log.jsonl");
    let (log, task) = SessionLog::spawn(Some(path));

    log.send(SessionRecord::Reset { episode_id: 1 });
    drop(log);
    task.unwrap().await.unwrap();
}
