//! SharedBoard under concurrent gravity and input

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use tetris_board::core::{SharedBoard, SimpleRng};
use tetris_board::types::Command;

fn check_invariants(board: &SharedBoard) {
    board.with_board(|b| {
        if b.is_game_over() {
            return;
        }
        for (row, col) in b.active().cells() {
            assert!(b.field().is_cell_free(row, col), "({}, {}) overlaps", row, col);
        }
        assert_eq!(b.level(), b.lines() / 10);
    });
}

#[test]
fn concurrent_gravity_and_input_keep_board_consistent() {
    let board = SharedBoard::new(31337);
    let mut handles = Vec::new();

    // Gravity
    for _ in 0..2 {
        let board = board.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..3_000 {
                let report = board.gravity_step();
                if report.ended {
                    board.reset();
                }
                check_invariants(&board);
            }
        }));
    }

    // Keys
    for seed in 1..=3u32 {
        let board = board.clone();
        handles.push(thread::spawn(move || {
            let mut rng = SimpleRng::new(seed);
            for _ in 0..3_000 {
                let command = Command::ALL[rng.next_range(Command::ALL.len() as u32) as usize];
                board.apply(command);
                check_invariants(&board);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
    check_invariants(&board);
}

#[test]
fn snapshots_never_show_half_applied_steps() {
    let board = SharedBoard::new(8);
    let done = Arc::new(AtomicBool::new(false));

    let writer = {
        let board = board.clone();
        let done = done.clone();
        thread::spawn(move || {
            for i in 0..5_000u32 {
                if board.is_game_over() {
                    board.rotate();
                }
                board.apply(Command::ALL[(i % 4) as usize]);
            }
            done.store(true, Ordering::Release);
        })
    };

    while !done.load(Ordering::Acquire) {
        let snap = board.snapshot();
        if snap.game_over {
            continue;
        }
        let active = snap.active.unwrap();
        let visible = active.cells.iter().filter(|&&(r, _)| r >= 0).count();
        let filled = snap.board.iter().flatten().filter(|&&c| c != 0).count();
        // Each lock adds 4 settled cells and each cleared line removes 10.
        let settled = filled - visible;
        assert_eq!((settled + 10 * snap.lines as usize) % 4, 0);
        assert_eq!(snap.level, snap.lines / 10);
    }

    writer.join().unwrap();
}

#[test]
fn step_reports_capture_lock_and_restart() {
    let board = SharedBoard::new(5);

    let mut locked = None;
    for _ in 0..64 {
        let report = board.gravity_step();
        if report.lock.is_some() {
            locked = Some(report);
            break;
        }
    }
    let report = locked.expect("piece should lock within 64 drops");
    assert_eq!(report.lock.unwrap().lines_cleared, 0);
    assert!(!report.restarted);

    let report = board.reset();
    assert!(report.restarted);
    assert_eq!(report.episode_id, 1);
    assert_eq!(report.score, 0);
}
