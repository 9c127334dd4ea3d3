//! Background completions delivered through the main sequence.

mod common;

use common::build_fixture;
use duopane::config::AcquireMode;
use duopane::content::Document;
use duopane::main_sequence::{MainSequence, ShellEvent};
use duopane::orchestrator::Control;
use duopane::save::spawn_save;
use duopane::{ContentKind, Region};
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::runtime::Runtime;

fn document(editor: &duopane::ContentHandle) -> &dyn Document {
    editor.view().as_document().expect("editor exposes a document")
}

#[test]
fn test_successful_save_closes_editor_and_shows_terminal() {
    let f = build_fixture(1, AcquireMode::NonBlocking);
    let runtime = Runtime::new().unwrap();
    let mut sequence = MainSequence::new(Arc::clone(&f.orch));

    let file = f.path("notes.md");
    let editor = f.orch.open_editor(Some(&file)).unwrap();
    document(&editor).set_contents("hello\n");

    let job = spawn_save(runtime.handle(), editor.clone(), sequence.poster()).unwrap();
    runtime.block_on(job).unwrap();
    assert_eq!(sequence.pump(Some(Duration::from_secs(5))), 1);

    assert_eq!(fs::read_to_string(&file).unwrap(), "hello\n");
    assert!(!f.orch.is_live(&editor));
    assert_eq!(
        f.orch.currently_bound(Region::Left).unwrap().kind(),
        ContentKind::Terminal
    );
    assert!(f.orch.is_visible(Region::Left));
    assert_eq!(f.orch.pool().available(), 1);
    f.assert_conserved();
    f.assert_exclusive();
}

#[test]
fn test_failed_save_keeps_editor() {
    let f = build_fixture(1, AcquireMode::NonBlocking);
    let runtime = Runtime::new().unwrap();
    let mut sequence = MainSequence::new(Arc::clone(&f.orch));

    // A directory where the file should be makes the write fail
    let file = f.path("blocked");
    let editor = f.orch.open_editor(Some(&file)).unwrap();
    fs::create_dir(&file).unwrap();
    document(&editor).set_contents("lost?");

    let job = spawn_save(runtime.handle(), editor.clone(), sequence.poster()).unwrap();
    runtime.block_on(job).unwrap();
    sequence.pump(Some(Duration::from_secs(5)));

    assert!(f.orch.is_live(&editor));
    assert!(document(&editor).is_modified());
    assert_eq!(f.orch.currently_bound(Region::Left), Some(editor));
    f.assert_conserved();
}

#[test]
fn test_saving_parked_editor_keeps_visible_editor() {
    let f = build_fixture(2, AcquireMode::NonBlocking);
    let runtime = Runtime::new().unwrap();
    let mut sequence = MainSequence::new(Arc::clone(&f.orch));

    let parked = f.orch.open_editor(Some(&f.path("a.txt"))).unwrap();
    document(&parked).set_contents("parked\n");
    f.orch.switch_to(ContentKind::Terminal).unwrap();
    let shown = f.orch.open_editor(Some(&f.path("b.txt"))).unwrap();

    let job = spawn_save(runtime.handle(), parked.clone(), sequence.poster()).unwrap();
    runtime.block_on(job).unwrap();
    assert_eq!(sequence.pump(Some(Duration::from_secs(5))), 1);

    assert_eq!(fs::read_to_string(f.path("a.txt")).unwrap(), "parked\n");
    assert!(!f.orch.is_live(&parked));
    assert_eq!(f.orch.currently_bound(Region::Left), Some(shown));
    assert!(f.orch.is_visible(Region::Left));
    assert_eq!(f.orch.live_editors(), 1);
    f.assert_conserved();
    f.assert_exclusive();
}

#[test]
fn test_save_of_non_document_is_refused() {
    let f = build_fixture(1, AcquireMode::NonBlocking);
    let runtime = Runtime::new().unwrap();
    let sequence = MainSequence::new(Arc::clone(&f.orch));

    f.orch.switch_to(ContentKind::Terminal).unwrap();
    let terminal = f.orch.currently_bound(Region::Left).unwrap();
    assert!(spawn_save(runtime.handle(), terminal, sequence.poster()).is_none());
}

#[test]
fn test_run_handles_events_until_shutdown() {
    let f = build_fixture(1, AcquireMode::NonBlocking);
    let mut sequence = MainSequence::new(Arc::clone(&f.orch));
    let poster = sequence.poster();
    let file = f.path("a.txt");

    let producer = thread::spawn(move || {
        assert!(poster.post(ShellEvent::Input(Control::TerminalButton)));
        assert!(poster.post(ShellEvent::Input(Control::FileBrowserButton)));
        assert!(poster.post(ShellEvent::Open(Some(file))));
        assert!(poster.post(ShellEvent::Shutdown));
    });

    sequence.run();
    producer.join().unwrap();

    assert!(sequence.is_stopped());
    assert!(!f.orch.is_main_sequence());
    assert_eq!(
        f.orch.currently_bound(Region::Left).unwrap().kind(),
        ContentKind::Editor
    );
    assert!(f.orch.is_visible(Region::Right));
    f.assert_exclusive();
}

#[test]
fn test_remove_event_for_stale_handle_is_harmless() {
    let f = build_fixture(1, AcquireMode::NonBlocking);
    let mut sequence = MainSequence::new(Arc::clone(&f.orch));
    let editor = f.orch.open_editor(None).unwrap();

    let poster = sequence.poster();
    poster.post(ShellEvent::Remove(editor.clone()));
    poster.post(ShellEvent::Remove(editor.clone()));
    poster.post(ShellEvent::SaveFinished {
        editor,
        success: true,
    });
    assert_eq!(sequence.pump(None), 3);

    // Left was left empty, so the late completion fills it with the terminal
    assert_eq!(
        f.orch.currently_bound(Region::Left).unwrap().kind(),
        ContentKind::Terminal
    );
    assert_eq!(f.orch.pool().available(), 1);
    f.assert_conserved();
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let f = build_fixture(1, AcquireMode::Blocking);
    let mut sequence = MainSequence::new(Arc::clone(&f.orch));
    let poster = sequence.poster();

    // The second open fails on the main sequence instead of blocking it
    poster.post(ShellEvent::Open(None));
    poster.post(ShellEvent::Open(None));
    poster.post(ShellEvent::Input(Control::TerminalButton));
    assert_eq!(sequence.pump(None), 3);

    assert_eq!(f.orch.live_editors(), 1);
    assert_eq!(
        f.orch.currently_bound(Region::Left).unwrap().kind(),
        ContentKind::Terminal
    );
    assert!(!sequence.is_stopped());
    f.assert_conserved();
}
