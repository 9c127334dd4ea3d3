use super::*;
use crate::content::{ContentHandle, ContentId, ContentTag, ContentView, EditorTag};
use crate::error::PaneError;
use crate::host::{Directive, Transaction};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

struct Stub;

impl ContentView for Stub {
    fn title(&self) -> String {
        "stub".to_string()
    }
}

fn handle(id: u64, tag: ContentTag) -> ContentHandle {
    ContentHandle::new(ContentId::new(id), tag, Arc::new(Stub))
}

fn editor(id: u64) -> ContentHandle {
    handle(id, ContentTag::Editor(EditorTag::Scratch(id)))
}

#[test]
fn test_new_pane_is_empty() {
    let pane = PaneState::new(Region::Left);
    let snap = pane.snapshot();
    assert_eq!(snap.region, Region::Left);
    assert_eq!(snap.bound, None);
    assert!(!snap.visible);
    assert_eq!(snap.hides, 0);
}

#[test]
fn test_bind_and_show_hides_previous_first() {
    let pane = PaneState::new(Region::Left);
    let terminal = handle(1, ContentTag::Terminal);
    let ed = editor(2);

    let mut tx = Transaction::new();
    {
        let mut guard = pane.lock();
        guard.bind_and_show(&terminal, &mut tx);
        guard.bind_and_show(&ed, &mut tx);
    }

    assert_eq!(
        tx.directives(),
        &[
            Directive::Show(terminal.id()),
            Directive::Hide(terminal.id()),
            Directive::Show(ed.id()),
        ]
    );
    let snap = pane.snapshot();
    assert_eq!(snap.bound, Some(ed.id()));
    assert!(snap.visible);
    assert_eq!(snap.hides, 1);
}

#[test]
fn test_rebinding_same_handle_is_idempotent() {
    let pane = PaneState::new(Region::Left);
    let terminal = handle(1, ContentTag::Terminal);

    let mut first = Transaction::new();
    pane.lock().bind_and_show(&terminal, &mut first);
    let before = pane.snapshot();

    let mut second = Transaction::new();
    pane.lock().bind_and_show(&terminal, &mut second);
    assert!(second.is_empty());
    assert_eq!(pane.snapshot(), before);
}

#[test]
fn test_hide_keeps_binding() {
    let pane = PaneState::new(Region::Right);
    let browser = handle(1, ContentTag::FileBrowser);

    let mut tx = Transaction::new();
    let mut guard = pane.lock();
    guard.bind_and_show(&browser, &mut tx);
    guard.hide(&browser, &mut tx).unwrap();
    assert_eq!(guard.bound(), Some(&browser));
    assert!(!guard.is_visible());

    // Hiding an already hidden handle emits nothing
    let len = tx.len();
    guard.hide(&browser, &mut tx).unwrap();
    assert_eq!(tx.len(), len);
    assert_eq!(guard.snapshot().hides, 1);
}

#[test]
fn test_hide_of_foreign_handle_is_inconsistent() {
    let pane = PaneState::new(Region::Left);
    let terminal = handle(1, ContentTag::Terminal);
    let stranger = editor(9);

    let mut tx = Transaction::new();
    let mut guard = pane.lock();
    guard.bind_and_show(&terminal, &mut tx);
    let err = guard.hide(&stranger, &mut tx).unwrap_err();
    assert!(matches!(
        err,
        PaneError::InconsistentBinding {
            region: Region::Left,
            ..
        }
    ));
    assert!(guard.shows(&terminal));
}

#[test]
fn test_unbind_empties_pane() {
    let pane = PaneState::new(Region::Left);
    let ed = editor(3);

    let mut tx = Transaction::new();
    let mut guard = pane.lock();
    guard.bind_and_show(&ed, &mut tx);
    guard.unbind(&ed).unwrap();
    assert!(guard.bound().is_none());
    assert!(!guard.is_visible());
    assert!(guard.unbind(&ed).is_err());
}

#[test]
fn test_is_free_for() {
    let pane = PaneState::new(Region::Left);
    let terminal = handle(1, ContentTag::Terminal);
    let ed = editor(2);

    let mut tx = Transaction::new();
    let mut guard = pane.lock();
    assert!(guard.is_free_for(&ed));
    guard.bind_and_show(&terminal, &mut tx);
    assert!(!guard.is_free_for(&ed));
    assert!(guard.is_free_for(&terminal));
    guard.hide(&terminal, &mut tx).unwrap();
    assert!(guard.is_free_for(&ed));
}

#[test]
fn test_wait_until_free_wakes_on_hide() {
    let pane = Arc::new(PaneState::new(Region::Left));
    let terminal = handle(1, ContentTag::Terminal);
    let ed = editor(2);

    let mut tx = Transaction::new();
    pane.lock().bind_and_show(&terminal, &mut tx);

    let (done_tx, done_rx) = mpsc::channel();
    let waiter = {
        let pane = Arc::clone(&pane);
        let ed = ed.clone();
        thread::spawn(move || {
            let mut guard = pane.lock();
            guard.wait_until_free(&ed);
            let mut tx = Transaction::new();
            guard.bind_and_show(&ed, &mut tx);
            done_tx.send(()).unwrap();
        })
    };

    assert!(done_rx.recv_timeout(Duration::from_millis(100)).is_err());
    pane.lock().hide(&terminal, &mut tx).unwrap();
    done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("waiter should run after the hide");
    waiter.join().unwrap();

    assert_eq!(pane.current(), Some(ed));
    assert!(pane.is_visible());
}
