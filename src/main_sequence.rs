//! Serial dispatch loop for user input and background completions.
//!
//! Background contexts never touch pane state. They post a [`ShellEvent`]
//! through an [`EventPoster`] and the main sequence applies it through the
//! orchestrator's public operations, one event at a time.

use crate::content::ContentHandle;
use crate::content::ContentKind;
use crate::orchestrator::{Control, PaneOrchestrator};
use crate::pane::Region;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

/// Messages consumed by the main sequence
#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// A shell control was pressed
    Input(Control),
    /// Open an editor, against a file or as a scratch buffer
    Open(Option<PathBuf>),
    /// Permanently remove content
    Remove(ContentHandle),
    /// A background save finished
    SaveFinished {
        editor: ContentHandle,
        success: bool,
    },
    /// Stop the loop
    Shutdown,
}

/// Cloneable sender for posting events from any context
#[derive(Debug, Clone)]
pub struct EventPoster {
    tx: Sender<ShellEvent>,
}

impl EventPoster {
    /// Queue `event`; returns `false` once the main sequence is gone
    pub fn post(&self, event: ShellEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Outcome of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

pub struct MainSequence {
    orchestrator: Arc<PaneOrchestrator>,
    tx: Sender<ShellEvent>,
    rx: Receiver<ShellEvent>,
    stopped: bool,
}

impl MainSequence {
    pub fn new(orchestrator: Arc<PaneOrchestrator>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            orchestrator,
            tx,
            rx,
            stopped: false,
        }
    }

    pub fn poster(&self) -> EventPoster {
        EventPoster {
            tx: self.tx.clone(),
        }
    }

    pub fn orchestrator(&self) -> &Arc<PaneOrchestrator> {
        &self.orchestrator
    }

    /// Whether a `Shutdown` event has been handled
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Run on the calling thread until `Shutdown` arrives.
    ///
    /// The calling thread becomes the orchestrator's main sequence for the
    /// duration of the loop.
    pub fn run(&mut self) {
        self.orchestrator.enter_main_sequence();
        crate::debug_info!("MAIN", "Main sequence started");
        while !self.stopped {
            // Our own sender keeps the channel open, so recv only fails if
            // the receiver is somehow disconnected
            let Ok(event) = self.rx.recv() else {
                break;
            };
            if self.handle(event) == Flow::Stop {
                self.stopped = true;
            }
        }
        self.orchestrator.leave_main_sequence();
        crate::debug_info!("MAIN", "Main sequence stopped");
    }

    /// Handle queued events without taking over the thread.
    ///
    /// With `wait` set, blocks up to that long for the first event. Returns
    /// the number of events handled. Used by the interactive shell, which
    /// interleaves reading commands with draining completions.
    pub fn pump(&mut self, wait: Option<Duration>) -> usize {
        self.orchestrator.enter_main_sequence();
        let mut handled = 0;

        if let Some(wait) = wait
            && !self.stopped
        {
            match self.rx.recv_timeout(wait) {
                Ok(event) => {
                    handled += 1;
                    if self.handle(event) == Flow::Stop {
                        self.stopped = true;
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return 0;
                }
            }
        }

        while !self.stopped {
            match self.rx.try_recv() {
                Ok(event) => {
                    handled += 1;
                    if self.handle(event) == Flow::Stop {
                        self.stopped = true;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        handled
    }

    fn handle(&self, event: ShellEvent) -> Flow {
        crate::debug_trace!("MAIN", "Handling {:?}", event);
        let orch = &self.orchestrator;
        match event {
            ShellEvent::Input(control) => {
                if let Err(e) = orch.dispatch_input(control) {
                    log::error!("{} failed: {}", control, e);
                }
            }
            ShellEvent::Open(file) => {
                if let Err(e) = orch.open_editor(file.as_deref()) {
                    log::error!("Open editor failed: {}", e);
                }
            }
            ShellEvent::Remove(handle) => {
                orch.remove(&handle);
            }
            ShellEvent::SaveFinished { editor, success } => {
                if success {
                    crate::debug_info!("MAIN", "Saved {}, closing it", editor);
                    // A parked editor closes quietly; Left keeps what it shows
                    let on_left = match orch.currently_bound(Region::Left) {
                        Some(bound) => bound == editor,
                        None => true,
                    };
                    orch.remove(&editor);
                    if on_left && let Err(e) = orch.switch_to(ContentKind::Terminal) {
                        log::error!("Could not return to the terminal: {}", e);
                    }
                } else {
                    log::warn!("Save of {} failed; keeping the editor open", editor);
                }
            }
            ShellEvent::Shutdown => return Flow::Stop,
        }
        Flow::Continue
    }
}
