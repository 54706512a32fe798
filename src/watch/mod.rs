//! Change watcher.
//!
//! Re-runs the generation pass whenever an asset under the scan root is
//! created, modified or removed, or a directory is moved in or out of it.
//!
//! ```text
//! EventSource (notify thread) → channel → EventClassifier → generate()
//! ```
//!
//! Events are handled one at a time on the calling thread, so two passes
//! never overlap and the output file is only ever written by one pass.
//! There is no debouncing: every qualifying event runs its own pass.

use anyhow::Result;
use crossbeam::channel::{self, Receiver};

use crate::config::GenConfig;
use crate::error::GenError;
use crate::generator::{GenerateReport, generate};
use crate::logger::{status_error, status_success};
use crate::utils::count_noun;

// Qualifying-event filter.
mod classifier;
// Event source capability and the notify-backed implementation.
mod source;
// Shared event types.
mod types;


use classifier::EventClassifier;

pub use source::{EventSource, NotifySource};
pub use types::{FsEvent, WatchState};

/// Result of handling one event.
#[derive(Debug)]
pub enum Handled {
    /// Not a qualifying event, nothing ran
    Ignored,
    Regenerated(GenerateReport),
    /// The pass failed; the watcher keeps going
    Failed(GenError),
}

/// Watches the scan root and keeps the generated module in sync.
pub struct ChangeWatcher<'a> {
    config: &'a GenConfig,
    classifier: EventClassifier,
    state: WatchState,
}

impl<'a> ChangeWatcher<'a> {
    pub fn new(config: &'a GenConfig) -> Self {
        Self {
            config,
            classifier: EventClassifier::new(config),
            state: WatchState::Idle,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Handle one event, running a full pass if it qualifies.
    pub fn handle(&mut self, event: &FsEvent) -> Handled {
        crate::debug!("watch"; "{}: {}", event.kind.label(), event.path.display());

        if !self.classifier.qualifies(event) {
            return Handled::Ignored;
        }

        self.state = WatchState::Regenerating;
        let result = generate(self.config);
        self.state = WatchState::Idle;

        match result {
            Ok(report) => Handled::Regenerated(report),
            Err(e) => Handled::Failed(e),
        }
    }

    /// Subscribe to `source` and handle events until the source goes away
    /// or `shutdown` fires.
    pub fn run<S: EventSource>(mut self, source: &mut S, shutdown: Receiver<()>) -> Result<()> {
        let (tx, rx) = channel::unbounded();
        let _subscription = source.subscribe(self.config.root(), tx)?;

        crate::log!("watch"; "monitoring changes in directory: {}", self.config.root().display());

        loop {
            let next = crossbeam::select! {
                recv(rx) -> msg => msg.ok(),
                recv(shutdown) -> _ => {
                    crate::log!("watch"; "stopping");
                    None
                }
            };
            // Source hung up or Ctrl+C
            let Some(event) = next else {
                break;
            };

            let handled = self.handle(&event);
            log_handled(&event, handled);
        }

        Ok(())
    }
}

fn log_handled(event: &FsEvent, handled: Handled) {
    match handled {
        Handled::Ignored => {}
        Handled::Regenerated(report) => status_success(&format!(
            "{} {} → {} ({})",
            event.kind.label(),
            event.path.display(),
            report.output.display(),
            count_noun(report.assets, "asset")
        )),
        Handled::Failed(e) => status_error(
            &format!("regeneration failed after {} {}", event.kind.label(), event.path.display()),
            &e.into_report(),
        ),
    }
}
