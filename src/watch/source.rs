//! Filesystem event sources.
//!
//! The watcher only depends on [`EventSource`]; `NotifySource` is the
//! production implementation and tests plug in their own.

use std::path::Path;

use anyhow::Result;
use crossbeam::channel::Sender;
use notify::event::{EventKind, ModifyKind, RenameMode};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};

use super::types::{ChangeKind, FsEvent};

/// Push-based source of filesystem changes under a root.
pub trait EventSource {
    /// Keeps the subscription alive; dropping it stops delivery.
    type Subscription;

    /// Start delivering every change below `root` into `sink`.
    fn subscribe(&mut self, root: &Path, sink: Sender<FsEvent>) -> Result<Self::Subscription>;
}

/// Recursive watch through the platform's recommended `notify` backend.
#[derive(Debug, Default)]
pub struct NotifySource;

impl EventSource for NotifySource {
    type Subscription = RecommendedWatcher;

    fn subscribe(&mut self, root: &Path, sink: Sender<FsEvent>) -> Result<RecommendedWatcher> {
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            match res {
                Ok(event) => {
                    crate::debug!("watch"; "raw notify: {:?} {:?}", event.kind, event.paths);
                    for change in translate(&event) {
                        if sink.send(change).is_err() {
                            break; // Receiver dropped
                        }
                    }
                }
                Err(e) => crate::log!("watch"; "notify error: {}", e),
            }
        })?;

        watcher.watch(root, RecursiveMode::Recursive)?;
        Ok(watcher)
    }
}

/// Map one notify event to per-path changes.
///
/// - Metadata-only modifications (mtime/atime/chmod) are dropped
/// - Renames become Removed for the old name and Created for the new one
/// - A rename of unknown direction is decided by whether the path exists
/// - Access and other events are dropped
pub fn translate(event: &notify::Event) -> Vec<FsEvent> {
    let all = |kind: ChangeKind| -> Vec<FsEvent> {
        event
            .paths
            .iter()
            .map(|p| FsEvent::new(kind, p.clone()))
            .collect()
    };

    match event.kind {
        EventKind::Create(_) => all(ChangeKind::Created),
        EventKind::Remove(_) => all(ChangeKind::Removed),
        EventKind::Modify(ModifyKind::Metadata(_)) => Vec::new(),
        EventKind::Modify(ModifyKind::Name(mode)) => match mode {
            RenameMode::From => all(ChangeKind::Removed),
            RenameMode::To => all(ChangeKind::Created),
            RenameMode::Both => event
                .paths
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let kind = if i == 0 {
                        ChangeKind::Removed
                    } else {
                        ChangeKind::Created
                    };
                    FsEvent::new(kind, p.clone())
                })
                .collect(),
            _ => event
                .paths
                .iter()
                .map(|p| {
                    let kind = if p.exists() {
                        ChangeKind::Created
                    } else {
                        ChangeKind::Removed
                    };
                    FsEvent::new(kind, p.clone())
                })
                .collect(),
        },
        EventKind::Modify(_) => all(ChangeKind::Modified),
        _ => Vec::new(),
    }
}
