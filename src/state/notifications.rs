// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! Notification toasts.
//!
//! Toasts queue up until the interface drains them; there is no
//! timed dismissal. Background tasks can notify freely and nothing is
//! lost between redraws.

use std::fmt;

use crate::state::Store;

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Something worked
    Success,
    /// Something failed
    Error,
    /// Neutral information
    Info,
    /// Something looks off but nothing failed yet
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Success => write!(f, "success"),
            Level::Error => write!(f, "error"),
            Level::Info => write!(f, "info"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// One queued toast
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Severity
    pub level: Level,
    /// The user-facing message
    pub message: String,
}

/// Pending toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsState {
    /// The queue itself
    pub queue: Vec<Notification>,
}

/// Toast queue events
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationsAction {
    /// Queue a toast
    Show(Notification),
    /// Drop every queued toast
    Clear,
}

pub(crate) fn reduce(state: &mut NotificationsState, action: NotificationsAction) {
    match action {
        NotificationsAction::Show(notification) => state.queue.push(notification),
        NotificationsAction::Clear => state.queue.clear(),
    }
}

/// Queue a success toast
pub fn show_success_notification(store: &Store, message: &str) {
    show(store, Level::Success, message);
}

/// Queue an error toast
pub fn show_error_notification(store: &Store, message: &str) {
    show(store, Level::Error, message);
}

/// Queue an informational toast
pub fn show_info_notification(store: &Store, message: &str) {
    show(store, Level::Info, message);
}

/// Queue a warning toast
pub fn show_warning_notification(store: &Store, message: &str) {
    show(store, Level::Warning, message);
}

fn show(store: &Store, level: Level, message: &str) {
    store.dispatch(NotificationsAction::Show(Notification {
        level,
        message: message.into(),
    }));
}

/// Take every pending toast off the queue
pub fn drain_notifications(store: &Store) -> Vec<Notification> {
    let pending = store.select(|s| s.notifications.queue.clone());
    if !pending.is_empty() {
        store.dispatch(NotificationsAction::Clear);
    }
    pending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_and_drain() {
        let store = Store::new();
        show_success_notification(&store, "Received latest blockchain information.");
        show_error_notification(&store, "Failed to retrieve blockchain information");

        let drained = drain_notifications(&store);
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].level, Level::Success);
        assert_eq!(drained[1].level, Level::Error);

        assert!(drain_notifications(&store).is_empty());
    }

    #[test]
    fn every_level_queues_and_prints() {
        let store = Store::new();
        show_info_notification(&store, "Connected to TestNet");
        show_warning_notification(&store, "Price ticker is unreachable");

        let drained = drain_notifications(&store);
        assert_eq!(drained[0].level, Level::Info);
        assert_eq!(drained[1].level, Level::Warning);
        assert_eq!(drained[0].level.to_string(), "info");
        assert_eq!(drained[1].level.to_string(), "warning");
    }
}
