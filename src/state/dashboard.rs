// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! Dashboard pane visibility.

/// The dashboard's collapsible panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The send form
    Send,
    /// The send confirmation step
    Confirm,
}

/// Which panes are open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// The send form is open
    pub send_pane: bool,
    /// The confirmation step is open
    pub confirm_pane: bool,
}

/// Pane events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// Flip one pane open or closed
    TogglePane(Pane),
}

pub(crate) fn reduce(state: &mut DashboardState, action: DashboardAction) {
    match action {
        DashboardAction::TogglePane(Pane::Send) => state.send_pane = !state.send_pane,
        DashboardAction::TogglePane(Pane::Confirm) => state.confirm_pane = !state.confirm_pane,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panes_toggle_independently() {
        let mut state = DashboardState::default();
        reduce(&mut state, DashboardAction::TogglePane(Pane::Confirm));
        assert!(state.confirm_pane);
        assert!(!state.send_pane);
        reduce(&mut state, DashboardAction::TogglePane(Pane::Confirm));
        assert!(!state.confirm_pane);
    }
}
