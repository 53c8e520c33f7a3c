// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use requestty::question::Choice;
use requestty::{Answer, DefaultSeparator};

/// One line of a menu
#[derive(Clone, Debug)]
enum Row<K> {
    /// A selectable item carrying its typed key
    Item { key: K, label: String },
    /// A non-selectable section heading
    Heading(String),
    /// A plain divider line
    Gap,
}

/// A select menu whose items resolve back to typed keys
///
/// Rows keep their insertion order, and the answer index requestty hands
/// back counts headings and dividers too, so resolving a selection is a
/// plain lookup into the same row list the choices were rendered from.
#[derive(Clone, Debug)]
pub struct Menu<K> {
    rows: Vec<Row<K>>,
}

impl<K> Default for Menu<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Menu<K> {
    pub fn new() -> Self {
        Self { rows: vec![] }
    }

    /// A menu opening with a section heading
    pub fn title<T>(title: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            rows: vec![Row::Heading(format!("─ {} ", title.into()))],
        }
    }

    pub fn add<V>(mut self, key: K, label: V) -> Self
    where
        V: Into<String>,
    {
        self.rows.push(Row::Item {
            key,
            label: label.into(),
        });
        self
    }

    pub fn separator(mut self) -> Self {
        self.rows.push(Row::Gap);
        self
    }

    /// Append another menu's rows after this menu's own
    pub fn extend(mut self, other: Self) -> Self {
        self.rows.extend(other.rows);
        self
    }

    /// The key of the item a select answer points at
    pub fn answer(&self, answer: &Answer) -> &K {
        let index = answer.as_list_item().unwrap().index;
        match &self.rows[index] {
            Row::Item { key, .. } => key,
            _ => unreachable!("headings and dividers cannot be selected"),
        }
    }
}

impl<K> IntoIterator for Menu<K> {
    type Item = Choice<String>;
    type IntoIter = std::vec::IntoIter<Choice<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows
            .into_iter()
            .map(|row| match row {
                Row::Item { label, .. } => Choice::Choice(label),
                Row::Heading(text) => Choice::Separator(text),
                Row::Gap => DefaultSeparator,
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
}
