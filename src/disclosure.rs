//! `<details>` disclosure menus.
//!
//! Disclosures are registered in document order with the index of the
//! navigation container (group) they belong to. Within a group at most one
//! disclosure is open: a genuine closed-to-open transition closes the others.
//! Outside clicks and Escape close open disclosures regardless of group.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

use crate::action::{Action, Target};

/// Index of the container a disclosure belongs to.
pub type GroupId = usize;

#[derive(Debug, Clone, Copy)]
struct Entry {
    group: GroupId,
    open: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Disclosures {
    entries: Vec<Entry>,
}

impl Disclosures {
    /// Register disclosures as `(group, initially_open)` pairs.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (GroupId, bool)>) -> Self {
        Self { entries: entries.into_iter().map(|(group, open)| Entry { group, open }).collect() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.open)
    }

    /// Indices of currently open disclosures.
    #[must_use]
    pub fn open_indices(&self) -> Vec<usize> {
        self.entries.iter().enumerate().filter(|(_, e)| e.open).map(|(i, _)| i).collect()
    }

    /// Native `toggle` event. Opening closes every other open sibling in the
    /// same group; an "open" report for an already-open disclosure is ignored.
    pub fn on_toggle(&mut self, index: usize, open: bool) -> Vec<Action> {
        let Some(entry) = self.entries.get_mut(index) else {
            return Vec::new();
        };
        let was_open = entry.open;
        entry.open = open;
        if !open || was_open {
            return Vec::new();
        }

        let group = entry.group;
        let siblings: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, e)| *i != index && e.group == group && e.open)
            .map(|(i, _)| i)
            .collect();
        if !siblings.is_empty() {
            log::debug!("disclosure: {index} opened, closing siblings {siblings:?}");
        }
        siblings.into_iter().map(|i| self.close(i)).collect()
    }

    /// Document click. Closes every open disclosure not containing the target.
    pub fn on_document_click(&mut self, inside: &[usize]) -> Vec<Action> {
        self.open_indices()
            .into_iter()
            .filter(|i| !inside.contains(i))
            .map(|i| self.close(i))
            .collect()
    }

    /// Escape closes every open disclosure and returns focus to its summary.
    pub fn on_escape(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        for index in self.open_indices() {
            actions.push(self.close(index));
            actions.push(Action::Focus { target: Target::DisclosureSummary(index), prevent_scroll: false });
        }
        actions
    }

    fn close(&mut self, index: usize) -> Action {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.open = false;
        }
        Action::SetOpen { target: Target::Disclosure(index), open: false }
    }
}
