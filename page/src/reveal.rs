//! Staggered fade-in for sections and project cards.
//!
//! Elements start transparent and offset. When a visibility batch reports
//! some of them intersecting, those are numbered in batch order and each is
//! revealed `index × stagger` later. Reveal is one-shot: the element is
//! unobserved right away and later reports for it are ignored.

use std::collections::HashSet;

use crate::action::{Action, Target, Task};
use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    Section,
    Card,
}

impl RevealKind {
    #[must_use]
    pub fn target(self, index: usize) -> Target {
        match self {
            Self::Section => Target::Section(index),
            Self::Card => Target::Card(index),
        }
    }

    #[must_use]
    pub fn stagger_ms(self, config: &PageConfig) -> u64 {
        match self {
            Self::Section => config.section_stagger_ms,
            Self::Card => config.card_stagger_ms,
        }
    }

    fn hidden_transform(self) -> &'static str {
        match self {
            Self::Section => "translateY(50px)",
            Self::Card => "translateY(30px) scale(0.95)",
        }
    }

    fn shown_transform(self) -> &'static str {
        match self {
            Self::Section => "translateY(0)",
            Self::Card => "translateY(0) scale(1)",
        }
    }

    fn transition(self) -> &'static str {
        match self {
            Self::Section => "opacity 0.8s ease, transform 0.8s ease",
            Self::Card => "opacity 0.6s ease, transform 0.6s ease",
        }
    }
}

/// One entry of a visibility batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    /// Position of the element among its kind, in document order.
    pub index: usize,
    pub intersecting: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<(RevealKind, usize)>,
}

impl RevealTracker {
    #[must_use]
    pub fn is_revealed(&self, kind: RevealKind, index: usize) -> bool {
        self.revealed.contains(&(kind, index))
    }

    /// Put `count` elements of `kind` into their hidden starting state.
    #[must_use]
    pub fn prepare(&self, kind: RevealKind, count: usize) -> Vec<Action> {
        (0..count)
            .flat_map(|index| {
                let target = kind.target(index);
                [
                    Action::style(target, "opacity", "0"),
                    Action::style(target, "transform", kind.hidden_transform()),
                    Action::style(target, "transition", kind.transition()),
                ]
            })
            .collect()
    }

    pub fn observe_batch(&mut self, kind: RevealKind, entries: &[Intersection], config: &PageConfig) -> Vec<Action> {
        let stagger = kind.stagger_ms(config);
        let mut actions = Vec::new();
        let mut order = 0_u64;
        for entry in entries.iter().filter(|entry| entry.intersecting) {
            if !self.revealed.insert((kind, entry.index)) {
                continue;
            }
            actions.push(Action::Unobserve(kind.target(entry.index)));
            actions.push(Action::defer_ms(order * stagger, Task::Reveal { kind, index: entry.index }));
            order += 1;
        }
        actions
    }

    #[must_use]
    pub fn reveal(&self, kind: RevealKind, index: usize) -> Vec<Action> {
        let target = kind.target(index);
        vec![Action::style(target, "opacity", "1"), Action::style(target, "transform", kind.shown_transform())]
    }
}

#[cfg(test)]
#[path = "reveal_test.rs"]
mod tests;
