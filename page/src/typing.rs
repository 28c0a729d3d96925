//! Hero typewriter effect: title first, then the tagline, one pass.

use crate::action::{Action, Target, Task};
use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroLine {
    Title,
    Tagline,
}

impl HeroLine {
    fn target(self) -> Target {
        match self {
            Self::Title => Target::HeroTitle,
            Self::Tagline => Target::HeroTagline,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    title: Vec<char>,
    tagline: Option<Vec<char>>,
}

impl Typewriter {
    /// Capture the hero text and clear the title. The tagline stays visible
    /// until the title is done.
    pub fn start(&mut self, title: &str, tagline: Option<&str>, config: &PageConfig) -> Vec<Action> {
        self.title = title.chars().collect();
        self.tagline = tagline.map(|text| text.chars().collect());
        vec![
            Action::text(Target::HeroTitle, ""),
            Action::defer_ms(config.typing_start_delay_ms, Task::Type { line: HeroLine::Title, next: 0 }),
        ]
    }

    pub fn type_next(&self, line: HeroLine, next: usize, config: &PageConfig) -> Vec<Action> {
        let (chars, cadence) = match line {
            HeroLine::Title => (Some(&self.title), config.title_cadence_ms),
            HeroLine::Tagline => (self.tagline.as_ref(), config.tagline_cadence_ms),
        };
        let Some(chars) = chars else {
            return Vec::new();
        };

        if next < chars.len() {
            let shown: String = chars[..=next].iter().collect();
            return vec![
                Action::text(line.target(), shown),
                Action::defer_ms(cadence, Task::Type { line, next: next + 1 }),
            ];
        }

        match line {
            HeroLine::Title if self.tagline.is_some() => vec![
                Action::text(Target::HeroTagline, ""),
                Action::defer_ms(config.tagline_pause_ms, Task::Type { line: HeroLine::Tagline, next: 0 }),
            ],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "typing_test.rs"]
mod tests;
