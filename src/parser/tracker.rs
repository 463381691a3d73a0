//! Current-section tracking for passthrough lines

use super::classify::LineKind;
use crate::model::Section;

/// Remembers which section the parser is in, so unclassified lines can be
/// grouped with the nearest preceding recognised content.
#[derive(Debug, Default)]
pub struct SectionTracker {
    current: Section,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Update the section after a line was classified.
    pub fn observe(&mut self, kind: &LineKind) {
        match kind {
            LineKind::Alias { .. } => self.current = Section::Aliases,
            LineKind::Export { .. } => self.current = Section::Exports,
            LineKind::Theme(_) | LineKind::Plugins(_) => self.current = Section::OhMyZsh,
            LineKind::SectionHeader(section) => self.current = *section,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_other() {
        assert_eq!(SectionTracker::new().current(), Section::Other);
    }

    #[test]
    fn test_observe_switches_section() {
        let mut tracker = SectionTracker::new();

        tracker.observe(&LineKind::Export {
            name: "EDITOR".into(),
            value: "vim".into(),
        });
        assert_eq!(tracker.current(), Section::Exports);

        tracker.observe(&LineKind::Plugins(vec!["git".into()]));
        assert_eq!(tracker.current(), Section::OhMyZsh);

        tracker.observe(&LineKind::Alias {
            name: "ll".into(),
            value: "ls -la".into(),
        });
        assert_eq!(tracker.current(), Section::Aliases);
    }

    #[test]
    fn test_unclassified_lines_keep_section() {
        let mut tracker = SectionTracker::new();
        tracker.observe(&LineKind::Theme("agnoster".into()));
        tracker.observe(&LineKind::Unclassified);
        tracker.observe(&LineKind::BlankOrComment);
        tracker.observe(&LineKind::FunctionStart("greet".into()));
        assert_eq!(tracker.current(), Section::OhMyZsh);
    }
}
