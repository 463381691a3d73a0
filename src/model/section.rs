//! Section labels used to group passthrough lines

use std::fmt;

/// Label of a raw passthrough section.
///
/// The derived ordering is the order in which raw sections are written
/// back out: `ohmyzsh`, `exports`, `aliases`, then `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Section {
    OhMyZsh,
    Exports,
    Aliases,
    #[default]
    Other,
}

impl Section {
    /// Label as it appears in section header comments.
    pub fn label(&self) -> &'static str {
        match self {
            Section::OhMyZsh => "ohmyzsh",
            Section::Exports => "exports",
            Section::Aliases => "aliases",
            Section::Other => "other",
        }
    }

    /// Header comment written before a non-empty raw section.
    ///
    /// `other` has no header.
    pub fn header(&self) -> Option<String> {
        match self {
            Section::Other => None,
            _ => Some(format!("# {}", self.label())),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ohmyzsh" => Ok(Section::OhMyZsh),
            "exports" => Ok(Section::Exports),
            "aliases" => Ok(Section::Aliases),
            "other" => Ok(Section::Other),
            _ => Err(format!("Unknown section: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let mut sections = vec![
            Section::Other,
            Section::Aliases,
            Section::OhMyZsh,
            Section::Exports,
        ];
        sections.sort();
        assert_eq!(
            sections,
            vec![
                Section::OhMyZsh,
                Section::Exports,
                Section::Aliases,
                Section::Other
            ]
        );
    }

    #[test]
    fn test_section_header() {
        assert_eq!(Section::Aliases.header().as_deref(), Some("# aliases"));
        assert_eq!(Section::OhMyZsh.header().as_deref(), Some("# ohmyzsh"));
        assert!(Section::Other.header().is_none());
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("exports".parse::<Section>().unwrap(), Section::Exports);
        assert_eq!("OhMyZsh".parse::<Section>().unwrap(), Section::OhMyZsh);
        assert!("plugins".parse::<Section>().is_err());
    }
}
