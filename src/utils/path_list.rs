//! PATH value editing
//!
//! A PATH value is a `:`-separated list of directories. Empty segments are
//! dropped. A self-reference (`$PATH` / `${PATH}`) is kept where it is;
//! appended directories are inserted in front of a trailing self-reference.

/// Split a PATH value into its non-empty segments.
pub fn split_path(value: &str) -> Vec<String> {
    value
        .split(':')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_path(entries: &[String]) -> String {
    entries.join(":")
}

/// True for `$PATH` or `${PATH}`.
pub fn is_self_reference(segment: &str) -> bool {
    segment == "$PATH" || segment == "${PATH}"
}

/// Add a directory. Returns `false` when it is already present.
///
/// Appending places the directory before a trailing self-reference.
pub fn add_entry(entries: &mut Vec<String>, dir: &str, prepend: bool) -> bool {
    let dir = dir.trim();
    if dir.is_empty() || entries.iter().any(|e| e == dir) {
        return false;
    }
    if prepend {
        entries.insert(0, dir.to_string());
    } else {
        let at = match entries.last() {
            Some(last) if is_self_reference(last) => entries.len() - 1,
            _ => entries.len(),
        };
        entries.insert(at, dir.to_string());
    }
    true
}

/// Remove every occurrence of a directory. Returns `false` if absent.
pub fn remove_entry(entries: &mut Vec<String>, dir: &str) -> bool {
    let before = entries.len();
    entries.retain(|e| e != dir.trim());
    entries.len() != before
}

/// Swap a directory with its neighbour. Returns `false` if it is absent or
/// already at that end of the list.
pub fn move_entry(entries: &mut [String], dir: &str, up: bool) -> bool {
    let Some(idx) = entries.iter().position(|e| e == dir.trim()) else {
        return false;
    };
    let target = if up {
        match idx.checked_sub(1) {
            Some(target) => target,
            None => return false,
        }
    } else {
        if idx + 1 >= entries.len() {
            return false;
        }
        idx + 1
    };
    entries.swap(idx, target);
    true
}

/// True if the list inherits the existing PATH somewhere.
pub fn has_self_reference(entries: &[String]) -> bool {
    entries.iter().any(|e| is_self_reference(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_drops_empty_segments() {
        assert_eq!(
            split_path("/usr/local/bin::$HOME/bin:$PATH:"),
            vec!["/usr/local/bin", "$HOME/bin", "$PATH"]
        );
        assert!(split_path("").is_empty());
    }

    #[test]
    fn test_join() {
        let entries = vec!["/a".to_string(), "$PATH".to_string()];
        assert_eq!(join_path(&entries), "/a:$PATH");
    }

    #[test]
    fn test_add_appends_before_self_reference() {
        let mut entries = split_path("/usr/local/bin:$PATH");
        assert!(add_entry(&mut entries, "$HOME/.cargo/bin", false));
        assert_eq!(
            join_path(&entries),
            "/usr/local/bin:$HOME/.cargo/bin:$PATH"
        );
    }

    #[test]
    fn test_add_prepend_and_duplicate() {
        let mut entries = split_path("/usr/bin");
        assert!(add_entry(&mut entries, "/opt/bin", true));
        assert!(!add_entry(&mut entries, "/opt/bin", false));
        assert_eq!(join_path(&entries), "/opt/bin:/usr/bin");
    }

    #[test]
    fn test_remove() {
        let mut entries = split_path("/a:/b:/a");
        assert!(remove_entry(&mut entries, "/a"));
        assert_eq!(entries, vec!["/b"]);
        assert!(!remove_entry(&mut entries, "/missing"));
    }

    #[test]
    fn test_move_up_and_down() {
        let mut entries = split_path("/a:/b:$PATH");
        assert!(move_entry(&mut entries, "/b", true));
        assert_eq!(join_path(&entries), "/b:/a:$PATH");
        assert!(move_entry(&mut entries, "/b", false));
        assert_eq!(join_path(&entries), "/a:/b:$PATH");
    }

    #[test]
    fn test_move_at_edges_or_missing() {
        let mut entries = split_path("/a:/b");
        assert!(!move_entry(&mut entries, "/a", true));
        assert!(!move_entry(&mut entries, "/b", false));
        assert!(!move_entry(&mut entries, "/missing", true));
        assert_eq!(join_path(&entries), "/a:/b");
    }

    #[test]
    fn test_has_self_reference() {
        assert!(has_self_reference(&split_path("/a:${PATH}")));
        assert!(!has_self_reference(&split_path("/a:/b")));
    }
}
