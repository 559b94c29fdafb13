//! Symbol-name classification shared by the API and import generators.

/// Is `name` one half of a Windows ANSI/Wide pair such as `CreateFileA`/`CreateFileW`?
///
/// The final `A`/`W` must follow a lowercase ASCII letter or digit, which
/// rules out names that merely end in an uppercase word (`IsWOW`, `DATA`).
pub fn is_aw_variant(name: &str) -> bool {
    let mut tail = name.chars().rev();
    let (Some(last), Some(pen)) = (tail.next(), tail.next()) else {
        return false;
    };
    matches!(last, 'A' | 'W') && (pen.is_ascii_lowercase() || pen.is_ascii_digit())
}

/// Strip the `A`/`W` suffix of an AW-variant name.
pub fn strip_aw_suffix(name: &str) -> Option<&str> {
    // The suffix is a single ASCII byte whenever the check passes.
    is_aw_variant(name).then(|| &name[..name.len() - 1])
}

/// Ordinal imports are named `#<index>` by the loader.
pub fn is_ordinal(symbol: &str) -> bool {
    symbol.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aw_pairs() {
        assert!(is_aw_variant("CreateFileA"));
        assert!(is_aw_variant("CreateFileW"));
        assert!(is_aw_variant("Process32FirstW"));
        assert!(is_aw_variant("aW"));
        assert!(is_aw_variant("0A"));
    }

    #[test]
    fn not_aw_pairs() {
        assert!(!is_aw_variant(""));
        assert!(!is_aw_variant("A"));
        assert!(!is_aw_variant("W"));
        assert!(!is_aw_variant("IsWOW"));
        assert!(!is_aw_variant("DATA"));
        assert!(!is_aw_variant("CreateFile"));
        assert!(!is_aw_variant("createfilea"));
        assert!(!is_aw_variant("_A"));
        assert!(!is_aw_variant("éA"));
        assert!(!is_aw_variant("CreateFileA "));
    }

    #[test]
    fn strip_suffix() {
        assert_eq!(strip_aw_suffix("RegOpenKeyExW"), Some("RegOpenKeyEx"));
        assert_eq!(strip_aw_suffix("kernel32.CreateFileA"), Some("kernel32.CreateFile"));
        assert_eq!(strip_aw_suffix("VirtualAlloc"), None);
        assert_eq!(strip_aw_suffix("ÿaW"), Some("ÿa"));
    }

    #[test]
    fn ordinals() {
        assert!(is_ordinal("#1"));
        assert!(is_ordinal("#"));
        assert!(!is_ordinal("CreateFileA"));
        assert!(!is_ordinal(""));
    }
}
