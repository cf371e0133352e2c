//! Canonical slug derivation for icon filenames.

/// Convert a display name into a lowercase, filesystem-safe slug.
///
/// Lowercases the input, drops every character that is not alphanumeric,
/// whitespace, or a hyphen, then collapses whitespace and hyphen runs into
/// single hyphens with none at either end. Pure and locale-independent:
/// identical input always yields an identical slug.
///
/// Empty or punctuation-only input yields an empty string; callers must
/// guard against using that as a filename.
///
/// # Examples
///
/// ```
/// use stratpack_core::slug::slug;
///
/// assert_eq!(slug("RS-422 Railgun"), "rs-422-railgun");
/// assert_eq!(slug("AX/AR-23 Guard Dog"), "axar-23-guard-dog");
/// assert_eq!(slug("Eagle 500kg Bomb"), "eagle-500kg-bomb");
/// ```
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.extend(ch.to_lowercase());
        } else if (ch.is_whitespace() || ch == '-') && !out.is_empty() {
            pending_hyphen = true;
        }
        // Any other character is dropped without acting as a separator.
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_names() {
        assert_eq!(slug("Machine Gun"), "machine-gun");
        assert_eq!(slug("RS-422 Railgun"), "rs-422-railgun");
        assert_eq!(slug("Orbital 380mm HE Barrage"), "orbital-380mm-he-barrage");
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(slug("AX/AR-23 Guard Dog"), "axar-23-guard-dog");
        assert_eq!(slug("E/MG-101 HMG Emplacement"), "emg-101-hmg-emplacement");
        assert_eq!(slug("\"Quoted\" Name!"), "quoted-name");
    }

    #[test]
    fn test_runs_collapse() {
        assert_eq!(slug("a  -  b"), "a-b");
        assert_eq!(slug("a--b"), "a-b");
        assert_eq!(slug("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn test_no_edge_hyphens() {
        assert_eq!(slug("-leading"), "leading");
        assert_eq!(slug("trailing-"), "trailing");
        assert_eq!(slug("- both -"), "both");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("!!!"), "");
        assert_eq!(slug("---"), "");
    }

    #[test]
    fn test_idempotent() {
        for name in [
            "RS-422 Railgun",
            "AX/AR-23 Guard Dog",
            "Eagle 500kg Bomb",
            "  odd -- spacing  ",
        ] {
            let once = slug(name);
            assert_eq!(slug(&once), once);
        }
    }

    #[test]
    fn test_output_alphabet() {
        for name in ["Orbital 120mm HE Barrage", "A/M-23 EMS Mortar Sentry", "x!@#y"] {
            let s = slug(name);
            assert!(
                s.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in slug {s:?}"
            );
            assert!(!s.starts_with('-') && !s.ends_with('-') && !s.contains("--"));
        }
    }
}
