//! Volatile-number normalization.
//!
//! Log-like text is full of numbers that change between captures without
//! the line meaning anything different. Replacing them with fixed
//! placeholder tokens before hashing makes line comparison insensitive
//! to that churn.

use std::sync::OnceLock;

use regex::Regex;

fn timestamp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[0-9]+ [0-9]+ [0-9]+-[0-9]+:[0-9]+:[0-9]+\|").unwrap()
    })
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"0x[0-9a-fA-F]+").unwrap())
}

fn decimal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").unwrap())
}

/// Replace volatile numeric content with fixed placeholders.
///
/// Applied in order: trace timestamps (`33 28777809 250-1:7:96|` and the
/// like) become `{ts}`, hex literals (`0xDEADBEEF`) become `{hex}`, and
/// remaining decimal runs become `{d}`. Hex literals are rewritten
/// before decimals so their leading `0` is not consumed as a decimal
/// run.
pub fn normalize_numbers(line: &str) -> String {
    let line = timestamp_re().replace_all(line, "{ts}");
    let line = hex_re().replace_all(&line, "{hex}");
    let line = decimal_re().replace_all(&line, "{d}");
    line.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_runs_collapse() {
        assert_eq!(normalize_numbers("retry 12 of 345"), "retry {d} of {d}");
    }

    #[test]
    fn hex_literals_are_not_split_into_decimals() {
        assert_eq!(normalize_numbers("addr 0xDEAD12"), "addr {hex}");
        assert_eq!(normalize_numbers("0x0"), "{hex}");
    }

    #[test]
    fn trace_timestamps_collapse_as_a_unit() {
        assert_eq!(
            normalize_numbers("33 28777809 250-1:7:96|queue drained"),
            "{ts}queue drained"
        );
    }

    #[test]
    fn lines_without_numbers_pass_through() {
        assert_eq!(normalize_numbers("no digits here"), "no digits here");
    }

    #[test]
    fn mixed_content() {
        assert_eq!(
            normalize_numbers("worker 7 mapped 0xFF at offset 4096"),
            "worker {d} mapped {hex} at offset {d}"
        );
    }
}
