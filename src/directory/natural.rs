//! Natural ("human") ordering of file names.
//!
//! Names are split at every maximal run of ASCII digits. Digit runs compare by
//! numeric value and everything else compares case-insensitively, so
//! `file2.txt` sorts before `file10.txt`.

use regex::Regex;
use std::cmp::Ordering;
use std::path::Path;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid regex"));

/// One token of a [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortToken {
    /// Lower-cased non-numeric run. Empty at leading/trailing split boundaries.
    Text(String),
    /// Digit run with leading zeros stripped, compared by magnitude.
    Int(String),
}

impl SortToken {
    fn int(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            SortToken::Int("0".to_string())
        } else {
            SortToken::Int(trimmed.to_string())
        }
    }

    fn text(run: &str) -> Self {
        SortToken::Text(run.to_lowercase())
    }
}

impl Ord for SortToken {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortToken::Text(a), SortToken::Text(b)) => a.cmp(b),
            // No leading zeros, so a longer run is always the larger number.
            (SortToken::Int(a), SortToken::Int(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (SortToken::Text(_), SortToken::Int(_)) => Ordering::Less,
            (SortToken::Int(_), SortToken::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparable key derived from a name.
///
/// Tokens alternate text and integer runs, always starting and ending with a
/// (possibly empty) text token. Keys compare token by token, left to right.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey(Vec<SortToken>);

impl SortKey {
    pub fn tokens(&self) -> &[SortToken] {
        &self.0
    }
}

/// Build the natural sort key for a name.
pub fn natural_sort_key(name: &str) -> SortKey {
    let mut tokens = Vec::new();
    let mut last = 0;

    for run in DIGIT_RUN.find_iter(name) {
        tokens.push(SortToken::text(&name[last..run.start()]));
        tokens.push(SortToken::int(run.as_str()));
        last = run.end();
    }
    tokens.push(SortToken::text(&name[last..]));

    SortKey(tokens)
}

/// Compare two names in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_sort_key(a).cmp(&natural_sort_key(b))
}

/// Compare two paths in natural order, component by component.
pub fn natural_path_cmp(a: &Path, b: &Path) -> Ordering {
    let keys = |p: &Path| {
        p.components()
            .map(|c| natural_sort_key(&c.as_os_str().to_string_lossy()))
            .collect::<Vec<_>>()
    };
    keys(a).cmp(&keys(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SortToken {
        SortToken::Text(s.to_string())
    }

    fn int(s: &str) -> SortToken {
        SortToken::Int(s.to_string())
    }

    fn as_u64(token: &SortToken) -> Option<u64> {
        match token {
            SortToken::Int(digits) => digits.parse().ok(),
            SortToken::Text(_) => None,
        }
    }

    #[test]
    fn test_key_splits_digit_runs() {
        let key = natural_sort_key("Chapter12part3.TXT");
        assert_eq!(
            key.tokens(),
            &[text("chapter"), int("12"), text("part"), int("3"), text(".txt")]
        );
    }

    #[test]
    fn test_key_without_digits() {
        assert_eq!(natural_sort_key("README").tokens(), &[text("readme")]);
    }

    #[test]
    fn test_key_purely_numeric() {
        assert_eq!(natural_sort_key("0042").tokens(), &[text(""), int("42"), text("")]);
        assert_eq!(as_u64(&natural_sort_key("000").tokens()[1]), Some(0));
    }

    #[test]
    fn test_numeric_order_ignores_padding() {
        assert_eq!(natural_cmp("file2.txt", "file10.txt"), Ordering::Less);
        assert_eq!(natural_cmp("file002.txt", "file10.txt"), Ordering::Less);
        assert_eq!(natural_cmp("file10.txt", "file9.txt"), Ordering::Greater);
        assert_eq!(natural_cmp("file02.txt", "file2.txt"), Ordering::Equal);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        assert_eq!(natural_cmp("File.txt", "file.txt"), Ordering::Equal);
        assert_eq!(natural_cmp("A.txt", "b.txt"), Ordering::Less);
        assert_eq!(natural_cmp("b.txt", "C.txt"), Ordering::Less);
    }

    #[test]
    fn test_digit_runs_beyond_u64() {
        let small = "part18446744073709551616.txt";
        let large = "part100000000000000000000000.txt";
        assert_eq!(natural_cmp(small, large), Ordering::Less);
        assert_eq!(as_u64(&natural_sort_key(large).tokens()[1]), None);
    }

    #[test]
    fn test_numeric_name_sorts_before_text() {
        // "" < "a" in the leading text token decides before any integer is seen
        assert_eq!(natural_cmp("10", "a"), Ordering::Less);
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_key() {
        let mut names = vec!["chapter10.txt", "chapter2.txt", "Chapter1.txt", "appendix.txt"];
        names.sort_by_key(|n| natural_sort_key(n));
        assert_eq!(
            names,
            vec!["appendix.txt", "Chapter1.txt", "chapter2.txt", "chapter10.txt"]
        );
    }

    #[test]
    fn test_path_order_by_component() {
        assert_eq!(
            natural_path_cmp(Path::new("season2/ep10.txt"), Path::new("season10/ep1.txt")),
            Ordering::Less
        );
        assert_eq!(
            natural_path_cmp(Path::new("s1/ep2.txt"), Path::new("s1/ep10.txt")),
            Ordering::Less
        );
    }
}
