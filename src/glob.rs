//! Exclude-glob compilation and matching.

use anyhow::{bail, Context, Result};
use regex::Regex;

/// Characters that mean something in the compiled pattern language and must
/// be escaped when they appear literally in a glob.
const SPECIAL: &[char] = &[
    '.', '+', '^', '$', '(', ')', '=', '!', '|', '{', '}', '[', ']', ':', '\\',
];

/// A compiled exclude pattern.
///
/// Matching is anchored: the whole path must match the glob, not a substring
/// of it. `*` matches zero or more characters, `?` matches exactly one, and
/// everything else is literal.
#[derive(Debug)]
pub struct ExcludeMatcher {
    regex: Regex,
}

impl ExcludeMatcher {
    /// Compile a shell-style glob into a full-string matcher.
    ///
    /// An empty pattern is a configuration error, reported before any
    /// repository interaction happens.
    pub fn new(glob: &str) -> Result<Self> {
        if glob.is_empty() {
            bail!("--exclude requires a glob pattern");
        }

        let mut pattern = String::with_capacity(glob.len() + 2);
        pattern.push('^');
        for ch in glob.chars() {
            match ch {
                '*' => pattern.push_str(".*"),
                '?' => pattern.push('.'),
                c if SPECIAL.contains(&c) => {
                    pattern.push('\\');
                    pattern.push(c);
                }
                c => pattern.push(c),
            }
        }
        pattern.push('$');

        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid exclude pattern: {}", glob))?;
        Ok(ExcludeMatcher { regex })
    }

    /// Check a repository-relative path against the pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}
