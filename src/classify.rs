//! Filename classification and commit ordering.
//!
//! The only filename shape this tool understands is
//! `name[.number].extension`: a final extension with no embedded dots,
//! optionally preceded by a `.<digits>` sequence infix, with everything
//! before that forming the base name (which may itself contain dots).
//! Decomposition is done by an explicit scanner — split on the last dot,
//! then on an optional trailing all-digit segment — so the grammar has one
//! unambiguous reading.

use std::cmp::Ordering;

/// A working-tree path decomposed by the `name[.number].extension` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedItem {
    /// The path exactly as reported by the status query.
    pub file: String,
    /// Everything before the optional numeric infix and the extension.
    pub base: String,
    /// The numeric infix, or 0 when the name has none.
    pub sequence: u64,
    /// The final `.xxx` suffix, leading dot included.
    pub extension: String,
}

impl ClassifiedItem {
    /// Decompose a flat path.
    ///
    /// Returns `None` when the path does not fit the shape at all (no
    /// extension, or nothing before it) — such paths are skipped, not
    /// errors. A trailing digit run too large for `u64` is treated as part
    /// of the base rather than a sequence number.
    pub fn classify(path: &str) -> Option<Self> {
        let dot = path.rfind('.')?;
        if dot == 0 {
            // Dotfile like ".gitignore": no base before the extension.
            return None;
        }
        let (stem, extension) = path.split_at(dot);
        if extension.len() < 2 {
            // Trailing dot with nothing after it.
            return None;
        }

        if let Some(infix_dot) = stem.rfind('.') {
            let digits = &stem[infix_dot + 1..];
            if infix_dot > 0 && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(sequence) = digits.parse::<u64>() {
                    return Some(ClassifiedItem {
                        file: path.to_string(),
                        base: stem[..infix_dot].to_string(),
                        sequence,
                        extension: extension.to_string(),
                    });
                }
            }
        }

        Some(ClassifiedItem {
            file: path.to_string(),
            base: stem.to_string(),
            sequence: 0,
            extension: extension.to_string(),
        })
    }

    /// The canonical name: the file with any numeric infix removed.
    pub fn target(&self) -> String {
        format!("{}{}", self.base, self.extension)
    }

    /// Whether committing this item involves a rename first.
    pub fn needs_rename(&self) -> bool {
        self.file != self.target()
    }
}

impl Ord for ClassifiedItem {
    /// Commit order: base name, then extension, then sequence number.
    /// The original path breaks the one possible tie (`a.0.txt` vs `a.txt`)
    /// so the order stays strict.
    fn cmp(&self, other: &Self) -> Ordering {
        self.base
            .cmp(&other.base)
            .then_with(|| self.extension.cmp(&other.extension))
            .then_with(|| self.sequence.cmp(&other.sequence))
            .then_with(|| self.file.cmp(&other.file))
    }
}

impl PartialOrd for ClassifiedItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
