use once_cell::sync::Lazy;

use crate::errors::TableError;

// @module: Ordered mojibake replacement table

/// The built-in replacement pairs, in application order.
///
/// Each corrupted pattern is a UTF-8 emoji or symbol that was decoded as
/// Windows-1252 somewhere upstream. The corrupted side is written with
/// `\u{}` escapes because several sequences contain ASCII quote characters
/// and bare C1-range punctuation that editors and formatters tend to
/// re-corrupt on save.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{E2}\u{153}\u{2026}", "✅"),                          // "âœ…"
    ("\u{E2}\u{152}", "❌"),                                  // "âŒ"
    ("\u{F0}\u{178}\u{22}\u{160}", "📊"),                     // "ðŸ" + '"' + "Š"
    ("\u{F0}\u{178}\u{27}\u{BE}", "💾"),                      // "ðŸ" + '\'' + "¾"
    ("\u{F0}\u{178}\u{2014}\u{27}\u{EF}\u{B8}", "🗑️"),        // "ðŸ—" + '\'' + "ï¸"
    ("\u{E2}\u{17E}\u{2022}", "➕"),                          // "âž•"
    ("\u{E2}\u{2030}\u{A5}", "≥"),                            // "â‰¥"
    ("\u{E2}\u{2030}\u{A4}", "≤"),                            // "â‰¤"
    ("Mon\u{E2}\u{20AC}\u{22}Sat", "Mon-Sat"),                // "Monâ€" + '"' + "Sat"
];

/// Shared default table, validated once at first use.
pub static DEFAULT_TABLE: Lazy<ReplacementTable> = Lazy::new(ReplacementTable::default);

/// An ordered list of (corrupted, replacement) pairs.
///
/// Order is fixed so output is reproducible byte-for-byte; entries are applied
/// sequentially over the accumulating result. The built-in table keeps the
/// corrupted patterns and their replacements disjoint, which `check_no_cascades`
/// verifies, so a corrected document is a fixed point of `apply`.
#[derive(Debug, Clone)]
pub struct ReplacementTable {
    entries: Vec<(String, String)>,
}

impl Default for ReplacementTable {
    fn default() -> Self {
        Self {
            entries: REPLACEMENTS
                .iter()
                .map(|(corrupted, replacement)| (corrupted.to_string(), replacement.to_string()))
                .collect(),
        }
    }
}

impl ReplacementTable {
    /// Build a table from explicit pairs, preserving their order
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(corrupted, replacement)| (corrupted.into(), replacement.into()))
                .collect(),
        }
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the (corrupted, replacement) pairs in application order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(corrupted, replacement)| (corrupted.as_str(), replacement.as_str()))
    }

    /// Apply every entry in order, replacing all non-overlapping occurrences
    /// literally. Returns the transformed text and the total number of
    /// occurrences replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut result = text.to_string();
        let mut replaced = 0;

        for (corrupted, replacement) in &self.entries {
            let occurrences = result.matches(corrupted.as_str()).count();
            if occurrences > 0 {
                result = result.replace(corrupted.as_str(), replacement);
                replaced += occurrences;
            }
        }

        (result, replaced)
    }

    /// Verify that no entry's replacement contains any entry's corrupted
    /// pattern. Without this, output produced by one entry could be rewritten
    /// again by a later entry (or by a second run), breaking idempotence.
    pub fn check_no_cascades(&self) -> Result<(), TableError> {
        for (corrupted, _) in &self.entries {
            if corrupted.is_empty() {
                return Err(TableError::EmptyPattern);
            }
        }

        for (source, replacement) in &self.entries {
            for (pattern, _) in &self.entries {
                if replacement.contains(pattern.as_str()) {
                    return Err(TableError::Cascade {
                        source_pattern: source.clone(),
                        pattern: pattern.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
