use crate::replacement_table::{DEFAULT_TABLE, ReplacementTable};

// @module: Pure mojibake correction over in-memory text

/// Result of one fixing pass over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The corrected text
    pub text: String,
    /// How many corrupted occurrences were replaced
    pub replacements: usize,
}

impl FixOutcome {
    /// Whether the pass changed anything
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Applies the replacement table to document text.
///
/// Holds no file handles and performs no I/O, so callers can run it against
/// any string. `Controller` wires it to the filesystem.
pub struct MojibakeFixer {
    table: ReplacementTable,
}

impl Default for MojibakeFixer {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.clone(),
        }
    }
}

impl MojibakeFixer {
    /// Create a fixer over an explicit table
    pub fn with_table(table: ReplacementTable) -> Self {
        Self { table }
    }

    /// The table this fixer applies
    pub fn table(&self) -> &ReplacementTable {
        &self.table
    }

    /// Replace every corrupted sequence in `text`, in fixed table order.
    ///
    /// A text with zero occurrences comes back unchanged, and a corrected
    /// text is a fixed point: running the fixer again replaces nothing.
    pub fn fix_text(&self, text: &str) -> FixOutcome {
        let (fixed, replacements) = self.table.apply(text);
        FixOutcome {
            text: fixed,
            replacements,
        }
    }
}
