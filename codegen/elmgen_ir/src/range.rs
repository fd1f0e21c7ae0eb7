//! Row/column hints for line-breaking.

/// A row/column pair attached to expression nodes.
///
/// Ranges are not source locations: the generator never reads source text.
/// A positive `row` marks a node that must break across lines when
/// rendered, and `column` is the absolute column its continuation indents
/// relative to. The default `{0, 0}` is a placeholder meaning "not yet
/// positioned", not a real location.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Range {
    pub row: u32,
    pub column: u32,
}

impl Range {
    /// Create a range with the given row and column.
    pub const fn new(row: u32, column: u32) -> Self {
        Range { row, column }
    }

    /// True when the node carrying this range must break across lines.
    pub const fn breaks(self) -> bool {
        self.row > 0
    }
}
