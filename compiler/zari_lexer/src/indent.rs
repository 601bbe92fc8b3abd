//! Indentation units.

/// The whitespace unit a scanner commits to after the first indented line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndentMode {
    /// No indented line seen yet.
    #[default]
    Unset,
    Tabs,
    TwoSpaces,
    FourSpaces,
}

impl IndentMode {
    /// Classify the whitespace at the start of a line.
    ///
    /// Four spaces are tried before two, so a four-space file is never
    /// taken for a two-space one. Returns `Unset` when the line is not
    /// indented.
    pub fn detect(line: &str) -> IndentMode {
        if line.starts_with('\t') {
            IndentMode::Tabs
        } else if line.starts_with("    ") {
            IndentMode::FourSpaces
        } else if line.starts_with("  ") {
            IndentMode::TwoSpaces
        } else {
            IndentMode::Unset
        }
    }

    /// Text of one indentation unit.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            IndentMode::Unset => None,
            IndentMode::Tabs => Some("\t"),
            IndentMode::TwoSpaces => Some("  "),
            IndentMode::FourSpaces => Some("    "),
        }
    }
}

#[cfg(test)]
mod tests;
