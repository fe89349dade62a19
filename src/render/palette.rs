//! ANSI escape codes for each kind of rendered token

/// Reset all attributes
pub const RESET: &str = "\x1b[0m";
/// Blue, for object keys
pub const BLUE: &str = "\x1b[34m";
/// Green, for strings and flattened values
pub const GREEN: &str = "\x1b[32m";
/// Yellow, for numbers
pub const YELLOW: &str = "\x1b[33m";
/// Cyan, for booleans
pub const CYAN: &str = "\x1b[36m";
/// Red, for relative-time phrases
pub const RED: &str = "\x1b[31m";
/// Dark gray, for timestamp annotations
pub const GRAY: &str = "\x1b[90m";

/// Escape codes the renderer wraps around each element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub reset: &'static str,
    pub key: &'static str,
    pub string: &'static str,
    pub number: &'static str,
    pub boolean: &'static str,
    pub annotation: &'static str,
    pub delta: &'static str,
}

impl Palette {
    /// Terminal colors
    pub const fn ansi() -> Self {
        Self {
            reset: RESET,
            key: BLUE,
            string: GREEN,
            number: YELLOW,
            boolean: CYAN,
            annotation: GRAY,
            delta: RED,
        }
    }

    /// No escape codes at all
    pub const fn plain() -> Self {
        Self {
            reset: "",
            key: "",
            string: "",
            number: "",
            boolean: "",
            annotation: "",
            delta: "",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}
