//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves glyphs at runtime: unicode by default,
//! plain ASCII when the config asks for it.

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    ascii: bool,
}

impl IconSet {
    pub fn new(ascii: bool) -> Self {
        Self { ascii }
    }

    /// Application mark shown in the header title.
    pub fn flask(&self) -> &'static str {
        if self.ascii {
            "[F]"
        } else {
            "\u{2697}" // ⚗
        }
    }

    /// Location marker next to the current fragment.
    pub fn location(&self) -> &'static str {
        if self.ascii {
            "#"
        } else {
            "\u{2301}" // ⌁
        }
    }

    /// History arrows for the status bar.
    pub fn back(&self) -> &'static str {
        if self.ascii {
            "<"
        } else {
            "\u{2190}" // ←
        }
    }

    pub fn forward(&self) -> &'static str {
        if self.ascii {
            ">"
        } else {
            "\u{2192}" // →
        }
    }
}
