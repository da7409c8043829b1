use colored::Colorize;

/// Colors used by the report. Passed explicitly to the renderer so output
/// can be checked without touching any process-wide setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn colored() -> Self {
        Palette { enabled: true }
    }

    pub fn plain() -> Self {
        Palette { enabled: false }
    }

    /// Status icons and the missing-upstream placeholder.
    pub fn alert(&self, text: &str) -> String {
        if self.enabled {
            text.bright_red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn date(&self, text: &str) -> String {
        if self.enabled {
            text.bright_green().to_string()
        } else {
            text.to_string()
        }
    }
}
