use crossterm::style::Color;

/// Design tokens for slink output.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const SKIP: &str = "·";
    pub const WATCH: &str = "⟳";
    pub const LINK: &str = "⇢";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const SKIP: &str = "[-]";
    pub const WATCH: &str = "[~]";
    pub const LINK: &str = "[LINK]";
}
