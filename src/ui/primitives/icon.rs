use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Warning,
    Arrow,
    Skip,
    Watch,
    Link,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Skip) => theme::icons::SKIP,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Link) => theme::icons::LINK,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Skip) => theme::icons_ascii::SKIP,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Link) => theme::icons_ascii::LINK,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Skip => theme::colors::DIM,
            Icon::Watch | Icon::Link => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
