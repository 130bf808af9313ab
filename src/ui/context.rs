use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use slink::config::{ColorMode, Config, Verbosity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbosity: Verbosity,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorMode>, config: &Config) -> Self {
        Self::from_caps(cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorMode>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color.unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            verbosity: config.output.verbosity,
            color,
            unicode: caps.supports_unicode,
        }
    }

    pub fn quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }
}
