use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["CI", "GITHUB_ACTIONS", "JENKINS_HOME", "BUILDKITE", "TRAVIS"];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v == "c" || v == "posix" {
                return false;
            }
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
        }
    }

    true
}
