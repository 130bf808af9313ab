use crate::ui::primitives::icon::Icon;
use slink::{ResolvedPackage, SyncAction, SyncEvent};

pub fn render_watch_header(
    packages: &[ResolvedPackage],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Watch.colored(supports_color, supports_unicode);
    let mut out = String::new();
    for package in packages {
        out.push_str(&format!(
            "{} Watching {}: {} -> {}\n",
            icon,
            package.name,
            package.source_root.display(),
            package.destination_root.display()
        ));
    }
    out.push_str("Press Ctrl+C to stop");
    out
}

/// One line per event, prefixed with `[package]` when several are watched.
pub fn render_sync_event(
    event: &SyncEvent,
    prefixed: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = if prefixed {
        format!("[{}] ", event.package)
    } else {
        String::new()
    };
    let path = event.path.display();

    match event.action {
        SyncAction::Copied => format!(
            "{}{} Synced: {}",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            path
        ),
        SyncAction::DirCreated => format!(
            "{}{} Created: {}/",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        SyncAction::Ignored => format!(
            "{}{} Ignored: {} (not in package files)",
            prefix,
            Icon::Skip.colored(supports_color, supports_unicode),
            path
        ),
        SyncAction::ManifestChanged => format!(
            "{}{} {} of '{}' changed. Restart slink to pick up the new manifest.",
            prefix,
            Icon::Warning.colored(supports_color, supports_unicode),
            path,
            event.package
        ),
    }
}

pub fn render_watch_stopped(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Watch stopped.",
        Icon::Watch.colored(supports_color, supports_unicode)
    )
}
