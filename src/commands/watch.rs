use std::path::Path;

use anyhow::Result;
use slink::config::Config;
use slink::{
    watch, CancellationToken, NpmPrefix, PackageResolver, SyncAction, WatchExit, WatchOptions,
};

use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_sync_event, render_watch_header, render_watch_stopped};

pub fn cmd_watch(cwd: &Path, packages: &[String], config: &Config, ui: UiContext) -> Result<()> {
    let resolver = PackageResolver::new(
        cwd,
        config.npm.modules_dir.clone(),
        NpmPrefix::new(config.npm.global_prefix.clone()),
    );

    let mut resolved = Vec::with_capacity(packages.len());
    for identifier in packages {
        resolved.push(resolver.resolve(identifier)?);
    }

    let options = WatchOptions::from_config(config, cwd);
    let prefixed = resolved.len() > 1;

    let cancel = CancellationToken::new();
    let handle = cancel.clone();
    ctrlc::set_handler(move || handle.cancel())?;

    if !ui.quiet() {
        println!("{}", render_watch_header(&resolved, ui.color, ui.unicode));
    }

    let exit = watch(resolved, &options, &cancel, |event| {
        if ui.quiet() && event.action != SyncAction::ManifestChanged {
            return;
        }
        println!("{}", render_sync_event(&event, prefixed, ui.color, ui.unicode));
    })?;

    match exit {
        WatchExit::Cancelled => {
            if !ui.quiet() {
                println!("{}", render_watch_stopped(ui.color, ui.unicode));
            }
        }
        WatchExit::ManifestChanged { package } => {
            tracing::info!(package = %package, "manifest changed, exiting");
        }
    }

    Ok(())
}
