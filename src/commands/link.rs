use std::path::Path;

use anyhow::Result;
use slink::config::Config;
use slink::{link_package, NpmPrefix, PackageResolver};

use crate::ui::context::UiContext;
use crate::ui::views::link::render_link_report;

pub fn cmd_link(cwd: &Path, package: &str, config: &Config, ui: UiContext) -> Result<()> {
    let resolver = PackageResolver::new(
        cwd,
        config.npm.modules_dir.clone(),
        NpmPrefix::new(config.npm.global_prefix.clone()),
    );

    let resolved = resolver.resolve(package)?;
    let report = link_package(&resolved, &config.npm.modules_dir)?;

    if !ui.quiet() {
        print!("{}", render_link_report(&resolved, &report, ui.color, ui.unicode));
    }
    Ok(())
}
