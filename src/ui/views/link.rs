use crate::ui::primitives::icon::Icon;
use slink::{LinkReport, ResolvedPackage};

pub fn render_link_report(
    package: &ResolvedPackage,
    report: &LinkReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} Linked {} -> {}\n",
        Icon::Link.colored(supports_color, supports_unicode),
        package.destination_root.display(),
        package.source_root.display()
    );
    for name in &report.linked {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            name
        ));
    }
    if report.linked.is_empty() {
        out.push_str(&format!(
            "  {} nothing to link\n",
            Icon::Warning.colored(supports_color, supports_unicode)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn package() -> ResolvedPackage {
        ResolvedPackage {
            name: "pkg".to_string(),
            source_root: PathBuf::from("/dev/pkg"),
            destination_root: PathBuf::from("/app/node_modules/pkg"),
            manifest: Default::default(),
        }
    }

    #[test]
    fn renders_linked_entries() {
        let report = LinkReport {
            linked: vec!["index.js".to_string(), "lib".to_string()],
            skipped: vec![],
        };

        let rendered = render_link_report(&package(), &report, false, false);

        insta::assert_snapshot!(rendered, @r"
        [LINK] Linked /app/node_modules/pkg -> /dev/pkg
          [OK] index.js
          [OK] lib
        ");
    }

    #[test]
    fn renders_empty_link() {
        let rendered = render_link_report(&package(), &LinkReport::default(), false, false);
        assert!(rendered.contains("[WARN] nothing to link"));
    }
}
