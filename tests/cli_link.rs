//! E2E tests for `slink link`

#![cfg(unix)]

mod common;

use std::fs;

use common::TestEnv;

fn installed_widget(env: &TestEnv) {
    env.create_package("widget", &["lib"]);
    env.write_source("widget", "lib/index.js", "source");
    env.write_source("widget", "node_modules/dep/index.js", "dev dependency");
    env.install("widget");
    fs::create_dir_all(env.installed_path("widget", "lib")).unwrap();
    fs::write(env.installed_path("widget", "lib/index.js"), "installed").unwrap();
    fs::write(env.installed_path("widget", "package.json"), "{}").unwrap();
}

#[test]
fn link_replaces_installed_entries_with_links() {
    let env = TestEnv::new();
    installed_widget(&env);

    let result = env.run(&["link", "../dev/widget"]);

    assert!(result.success, "link failed: {}", result.combined_output());
    let lib = env.installed_path("widget", "lib");
    assert!(fs::symlink_metadata(&lib).unwrap().file_type().is_symlink());
    assert_eq!(
        fs::read_to_string(lib.join("index.js")).unwrap(),
        "source"
    );
    assert_eq!(
        fs::read_to_string(env.installed_path("widget", "package.json")).unwrap(),
        "{}"
    );
    assert!(!env.installed_path("widget", "node_modules").exists());
    assert!(result.stdout.contains("[OK] lib"), "Got: {}", result.stdout);
}

#[test]
fn link_twice_is_refused() {
    let env = TestEnv::new();
    installed_widget(&env);
    assert!(env.run(&["link", "../dev/widget"]).success);

    let result = env.run(&["link", "../dev/widget"]);

    assert!(!result.success);
    assert!(
        result
            .stdout
            .contains("*** package 'widget' has already been slink'd"),
        "Unexpected stdout: {}",
        result.stdout
    );
}
