//! Isolated test environment for running the slink binary.
//!
//! Provides `TestEnv` - a temp directory holding package sources under
//! `dev/`, a consuming project under `app/`, an npm global prefix and an
//! empty user config dir, plus helpers to run slink against them.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use std::time::{Duration, Instant, SystemTime};

use tempfile::TempDir;

/// Result of running a slink command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dunce::canonicalize(tmp.path()).expect("Failed to canonicalize temp dir");
        let env = Self { _tmp: tmp, root };
        fs::create_dir_all(env.app_path("node_modules")).unwrap();
        fs::create_dir_all(env.global_modules_dir()).unwrap();
        fs::create_dir_all(env.path("config")).unwrap();
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn app_path(&self, relative: &str) -> PathBuf {
        self.path("app").join(relative)
    }

    pub fn source_path(&self, package: &str, relative: &str) -> PathBuf {
        self.path("dev").join(package).join(relative)
    }

    pub fn installed_path(&self, package: &str, relative: &str) -> PathBuf {
        self.app_path("node_modules").join(package).join(relative)
    }

    pub fn global_prefix(&self) -> PathBuf {
        self.path("npm-global")
    }

    pub fn global_modules_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.global_prefix().join("node_modules")
        } else {
            self.global_prefix().join("lib/node_modules")
        }
    }

    /// Create `dev/<name>` with a manifest shipping `files`.
    pub fn create_package(&self, name: &str, files: &[&str]) {
        let list = files
            .iter()
            .map(|f| format!("\"{f}\""))
            .collect::<Vec<_>>()
            .join(", ");
        self.write_source(
            name,
            "package.json",
            &format!(r#"{{"name": "{name}", "files": [{list}]}}"#),
        );
        set_mtime(&self.source_path(name, "package.json"), past(3600));
    }

    pub fn write_source(&self, package: &str, relative: &str, content: &str) {
        let path = self.source_path(package, relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
    }

    /// Simulate `npm install ../dev/<name>`: a real install folder.
    pub fn install(&self, name: &str) {
        fs::create_dir_all(self.installed_path(name, "")).unwrap();
    }

    /// Simulate `npm link` from inside `dev/<name>`.
    pub fn link_globally(&self, name: &str) {
        let target = self.source_path(name, "");
        let link = self.global_modules_dir().join(name);
        #[cfg(unix)]
        std::os::unix::fs::symlink(&target, &link).unwrap();
        #[cfg(windows)]
        std::os::windows::fs::symlink_dir(&target, &link).unwrap();
    }

    pub fn write_project_config(&self, content: &str) {
        fs::write(self.app_path(".slink.toml"), content).unwrap();
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_slink"));
        cmd.current_dir(self.app_path(""))
            .args(args)
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env("SLINK_TEST_CONFIG_DIR", self.path("config"))
            .env("SLINK_GLOBAL_PREFIX", self.global_prefix())
            .env("SLINK_INTERVAL_MS", "100")
            .env_remove("SLINK_TRIGGER_FILE")
            .env_remove("SLINK_BUILD_DIR")
            .env_remove("SLINK_VERBOSITY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run slink to completion from the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute slink");
        TestResult::from_output(output)
    }

    /// Start a long-running slink from the project directory
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start slink")
    }
}

/// Kill `child` and collect what it printed.
pub fn stop(mut child: Child) -> TestResult {
    let _ = child.kill();
    TestResult::from_output(child.wait_with_output().expect("Failed to get output"))
}

/// Wait up to `timeout` for `child` to exit on its own.
pub fn wait_for_exit(mut child: Child, timeout: Duration) -> Option<TestResult> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Ok(Some(_)) = child.try_wait() {
            return Some(TestResult::from_output(
                child.wait_with_output().expect("Failed to get output"),
            ));
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    let _ = stop(child);
    None
}

pub fn set_mtime(path: &Path, time: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

pub fn past(secs: u64) -> SystemTime {
    SystemTime::now() - Duration::from_secs(secs)
}

pub fn future(secs: u64) -> SystemTime {
    SystemTime::now() + Duration::from_secs(secs)
}
