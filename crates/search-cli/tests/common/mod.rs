#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| tempfile::tempdir().expect("failed to create config dir for tests"))
        .path()
}

/// A `search` command isolated from the user's config and environment.
#[allow(dead_code)]
pub fn search_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("search"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("SEARCH_CONFIG", config_dir().join("config.toml"));
    cmd.env_remove("SEARCH_BROWSER");
    cmd.env_remove("SEARCH_GUI");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A `search` command reading `config` as its config file.
#[allow(dead_code)]
pub fn search_cmd_with_config(config: &Path) -> Command {
    let mut cmd = search_cmd();
    cmd.env("SEARCH_CONFIG", config);
    cmd
}
