// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where Papersmith reads its config and writes exports.

use std::path::{Path, PathBuf};

use papersmith_core::AppConfig;

const APP_DIR: &str = "papersmith";

/// Base directory for application data (`$XDG_DATA_HOME/papersmith` or
/// `~/.local/share/papersmith`). Not created; the app only reads from it.
pub fn data_dir() -> PathBuf {
    data_root().join(APP_DIR)
}

/// Directory exports are saved into, created on demand.
///
/// `config.export_dir` wins; otherwise `~/Downloads` when it exists, and the
/// data dir's `exports/` folder as a last resort.
pub fn export_dir(config: &AppConfig, data_dir: &Path) -> PathBuf {
    let dir = config.export_dir.clone().unwrap_or_else(|| {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join("Downloads"))
            .filter(|downloads| downloads.is_dir())
            .unwrap_or_else(|| data_dir.join("exports"))
    });
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "could not create export dir");
    }
    dir
}

fn data_root() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_export_dir_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let wanted = tmp.path().join("out").join("docs");
        let config = AppConfig {
            export_dir: Some(wanted.clone()),
            ..AppConfig::default()
        };
        assert_eq!(export_dir(&config, tmp.path()), wanted);
        assert!(wanted.is_dir());
    }
}
