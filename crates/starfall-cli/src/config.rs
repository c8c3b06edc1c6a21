//! Locating and reading the TOML configuration, then layering the
//! command-line overrides on top.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use starfall::{StarfallError, config::AppConfig, geometry::Size};

use crate::Args;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for StarfallError {
    fn from(err: ConfigError) -> Self {
        StarfallError::Config(err.to_string())
    }
}

/// Where a configuration file is looked for when none is given, in order:
/// `starfall/config.toml` under the working directory, then `config.toml`
/// in the platform config directory.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("starfall/config.toml")];
    match ProjectDirs::from("com", "starfall", "starfall") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

/// Loads the explicit file if one is given, else the first file found on
/// the search paths, else the default configuration.
///
/// # Errors
///
/// [`StarfallError::Config`] when the explicit file is missing or any file
/// found does not parse.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, StarfallError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    for candidate in search_paths() {
        let path = candidate.display().to_string();
        if candidate.exists() {
            info!(path; "Loading configuration");
            return load_config_file(&candidate);
        }
        debug!(path; "Configuration file not found");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Applies command-line overrides to a loaded configuration.
pub fn apply_overrides(config: &mut AppConfig, args: &Args) {
    let scene = config.scene_mut();
    if args.width.is_some() || args.height.is_some() {
        let current = scene.viewport();
        let viewport = Size::new(
            args.width.unwrap_or(current.width()),
            args.height.unwrap_or(current.height()),
        );
        debug!(width = viewport.width(), height = viewport.height(); "Viewport overridden");
        scene.set_viewport(viewport);
    }
    if let Some(seed) = args.seed {
        scene.set_seed(Some(seed));
    }
    if let Some(frames) = args.frames {
        config.animation_mut().set_frames(frames);
    }
    if args.no_page {
        config.page_mut().set_enabled(false);
    }
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, StarfallError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let result = load_config(Some("definitely/not/here.toml"));
        assert!(matches!(result, Err(StarfallError::Config(_))));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[scene]\nseed = 9\n\n[page]\nenabled = false\n",
        )
        .expect("write config");

        let config = load_config(Some(&path)).expect("load");
        assert_eq!(config.scene().seed(), Some(9));
        assert!(!config.page().enabled());
        assert_eq!(config.scene().star_count().min(), 350);
        assert_eq!(config.animation().frames(), 1);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scene\nseed = ").expect("write config");

        assert!(matches!(
            load_config(Some(&path)),
            Err(StarfallError::Config(_))
        ));
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let args = Args::parse_from([
            "starfall",
            "--width",
            "640",
            "--seed",
            "3",
            "--frames",
            "5",
            "--no-page",
        ]);
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &args);

        assert_eq!(config.scene().viewport(), Size::new(640.0, 800.0));
        assert_eq!(config.scene().seed(), Some(3));
        assert_eq!(config.animation().frames(), 5);
        assert!(!config.page().enabled());
    }
}
