use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexi_config::Config;
use serde::{Deserialize, Serialize};

/// Per-user config folder, e.g. `~/.config/Lexi` on Linux
fn lexi_root() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir().context("No config directory for this platform")?;
    Ok(base.join("Lexi"))
}

fn profiles_dir() -> anyhow::Result<PathBuf> {
    Ok(lexi_root()?.join("profiles"))
}

/// A named config saved on disk
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}

fn write_profile(path: &Path, name: &str, config: Config) -> anyhow::Result<()> {
    let profile = Profile {
        name: name.into(),
        value: config,
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    Ok(())
}

/// Create the profiles folder and a main profile from defaults if missing
pub fn init_user_config() -> anyhow::Result<()> {
    init_in(&profiles_dir()?)
}

fn init_in(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;

    let main_profile = dir.join("main.json");
    if !main_profile.exists() {
        write_profile(&main_profile, "main", Config::new())?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a profile by name, falling back to main, then to defaults
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    load_from(&profiles_dir()?, name)
}

fn load_from(dir: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = dir.join(format!("{name}.json"));
    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    let main_file = dir.join("main.json");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        Ok(Config::new())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn init_writes_main_profile_once() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("profiles");
        init_in(&dir).unwrap();

        let main = dir.join("main.json");
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&main).unwrap()).unwrap();
        assert_eq!(raw["name"], "main");
        assert!(raw["value"]["backend"]["url"].is_string());

        fs::write(&main, r#"{"name": "main", "value": {"trending": {"region": "GB"}}}"#).unwrap();
        init_in(&dir).unwrap();
        assert_eq!(load_from(&dir, "main").unwrap().trending.region, "GB");
    }

    #[test]
    fn missing_profile_falls_back_to_main() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        fs::write(
            dir.join("main.json"),
            r#"{"name": "main", "value": {"dictionary": {"cache_size": 7}}}"#,
        )
        .unwrap();
        fs::write(
            dir.join("study.json"),
            r#"{"name": "study", "value": {"dictionary": {"cache_size": 3}}}"#,
        )
        .unwrap();

        assert_eq!(load_from(dir, "study").unwrap().dictionary.cache_size, 3);
        assert_eq!(load_from(dir, "nope").unwrap().dictionary.cache_size, 7);
    }

    #[test]
    fn broken_profile_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("main.json"), "not json").unwrap();

        assert!(load_from(tmp.path(), "main").is_err());
    }
}
