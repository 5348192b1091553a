use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.dep-freezr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// License policy rules.
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Defines which licenses are acceptable.
#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// Allow-listed canonical license identifiers. Packages whose licenses
    /// never intersect this list are flagged by `licenses` mode.
    #[serde(default = "default_allow")]
    pub allow: Vec<String>,
}

fn default_allow() -> Vec<String> {
    ["MIT", "Apache-2.0", "BSD-2-Clause", "BSD-3-Clause", "ISC"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            allow: default_allow(),
        }
    }
}

impl Default for Config {
    /// Built-in default policy used when no config file is found: the common
    /// permissive licenses are allowed, everything else is flagged.
    fn default() -> Self {
        Config {
            policy: PolicyConfig::default(),
        }
    }
}

impl Config {
    /// The allow-list as a set, for intersection tests during marking.
    pub fn allow_set(&self) -> BTreeSet<String> {
        self.policy.allow.iter().cloned().collect()
    }
}

/// Load the policy configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.dep-freezr/config.toml`
/// 3. `~/.config/dep-freezr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = project_path.join(".dep-freezr").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("dep-freezr").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_allow_list() {
        let cfg = Config::default();
        let allow = cfg.allow_set();
        assert!(allow.contains("MIT"));
        assert!(allow.contains("ISC"));
        assert!(!allow.contains("GPL-3.0"));
    }

    #[test]
    fn test_parse_config() {
        let cfg: Config = toml::from_str(
            r#"
[policy]
allow = ["MIT", "MPL-2.0"]
"#,
        )
        .unwrap();
        assert_eq!(cfg.policy.allow, vec!["MIT", "MPL-2.0"]);
    }

    #[test]
    fn test_empty_config_uses_default_allow() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.allow_set().contains("MIT"));
    }

    #[test]
    fn test_project_config_wins_over_default() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".dep-freezr");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "[policy]\nallow = [\"Zlib\"]\n").unwrap();

        let cfg = load_config(tmp.path(), None).unwrap();
        assert_eq!(cfg.policy.allow, vec!["Zlib"]);
    }

    #[test]
    fn test_override_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "[policy]\nallow = [\"WTFPL\"]\n").unwrap();

        let cfg = load_config(tmp.path(), Some(&path)).unwrap();
        assert_eq!(cfg.policy.allow, vec!["WTFPL"]);
    }

    #[test]
    fn test_missing_override_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no-such.toml");
        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }
}
