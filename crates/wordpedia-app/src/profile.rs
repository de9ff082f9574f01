use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wordpedia_config::Config;

/// Load `config.json` from the working directory, or built-in defaults
fn load_repo_default_config() -> anyhow::Result<Config> {
    let path = Path::new("config.json");
    if !path.exists() {
        tracing::debug!("No config.json in working directory, using defaults");
        return Ok(Config::default());
    }

    tracing::info!("Loading repo default config...");
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader).context("config.json is not a valid config")?;
    Ok(config)
}

/// `$WORDPEDIA_HOME`, or the platform config folder
pub fn wordpedia_root() -> anyhow::Result<PathBuf> {
    if let Some(home) = std::env::var_os("WORDPEDIA_HOME") {
        return Ok(PathBuf::from(home));
    }

    dirs::config_dir()
        .map(|dir| dir.join("wordpedia"))
        .context("Could not determine the config directory")
}

fn profiles_dir(root: &Path) -> PathBuf {
    root.join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

impl Profile {
    /// API keys are session-only and never written to disk
    fn new(name: &str, mut value: Config) -> Self {
        value.generator.api_key.clear();
        Self {
            name: name.into(),
            value,
        }
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile file {}", path.display()))?;
    Ok(profile.value)
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config(root: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir(root))?;

    let main_profile = profiles_dir(root).join("main.json");

    if !main_profile.exists() {
        // Use repo default as the initial main profile
        let profile = Profile::new("main", load_repo_default_config()?);
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(root: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir(root).join(format!("{name}.json"));

    if profile_file.exists() {
        read_profile(&profile_file)
    } else {
        tracing::warn!("Profile {name} not found, falling back to main profile or repo default");
        let main_file = profiles_dir(root).join("main.json");
        if main_file.exists() {
            read_profile(&main_file)
        } else {
            // First-run fallback to repo default
            load_repo_default_config()
        }
    }
}

/// Add a new profile cloned from main (or repo default if main missing)
pub fn add_profile_from_default(root: &Path, new_name: &str) -> anyhow::Result<PathBuf> {
    let profile = Profile::new(new_name, load_user_profile(root, "main")?);
    let file = profiles_dir(root).join(format!("{new_name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}

/// Profile config with environment overrides on top
pub fn load_config(profile: &str) -> anyhow::Result<Config> {
    let root = wordpedia_root()?;
    init_user_config(&root)?;

    let mut config = load_user_profile(&root, profile)?;
    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}
