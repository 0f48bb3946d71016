//! Stored credentials and interactive prompting.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted API keys, one per search service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Shodan API key.
    #[serde(default)]
    pub shodan_api_key: Option<String>,

    /// Hunter.how API key.
    #[serde(default)]
    pub hunterhow_api_key: Option<String>,
}

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// On-disk credential storage as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store at the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the default credentials file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "rangescout", "rangescout")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("credentials.json"))
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load credentials from file.
    ///
    /// A missing or malformed file yields an empty record; this never
    /// surfaces an error to the caller.
    #[must_use]
    pub fn load(&self) -> Credentials {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Credentials::default();
        };

        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Save credentials to file.
    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(credentials)?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }
}

/// Source of interactively-entered secrets.
pub trait Prompter {
    /// Ask the user for a value under the given label.
    fn prompt(&self, label: &str) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn prompt(&self, label: &str) -> Result<String> {
        Ok(dialoguer::Input::<String>::new()
            .with_prompt(label)
            .interact_text()?)
    }
}

/// Effective API keys for one run.
#[derive(Debug, Clone)]
pub struct ApiKeys {
    /// Shodan API key
    pub shodan: String,
    /// Hunter.how API key
    pub hunterhow: String,
}

/// Credential provider: loads the stored record, prompts for anything
/// missing, and persists what was entered.
pub struct CredentialProvider<'a> {
    store: CredentialStore,
    prompter: &'a dyn Prompter,
}

impl<'a> CredentialProvider<'a> {
    /// Create a provider over a store and a prompt source.
    pub fn new(store: CredentialStore, prompter: &'a dyn Prompter) -> Self {
        Self { store, prompter }
    }

    /// Resolve the effective keys for one run.
    ///
    /// Overrides (from flags or the environment) take precedence and are
    /// never written back. Keys missing from both the overrides and the
    /// stored record are prompted for and persisted, so later runs reuse
    /// them without re-prompting.
    pub fn resolve(
        &self,
        shodan_override: Option<&str>,
        hunter_override: Option<&str>,
    ) -> Result<ApiKeys> {
        let mut credentials = self.store.load();
        let mut changed = false;

        let shodan = match shodan_override {
            Some(key) => key.to_string(),
            None => self.fill(
                &mut credentials.shodan_api_key,
                "Please enter your Shodan API key",
                &mut changed,
            )?,
        };

        let hunterhow = match hunter_override {
            Some(key) => key.to_string(),
            None => self.fill(
                &mut credentials.hunterhow_api_key,
                "Please enter your Hunter.how API key",
                &mut changed,
            )?,
        };

        if changed {
            self.store.save(&credentials)?;
        }

        Ok(ApiKeys { shodan, hunterhow })
    }

    fn fill(&self, slot: &mut Option<String>, label: &str, changed: &mut bool) -> Result<String> {
        if !is_missing(slot) {
            return Ok(slot.clone().unwrap_or_default());
        }

        let entered = self.prompter.prompt(label)?;
        *slot = Some(entered.clone());
        *changed = true;
        Ok(entered)
    }
}
