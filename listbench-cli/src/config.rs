//! Configuration loading from listbench.toml
//!
//! Optional. Discovered by walking up from the current directory; every
//! field has a default, so a missing file means the stock suites run
//! against the stock artifact directory.

use std::path::Path;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BenchConfig {
    /// Artifact resolution settings.
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    /// Append-suite parameter overrides.
    #[serde(default)]
    pub append: SuiteOverrides,
    /// Insert-suite parameter overrides.
    #[serde(default)]
    pub insert: SuiteOverrides,
}

/// Where optional artifacts (wasm modules, native library) live.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory probed for every artifact file.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> String {
    "artifacts".to_string()
}

/// Per-suite `(iterations, repeats)` overrides.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SuiteOverrides {
    /// Iteration count each invocation receives.
    #[serde(default)]
    pub iterations: Option<u32>,
    /// Back-to-back repeats per backend.
    #[serde(default)]
    pub repeats: Option<u32>,
}

impl BenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover a `listbench.toml` by walking up from the current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join("listbench.toml");
            if candidate.exists() {
                return Self::load(&candidate).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}
