//! Walkthrough configuration (`walkthrough.toml`).

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::mode::VizMode;

/// Front-end configuration (TOML).
///
/// This file is intended to be edited by humans. Missing fields default to
/// the shipped simulation values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WalkthroughConfig {
    /// Simulated execution pause per run, in milliseconds. Zero disables the
    /// pause (useful for scripted runs).
    pub execution_delay_ms: u64,

    /// Visualization mode selected at startup and restored on reset.
    pub default_mode: String,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            execution_delay_ms: 1500,
            default_mode: VizMode::Combined.as_str().to_string(),
        }
    }
}

impl WalkthroughConfig {
    /// Unlike `select`, which falls back on unknown input, a bad mode in the
    /// config file is a startup error.
    pub fn validate(&self) -> Result<()> {
        VizMode::parse(&self.default_mode)
            .map_err(|err| anyhow!("invalid default_mode: {err}"))?;
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.execution_delay_ms)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `WalkthroughConfig::default()`.
pub fn load_config(path: &Path) -> Result<WalkthroughConfig> {
    if !path.exists() {
        let cfg = WalkthroughConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: WalkthroughConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
