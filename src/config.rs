/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct AnimConfig {
    pub timing: TimingConfig,
    pub effects: EffectsConfig,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Global speed factor applied to every wait. 0 = instant.
    pub time_scale: f64,
}

#[derive(Clone, Debug)]
pub struct EffectsConfig {
    pub flash_count: usize,    // impact glyphs per hit flash
    pub particle_count: usize, // particles per stream
    pub damage_ms: u64,        // damage number rise duration
    pub heal_ms: u64,
    pub status_ms: u64,
    pub label_ms: u64,         // effectiveness label hold
}

impl EffectsConfig {
    pub fn damage_duration(&self) -> Duration {
        Duration::from_millis(self.damage_ms)
    }

    pub fn heal_duration(&self) -> Duration {
        Duration::from_millis(self.heal_ms)
    }

    pub fn status_duration(&self) -> Duration {
        Duration::from_millis(self.status_ms)
    }

    pub fn label_duration(&self) -> Duration {
        Duration::from_millis(self.label_ms)
    }
}

impl Default for AnimConfig {
    fn default() -> Self {
        AnimConfig {
            timing: TimingConfig { time_scale: default_time_scale() },
            effects: EffectsConfig {
                flash_count: default_flash_count(),
                particle_count: default_particle_count(),
                damage_ms: default_damage_ms(),
                heal_ms: default_heal_ms(),
                status_ms: default_status_ms(),
                label_ms: default_label_ms(),
            },
        }
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    effects: TomlEffects,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_time_scale")]
    time_scale: f64,
}

#[derive(Deserialize, Debug)]
struct TomlEffects {
    #[serde(default = "default_flash_count")]
    flash_count: usize,
    #[serde(default = "default_particle_count")]
    particle_count: usize,
    #[serde(default = "default_damage_ms")]
    damage_ms: u64,
    #[serde(default = "default_heal_ms")]
    heal_ms: u64,
    #[serde(default = "default_status_ms")]
    status_ms: u64,
    #[serde(default = "default_label_ms")]
    label_ms: u64,
}

// ── Defaults ──

fn default_time_scale() -> f64 { 1.0 }
fn default_flash_count() -> usize { 2 }
fn default_particle_count() -> usize { 3 }
fn default_damage_ms() -> u64 { 500 }
fn default_heal_ms() -> u64 { 600 }
fn default_status_ms() -> u64 { 600 }
fn default_label_ms() -> u64 { 400 }

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming { time_scale: default_time_scale() }
    }
}

impl Default for TomlEffects {
    fn default() -> Self {
        TomlEffects {
            flash_count: default_flash_count(),
            particle_count: default_particle_count(),
            damage_ms: default_damage_ms(),
            heal_ms: default_heal_ms(),
            status_ms: default_status_ms(),
            label_ms: default_label_ms(),
        }
    }
}

// ── Loading ──

impl AnimConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        for dir in candidate_dirs() {
            let path = dir.join("config.toml");
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(text) => return AnimConfig::parse(&text),
                    Err(e) => {
                        eprintln!("Warning: could not read {}: {e}", path.display());
                    }
                }
            }
        }
        AnimConfig::default()
    }

    fn from_toml(t: TomlConfig) -> Self {
        AnimConfig {
            timing: TimingConfig { time_scale: t.timing.time_scale },
            effects: EffectsConfig {
                flash_count: t.effects.flash_count,
                particle_count: t.effects.particle_count,
                damage_ms: t.effects.damage_ms,
                heal_ms: t.effects.heal_ms,
                status_ms: t.effects.status_ms,
                label_ms: t.effects.label_ms,
            },
        }
    }

    /// Parse a config from TOML text, falling back to defaults on error.
    fn parse(text: &str) -> Self {
        match toml::from_str::<TomlConfig>(text) {
            Ok(cfg) => AnimConfig::from_toml(cfg),
            Err(e) => {
                eprintln!("Warning: config.toml parse error: {e}");
                eprintln!("Using default settings.");
                AnimConfig::default()
            }
        }
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}
