//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.signal/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::core::copy::{COMPOSER_PLACEHOLDER, DEFAULT_PHRASES};
use crate::core::palette::{PaletteError, PaletteSource, Preset, Rgb};
use crate::core::route::Route;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SignalConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub background: BackgroundConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_route: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackgroundConfig {
    pub preset: Option<Preset>,
    pub base_color: Option<String>,
    pub line_count: Option<u8>,
    pub animation_speed: Option<f32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ComposerConfig {
    pub phrases: Option<Vec<String>>,
    pub placeholder: Option<String>,
    pub min_lines: Option<u16>,
    pub max_lines: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LINE_COUNT: u8 = 6;
pub const MAX_LINE_COUNT: u8 = 32;
pub const DEFAULT_ANIMATION_SPEED: f32 = 0.8;
pub const DEFAULT_MIN_LINES: u16 = 1;
pub const DEFAULT_MAX_LINES: u16 = 5;

pub const ENV_PRESET: &str = "SIGNAL_PRESET";
pub const ENV_BASE_COLOR: &str = "SIGNAL_BASE_COLOR";
pub const ENV_ROUTE: &str = "SIGNAL_ROUTE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub initial_route: Route,
    pub palette: PaletteSource,
    pub line_count: u8,
    pub animation_speed: f32,
    pub phrases: Vec<String>,
    pub placeholder: String,
    pub min_lines: u16,
    pub max_lines: u16,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            initial_route: Route::Landing,
            palette: PaletteSource::default(),
            line_count: DEFAULT_LINE_COUNT,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
            placeholder: COMPOSER_PLACEHOLDER.to_string(),
            min_lines: DEFAULT_MIN_LINES,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub preset: Option<Preset>,
    pub base_color: Option<Rgb>,
    pub route: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<PaletteError> for ConfigError {
    fn from(e: PaletteError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.signal/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".signal").join("config.toml"))
}

/// Load config from `~/.signal/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SignalConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SignalConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SignalConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SignalConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SignalConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SignalConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r##"# Signal Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_route = "/"                # "/" or "/dashboard" (env: SIGNAL_ROUTE)

# [background]
# preset = "fire"                    # sunset, ocean, forest, fire, purple, monochrome, neon, pastel
# base_color = "#228B22"             # Wins over preset when set (env: SIGNAL_BASE_COLOR)
# line_count = 6
# animation_speed = 0.8

# [composer]
# placeholder = "e.g., Magic with AI-powered insights"
# min_lines = 1
# max_lines = 5
# phrases = [
#   "Identify the best go-to-market strategy for SaaS products",
#   "Generate qualified leads for enterprise software",
# ]
"##;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SignalConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env<F>(
    config: &SignalConfig,
    cli: &CliOverrides,
    env: F,
) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let palette = resolve_palette(config, cli, &env)?;

    // Route: CLI → env → config → default
    let initial_route = cli
        .route
        .clone()
        .or_else(|| env(ENV_ROUTE))
        .or_else(|| config.general.initial_route.clone())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default();

    let line_count = config
        .background
        .line_count
        .unwrap_or(DEFAULT_LINE_COUNT)
        .clamp(1, MAX_LINE_COUNT);

    let animation_speed = config
        .background
        .animation_speed
        .unwrap_or(DEFAULT_ANIMATION_SPEED);
    if !animation_speed.is_finite() || animation_speed < 0.0 {
        return Err(ConfigError::Invalid(format!(
            "animation_speed must be a non-negative number, got {animation_speed}"
        )));
    }

    let min_lines = config.composer.min_lines.unwrap_or(DEFAULT_MIN_LINES);
    let max_lines = config.composer.max_lines.unwrap_or(DEFAULT_MAX_LINES);
    if min_lines == 0 || max_lines < min_lines {
        return Err(ConfigError::Invalid(format!(
            "composer lines must satisfy 1 <= min_lines <= max_lines, got {min_lines}..{max_lines}"
        )));
    }

    let phrases = config
        .composer
        .phrases
        .clone()
        .unwrap_or_else(|| DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect());

    Ok(ResolvedConfig {
        initial_route,
        palette,
        line_count,
        animation_speed,
        phrases,
        placeholder: config
            .composer
            .placeholder
            .clone()
            .unwrap_or_else(|| COMPOSER_PLACEHOLDER.to_string()),
        min_lines,
        max_lines,
    })
}

/// A base color at any level beats a preset at any level.
fn resolve_palette<F>(
    config: &SignalConfig,
    cli: &CliOverrides,
    env: &F,
) -> Result<PaletteSource, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Base color: CLI → env → config
    let base_color = match cli.base_color {
        Some(base) => Some(base),
        None => env(ENV_BASE_COLOR)
            .or_else(|| config.background.base_color.clone())
            .map(|hex| Rgb::from_hex(&hex))
            .transpose()?,
    };
    if let Some(base) = base_color {
        return Ok(PaletteSource::Manual(base));
    }

    // Preset: CLI → env → config → default
    let preset = match cli.preset {
        Some(preset) => preset,
        None => match env(ENV_PRESET) {
            Some(name) => name.parse::<Preset>()?,
            None => config.background.preset.unwrap_or_default(),
        },
    };
    Ok(PaletteSource::Preset(preset))
}
