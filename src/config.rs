// src/config.rs  —  Runtime configuration (CLI + TOML)
use crate::i18n::LanguageCode;
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  snaplog --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

pub const DEFAULT_PLACEHOLDER: &str = "https://via.placeholder.com/400x600/CCCCCC/999999?text=No+Image";

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug, Default)]
#[command(
    name    = "snaplog",
    about   = "SnapLog — three-step photo wizard",
    version,
)]
pub struct Cli {
    /// Config file path (default: ~/.config/snaplog/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// UI language at startup: en | si | ta
    #[arg(long)]
    pub lang: Option<String>,

    /// Splash screen duration in milliseconds (default: 3000)
    #[arg(long)]
    pub splash_ms: Option<u64>,

    /// Image library directory (default: ~/Pictures)
    #[arg(long)]
    pub library: Option<PathBuf>,

    /// Refuse image-library access (every pick shows the permission notice)
    #[arg(long, action)]
    pub deny_library: bool,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub general:  Option<GeneralCfg>,
    pub splash:   Option<SplashCfg>,
    pub library:  Option<LibraryCfg>,
    pub showcase: Option<ShowcaseCfg>,
    pub ui:       Option<UiCfg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralCfg {
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplashCfg {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryCfg {
    pub dir:   Option<PathBuf>,
    /// false → every permission request is denied
    pub allow: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseCfg {
    /// Shown when no image slot is filled
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiCfg {
    pub tick_ms: Option<u64>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub language:      LanguageCode,
    pub splash_delay:  Duration,
    pub library_dir:   PathBuf,
    pub library_allow: bool,
    pub placeholder:   String,
    /// Event-loop tick
    pub tick:          Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language:      LanguageCode::En,
            splash_delay:  Duration::from_millis(3000),
            library_dir:   home_dir().join("Pictures"),
            library_allow: true,
            placeholder:   DEFAULT_PLACEHOLDER.into(),
            tick:          Duration::from_millis(50),
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let mut cfg = Self::default();

        // 1. Load TOML file
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if path.exists() {
            let fc = read_file_config(&path)?;
            cfg.apply_file(&fc);
        } else {
            log::info!("No config file at {} — using defaults (snaplog --write-config creates one)", path.display());
        }

        // 2. Apply CLI overrides
        cfg.apply_cli(cli);
        Ok(cfg)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(g) = &fc.general {
            if let Some(v) = &g.language { self.language = parse_language(v); }
        }
        if let Some(s) = &fc.splash {
            if let Some(v) = s.delay_ms { self.splash_delay = Duration::from_millis(v); }
        }
        if let Some(l) = &fc.library {
            if let Some(v) = &l.dir  { self.library_dir   = expand_home(v); }
            if let Some(v) = l.allow { self.library_allow = v; }
        }
        if let Some(s) = &fc.showcase {
            if let Some(v) = &s.placeholder { self.placeholder = v.clone(); }
        }
        if let Some(u) = &fc.ui {
            if let Some(v) = u.tick_ms { self.tick = Duration::from_millis(v.max(1)); }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = &cli.lang      { self.language     = parse_language(v); }
        if let Some(v) = cli.splash_ms  { self.splash_delay = Duration::from_millis(v); }
        if let Some(v) = &cli.library   { self.library_dir  = expand_home(v); }
        if cli.deny_library             { self.library_allow = false; }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Reading config {:?}", path))?;
    toml::from_str(&raw).with_context(|| format!("Parsing config {:?}", path))
}

/// Unknown codes fall back to English
fn parse_language(code: &str) -> LanguageCode {
    LanguageCode::from_code(code).unwrap_or_else(|| {
        log::warn!("Unknown language {:?} — using en", code);
        LanguageCode::En
    })
}

fn expand_home(p: &Path) -> PathBuf {
    match p.strip_prefix("~") {
        Ok(rest) => home_dir().join(rest),
        Err(_)   => p.to_path_buf(),
    }
}

fn default_config_path() -> PathBuf {
    config_dir().join("snaplog").join("config.toml")
}

fn config_dir() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    home_dir().join(".config")
}

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with(path: PathBuf) -> Cli {
        Cli { config: Some(path), ..Default::default() }
    }

    #[test]
    fn embedded_example_parses() {
        let fc: FileConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        assert_eq!(cfg.language, LanguageCode::En);
        assert_eq!(cfg.splash_delay, Duration::from_millis(3000));
        assert!(cfg.library_allow);
    }

    #[test]
    fn file_then_cli_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\nlanguage = \"ta\"\n[splash]\ndelay_ms = 500\n[library]\ndir = \"/tmp/pics\"\n").unwrap();

        let mut cli = cli_with(path.clone());
        let cfg = AppConfig::load(&cli).unwrap();
        assert_eq!(cfg.language, LanguageCode::Ta);
        assert_eq!(cfg.splash_delay, Duration::from_millis(500));
        assert_eq!(cfg.library_dir, PathBuf::from("/tmp/pics"));

        cli.lang = Some("si".into());
        cli.deny_library = true;
        let cfg = AppConfig::load(&cli).unwrap();
        assert_eq!(cfg.language, LanguageCode::Si);
        assert!(!cfg.library_allow);
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let cli = Cli { lang: Some("de".into()), config: Some(PathBuf::from("/nonexistent/snaplog.toml")), ..Default::default() };
        let cfg = AppConfig::load(&cli).unwrap();
        assert_eq!(cfg.language, LanguageCode::En);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[splash]\ndelay_ms = \"soon\"\n").unwrap();
        let err = AppConfig::load(&cli_with(path)).unwrap_err();
        assert!(format!("{err:#}").contains("Parsing config"));
    }

    #[test]
    fn write_default_config_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let written = AppConfig::write_default_config(&cli_with(path.clone())).unwrap();
        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(path).unwrap(), DEFAULT_CONFIG_TOML);
    }
}
