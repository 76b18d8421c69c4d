// src/main.rs  —  snaplog  entry point
mod app;
mod carousel;
mod config;
mod form;
mod i18n;
mod media;
mod nav;
mod screens;
mod tui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::{AppConfig, Cli};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        println!("Edit it to set your language, image directory, etc.");
        return Ok(());
    }

    // ── Load config ───────────────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;
    log::info!("[main] language={} splash={:?} library={}",
        cfg.language.code(), cfg.splash_delay, cfg.library_dir.display());

    // ── Stores + collaborators ────────────────────────────────────────────────
    let library = media::create_library(cfg.library_dir.clone(), cfg.library_allow);
    log::info!("[main] image library backend: {}", library.name());
    let mut app = App::new(&cfg, library, Instant::now());
    app.i18n().report_gaps();

    // ── TUI ───────────────────────────────────────────────────────────────────
    let mut tui = tui::Tui::new()?;
    let result = run(&mut app, &mut tui, &cfg);

    // ── Cleanup ───────────────────────────────────────────────────────────────
    app.shutdown();
    tui.cleanup();
    result
}

/// Single-threaded loop: drain input, tick scheduled work, redraw
fn run(app: &mut App, tui: &mut tui::Tui, cfg: &AppConfig) -> Result<()> {
    while !app.should_quit() {
        // ── Single crossterm event reader ─────────────────────────────────────
        #[cfg(feature = "tui")]
        {
            use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
            while event::poll(std::time::Duration::from_millis(0))? {
                if let Event::Key(k) = event::read()? {
                    if k.kind == KeyEventKind::Release { continue; }

                    // Ctrl+C always quits
                    if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
                        return Ok(());
                    }
                    if let Some(key) = tui::key_from_event(&k) {
                        app.handle_key(key, Instant::now());
                    }
                }
            }
        }

        app.tick(Instant::now());
        tui.draw(app)?;
        std::thread::sleep(cfg.tick);
    }
    Ok(())
}
