//! Terminal Tetris runner (default binary).
//!
//! Owns the terminal, feeds key presses to the game as commands and drives
//! gravity from a monotonic clock. Configuration comes from the environment
//! (see [`pet_tetris::config`]).

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use pet_tetris::config::Config;
use pet_tetris::core::{Board, GameState, UniformPieces};
use pet_tetris::input::{handle_key_event, should_quit};
use pet_tetris::store::JsonFileHighScore;
use pet_tetris::term::{GameView, TerminalRenderer, Viewport};
use pet_tetris::types::TICK_MS;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install a file-backed subscriber when a log path is configured.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("opening log {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.seed_or_clock();
    let high_scores = JsonFileHighScore::open(&config.high_score_path);
    info!(seed, path = %high_scores.path().display(), "starting");

    let mut game = GameState::with_sources(
        Board::default(),
        Box::new(UniformPieces::new(seed)),
        Box::new(high_scores),
    );
    let mut view = GameView::default();

    let clock = Instant::now();
    let tick = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.begin_frame(Viewport::new(w, h));
        game.present(&mut view);
        term.draw_swap(view.frame_mut())?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        game.tick_at(clock.elapsed().as_millis() as u64);
    }
}
