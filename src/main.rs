//! Terminal runner for tui-blocks (default binary).
//!
//! Owns the clock and the terminal: polls keys, feeds actions and timestamps to
//! the engine, and redraws once per frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_blocks::core::{GameSnapshot, GameState};
use tui_blocks::input::should_quit;
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blocks::{logging, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("terminal restore failed: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let seed = config.resolved_seed();
    info!("starting game, seed={seed}, frame={}ms", config.frame_ms);

    let mut game = GameState::with_seed(seed);
    game.set_score_listener(|score| info!("score {score}"));

    let view = GameView::default();
    let controls = config.controls;
    let frame = Duration::from_millis(config.frame_ms);
    let start = Instant::now();

    let mut snap = game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let frame_start = Instant::now();

        game.snapshot_into(&mut snap);
        render(term, &view, &snap, &mut fb)?;

        let timeout = frame.saturating_sub(frame_start.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit, final score {}", game.score());
                        return Ok(());
                    }
                    if let Some(action) = controls.action_for(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        game.tick(start.elapsed().as_millis() as u64);
    }
}

fn render(
    term: &mut TerminalRenderer,
    view: &GameView,
    snap: &GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw(fb)
}
