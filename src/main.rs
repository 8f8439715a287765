//! Terminal Flappy Bird runner (default binary).
//!
//! One cooperative loop: poll input until the next tick is due, advance the
//! simulation by one fixed step, render, repeat. Quit tears the terminal down
//! and exits with status 0.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use flappy_tui::config::Settings;
use flappy_tui::core::{GameEvents, GameState};
use flappy_tui::input::handle_event;
use flappy_tui::logging;
use flappy_tui::term::{Chime, FrameBuffer, GameView, TerminalRenderer, Viewport};
use flappy_tui::types::{GameAction, GameEvent, TICK_MS};

fn main() -> Result<()> {
    let settings = Settings::from_env();
    logging::init(settings.log_path.as_deref())?;
    log::info!(
        "starting: difficulty {}, gap {}, muted {}",
        settings.difficulty.label(),
        settings.difficulty.pipe_gap(),
        settings.muted
    );

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        return Err(err.context("terminal setup failed"));
    }

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("game loop failed: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    let mut game = GameState::new(settings.difficulty, settings.seed);
    let mut snap = game.snapshot();
    let view = GameView::new();
    let mut chime = Chime::new(settings.muted);
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        game.animate(clock.elapsed().as_millis() as u64);
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            match handle_event(&ev) {
                Some(GameAction::Quit) => {
                    log::info!(
                        "quit while {} (high score {})",
                        game.phase().as_str(),
                        game.high_score()
                    );
                    return Ok(());
                }
                Some(action) => {
                    log::trace!("action {}", action.as_str());
                    let events = game.apply_action(action);
                    dispatch(&events, &mut chime, term)?;
                }
                None => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let events = game.tick(TICK_MS);
            dispatch(&events, &mut chime, term)?;
        }
    }
}

/// Route game events to the sound cues and the log.
fn dispatch(events: &GameEvents, chime: &mut Chime, term: &mut TerminalRenderer) -> Result<()> {
    for &event in events {
        match event {
            GameEvent::Scored(score) => log::debug!("score {score}"),
            GameEvent::Collided => log::debug!("collision"),
            GameEvent::NewHighScore(high) => log::info!("high score {high}"),
            GameEvent::Restored => log::info!("back to the start screen"),
            GameEvent::Flapped => {}
        }
        chime.play_event(event, term)?;
    }
    Ok(())
}
