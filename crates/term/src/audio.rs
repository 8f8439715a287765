//! Sound cues.
//!
//! The game has three fire-and-forget cues. A terminal has one sound, the
//! bell, so every cue rings it; muting drops them all. Nothing here feeds back
//! into the simulation.

use anyhow::Result;

use crate::renderer::TerminalRenderer;
use crate::types::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Flap,
    Point,
    Hit,
}

impl SoundCue {
    /// Cue for a game event, if it has one.
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::Flapped => Some(SoundCue::Flap),
            GameEvent::Scored(_) => Some(SoundCue::Point),
            GameEvent::Collided => Some(SoundCue::Hit),
            GameEvent::NewHighScore(_) | GameEvent::Restored => None,
        }
    }
}

/// Plays cues through the terminal bell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chime {
    muted: bool,
    played: u32,
}

impl Chime {
    pub fn new(muted: bool) -> Self {
        Self { muted, played: 0 }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Cues rung so far.
    pub fn played(&self) -> u32 {
        self.played
    }

    /// Ring the cue for `event`, returning the cue that was played.
    pub fn play_event(
        &mut self,
        event: GameEvent,
        term: &mut TerminalRenderer,
    ) -> Result<Option<SoundCue>> {
        let Some(cue) = self.cue_for(event) else {
            return Ok(None);
        };
        term.bell()?;
        Ok(Some(cue))
    }

    /// Decide whether `event` makes a sound, counting it when it does.
    pub fn cue_for(&mut self, event: GameEvent) -> Option<SoundCue> {
        if self.muted {
            return None;
        }
        let cue = SoundCue::for_event(event)?;
        self.played = self.played.wrapping_add(1);
        Some(cue)
    }
}
