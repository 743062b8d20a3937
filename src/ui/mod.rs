//! Terminal presentation: text frames and paced dialogue

pub mod frame;

pub use frame::{render_board, render_dialogue, render_frame, render_scoreboard};

use crate::game::{GameStateView, Presenter, Speech};
use crate::Result;
use std::io::Write;
use std::time::Duration;

/// How long a line of dialogue stays on screen before the game moves on
///
/// `speed` is seconds per nine characters, so longer lines linger.
pub fn pacing_delay(text: &str, speed: f64) -> Duration {
    let seconds = text.chars().count() as f64 / 9.0 * speed;
    Duration::from_secs_f64(seconds.max(0.0))
}

/// Draws a full frame for every speech
///
/// When pacing is on, the presenter sleeps after each line that does not
/// wait for the player, so computer turns can be followed.
pub struct TextPresenter<W> {
    out: W,
    pacing: bool,
    clear_screen: bool,
}

impl TextPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        TextPresenter::new(std::io::stdout())
    }
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        TextPresenter {
            out,
            pacing: true,
            clear_screen: false,
        }
    }

    pub fn with_pacing(mut self, pacing: bool) -> Self {
        self.pacing = pacing;
        self
    }

    /// Clear the terminal (ANSI) before each frame
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render(&mut self, view: &GameStateView, speech: &Speech) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        writeln!(self.out, "{}", render_frame(view, speech))?;
        self.out.flush()?;

        if self.pacing && !speech.awaits_input {
            std::thread::sleep(pacing_delay(&speech.text, view.config().dialogue_speed));
        }
        Ok(())
    }
}
