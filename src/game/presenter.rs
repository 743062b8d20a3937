//! Display hook called after every state-changing step
//!
//! Presenters only see a [`GameStateView`], so they cannot change the round.
//! Pacing delays belong here too; the engine itself never sleeps.

use crate::game::controller::GameStateView;
use crate::game::dialogue::Speech;
use crate::Result;

pub trait Presenter {
    fn render(&mut self, view: &GameStateView, speech: &Speech) -> Result<()>;
}

/// Discards everything (benchmarks and tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _view: &GameStateView, _speech: &Speech) -> Result<()> {
        Ok(())
    }
}

/// Forwards dialogue to the session logger instead of drawing frames
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn render(&mut self, view: &GameStateView, speech: &Speech) -> Result<()> {
        if !speech.awaits_input {
            view.logger().speech(&speech.speaker, &speech.text);
        }
        Ok(())
    }
}
