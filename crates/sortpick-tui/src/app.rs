//! Host loop: feeds key events to the prompt and draws each state.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io;

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;
use sortpick_core::{Prompt, PromptConfig, PromptError, PromptState, Submission, Transition};

use crate::event::KeyAction;
use crate::theme::Theme;
use crate::ui::PromptView;

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// A prompt bound to a theme, ready to run on a terminal.
#[derive(Debug)]
pub struct App<'a, T> {
    prompt: &'a Prompt<T>,
    theme: &'a Theme,
    /// Key presses received while a submission was being validated.
    queued: VecDeque<KeyEvent>,
    input_open: bool,
}

impl<'a, T: Display> App<'a, T> {
    pub fn new(prompt: &'a Prompt<T>, theme: &'a Theme) -> Self {
        Self {
            prompt,
            theme,
            queued: VecDeque::new(),
            input_open: true,
        }
    }

    /// Run until the prompt is submitted, returning the checked values in
    /// list order.
    ///
    /// Keys pressed while a validator is running are queued and replayed in
    /// order once it resolves; they are dropped if the submission is accepted.
    /// Ctrl-C aborts at any time.
    ///
    /// # Errors
    ///
    /// [`PromptError::Aborted`] on Ctrl-C, [`PromptError::InputClosed`] when
    /// `events` ends first, and any terminal I/O error.
    pub async fn run<B, S>(
        mut self,
        mut state: PromptState<T>,
        terminal: &mut Terminal<B>,
        events: &mut S,
    ) -> AppResult<Vec<T>>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        terminal.hide_cursor()?;

        loop {
            state = self.draw(terminal, state)?;

            let key = match self.queued.pop_front() {
                Some(key) => key,
                None => self.next_key(events).await?,
            };
            let action = match KeyAction::from_key_event(key) {
                KeyAction::Abort => return Err(PromptError::Aborted.into()),
                KeyAction::Prompt(action) => action,
            };

            state = match self.prompt.dispatch(state, action) {
                Transition::Updated(next) => next,
                Transition::SubmitRequested(pending) => {
                    match self.validate(pending, events).await? {
                        Submission::Accepted(done) => {
                            let done = self.draw(terminal, done)?;
                            terminal.show_cursor()?;
                            if !self.queued.is_empty() {
                                tracing::debug!(dropped = self.queued.len(), "dropping keys after submit");
                            }
                            return Ok(done.into_answer());
                        }
                        Submission::Rejected(rejected) => {
                            tracing::debug!(queued = self.queued.len(), "replaying keys after rejection");
                            rejected
                        }
                    }
                }
            };
        }
    }

    fn config(&self) -> &PromptConfig {
        self.prompt.config()
    }

    /// Draw one frame, latching the overflow hint once it has been shown.
    fn draw<B>(&self, terminal: &mut Terminal<B>, state: PromptState<T>) -> AppResult<PromptState<T>>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
    {
        terminal.draw(|frame| {
            frame.render_widget(PromptView::new(&state, self.config(), self.theme), frame.area());
        })?;

        if state.needs_overflow_hint(self.config().page_size) {
            Ok(state.mark_first_render_done())
        } else {
            Ok(state)
        }
    }

    /// Wait for the next key press.
    async fn next_key<S>(&mut self, events: &mut S) -> AppResult<KeyEvent>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        while self.input_open {
            match events.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => return Ok(key),
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => self.input_open = false,
            }
        }
        Err(PromptError::InputClosed.into())
    }

    /// Await the submission while queueing key presses that arrive meanwhile.
    async fn validate<S>(&mut self, state: PromptState<T>, events: &mut S) -> AppResult<Submission<T>>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        let prompt = self.prompt;
        let submission = prompt.submit(state);
        tokio::pin!(submission);

        loop {
            tokio::select! {
                biased;

                outcome = &mut submission => return Ok(outcome),

                event = events.next(), if self.input_open => match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if KeyAction::from_key_event(key) == KeyAction::Abort {
                            return Err(PromptError::Aborted.into());
                        }
                        self.queued.push_back(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => self.input_open = false,
                },
            }
        }
    }
}
