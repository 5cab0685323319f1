//! Terminal front end for sortpick.
//!
//! Draws a [`sortpick_core::Prompt`] inline below the cursor with ratatui
//! and feeds it crossterm key events.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sortpick_core::{Choice, Prompt, PromptConfig};
//! use sortpick_tui::Theme;
//!
//! let prompt = Prompt::new(PromptConfig::new("Plugin load order"));
//! let choices = vec![Choice::new("auth"), Choice::new("cache"), Choice::new("metrics")];
//! let order = sortpick_tui::run_blocking(&prompt, choices, &Theme::default()).unwrap();
//! println!("{order:?}");
//! ```
//!
//! # Keyboard
//!
//! - `↑`/`↓` - Move cursor
//! - `Space` - Toggle item
//! - `a` - Select/deselect all
//! - `i` - Invert selection
//! - `1`-`9` - Jump to item and toggle
//! - `Ctrl-↑`/`Ctrl-↓` - Move item
//! - `Enter` - Submit
//! - `Ctrl-c` - Abort

pub mod app;
pub mod event;
mod theme;
pub mod ui;

use std::fmt::Display;

use crossterm::event::EventStream;
use ratatui::{TerminalOptions, Viewport};
use sortpick_core::{Choice, Prompt};

pub use app::{App, AppResult};
pub use event::KeyAction;
pub use theme::{Icons, Theme, ThemeVariant};

/// Run the prompt inline on the current terminal.
///
/// # Errors
///
/// Setup errors from [`Prompt::start`], plus everything [`App::run`] returns.
pub async fn run<T: Display>(
    prompt: &Prompt<T>,
    choices: impl IntoIterator<Item = Choice<T>>,
    theme: &Theme,
) -> AppResult<Vec<T>> {
    let state = prompt.start(choices)?;
    let height = ui::frame_height(state.items().len(), prompt.config().page_size);

    let mut terminal = ratatui::init_with_options(TerminalOptions {
        viewport: Viewport::Inline(height),
    });
    let mut events = EventStream::new();
    let result = App::new(prompt, theme).run(state, &mut terminal, &mut events).await;
    ratatui::restore();

    result
}

/// Run the prompt on a fresh tokio runtime.
///
/// # Errors
///
/// See [`run`].
pub fn run_blocking<T: Display>(
    prompt: &Prompt<T>,
    choices: impl IntoIterator<Item = Choice<T>>,
    theme: &Theme,
) -> AppResult<Vec<T>> {
    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(run(prompt, choices, theme));

    // Validators may have left tasks behind
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
