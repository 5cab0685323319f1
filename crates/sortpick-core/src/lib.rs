//! State machine for the sortpick prompt.
//!
//! A sortpick prompt is a checkbox list whose entries can also be
//! reordered before submission. This crate holds everything that does not
//! touch a terminal:
//!
//! - **Choices** - entries with a value, label, disabled and checked flags
//! - **State** - immutable snapshots threaded through each action
//! - **Mutators** - cursor movement, checking, and reordering
//! - **Submission** - the required rule and caller validators
//!
//! ```rust
//! use sortpick_core::{Action, Choice, MoveDirection, NavDirection, Prompt, PromptConfig};
//!
//! let prompt = Prompt::new(PromptConfig::new("Load order"));
//! let state = prompt
//!     .start(vec![Choice::new("core"), Choice::new("ui"), Choice::new("net")])
//!     .unwrap();
//!
//! let state = prompt.dispatch(state, Action::ToggleActive).into_state();
//! let state = prompt.dispatch(state, Action::Move(MoveDirection::Down)).into_state();
//! let state = prompt.dispatch(state, Action::Navigate(NavDirection::Next)).into_state();
//!
//! assert_eq!(state.selected_values(), vec![&"core"]);
//! ```

mod action;
mod bounds;
mod choice;
mod config;
mod cursor;
mod error;
mod order;
mod prompt;
mod selection;
mod state;
mod validate;

pub use action::{Action, Transition};
pub use bounds::Bounds;
pub use choice::{Choice, DEFAULT_DISABLED_LABEL, Disabled};
pub use config::{
    DEFAULT_INSTRUCTIONS, DEFAULT_PAGE_SIZE, Instructions, PromptConfig, PromptConfigBuilder,
    PromptConfigBuilderError,
};
pub use cursor::NavDirection;
pub use error::PromptError;
pub use order::MoveDirection;
pub use prompt::Prompt;
pub use state::{PromptState, Status};
pub use validate::{
    AcceptAll, AsyncFnValidator, FnValidator, INVALID_MESSAGE, REQUIRED_MESSAGE, Submission,
    Validation, Validator, async_validator_fn, validator_fn,
};
