//! Prompt frame widget.

use std::fmt::Display;

use itertools::Itertools;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use sortpick_core::{Choice, PromptConfig, PromptState};

use super::page_window;
use crate::theme::Theme;

/// Hint shown on the first frame when the list does not fit.
pub const OVERFLOW_HINT: &str = "(Use arrow keys to reveal more choices)";

/// One frame of the prompt.
///
/// Pure over its inputs. The host decides whether the overflow hint has
/// been seen and latches it on the state after drawing.
pub struct PromptView<'a, T> {
    state: &'a PromptState<T>,
    config: &'a PromptConfig,
    theme: &'a Theme,
}

impl<'a, T: Display> PromptView<'a, T> {
    pub fn new(state: &'a PromptState<T>, config: &'a PromptConfig, theme: &'a Theme) -> Self {
        Self {
            state,
            config,
            theme,
        }
    }

    /// Lines of the frame, top to bottom.
    pub fn lines(&self) -> Vec<Line<'static>> {
        if !self.state.is_pending() {
            return vec![self.done_line()];
        }

        let mut lines = vec![self.header_line()];

        let window = page_window(self.state.items().len(), self.state.active(), self.config.page_size);
        for index in window {
            let choice = &self.state.items()[index];
            lines.push(self.item_line(choice, index == self.state.active()));
        }

        if self.state.needs_overflow_hint(self.config.page_size) {
            lines.push(Line::from(Span::styled(OVERFLOW_HINT, self.theme.help)));
        }

        if let Some(error) = self.state.error() {
            lines.push(Line::from(Span::styled(format!("> {error}"), self.theme.error)));
        }

        lines
    }

    fn header_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(self.theme.icons.pending, self.theme.prefix),
            Span::raw(" "),
            Span::styled(self.config.message.clone(), self.theme.message),
        ];
        if self.state.show_help_tip()
            && let Some(help) = self.config.instructions.text()
        {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(help.to_string(), self.theme.help));
        }
        Line::from(spans)
    }

    fn item_line(&self, choice: &Choice<T>, active: bool) -> Line<'static> {
        let icons = &self.theme.icons;
        let label = choice.display_label().to_string();

        if let Some(reason) = choice.disabled_state().reason() {
            return Line::from(Span::styled(
                format!(" {} {label} {reason}", icons.disabled),
                self.theme.disabled,
            ));
        }

        let cursor = if active { icons.cursor } else { " " };
        let (checkbox, checkbox_style) = if choice.is_checked() {
            (icons.checked, self.theme.checked)
        } else {
            (icons.unchecked, self.theme.item)
        };
        let label_style = if active { self.theme.highlight } else { self.theme.item };

        Line::from(vec![
            Span::styled(cursor, self.theme.highlight),
            Span::styled(checkbox, checkbox_style),
            Span::raw(" "),
            Span::styled(label, label_style),
        ])
    }

    fn done_line(&self) -> Line<'static> {
        let answer = self
            .state
            .selection()
            .map(|choice| choice.display_label())
            .join(", ");
        Line::from(vec![
            Span::styled(self.theme.icons.done, self.theme.done_prefix),
            Span::raw(" "),
            Span::styled(self.config.message.clone(), self.theme.message),
            Span::raw(" "),
            Span::styled(answer, self.theme.answer),
        ])
    }
}

impl<T: Display> Widget for PromptView<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
