//! Line-based rendering of a form.
//!
//! Every field becomes one or more lines. The view scrolls so the focused
//! line, or the highlighted item of a focused list, stays on screen.

use super::styling;
use crate::form::{Field, Form};
use crate::ui::theme::Theme;
use crate::ui::Frame;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// How a single field is displayed.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text { value: String, hint: Option<String> },
    Choice(String),
    Toggle(bool),
    List { items: Vec<String>, cursor: usize },
    Search {
        query: String,
        matches: Vec<String>,
        cursor: usize,
    },
    Action,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text {
            value: value.into(),
            hint: None,
        }
    }

    pub fn hinted(value: impl Into<String>, hint: impl Into<String>) -> Self {
        FieldValue::Text {
            value: value.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn choice(value: impl Into<String>) -> Self {
        FieldValue::Choice(value.into())
    }

    pub fn list<I, S>(items: I, cursor: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List {
            items: items.into_iter().map(Into::into).collect(),
            cursor,
        }
    }
}

/// Accumulates the lines of a page body.
///
pub struct FormView<'t> {
    theme: &'t Theme,
    lines: Vec<Line<'static>>,
    focus_line: usize,
}

impl<'t> FormView<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        FormView {
            theme,
            lines: vec![],
            focus_line: 0,
        }
    }

    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::from(Span::styled(
            text.into(),
            styling::heading_style(self.theme),
        )));
        self
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.styled(text, styling::normal_text_style(self.theme))
    }

    pub fn muted(&mut self, text: impl Into<String>) -> &mut Self {
        self.styled(text, styling::muted_text_style(self.theme))
    }

    pub fn styled(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        self.lines.push(Line::from(Span::styled(text.into(), style)));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::default());
        self
    }

    /// Append one field. A focused field pulls the scroll position to itself.
    ///
    pub fn field(&mut self, label: &str, value: FieldValue, focused: bool) -> &mut Self {
        let theme = self.theme;
        let marker = if focused { "› " } else { "  " };
        let label_style = if focused {
            styling::active_label_style(theme)
        } else {
            styling::label_style(theme)
        };
        if focused {
            self.focus_line = self.lines.len();
        }
        match value {
            FieldValue::Text { value, hint } => {
                let mut spans = vec![
                    Span::styled(format!("{}{}: ", marker, label), label_style),
                    Span::styled(value, styling::normal_text_style(theme)),
                ];
                if focused {
                    spans.push(Span::styled("▏", styling::active_label_style(theme)));
                }
                if let Some(hint) = hint {
                    spans.push(Span::styled(
                        format!("  {}", hint),
                        styling::muted_text_style(theme),
                    ));
                }
                self.lines.push(Line::from(spans));
            }
            FieldValue::Choice(value) => {
                self.lines.push(Line::from(vec![
                    Span::styled(format!("{}{}: ", marker, label), label_style),
                    Span::styled(format!("‹ {} ›", value), styling::normal_text_style(theme)),
                ]));
            }
            FieldValue::Toggle(on) => {
                let check = if on { "[x]" } else { "[ ]" };
                self.lines.push(Line::from(Span::styled(
                    format!("{}{} {}", marker, check, label),
                    label_style,
                )));
            }
            FieldValue::List { items, cursor } => {
                self.lines.push(Line::from(Span::styled(
                    format!("{}{} ({})", marker, label, items.len()),
                    label_style,
                )));
                self.items(items, cursor, focused);
            }
            FieldValue::Search {
                query,
                matches,
                cursor,
            } => {
                let mut spans = vec![
                    Span::styled(format!("{}{}: ", marker, label), label_style),
                    Span::styled(query, styling::normal_text_style(theme)),
                ];
                if focused {
                    spans.push(Span::styled("▏", styling::active_label_style(theme)));
                }
                self.lines.push(Line::from(spans));
                self.items(matches, cursor, focused);
            }
            FieldValue::Action => {
                let style = if focused {
                    styling::current_list_item_style(theme)
                } else {
                    styling::label_style(theme)
                };
                self.lines.push(Line::from(vec![
                    Span::raw(marker.to_string()),
                    Span::styled(format!("[ {} ]", label), style),
                ]));
            }
        }
        self
    }

    fn items(&mut self, items: Vec<String>, cursor: usize, focused: bool) {
        if items.is_empty() {
            self.muted("      (none)");
            return;
        }
        for (i, item) in items.into_iter().enumerate() {
            if focused && i == cursor {
                self.focus_line = self.lines.len();
                self.lines.push(Line::from(Span::styled(
                    format!("    ▸ {}", item),
                    styling::current_list_item_style(self.theme),
                )));
            } else {
                self.lines.push(Line::from(Span::styled(
                    format!("      {}", item),
                    styling::normal_text_style(self.theme),
                )));
            }
        }
    }

    /// Append every field of `form`, asking `value` how to display each.
    ///
    pub fn form<F, V>(&mut self, form: &F, focus: usize, value: V) -> &mut Self
    where
        F: Form,
        V: Fn(F::Field) -> FieldValue,
    {
        for (i, field) in form.fields().iter().enumerate() {
            self.field(field.label(), value(*field), i == focus);
        }
        self
    }

    /// Scroll offset keeping the focused line inside `height` rows.
    ///
    pub fn scroll_offset(&self, height: u16) -> u16 {
        let height = height as usize;
        if height == 0 || self.focus_line < height {
            0
        } else {
            (self.focus_line + 1 - height) as u16
        }
    }

    pub fn render(self, frame: &mut Frame, size: Rect, title: &str) {
        let block = Block::default()
            .title(title.to_string())
            .title_style(styling::active_block_title_style())
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(self.theme));
        let offset = self.scroll_offset(size.height.saturating_sub(2));
        let paragraph = Paragraph::new(self.lines).block(block).scroll((offset, 0));
        frame.render_widget(paragraph, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_list_item_drives_scroll() {
        let theme = Theme::default();
        let mut view = FormView::new(&theme);
        view.heading("Skills");
        view.field(
            "Catalog",
            FieldValue::list((0..20).map(|i| format!("skill {}", i)), 15),
            true,
        );
        // heading, label, then items 0..=15
        assert_eq!(view.focus_line, 17);
        assert_eq!(view.scroll_offset(10), 8);
        assert_eq!(view.scroll_offset(30), 0);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let theme = Theme::default();
        let mut view = FormView::new(&theme);
        view.field("Links", FieldValue::list(Vec::<String>::new(), 0), false);
        assert_eq!(view.lines.len(), 2);
    }
}
