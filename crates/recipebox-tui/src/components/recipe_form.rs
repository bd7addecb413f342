use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use recipebox_core::form::{FormField, RecipeForm};
use recipebox_core::view::sanitize;

/// The add/edit form: four labelled inputs and the submit control.
pub struct RecipeFormPane<'a> {
    pub form: &'a RecipeForm,
    /// Field receiving keystrokes, `None` when the form is not focused.
    pub active: Option<FormField>,
    pub submit_label: &'a str,
    pub editing: bool,
}

impl RecipeFormPane<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = match (self.active.is_some(), self.editing) {
            (true, true) => Style::default().fg(Color::Magenta),
            (true, false) => Style::default().fg(Color::Cyan),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        let title = if self.editing { " Edit Recipe " } else { " New Recipe " };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let mut lines = Vec::new();
        for &field in FormField::ALL {
            let is_active = self.active == Some(field);
            let label_style = if is_active {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().bold()
            };
            lines.push(Line::from(Span::styled(format!("{}:", field.display_name()), label_style)));

            let mut value = sanitize(self.form.field(field));
            if is_active {
                value.push('_');
            }
            lines.push(Line::from(Span::raw(value)));
            lines.push(Line::from(""));
        }

        let submit_style = if self.editing {
            Style::default().fg(Color::Black).bg(Color::Magenta).bold()
        } else {
            Style::default().fg(Color::Black).bg(Color::Green).bold()
        };
        lines.push(Line::from(Span::styled(format!(" {} ", self.submit_label), submit_style)));
        if self.active.is_some() {
            lines.push(Line::from(Span::styled(
                "Enter submits, Tab moves between fields",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
