use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use recipebox_core::view::{ListView, RecipeCard};

/// Cursor over the visible recipe cards.
///
/// Holds only the selection; the cards themselves come from a fresh
/// `ListView` on every draw.
#[derive(Debug, Default)]
pub struct RecipeList {
    list_state: ListState,
}

impl RecipeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the selection inside `len` cards, selecting the first card when
    /// there was no selection yet.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.min(len - 1)));
    }

    /// Back to the first card.
    pub fn scroll_to_top(&mut self) {
        if self.list_state.selected().is_some() {
            self.list_state.select(Some(0));
        }
        *self.list_state.offset_mut() = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if current + 1 < len {
                    self.list_state.select(Some(current + 1));
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if current > 0 {
                    self.list_state.select(Some(current - 1));
                }
            }
            // Jump to first/last
            KeyCode::Char('g') | KeyCode::Home => self.list_state.select(Some(0)),
            KeyCode::Char('G') | KeyCode::End => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, view: &ListView, is_active: bool) {
        let border_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(format!(" {} ", view.header))
            .borders(Borders::ALL)
            .border_style(border_style);

        let selected = self.list_state.selected();
        let items: Vec<ListItem> = view
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| card_item(card, selected == Some(i)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(30, 40, 60)))
            .highlight_symbol("> ");

        let mut state = self.list_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn card_item(card: &RecipeCard, is_selected: bool) -> ListItem<'_> {
    let label = Style::default().fg(Color::DarkGray);
    let control = if is_selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(card.name.as_str(), Style::default().bold())),
        Line::from(vec![
            Span::styled("Image: ", label),
            Span::styled(card.image.as_str(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::styled("Ingredients: ", label),
            Span::raw(card.ingredients.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Steps: ", label),
            Span::raw(card.steps.as_str()),
        ]),
        Line::from(vec![
            Span::styled(format!("[d] {}", card.delete_label), control),
            Span::raw("  "),
            Span::styled(format!("[e] {}", card.edit_label), control),
        ]),
        Line::from(""),
    ];
    ListItem::new(lines)
}
