use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use recipebox_core::form::FormField;
use recipebox_core::recipe::RecipeId;
use recipebox_core::sort::SortKey;
use recipebox_core::state::{ClientState, Submission};
use recipebox_core::view::{self, ListView};
use recipebox_service::BlockingHttpService;
use tracing::{error, info};

use crate::components::recipe_form::RecipeFormPane;
use crate::components::recipe_list::RecipeList;

pub const DELETED_NOTICE: &str = "Recipe was deleted.";

/// What the app is currently doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the recipe cards
    Browse,
    /// Typing into the form
    Form { field: FormField },
    /// Typing a search query; the list narrows as you type
    Search { input: String },
    /// Sort selector
    SortPick { selected: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

pub struct App {
    service: BlockingHttpService,
    state: ClientState,
    list: RecipeList,
    mode: Mode,
    status_message: Option<StatusMessage>,
}

impl App {
    /// Build the app and perform the initial load. A failed load is
    /// reported in the status bar and leaves the list empty.
    pub fn new(service: BlockingHttpService) -> Self {
        let mut app = Self {
            service,
            state: ClientState::new(),
            list: RecipeList::new(),
            mode: Mode::Browse,
            status_message: None,
        };
        app.refresh();
        app
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Form { .. } | Mode::Search { .. })
    }

    /// Cards for the recipes that pass the current search query.
    pub fn list_view(&self) -> ListView {
        view::render_list(self.state.visible())
    }

    pub fn selected_id(&self) -> Option<RecipeId> {
        let idx = self.list.selected()?;
        self.state.visible().get(idx).map(|r| r.id.clone())
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    fn report(&mut self, context: &str, e: &dyn fmt::Display) {
        error!("{context}: {e}");
        self.status_message = Some(StatusMessage {
            text: format!("{context}: {e}"),
            kind: StatusKind::Error,
        });
    }

    //  Operations

    /// Re-fetch the full list from the service. On failure the list is
    /// emptied, matching what the user sees.
    pub fn refresh(&mut self) {
        match self.service.list_recipes() {
            Ok(recipes) => {
                info!("fetched {} recipes", recipes.len());
                self.state.replace_recipes(recipes);
            }
            Err(e) => {
                self.state.clear_recipes();
                self.report("Error fetching recipes", &e);
            }
        }
        self.list.clamp(self.state.visible().len());
    }

    /// Send the form as a create or an update. On success the form is
    /// cleared, the edit ends and the list is re-fetched; on failure the
    /// form stays as typed.
    pub fn submit(&mut self) {
        let submission = match self.state.prepare_submit() {
            Ok(s) => s,
            Err(e) => {
                self.report("Error", &e);
                return;
            }
        };

        let result = match &submission {
            Submission::Create(input) => self.service.create_recipe(input).map(|created| {
                info!("recipe created: {} ({})", created.id, created.name);
                "Recipe created."
            }),
            Submission::Update(recipe) => {
                self.service.update_recipe(&recipe.id, recipe).map(|updated| {
                    info!("recipe updated: {} ({})", updated.id, updated.name);
                    "Recipe updated."
                })
            }
        };

        match result {
            Ok(notice) => {
                self.state.submit_succeeded();
                self.mode = Mode::Browse;
                self.notify(notice);
                self.refresh();
            }
            Err(e) => self.report("Error", &e),
        }
    }

    /// Make `id` the edit target and load it into the form.
    pub fn select_edit(&mut self, id: &RecipeId) {
        let result = self.state.begin_edit(id).map(|r| r.name.clone());
        match result {
            Ok(name) => {
                info!("editing recipe {id} ({name})");
                self.list.scroll_to_top();
                self.mode = Mode::Form {
                    field: FormField::Name,
                };
            }
            Err(e) => self.report("Error", &e),
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.state.edit_target().is_editing() {
            self.state.cancel_edit();
            self.notify("Edit cancelled");
        }
    }

    pub fn delete(&mut self, id: &RecipeId) {
        match self.service.delete_recipe(id) {
            Ok(()) => {
                info!("recipe deleted: {id}");
                self.state.forget(id);
                self.status_message = None;
                self.refresh();
                // The delete went through even if the re-fetch did not
                match self.status_message.take() {
                    Some(StatusMessage {
                        text,
                        kind: StatusKind::Error,
                    }) => {
                        self.status_message = Some(StatusMessage {
                            text: format!("{DELETED_NOTICE} {text}"),
                            kind: StatusKind::Error,
                        });
                    }
                    _ => self.notify(DELETED_NOTICE),
                }
            }
            Err(e) => self.report("Error deleting recipe", &e),
        }
    }

    /// Narrow the displayed cards. Never touches the service.
    pub fn search(&mut self, query: &str) {
        self.state.set_query(query);
        self.list.clamp(self.state.visible().len());
    }

    /// Sort the local list, then re-fetch. The key stays active, so the
    /// re-fetched list comes back in the same order.
    pub fn sort(&mut self, key: SortKey) {
        info!("sorting by {}", key.as_str());
        self.state.sort_by(key);
        self.refresh();
    }

    //  Key handling

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        match self.mode.clone() {
            Mode::Browse => self.handle_browse(key),
            Mode::Form { field } => self.handle_form(key, field),
            Mode::Search { input } => self.handle_search(key, input),
            Mode::SortPick { selected } => self.handle_sort_pick(key, selected),
        }
    }

    fn handle_browse(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') | KeyCode::Char('n') => {
                self.mode = Mode::Form {
                    field: FormField::Name,
                };
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    self.select_edit(&id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.delete(&id);
                }
            }
            KeyCode::Char('c') => self.cancel_edit(),
            KeyCode::Char('/') => {
                self.mode = Mode::Search {
                    input: self.state.query().to_string(),
                };
            }
            KeyCode::Char('s') => {
                let selected = self
                    .state
                    .sort_key()
                    .and_then(|k| SortKey::ALL.iter().position(|s| *s == k))
                    .unwrap_or(0);
                self.mode = Mode::SortPick { selected };
            }
            KeyCode::Char('r') => {
                self.refresh();
                if self.status_message.is_none() {
                    self.notify("Refreshed");
                }
            }
            KeyCode::Esc => {
                if !self.state.query().is_empty() {
                    self.search("");
                }
            }
            _ => {
                let len = self.state.visible().len();
                self.list.handle_key(key, len);
            }
        }
    }

    fn handle_form(&mut self, key: KeyEvent, field: FormField) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Tab | KeyCode::Down => {
                self.mode = Mode::Form {
                    field: field.next(),
                };
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.mode = Mode::Form {
                    field: field.prev(),
                };
            }
            KeyCode::Backspace => {
                self.state.form.field_mut(field).pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.field_mut(field).push(c);
            }
            _ => {}
        }
    }

    fn handle_search(&mut self, key: KeyEvent, mut input: String) {
        match key.code {
            KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Esc => {
                self.search("");
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                input.pop();
                self.search(&input);
                self.mode = Mode::Search { input };
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.push(c);
                self.search(&input);
                self.mode = Mode::Search { input };
            }
            _ => {}
        }
    }

    fn handle_sort_pick(&mut self, key: KeyEvent, mut selected: usize) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if selected + 1 < SortKey::ALL.len() {
                    selected += 1;
                }
                self.mode = Mode::SortPick { selected };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                selected = selected.saturating_sub(1);
                self.mode = Mode::SortPick { selected };
            }
            KeyCode::Char('1') => self.apply_sort(SortKey::Name),
            KeyCode::Char('2') => self.apply_sort(SortKey::IngredientCount),
            KeyCode::Enter => {
                if let Some(&key) = SortKey::ALL.get(selected) {
                    self.apply_sort(key);
                }
            }
            KeyCode::Esc => self.mode = Mode::Browse,
            _ => {}
        }
    }

    fn apply_sort(&mut self, key: SortKey) {
        self.mode = Mode::Browse;
        self.sort(key);
        if self.status_message.is_none() {
            self.notify(format!("Sorted by {}", key.display_name().to_lowercase()));
        }
    }

    //  Rendering

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(layout[1]);

        let active_field = match self.mode {
            Mode::Form { field } => Some(field),
            _ => None,
        };
        RecipeFormPane {
            form: &self.state.form,
            active: active_field,
            submit_label: self.state.submit_label(),
            editing: self.state.edit_target().is_editing(),
        }
        .render(frame, body[0]);

        self.list.render(
            frame,
            body[1],
            &self.list_view(),
            matches!(self.mode, Mode::Browse),
        );

        self.render_status_bar(frame, layout[2]);

        // Overlays
        match &self.mode {
            Mode::Search { input } => self.render_input_bar(frame, " Search ", input, area),
            Mode::SortPick { selected } => self.render_sort_pick(frame, *selected, area),
            Mode::Browse | Mode::Form { .. } => {}
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" recipebox ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled(self.service.base_url(), Style::default().fg(Color::DarkGray)),
            Span::raw(format!(" | {} recipes", self.state.recipes().len())),
        ];
        if let Some(key) = self.state.sort_key() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Sort: {key}"),
                Style::default().fg(Color::Magenta),
            ));
        }
        if !self.state.query().is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Search: {}", view::sanitize(self.state.query())),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.status_message {
            let color = match msg.kind {
                StatusKind::Info => Color::Green,
                StatusKind::Error => Color::Red,
            };
            let line = Line::from(Span::styled(
                format!(" {}", view::sanitize(&msg.text)),
                Style::default().fg(color),
            ));
            frame.render_widget(line, area);
            return;
        }

        let hints = match &self.mode {
            Mode::Browse => {
                let mut hints = vec![
                    ("q", "quit"),
                    ("j/k", "recipes"),
                    ("a", "add"),
                    ("e", "edit"),
                    ("d", "delete"),
                    ("/", "search"),
                    ("s", "sort"),
                    ("r", "refresh"),
                ];
                if self.state.edit_target().is_editing() {
                    hints.push(("c", "cancel edit"));
                }
                hints
            }
            Mode::Form { .. } => vec![
                ("Tab", "next field"),
                ("Enter", "submit"),
                ("Esc", "back"),
            ],
            Mode::Search { .. } => vec![("Enter", "keep"), ("Esc", "clear")],
            Mode::SortPick { .. } => vec![
                ("j/k", "nav"),
                ("Enter", "sort"),
                ("Esc", "cancel"),
            ],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(format!(" {key}"), Style::default().fg(Color::Yellow).bold()),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }

    fn render_input_bar(&self, frame: &mut Frame, label: &str, input: &str, area: Rect) {
        let input_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(3),
            width: area.width,
            height: 3.min(area.height),
        };
        frame.render_widget(Clear, input_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(label);
        let paragraph = Paragraph::new(view::sanitize(input)).block(block);
        frame.render_widget(paragraph, input_area);
    }

    fn render_sort_pick(&self, frame: &mut Frame, selected: usize, area: Rect) {
        let popup = centered_rect(40, 30, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Sort By ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));

        let items: Vec<ListItem> = SortKey::ALL
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let marker = if self.state.sort_key() == Some(*key) { " *" } else { "" };
                ListItem::new(format!("[{}] {}{marker}", i + 1, key.display_name()))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Magenta).bold())
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(selected));
        frame.render_stateful_widget(list, popup, &mut state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
