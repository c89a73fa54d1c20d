use crate::search::{FoodSearch, Phase, SearchState};
use crate::tui::search::SearchInput;
use crate::tui::table::{Move, TableState};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Duration;

pub struct App {
    engine: FoodSearch,

    // Sub-states
    pub input: SearchInput,
    pub search: SearchState,
    pub table: TableState,

    pub status_message: String,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(engine: FoodSearch, search: SearchState) -> Self {
        let status_message = format!("{} foods in catalog", engine.catalog().len());
        Self {
            engine,
            input: SearchInput::default(),
            search,
            table: TableState::default(),
            status_message,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        let poll_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if event::poll(poll_rate)? {
                if let Event::Key(key) = event::read()? {
                    // Ignore release/repeat events some terminals report
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Run a search for whatever is in the search box
    pub fn submit_search(&mut self) {
        self.search.query = self.input.query.clone();
        self.search.submit(&self.engine);
        self.table.reset(self.search.visible().len());

        match self.search.phase() {
            Phase::Showing { total, .. } => {
                self.status_message =
                    format!("{} result(s) for '{}'", total, self.search.query.trim());
                self.input.focused = false;
            }
            Phase::Warning(warning) => {
                self.status_message = warning.message().to_string();
            }
            Phase::Idle => {}
        }
        log::info!(target: "TUI", "search '{}' -> {:?}", self.search.query, self.search.phase());
    }

    pub fn load_more(&mut self) {
        if self.search.load_more() {
            self.status_message = format!(
                "Showing {} of {}",
                self.search.visible().len(),
                self.search.results.len()
            );
            log::debug!(target: "TUI", "display limit now {}", self.search.display_limit);
        }
    }

    /// Reset query, results, warning and display limit
    pub fn clear(&mut self) {
        self.input.clear();
        self.input.focused = true;
        self.search.clear();
        self.table.reset(0);
        self.status_message = "Cleared".to_string();
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                return;
            }
            KeyCode::Esc => {
                if self.input.focused && !self.input.query.is_empty() {
                    self.clear();
                } else if self.input.focused {
                    self.input.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.input.focused {
            self.handle_search_key(key);
        } else {
            self.handle_table_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert(c);
            }
            KeyCode::Backspace => {
                self.input.backspace();
            }
            KeyCode::Delete => {
                self.input.delete();
            }
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.home(),
            KeyCode::End => self.input.end(),
            KeyCode::Enter => self.submit_search(),
            KeyCode::Tab | KeyCode::Down => {
                self.input.focused = false;
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let total = self.search.visible().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table.apply(Move::Up, total),
            KeyCode::Down | KeyCode::Char('j') => self.table.apply(Move::Down, total),
            KeyCode::PageUp => self.table.apply(Move::PageUp, total),
            KeyCode::PageDown => self.table.apply(Move::PageDown, total),
            KeyCode::Home => self.table.apply(Move::First, total),
            KeyCode::End => self.table.apply(Move::Last, total),

            KeyCode::Char('m') | KeyCode::Enter => self.load_more(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.input.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.focused = true;
                self.input.end();
                self.input.insert(c);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchWarning;
    use crate::Catalog;

    fn app() -> App {
        App::new(FoodSearch::new(Catalog::reference()), SearchState::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|c| press(app, KeyCode::Char(c)));
    }

    #[test]
    fn enter_submits_and_moves_focus_to_table() {
        let mut app = app();
        type_text(&mut app, "chicken");
        press(&mut app, KeyCode::Enter);

        let ids: Vec<u32> = app.search.visible().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![6, 7]);
        assert!(!app.input.focused);
        assert_eq!(app.table.selected, Some(0));
    }

    #[test]
    fn empty_submit_shows_warning_and_keeps_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.search.phase(), Phase::Warning(SearchWarning::EmptyQuery));
        assert!(app.input.focused);
        assert_eq!(app.status_message, "Please enter a search term");
    }

    #[test]
    fn load_more_from_table() {
        let mut app = app();
        type_text(&mut app, "*");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.search.visible().len(), 25);

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.search.visible().len(), 50);
        assert!(!app.search.has_more());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.search.display_limit, 50);
    }

    #[test]
    fn escape_clears_then_unfocuses_then_quits() {
        let mut app = app();
        type_text(&mut app, "rice");
        press(&mut app, KeyCode::Esc);
        assert!(app.input.query.is_empty());
        assert!(app.input.focused);
        assert_eq!(app.search.phase(), Phase::Idle);

        press(&mut app, KeyCode::Esc);
        assert!(!app.input.focused);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_l_clears_results() {
        let mut app = app();
        type_text(&mut app, "milk");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.search.results.len(), 2);

        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(app.search, SearchState::default());
        assert!(app.input.query.is_empty());
    }

    #[test]
    fn typing_in_table_returns_to_search() {
        let mut app = app();
        type_text(&mut app, "egg");
        press(&mut app, KeyCode::Enter);
        assert!(!app.input.focused);

        press(&mut app, KeyCode::Char('s'));
        assert!(app.input.focused);
        assert_eq!(app.input.query, "eggs");
    }

    #[test]
    fn table_keys_stay_within_visible_rows() {
        let mut app = app();
        type_text(&mut app, "*");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::End);
        assert_eq!(app.table.selected, Some(24));
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.table.selected, Some(24));
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.table.selected, Some(0));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
