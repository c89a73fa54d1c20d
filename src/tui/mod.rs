//! Interactive terminal front end

pub mod app;
pub mod colors;
pub mod search;
pub mod table;
pub mod ui;

use crate::search::{FoodSearch, SearchState};

/// Entry point: take over the terminal and run the search widget until quit
pub fn run(engine: FoodSearch, state: SearchState) -> crate::Result<()> {
    log::info!(target: "TUI", "starting with {} foods", engine.catalog().len());

    let mut terminal = ratatui::init();
    let result = app::App::new(engine, state).run(&mut terminal);
    ratatui::restore();

    log::info!(target: "TUI", "exited");
    result
}
