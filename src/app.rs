use crate::config::Config;
use crate::state::AppState;
use crate::ui;
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    config: Config,
    event_handler: ui::EventHandler,
    spinner_index: usize,
    last_tick: Instant,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;

        Ok(Self {
            state: Arc::new(RwLock::new(AppState::default())),
            config,
            event_handler: ui::EventHandler::new(),
            spinner_index: 0,
            last_tick: Instant::now(),
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            self.event_handler.handle_events(
                Arc::clone(&self.state),
                self.config.server.base_url.clone(),
            )?;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let state = self.state.read().unwrap();

        // Create main layout: Header, Tab bar, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Tab bar
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        ui::draw::render_header(frame, main_chunks[0], &self.config.server.base_url);
        ui::draw::render_tab_bar(frame, main_chunks[1], &state);
        ui::draw::render_active_tab(frame, main_chunks[2], &state, self.spinner_index);
        ui::draw::render_footer(frame, main_chunks[3]);
    }
}
