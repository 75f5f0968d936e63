//! TUI application model (Elm architecture).
//!
//! The model owns all transient UI state: the current request, the selected
//! input field, panel toggles and the outcome of the last recomputation.
//! Every parameter change triggers exactly one engine call.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use progcalc_cli::explain::term_details;
use progcalc_core::{compute, SequenceError, SequenceRequest, SequenceResult};

use crate::chart::render_sequence_chart;
use crate::footer::render_footer;
use crate::formulas::{render_about, render_error, render_formulas};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::table::render_term_table;

/// Amount added to or removed from the first term and the step per key press.
pub const PARAM_INCREMENT: f64 = 0.5;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
const FORMULAS_HEIGHT: u16 = 14;
/// Table borders plus the column header row.
const TABLE_CHROME: u16 = 3;

/// Editable input fields, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstTerm,
    Step,
    TermCount,
}

impl Field {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::FirstTerm => Self::Step,
            Self::Step => Self::TermCount,
            Self::TermCount => Self::FirstTerm,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::FirstTerm => Self::TermCount,
            Self::Step => Self::FirstTerm,
            Self::TermCount => Self::Step,
        }
    }
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Parameters of the displayed sequence.
    pub request: SequenceRequest,
    /// Parameters restored by the reset key.
    initial: SequenceRequest,
    /// Upper bound on the term count.
    pub max_terms: u64,
    /// Field adjusted by the up/down keys.
    pub selected: Field,
    /// Result of the last recomputation.
    pub outcome: Result<SequenceResult, SequenceError>,
    /// Number of engine evaluations so far.
    generation: u64,
    /// Show the term detail table.
    pub show_details: bool,
    /// Show background notes instead of the formulas panel.
    pub show_about: bool,
    /// First table row shown.
    pub table_offset: usize,
    /// Terminal height, used to size table pages.
    pub terminal_height: u16,
}

impl TuiApp {
    /// Create a new TUI app and compute the initial sequence.
    #[must_use]
    pub fn new(request: SequenceRequest, max_terms: u64) -> Self {
        let mut app = Self {
            should_quit: false,
            request,
            initial: request,
            max_terms: max_terms.max(1),
            selected: Field::FirstTerm,
            outcome: Err(SequenceError::InvalidTermCount(0)),
            generation: 0,
            show_details: true,
            show_about: false,
            table_offset: 0,
            terminal_height: 24,
        };
        app.recompute();
        app
    }

    /// Get the current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Re-run the engine for the current request.
    pub fn recompute(&mut self) {
        self.generation += 1;
        self.outcome = compute(&self.request);
        self.table_offset = 0;
        if let Err(e) = &self.outcome {
            debug!(generation = self.generation, error = %e, "recompute failed");
        }
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Resize { height } => {
                self.terminal_height = height;
                self.table_offset = self.table_offset.min(self.max_table_offset());
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleKind => {
                self.request.kind = self.request.kind.toggled();
                self.recompute();
            }
            KeyAction::PrevField => self.selected = self.selected.prev(),
            KeyAction::NextField => self.selected = self.selected.next(),
            KeyAction::Increase => self.adjust(1),
            KeyAction::Decrease => self.adjust(-1),
            KeyAction::ToggleDetails => self.show_details = !self.show_details,
            KeyAction::ToggleAbout => self.show_about = !self.show_about,
            KeyAction::Reset => {
                self.request = self.initial;
                self.recompute();
            }
            KeyAction::ScrollUp => self.scroll_up(1),
            KeyAction::ScrollDown => self.scroll_down(1),
            KeyAction::PageUp => self.scroll_up(self.table_page_size()),
            KeyAction::PageDown => self.scroll_down(self.table_page_size()),
            KeyAction::Home => self.table_offset = 0,
            KeyAction::End => self.table_offset = self.max_table_offset(),
            KeyAction::None => {}
        }
    }

    /// Number of table rows visible at the current terminal height.
    #[must_use]
    pub fn table_page_size(&self) -> usize {
        let chrome = HEADER_HEIGHT + FOOTER_HEIGHT + FORMULAS_HEIGHT + TABLE_CHROME;
        usize::from(self.terminal_height.saturating_sub(chrome)).max(1)
    }

    fn max_table_offset(&self) -> usize {
        self.outcome
            .as_ref()
            .map_or(0, |result| result.len().saturating_sub(1))
    }

    fn scroll_up(&mut self, rows: usize) {
        self.table_offset = self.table_offset.saturating_sub(rows);
    }

    fn scroll_down(&mut self, rows: usize) {
        self.table_offset = self
            .table_offset
            .saturating_add(rows)
            .min(self.max_table_offset());
    }

    /// Move the selected field one increment up (`direction > 0`) or down.
    fn adjust(&mut self, direction: i8) {
        let delta = f64::from(direction) * PARAM_INCREMENT;
        match self.selected {
            Field::FirstTerm => self.request.first_term += delta,
            Field::Step => self.request.step += delta,
            Field::TermCount => {
                let n = if direction > 0 {
                    self.request.term_count.saturating_add(1)
                } else {
                    self.request.term_count.saturating_sub(1)
                };
                self.request.term_count = n.clamp(1, self.max_terms);
            }
        }
        self.recompute();
    }

    /// Compute the layout.
    ///
    /// Returns (header, side panel, chart, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(5), // main content
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        // Split main content 40/60
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40), // formulas + table
                Constraint::Percentage(60), // chart
            ])
            .split(outer[1]);

        (outer[0], main[0], main[1], outer[2])
    }

    /// Split the side panel into formulas (top) and table (bottom).
    #[must_use]
    pub fn compute_side_layout(side: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FORMULAS_HEIGHT), Constraint::Min(3)])
            .split(side);
        (chunks[0], chunks[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, side_area, chart_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(
            frame,
            header_area,
            &self.request,
            self.selected,
            self.max_terms,
        );

        match &self.outcome {
            Ok(result) => {
                let (top, bottom) = if self.show_details {
                    Self::compute_side_layout(side_area)
                } else {
                    (side_area, Rect::default())
                };
                if self.show_about {
                    render_about(frame, top, &self.request);
                } else {
                    render_formulas(frame, top, &self.request, result);
                }
                if self.show_details {
                    let rows = term_details(&self.request, result);
                    render_term_table(frame, bottom, &rows, self.table_offset);
                }
                render_sequence_chart(frame, chart_area, &self.request, result);
            }
            Err(e) => {
                let main = side_area.union(chart_area);
                render_error(frame, main, &e.to_string());
            }
        }

        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        self.terminal_height = terminal.size()?.height;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            let msg = if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        TuiMessage::KeyPress(map_key(key))
                    }
                    Event::Resize(_, height) => TuiMessage::Resize { height },
                    _ => TuiMessage::Tick,
                }
            } else {
                TuiMessage::Tick
            };
            self.handle_message(msg);
        }
    }
}
