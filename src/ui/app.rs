//! Main TUI application state and logic

use crate::interpreter::debugger::Debugger;
use crate::interpreter::errors::RuntimeError;
use crate::ui::panes::{self, GridViewport, StatusInfo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between auto-play steps
const PLAY_INTERVAL: Duration = Duration::from_millis(150);

/// Most steps taken by a single Enter press
const RUN_STEP_LIMIT: usize = 100_000;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Grid,
    Stack,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: grid -> output -> stack)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Grid => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Grid,
        }
    }
}

/// The main application state
pub struct App {
    /// Recorded run of the program
    pub debugger: Debugger,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub grid_viewport: GridViewport,
    pub stack_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a debugger session
    pub fn new(debugger: Debugger, program_name: &str) -> Self {
        App {
            debugger,
            focused_pane: FocusedPane::Grid,
            grid_viewport: GridViewport::new(),
            stack_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: format!("Loaded {}", program_name),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                match self.debugger.step_forward() {
                    Ok(()) => {
                        self.status_message = "Playing...".to_string();
                        self.after_step();
                    }
                    Err(e) => {
                        self.is_playing = false;
                        self.status_message = Self::describe_stop(&e);
                    }
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        // Left column: Grid (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        let interpreter = self.debugger.interpreter();

        panes::render_grid_pane(
            frame,
            left_rows[0],
            interpreter.grid(),
            interpreter.state(),
            interpreter.modified_cells(),
            self.focused_pane == FocusedPane::Grid,
            &mut self.grid_viewport,
        );

        panes::render_output_pane(
            frame,
            left_rows[1],
            interpreter.output(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        panes::render_stack_pane(
            frame,
            columns[1],
            interpreter.stack(),
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        let is_at_end = self.debugger.is_at_end();
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusInfo {
                message: &self.status_message,
                current_step: self.debugger.history_position(),
                total_steps: self.debugger.total_snapshots(),
                has_error: is_at_end && self.debugger.error().is_some(),
                is_playing: self.is_playing,
                is_at_end,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let (stepped, stop) = self.debugger.run_steps(n);
                self.status_message = match stop {
                    Some(e) if stepped == 0 => Self::describe_stop(&e),
                    _ => format!("Stepped forward {} step(s)", stepped),
                };
                self.after_step();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Grid => {
                    self.grid_viewport.follow_ip = false;
                    self.grid_viewport.row_offset = self.grid_viewport.row_offset.saturating_sub(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Grid => {
                    self.grid_viewport.follow_ip = false;
                    self.grid_viewport.row_offset = self.grid_viewport.row_offset.saturating_add(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Run until halt or error, a bounded batch per press
                self.is_playing = false;
                let (stepped, stop) = self.debugger.run_steps(RUN_STEP_LIMIT);
                self.status_message = match stop {
                    Some(e) => format!("Ran {} step(s): {}", stepped, Self::describe_stop(&e)),
                    None => format!("Ran {} step(s), press Enter to continue", stepped),
                };
                self.after_step();
            }
            KeyCode::Backspace => {
                // Jump to start of execution
                self.is_playing = false;
                let _ = self.debugger.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.after_step();
            }
            _ => {}
        }
    }

    /// Step forward in execution
    fn step_forward(&mut self) {
        match self.debugger.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.after_step();
            }
            Err(e) => {
                self.status_message = Self::describe_stop(&e);
            }
        }
    }

    /// Step backward in execution
    fn step_backward(&mut self) {
        match self.debugger.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.after_step();
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }

    /// Re-follow the IP and keep the output scrolled to the bottom
    fn after_step(&mut self) {
        self.grid_viewport.follow_ip = true;
        self.output_scroll = usize::MAX;
    }

    fn describe_stop(error: &RuntimeError) -> String {
        match error {
            RuntimeError::Generic { message, .. } => message.clone(),
            e => format!("Error: {}", e),
        }
    }
}
