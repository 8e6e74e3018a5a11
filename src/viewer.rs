//! # Viewer
//!
//! Interactive terminal view of a running simulation, built on `ratatui` for
//! layout and `crossterm` for terminal control.
//!
//! ## Controls
//!
//! * Space: Play/Pause
//! * Enter: Step one generation while paused
//! * r: Replace the board with a random soup
//! * q / Esc: Quit

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use sysinfo::{System, SystemExt};

use crate::bounds::bounding_box;
use crate::cell::State;
use crate::engine::Transition;
use crate::history::Generations;
use crate::patterns::{soup, SOUP_DENSITY};
use crate::render::render;

/// Settings for the interactive viewer.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Time between generations while running
    pub tick_rate: Duration,
    /// Width of the rectangle filled when reseeding
    pub soup_width: usize,
    /// Height of the rectangle filled when reseeding
    pub soup_height: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            tick_rate: Duration::from_millis(100),
            soup_width: 40,
            soup_height: 20,
        }
    }
}

/// Running totals shown in the statistics panel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Stats {
    /// Generations computed since the last (re)seed
    generation: u64,
    /// Cells born since the last (re)seed
    cells_created: u64,
    /// Cells died since the last (re)seed
    cells_destroyed: u64,
    /// Living cells in the current generation
    current_population: usize,
}

impl Stats {
    fn starting_at(state: &State) -> Self {
        Stats {
            current_population: state.len(),
            ..Stats::default()
        }
    }

    fn record(&mut self, transition: Transition) {
        self.generation += 1;
        self.cells_created += transition.births as u64;
        self.cells_destroyed += transition.deaths as u64;
        self.current_population = transition.population;
    }
}

/// Viewer state: the current generation and everything around it.
pub struct Viewer {
    generations: Generations,
    state: State,
    running: bool,
    stats: Stats,
    sys: System,
    config: ViewerConfig,
}

impl Viewer {
    pub fn new(seed: State, config: ViewerConfig) -> Self {
        let mut generations = Generations::new(seed);
        let state = generations.next().unwrap_or_default();
        Viewer {
            stats: Stats::starting_at(&state),
            generations,
            state,
            running: false,
            sys: System::new_all(),
            config,
        }
    }

    /// Advances to the next generation and folds its changes into the stats.
    fn step(&mut self) {
        if let Some(next) = self.generations.next() {
            self.stats.record(Transition::between(&self.state, &next));
            self.state = next;
        }
        self.sys.refresh_memory();
    }

    /// Starts over from a random soup, paused.
    fn reseed(&mut self) {
        let mut rng = rand::thread_rng();
        let seed = soup(
            self.config.soup_width,
            self.config.soup_height,
            SOUP_DENSITY,
            &mut rng,
        );
        *self = Viewer::new(seed, self.config.clone());
    }

    fn toggle_running(&mut self) {
        self.running = !self.running;
    }
}

fn draw_grid(f: &mut ratatui::Frame, viewer: &Viewer, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Game of Life [Space: Play/Pause | Enter: Step | r: Soup | q: Quit]");

    let paragraph = Paragraph::new(render(&viewer.state))
        .style(Style::default().fg(Color::White))
        .block(block);

    f.render_widget(paragraph, area);
}

fn draw_stats(f: &mut ratatui::Frame, viewer: &Viewer, area: Rect) {
    let stats = &viewer.stats;
    let bounds = bounding_box(&viewer.state);
    let memory_used = viewer.sys.used_memory() / 1024;
    let memory_total = viewer.sys.total_memory() / 1024;

    let stats_text = format!(
        "Generation: {}\n\
        Population: {}\n\
        Cells Created: {}\n\
        Cells Destroyed: {}\n\
        Birth Rate: {:.2}/gen\n\
        Death Rate: {:.2}/gen\n\
        Bounds: {}x{} from {}\n\
        Memory Usage: {}KB/{:.2}MB\n\
        Status: {}\n",
        stats.generation,
        stats.current_population,
        stats.cells_created,
        stats.cells_destroyed,
        stats.cells_created as f64 / stats.generation.max(1) as f64,
        stats.cells_destroyed as f64 / stats.generation.max(1) as f64,
        bounds.width(),
        bounds.height(),
        bounds.bottom_left,
        memory_used,
        memory_total as f64 / 1024.0,
        if viewer.running { "Running" } else { "Paused" }
    );

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: true });

    f.render_widget(stats_widget, area);
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, viewer: &mut Viewer) -> io::Result<()> {
    let tick_rate = viewer.config.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(75), Constraint::Percentage(25)].as_ref())
                .split(f.size());

            draw_grid(f, viewer, chunks[0]);
            draw_stats(f, viewer, chunks[1]);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') => viewer.toggle_running(),
                    KeyCode::Char('r') => viewer.reseed(),
                    KeyCode::Enter => {
                        if !viewer.running {
                            viewer.step();
                        }
                    }
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if viewer.running {
                viewer.step();
            }
            last_tick = Instant::now();
        }
    }
}

/// Opens the viewer on `seed` and blocks until the user quits.
///
/// The terminal is put back into its normal mode before returning, whether
/// the event loop ended cleanly or not.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to or restored.
pub fn run(seed: State, config: ViewerConfig) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter the alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to open the terminal")?;

    let mut viewer = Viewer::new(seed, config);
    let outcome = event_loop(&mut terminal, &mut viewer);

    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("failed to leave the alternate screen")?;
    terminal.show_cursor().context("failed to show the cursor")?;

    outcome.context("viewer event loop failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::seed;
    use ratatui::backend::TestBackend;

    fn blinker() -> State {
        seed([(0, 0), (1, 0), (2, 0)])
    }

    #[test]
    fn starts_paused_on_the_seed() {
        let viewer = Viewer::new(blinker(), ViewerConfig::default());
        assert_eq!(viewer.state, blinker());
        assert!(!viewer.running);
        assert_eq!(viewer.stats, Stats::starting_at(&blinker()));
    }

    #[test]
    fn memory_is_read_before_the_first_step() {
        let viewer = Viewer::new(blinker(), ViewerConfig::default());
        assert!(viewer.sys.total_memory() > 0);
    }

    #[test]
    fn step_accumulates_stats() {
        let mut viewer = Viewer::new(blinker(), ViewerConfig::default());
        viewer.step();
        viewer.step();
        assert_eq!(viewer.state, blinker());
        assert_eq!(
            viewer.stats,
            Stats {
                generation: 2,
                cells_created: 4,
                cells_destroyed: 4,
                current_population: 3,
            }
        );
    }

    #[test]
    fn reseed_resets_to_generation_zero() {
        let config = ViewerConfig {
            soup_width: 6,
            soup_height: 3,
            ..ViewerConfig::default()
        };
        let mut viewer = Viewer::new(blinker(), config);
        viewer.step();
        viewer.toggle_running();
        viewer.reseed();
        assert_eq!(viewer.stats.generation, 0);
        assert!(!viewer.running);
        assert_eq!(viewer.stats.current_population, viewer.state.len());
        let bounds = bounding_box(&viewer.state);
        assert!(bounds.top_right.x < 6 && bounds.top_right.y < 3);
    }

    #[test]
    fn draws_board_and_statistics() {
        let viewer = Viewer::new(blinker(), ViewerConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(75), Constraint::Percentage(25)].as_ref())
                    .split(f.size());
                draw_grid(f, &viewer, chunks[0]);
                draw_stats(f, &viewer, chunks[1]);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol.as_str()).collect();
        assert!(text.contains("▣"));
        assert!(text.contains("Statistics"));
        assert!(text.contains("Paused"));
    }
}
