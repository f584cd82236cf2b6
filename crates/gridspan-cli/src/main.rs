use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridspan_config::Config;
use gridspan_engine::{Grid, GridOptions, GridSelection, PointerInput};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::{
    env,
    io::{Stdout, stdout},
    process,
};

mod grid_view;
mod sample;

use grid_view::{GridLayout, GridView};
use sample::Person;

struct App {
    rows: Vec<Person>,
    selection: GridSelection,
    auto_reset_selection: bool,
    sample_rows: usize,
    refresh_seed: u64,
    /// Area the grid was last drawn into, for mouse hit testing.
    grid_area: Rect,
}

impl App {
    fn new(config: &Config) -> Self {
        let rows = sample::make_rows(config.sample_rows, 0);
        let grid = Grid::new(sample::columns(), rows.len());
        let selection = GridSelection::new(
            grid,
            GridOptions {
                auto_reset_selection: config.auto_reset_selection,
            },
        );
        Self {
            rows,
            selection,
            auto_reset_selection: config.auto_reset_selection,
            sample_rows: config.sample_rows,
            refresh_seed: 0,
            grid_area: Rect::default(),
        }
    }

    fn layout(&self) -> GridLayout {
        GridLayout::new(
            self.grid_area,
            self.selection.grid().columns().len(),
            self.rows.len(),
        )
    }

    /// Regenerate the demo dataset; the selection is cleared only when the
    /// auto-reset option is enabled.
    fn refresh_data(&mut self) {
        self.refresh_seed += 1;
        self.rows = sample::make_rows(self.sample_rows, self.refresh_seed);
        self.selection.grid_mut().set_row_count(self.rows.len());
        self.selection.data_changed();
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(coord) = self.layout().hit_test(mouse.column, mouse.row) {
                    let extend = mouse.modifiers.contains(KeyModifiers::SHIFT);
                    self.selection.handle(PointerInput::Press { coord, extend });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(coord) = self.layout().hit_test(mouse.column, mouse.row) {
                    self.selection.handle(PointerInput::Enter { coord });
                }
            }
            // Forwarded regardless of position: releasing outside the grid
            // still ends the drag.
            MouseEventKind::Up(MouseButton::Left) => {
                self.selection.handle(PointerInput::Release);
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    if args.len() == 2 {
        match args[1].parse::<usize>() {
            Ok(rows) => config.sample_rows = rows,
            Err(_) => {
                eprintln!("Usage: {} [sample-rows]", args[0]);
                process::exit(1);
            }
        }
    } else if args.len() > 2 {
        eprintln!("Usage: {} [sample-rows]", args[0]);
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(&config);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal: mouse capture is released together with raw mode,
    // so no listener outlives the app.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('r') => app.refresh_data(),
                KeyCode::Esc => app.selection.handle(PointerInput::Cancel),
                _ => {}
            },
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let status = if app.selection.state().selecting() {
        Span::styled("selecting", Style::default().fg(Color::Green))
    } else if app.selection.state().bounds().is_some() {
        Span::styled("selected", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("no selection")
    };
    let title = Paragraph::new(Line::from(vec![
        Span::raw("gridspan  "),
        status,
        Span::raw(if app.auto_reset_selection {
            "  (auto-reset on refresh)"
        } else {
            ""
        }),
    ]));
    f.render_widget(title, chunks[0]);

    // Remember where the grid was drawn so mouse events can be resolved
    // against the same layout.
    app.grid_area = chunks[1];
    f.render_widget(
        GridView {
            selection: &app.selection,
            rows: &app.rows,
        },
        chunks[1],
    );

    let help = Paragraph::new(Line::from(vec![
        Span::raw("drag: select | "),
        Span::raw("shift+click: extend | "),
        Span::raw("Esc: clear | "),
        Span::raw("r: refresh data | "),
        Span::raw("q: quit"),
    ]));
    f.render_widget(help, chunks[2]);
}
