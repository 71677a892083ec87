use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use scrollsense_core::{AppConfig, HeaderBehavior};
use scrollsense_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{HeaderWidget, PageWidget, StatusBarWidget},
    App, Theme,
};

pub fn run(mut config: AppConfig, behavior: Option<HeaderBehavior>) -> Result<()> {
    if let Some(behavior) = behavior {
        config.header.behavior = behavior;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("ScrollSense"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, Theme::default());
    let event_handler = EventHandler::new(app.config.demo.tick_rate_ms, app.scroller.frame_interval());

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.controller.teardown();
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        app.update();

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            app.viewport_height = layout[0].height;

            PageWidget::render(frame, layout[0], app);
            HeaderWidget::render(frame, layout[0], app);
            StatusBarWidget::render(frame, layout[1], app);
        })?;

        match event_handler.next(needs_fast_update)? {
            Some(AppEvent::Key(key)) => app.handle_action(handle_key_event(key)),
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }

        needs_fast_update = app.needs_fast_update();
    }
}
