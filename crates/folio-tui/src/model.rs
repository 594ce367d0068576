//! TUI application model (Elm architecture).
//!
//! The model owns the page. Wall-clock time elapsed between two loop
//! iterations is fed into the page's virtual clock, unless paused.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Terminal;

use folio_core::contact::Field;
use folio_core::event::{KeyInput, SiteAction};
use folio_core::site::Site;

use crate::bridge::TuiBridgeObserver;
use crate::contact::{render_contact, render_notifications};
use crate::footer::render_footer;
use crate::header::render_header;
use crate::hero::render_hero;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{event_line, render_logs, LogScrollState, LOG_CAPACITY};
use crate::messages::TuiMessage;
use crate::progress::render_scroll_progress;
use crate::projects::render_projects;
use crate::sections::render_sections;
use crate::styles::ColorTheme;
use crate::testimonials::render_testimonials;

/// Pixels moved by one scroll key press.
const SCROLL_STEP: i64 = 120;

/// TUI application state (Elm Model).
pub struct TuiApp {
    site: Site,
    rx: Receiver<TuiMessage>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether the page clock is frozen.
    pub paused: bool,
    /// Event log lines.
    pub logs: Vec<String>,
    pub log_scroll: LogScrollState,
    /// Contact field receiving keystrokes.
    pub editing: Option<Field>,
    pub errors: Vec<String>,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl TuiApp {
    /// Create an app over `site`, subscribing a bridge observer to it.
    #[must_use]
    pub fn new(site: Site) -> Self {
        let (tx, rx) = unbounded();
        site.subscribe(Arc::new(TuiBridgeObserver::new(tx)));
        Self {
            site,
            rx,
            should_quit: false,
            paused: false,
            logs: Vec::new(),
            log_scroll: LogScrollState::new(),
            editing: None,
            errors: Vec::new(),
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Drain pending messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Event { at, event } => {
                // Typing and scroll frames are visible in their panels.
                if !event.is_frame() {
                    self.push_log(event_line(at, &event));
                }
            }
            TuiMessage::Log(line) => self.push_log(line),
            TuiMessage::Tick => {}
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Error(err) => {
                self.push_log(format!("[ERROR] {err}"));
                self.errors.push(err);
            }
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > LOG_CAPACITY {
            self.logs.remove(0);
        }
        self.log_scroll.on_new_message(self.logs.len());
    }

    /// Advance the page clock by wall-clock `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.paused {
            self.site.advance_by(elapsed);
        }
        self.update();
    }

    fn dispatch(&mut self, action: SiteAction) {
        if let Err(err) = self.site.dispatch(action) {
            self.handle_message(TuiMessage::Error(err.to_string()));
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => self.should_quit = true,
            KeyAction::Pause => self.paused = !self.paused,
            KeyAction::ToggleDarkMode => self.dispatch(SiteAction::ToggleDarkMode),
            KeyAction::ToggleMenu => self.dispatch(SiteAction::ToggleMenu),
            KeyAction::Escape => match self.editing.take() {
                Some(field) => self.dispatch(SiteAction::Blur(field)),
                None => self.dispatch(SiteAction::Key(KeyInput::Escape)),
            },
            KeyAction::PrevSlide => self.dispatch(SiteAction::PrevSlide),
            KeyAction::NextSlide => self.dispatch(SiteAction::NextSlide),
            KeyAction::JumpToSlide(index) => self.dispatch(SiteAction::JumpToSlide(index)),
            KeyAction::CycleFilter => {
                let filter = self.site.filter();
                let next = (filter.active_index() + 1) % filter.buttons().len();
                let name = filter.buttons()[next].clone();
                self.dispatch(SiteAction::Filter(name));
            }
            KeyAction::ScrollUp => self.dispatch(SiteAction::ScrollBy(-SCROLL_STEP)),
            KeyAction::ScrollDown => self.dispatch(SiteAction::ScrollBy(SCROLL_STEP)),
            KeyAction::PageUp => {
                let page = i64::from(self.site.metrics().viewport_height);
                self.dispatch(SiteAction::ScrollBy(-page));
            }
            KeyAction::PageDown => {
                let page = i64::from(self.site.metrics().viewport_height);
                self.dispatch(SiteAction::ScrollBy(page));
            }
            KeyAction::ScrollTop => self.dispatch(SiteAction::ScrollToTop),
            KeyAction::ScrollBottom => self.dispatch(SiteAction::ScrollTo(u32::MAX)),
            KeyAction::NextSection => {
                let sections = &self.site.content().sections;
                if !sections.is_empty() {
                    let next = self
                        .site
                        .nav()
                        .active_section()
                        .map_or(0, |i| (i + 1) % sections.len());
                    let href = format!("#{}", sections[next].id);
                    self.dispatch(SiteAction::NavigateTo(href));
                }
            }
            KeyAction::NextField => self.focus_next_field(),
            KeyAction::Submit => self.dispatch(SiteAction::Submit),
            KeyAction::Input(c) => self.edit(|value| value.push(c)),
            KeyAction::Backspace => self.edit(|value| {
                value.pop();
            }),
            KeyAction::LogUp => self.log_scroll.scroll_up(self.logs.len()),
            KeyAction::LogDown => self.log_scroll.scroll_down(),
            KeyAction::LogOldest => self.log_scroll.home(self.logs.len()),
            KeyAction::LogNewest => self.log_scroll.end(),
            KeyAction::Shortcut => self.dispatch(SiteAction::Key(KeyInput::ShortcutSlash)),
            KeyAction::None => {}
        }
    }

    fn focus_next_field(&mut self) {
        let next = match self.editing {
            Some(field) => {
                self.dispatch(SiteAction::Blur(field));
                field.next()
            }
            None => {
                self.dispatch(SiteAction::NavigateTo("#contact".to_string()));
                Field::Name
            }
        };
        self.dispatch(SiteAction::Focus(next));
        self.editing = Some(next);
    }

    fn edit(&mut self, change: impl FnOnce(&mut String)) {
        let Some(field) = self.editing else {
            return;
        };
        let mut value = self.site.contact().field(field).value.clone();
        change(&mut value);
        self.dispatch(SiteAction::Input(field, value));
    }

    /// Compute the page layout.
    ///
    /// Returns (header, left column, right column, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer[1]);

        (outer[0], main[0], main[1], outer[2])
    }

    /// Left column: hero, testimonials, projects.
    #[must_use]
    pub fn compute_left_layout(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Min(4),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Right column: scroll gauge, nav, contact form, event log.
    #[must_use]
    pub fn compute_right_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(11),
                Constraint::Length(6),
                Constraint::Min(3),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2], chunks[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let theme = ColorTheme::for_mode(self.site.theme());
        frame.render_widget(Block::default().style(theme.text_style()), frame.area());

        let (header, left, right, footer) = Self::compute_layout(frame.area());
        render_header(frame, header, &self.site, self.paused, &theme);

        let (hero, testimonials, projects) = Self::compute_left_layout(left);
        render_hero(frame, hero, &self.site, &theme);
        render_testimonials(frame, testimonials, self.site.carousel(), &theme);
        render_projects(frame, projects, self.site.filter(), &theme);

        let (progress, sections, contact, logs) = Self::compute_right_layout(right);
        let metrics = self.site.metrics();
        render_scroll_progress(frame, progress, metrics.progress(), metrics.scroll_y, &theme);
        render_sections(frame, sections, &self.site, &theme);
        render_contact(frame, contact, self.site.contact(), self.editing, &theme);
        render_logs(frame, logs, &self.logs, &self.log_scroll, &theme);

        render_notifications(frame, left, self.site.notifier(), &theme);
        render_footer(frame, footer, self.editing.is_some(), &theme);
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

    /// Run the TUI event loop until quit, then stop the page.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let tick_rate = Duration::from_millis(16);

        self.site.start();
        let mut last = Instant::now();

        let result = loop {
            if let Err(err) = terminal.draw(|frame| self.render(frame)) {
                break Err(err);
            }
            if self.should_quit {
                break Ok(());
            }

            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        let action = map_key(key, self.editing.is_some());
                        self.handle_key_action(action);
                    }
                    Ok(Event::Resize(width, height)) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    Ok(_) => {}
                    Err(err) => break Err(err),
                },
                Ok(false) => {}
                Err(err) => break Err(err),
            }

            let now = Instant::now();
            self.tick(now - last);
            last = now;
        };

        self.site.stop();
        Self::teardown_terminal(&mut terminal)?;
        result
    }
}
