//! Terminal front end: key handling, animation bookkeeping and drawing.

use crate::animation::ColorTransition;
use crate::color::Rgb;
use crate::config::DemoConfig;
use crate::cycle::CycleError;
use crate::tui::disc::{disc_area, Disc};
use crate::view::{ContentView, ViewEvent};
use ratatui::crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

const CAPTION: &str = "Toggle hint (space) | Tap shape (enter) | Quit (q)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleHint,
    TapShape,
    Quit,
}

impl Command {
    pub fn from_key(code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Char(' ') | KeyCode::Char('t') => Some(Command::ToggleHint),
            KeyCode::Enter | KeyCode::Char('c') => Some(Command::TapShape),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

pub struct App {
    view: ContentView,
    pending: Rc<RefCell<VecDeque<ViewEvent>>>,
    transition: Option<(ColorTransition, Instant)>,
    needs_redraw: bool,
    quit: bool,
    shape_height: u16,
    frame_interval: Duration,
}

impl App {
    pub fn new(config: &DemoConfig) -> Self {
        let mut view = ContentView::new();
        let pending = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&pending);
        view.subscribe(move |event: &ViewEvent| sink.borrow_mut().push_back(*event));

        Self {
            view,
            pending,
            transition: None,
            needs_redraw: true,
            quit: false,
            shape_height: config.display.shape_height,
            frame_interval: config.frame_interval(),
        }
    }

    pub fn view(&self) -> &ContentView {
        &self.view
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// True while a blend is running or a view change has not been drawn.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw || self.transition.is_some()
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub async fn dispatch(&mut self, command: Command) -> Result<(), CycleError> {
        match command {
            Command::ToggleHint => {
                self.view.on_toggle_flip();
            }
            Command::TapShape => {
                self.view.on_shape_tap().await?;
            }
            Command::Quit => self.quit = true,
        }
        Ok(())
    }

    /// Consume view notifications collected since the last call.
    pub fn drain_events(&mut self, now: Instant) {
        let events: Vec<ViewEvent> = self.pending.borrow_mut().drain(..).collect();
        for event in events {
            if let ViewEvent::ColorChanged(change) = event {
                let next = match self.transition {
                    Some((running, started)) => running.retarget(
                        now.saturating_duration_since(started),
                        change.to.rgb(),
                        change.animation,
                    ),
                    None => ColorTransition::new(change.from.rgb(), change.to.rgb(), change.animation),
                };
                self.transition = Some((next, now));
            }
            self.needs_redraw = true;
        }
    }

    /// Shape fill at `now`. Drops the transition once it has finished.
    pub fn fill_at(&mut self, now: Instant) -> Rgb {
        let Some((transition, started)) = self.transition else {
            return self.view.color().rgb();
        };
        let elapsed = now.saturating_duration_since(started);
        if transition.is_complete(elapsed) {
            self.transition = None;
            return transition.target();
        }
        transition.sample(elapsed)
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>, now: Instant) {
        let fill = self.fill_at(now);
        self.needs_redraw = false;

        let hint_rows = if self.view.hint_visible() { 2 } else { 0 };
        let [toggle_row, hint_row, shape_row, _, caption_row] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(hint_rows),
                Constraint::Length(self.shape_height),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        frame.render_widget(self.toggle_line(), toggle_row);

        if let Some(text) = self.view.hint_text() {
            let hint = Paragraph::new(text).wrap(Wrap { trim: true });
            frame.render_widget(hint, hint_row);
        }

        frame.render_widget(Disc::new(fill), disc_area(shape_row, self.shape_height));

        frame.render_widget(Line::from(CAPTION).dark_gray(), caption_row);
    }

    fn toggle_line(&self) -> Line<'static> {
        let switch = if self.view.hint_visible() {
            Span::styled(" ON  ", Style::default().fg(Color::Black).bg(Color::Green))
        } else {
            Span::styled(" OFF ", Style::default().fg(Color::White).bg(Color::DarkGray))
        };
        Line::from(vec![
            Span::raw(self.view.toggle_label()).bold(),
            Span::raw("  "),
            switch,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DisplayColor;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::from_key(KeyCode::Char(' ')), Some(Command::ToggleHint));
        assert_eq!(Command::from_key(KeyCode::Char('t')), Some(Command::ToggleHint));
        assert_eq!(Command::from_key(KeyCode::Enter), Some(Command::TapShape));
        assert_eq!(Command::from_key(KeyCode::Char('c')), Some(Command::TapShape));
        assert_eq!(Command::from_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(Command::from_key(KeyCode::Char('x')), None);
    }

    #[tokio::test]
    async fn tap_starts_a_blend_that_settles() {
        let mut app = App::new(&DemoConfig::default());
        let start = Instant::now();

        app.dispatch(Command::TapShape).await.unwrap();
        app.drain_events(start);

        assert!(app.needs_redraw());
        assert_eq!(app.fill_at(start), DisplayColor::Green.rgb());

        let done = start + Duration::from_millis(400);
        assert_eq!(app.fill_at(done), DisplayColor::Red.rgb());
        assert!(app.transition.is_none());
    }

    #[tokio::test]
    async fn quick_second_tap_retargets_from_current_fill() {
        let mut app = App::new(&DemoConfig::default());
        let start = Instant::now();

        app.dispatch(Command::TapShape).await.unwrap();
        app.drain_events(start);

        let midway = start + Duration::from_millis(100);
        let fill_midway = app.fill_at(midway);
        app.dispatch(Command::TapShape).await.unwrap();
        app.drain_events(midway);

        assert_eq!(app.fill_at(midway), fill_midway);
        assert_eq!(
            app.fill_at(midway + Duration::from_secs(1)),
            DisplayColor::Blue.rgb()
        );
        assert_eq!(app.view().color(), DisplayColor::Blue);
    }

    #[tokio::test]
    async fn quit_command_stops_the_loop() {
        let mut app = App::new(&DemoConfig::default());
        app.dispatch(Command::Quit).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn draws_label_and_hint() {
        let mut app = App::new(&DemoConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        terminal.draw(|frame| app.draw(frame, Instant::now())).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Show hint"));
        assert!(!text.contains("See what happens"));

        app.dispatch(Command::ToggleHint).await.unwrap();
        app.drain_events(Instant::now());
        terminal.draw(|frame| app.draw(frame, Instant::now())).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Hide hint"));
        assert!(text.contains("See what happens"));
        assert!(!app.needs_redraw());
    }
}
