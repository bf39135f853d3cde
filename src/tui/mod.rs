//! TUI module - Trainer dashboard with ratatui
//!
//! Re-reads the roster from the store every refresh interval.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::analytics::{TraineeAnalytics, TrainerOverview, roster_analytics};
use crate::db::Database;
use crate::plans::Catalog;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// App state for TUI
pub struct App<'a> {
    db: Database,
    catalog: &'a Catalog,
    trainer_uid: String,
    refresh_interval: Duration,
    trainees: Vec<TraineeAnalytics>,
    overview: TrainerOverview,
    last_refresh: Instant,
    should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(db: Database, catalog: &'a Catalog, trainer_uid: &str, refresh_interval: Duration) -> Result<Self> {
        let mut app = Self {
            db,
            catalog,
            trainer_uid: trainer_uid.to_string(),
            refresh_interval,
            trainees: Vec::new(),
            overview: TrainerOverview::default(),
            last_refresh: Instant::now(),
            should_quit: false,
        };
        app.refresh()?;
        Ok(app)
    }

    fn refresh(&mut self) -> Result<()> {
        let records = self.db.get_trainer_trainees(&self.trainer_uid)?;
        self.trainees = roster_analytics(self.catalog, &records);
        self.overview = TrainerOverview::from_trainees(&self.trainees);
        self.last_refresh = Instant::now();
        debug!("Dashboard refreshed: {} trainees", self.trainees.len());
        Ok(())
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        let result = self.event_loop(&mut terminal);

        restore_terminal()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;

            if self.last_refresh.elapsed() >= self.refresh_interval {
                self.refresh()?;
            }
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(10),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let o = &self.overview;
        let header = Paragraph::new(format!(
            "coachtrack - {} | trainees: {} | workouts: {} | kcal: {} | progress: {}% | diet: {}%",
            self.trainer_uid,
            o.active_trainees,
            o.total_workouts_completed,
            o.total_calories_burned,
            o.avg_progress_percentage,
            o.avg_dietary_adherence_percentage,
        ))
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        // Trainee table
        let rows: Vec<Row> = self.trainees.iter().map(|t| {
            Row::new(vec![
                Cell::from(t.user_name.clone()),
                Cell::from(t.timeline.label()),
                Cell::from(t.current_week.to_string()),
                Cell::from(format!("{}/{} ({}%)", t.total_workouts_completed, t.total_workouts_in_plan, t.progress_percentage)),
                Cell::from(t.total_calories_burned.to_string()),
                Cell::from(format!("{}%", t.dietary_adherence_percentage)),
                Cell::from(t.current_streak.to_string()),
            ])
        }).collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(16),
                Constraint::Length(10),
                Constraint::Length(6),
                Constraint::Length(16),
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Length(7),
            ],
        )
        .header(Row::new(vec!["Trainee", "Plan", "Week", "Workouts", "Kcal", "Diet", "Streak"])
            .style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title("Trainees"));

        frame.render_widget(table, chunks[1]);

        // Weekly calories chart
        let labels: Vec<String> = o.weekly_series.iter().map(|p| p.week_number.to_string()).collect();
        let data: Vec<(&str, u64)> = labels
            .iter()
            .zip(&o.weekly_series)
            .map(|(label, p)| (label.as_str(), p.calories_burned as u64))
            .collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title("Calories by week"))
            .bar_width(4)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Green))
            .data(data.as_slice());
        frame.render_widget(chart, chunks[2]);

        // Footer
        let footer = Paragraph::new(format!(
            "q: quit | r: refresh | auto-refresh every {}s",
            self.refresh_interval.as_secs()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[3]);
    }

    fn handle_events(&mut self) -> Result<()> {
        if !event::poll(Duration::from_millis(100))? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
            _ => Ok(()),
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => self.refresh()?,
            _ => {}
        }
        Ok(())
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
