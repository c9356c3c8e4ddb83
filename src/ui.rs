use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use destiny_scanner::Reading;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Numerology,
    LifePath,
    Astrology,
    Palm,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Numerology, Page::LifePath, Page::Astrology, Page::Palm];

    pub fn next(&self) -> Self {
        match self {
            Page::Numerology => Page::LifePath,
            Page::LifePath => Page::Astrology,
            Page::Astrology => Page::Palm,
            Page::Palm => Page::Numerology,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Numerology => Page::Palm,
            Page::LifePath => Page::Numerology,
            Page::Astrology => Page::LifePath,
            Page::Palm => Page::Astrology,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Numerology => "Numerology",
            Page::LifePath => "Life Path",
            Page::Astrology => "Astrology",
            Page::Palm => "Palm",
        }
    }

    /// '1'..='4' jump straight to a page
    pub fn from_digit(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        Page::ALL.get(index as usize).copied()
    }
}

pub struct App {
    pub reading: Reading,
    pub current_page: Page,
    pub scroll: u16,
}

impl App {
    pub fn new(reading: Reading) -> Self {
        Self {
            reading,
            current_page: Page::Numerology,
            scroll: 0,
        }
    }

    pub fn next_page(&mut self) {
        self.go_to(self.current_page.next());
    }

    pub fn previous_page(&mut self) {
        self.go_to(self.current_page.previous());
    }

    pub fn go_to(&mut self, page: Page) {
        self.current_page = page;
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Char(c @ '1'..='4') => {
                    if let Some(page) = Page::from_digit(c) {
                        app.go_to(page);
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Home => app.scroll = 0,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Page content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let lines = match app.current_page {
        Page::Numerology => numerology_lines(&app.reading),
        Page::LifePath => life_path_lines(&app.reading),
        Page::Astrology => astrology_lines(&app.reading),
        Page::Palm => palm_lines(&app.reading),
    };

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(format!(" {} ", app.current_page.title())),
        );
    f.render_widget(content, chunks[1]);

    render_status_bar(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, page) in Page::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(format!("{} {}", i + 1, page.title()), style));
    }

    let reading = &app.reading;
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        reading.display_name().to_string(),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        reading.birth_date.to_string(),
        Style::default().fg(Color::Cyan),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        format!("✦ {}", reading.profile.bhagyank.number),
        Style::default().fg(Color::Magenta),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let status_spans = vec![
        Span::raw(" "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Page | "),
        Span::styled("1-4", Style::default().fg(Color::Yellow)),
        Span::raw(" Jump | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Scroll | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

// ============================================================================
// PAGE CONTENT
// ============================================================================

fn heading(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title.to_uppercase()),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value.into(), Style::default().fg(Color::White)),
    ])
}

fn bullets(items: &[String]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("    • ", Style::default().fg(Color::Cyan)),
                Span::raw(item.clone()),
            ])
        })
        .collect()
}

fn prose(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    ))
}

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn numerology_lines(reading: &Reading) -> Vec<Line<'static>> {
    let p = &reading.profile;
    let mut lines = vec![
        Line::from(""),
        heading("Core numbers"),
        Line::from(""),
        field("Mulank", format!("{}  {}", p.mulank.number, p.mulank.meaning)),
        field("Bhagyank", format!("{}  {}", p.bhagyank.number, p.bhagyank.meaning)),
        field(
            "Power number",
            format!("{}  {}", p.power_number.number, p.power_number.meaning),
        ),
        Line::from(""),
        heading("Ruling planet"),
        Line::from(""),
        field("Planet", p.ruling_planet.name.clone()),
        prose(&p.ruling_planet.influence),
        Line::from(""),
        heading("Compatibility"),
        Line::from(""),
        field("Compatible", join_numbers(&p.compatible_numbers)),
        field("Challenging", join_numbers(&p.incompatible_numbers)),
        Line::from(""),
        heading("Destiny insights"),
        Line::from(""),
    ];
    lines.extend(bullets(&reading.insights.insights));
    lines.push(Line::from(""));
    lines.push(heading("Lucky"));
    lines.push(Line::from(""));
    lines.push(field("Colors", p.lucky_colors.join(", ")));
    lines.push(field("Gemstones", p.lucky_gemstones.join(", ")));
    lines
}

fn life_path_lines(reading: &Reading) -> Vec<Line<'static>> {
    let p = &reading.profile;
    let mut lines = vec![
        Line::from(""),
        heading("Personality"),
        Line::from(""),
        prose(&p.personality_overview),
    ];

    let sections: [(&str, &Vec<String>); 6] = [
        ("Career paths", &p.career_paths),
        ("Relationships", &p.relationship_traits),
        ("Finances", &p.financial_traits),
        ("Health", &p.health_traits),
        ("Challenges", &p.life_challenges),
        ("Lessons", &p.life_lessons),
    ];
    for (title, items) in sections {
        lines.push(Line::from(""));
        lines.push(heading(title));
        lines.extend(bullets(items));
    }
    lines
}

fn astrology_lines(reading: &Reading) -> Vec<Line<'static>> {
    let astro = &reading.astrology;
    let sun = astro.sun_sign;
    let mut lines = vec![
        Line::from(""),
        heading("Sun sign"),
        Line::from(""),
        field("Sign", format!("{} {} ({})", sun.symbol, sun.name, sun.title)),
        field("Dates", sun.date_range),
        field("Element", format!("{} ({})", sun.element.as_str(), sun.element_description)),
        field("Quality", sun.quality.as_str()),
        field("Ruled by", sun.ruling_planet_label()),
        field("Lucky colors", sun.lucky_colors.join(", ")),
        field("Gemstones", sun.lucky_gemstones.join(", ")),
        field(
            "Lucky numbers",
            sun.lucky_numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Line::from(""),
        field("Strengths", sun.strengths.join(", ")),
        field("Weaknesses", sun.weaknesses.join(", ")),
        Line::from(""),
        prose(sun.challenges),
        prose(sun.life_path_focus),
        Line::from(""),
        heading("Placements"),
        Line::from(""),
    ];

    match astro.moon_sign {
        Some(moon) => {
            lines.push(field("Moon", moon.name));
            lines.push(prose(moon.influence));
        }
        None => lines.push(field("Moon", "add a birth time to reveal")),
    }
    match astro.ascendant {
        Some(asc) => {
            lines.push(field("Ascendant", asc.name));
            lines.push(prose(asc.influence));
        }
        None => lines.push(field("Ascendant", "add birth time and place to reveal")),
    }

    lines.push(Line::from(""));
    lines.push(heading("Influences"));
    lines.push(Line::from(""));
    lines.push(field("Element", astro.element_influence.primary_element));
    lines.push(prose(astro.element_influence.description));
    lines.push(field("Traits", astro.element_influence.traits.join(", ")));
    lines.push(field("Planet", astro.planetary_influence.dominant_planet));
    lines.push(prose(astro.planetary_influence.description));
    lines.push(field("Traits", astro.planetary_influence.traits.join(", ")));
    lines
}

fn palm_lines(reading: &Reading) -> Vec<Line<'static>> {
    let Some(palm) = &reading.palm else {
        return vec![
            Line::from(""),
            prose("No palm image was supplied."),
            prose("Run again with --palm <PATH> to include a palm analysis."),
        ];
    };

    let mut lines = vec![
        Line::from(""),
        heading("Palm analysis"),
        Line::from(""),
        field("Mode", palm.mode.to_string()),
        field("Destiny number", palm.destiny_number.to_string()),
        field("Confidence", format!("{:.0}%", palm.confidence * 100.0)),
        field("Image digest", palm.image_digest.clone()),
    ];

    if palm.destiny_number == reading.profile.bhagyank.number {
        lines.push(Line::from(""));
        lines.push(prose("Your palm agrees with your birth date."));
    }

    if let Some(features) = &palm.features {
        lines.push(Line::from(""));
        lines.push(heading("Lines and mounts"));
        lines.push(Line::from(""));
        lines.push(field("Life line", format!(
            "length {}, clarity {:.1}",
            features.life_line_length, features.life_line_clarity
        )));
        lines.push(field("Heart line", format!("{:.1}", features.heart_line_strength)));
        lines.push(field("Head line", format!("{:.1}", features.head_line_depth)));
        lines.push(field(
            "Fate line",
            if features.fate_line_presence { "present" } else { "faint" },
        ));
        lines.push(field("Dominant mount", features.dominant_mount.clone()));
        lines.push(field(
            "Finger ratio",
            features
                .finger_ratio
                .iter()
                .map(|r| format!("{:.2}", r))
                .collect::<Vec<_>>()
                .join(" : "),
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use destiny_scanner::{LocalInsightProvider, PalmAnalysisMode, ReadingRequest};
    use ratatui::backend::TestBackend;

    async fn reading(palm: bool) -> Reading {
        let provider = LocalInsightProvider::new();
        let request = ReadingRequest::new("1990-05-07")
            .with_time("14:30")
            .with_location("Mumbai");
        let image = vec![3u8; 32];
        let palm = palm.then(|| (image.as_slice(), PalmAnalysisMode::Advanced));
        Reading::compute(&request, &provider, palm).await.unwrap()
    }

    #[test]
    fn test_page_cycle() {
        let mut page = Page::Numerology;
        for _ in 0..4 {
            page = page.next();
        }
        assert_eq!(page, Page::Numerology);
        assert_eq!(Page::Numerology.previous(), Page::Palm);
        assert_eq!(Page::Palm.next().previous(), Page::Palm);
    }

    #[test]
    fn test_digit_jump() {
        assert_eq!(Page::from_digit('1'), Some(Page::Numerology));
        assert_eq!(Page::from_digit('4'), Some(Page::Palm));
        assert_eq!(Page::from_digit('0'), None);
        assert_eq!(Page::from_digit('5'), None);
    }

    #[tokio::test]
    async fn test_page_change_resets_scroll() {
        let mut app = App::new(reading(false).await);
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.scroll, 2);
        app.next_page();
        assert_eq!(app.current_page, Page::LifePath);
        assert_eq!(app.scroll, 0);
        app.scroll_up();
        assert_eq!(app.scroll, 0);
    }

    #[tokio::test]
    async fn test_every_page_renders() {
        for palm in [false, true] {
            let mut app = App::new(reading(palm).await);
            let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
            for page in Page::ALL {
                app.go_to(page);
                terminal.draw(|f| ui(f, &app)).unwrap();
            }
        }
    }
}
