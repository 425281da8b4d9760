use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;

use safari_stays::{
    FacetSelection, FilterEngine, HeroCarousel, HotelCatalog, HotelRecord, PaginationWindow,
    SiteContent, HERO_ROTATION_INTERVAL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Hotels,
    Filters,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Home => Page::Hotels,
            Page::Hotels => Page::Filters,
            Page::Filters => Page::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Home => Page::Filters,
            Page::Hotels => Page::Home,
            Page::Filters => Page::Hotels,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Home => "Home",
            Page::Hotels => "Hotel Rooms",
            Page::Filters => "Filters",
        }
    }
}

/// One toggleable row on the Filters page
#[derive(Debug, Clone)]
pub enum FilterEntry {
    Bed(u32),
    Price { id: String, label: String },
    Location(String),
}

pub struct App {
    pub catalog: HotelCatalog,
    pub content: SiteContent,
    pub carousel: HeroCarousel,
    pub engine: FilterEngine,
    pub selection: FacetSelection,
    pub window: PaginationWindow,
    pub filtered: Vec<HotelRecord>,
    pub locations: Vec<String>,
    pub state: TableState,
    pub filter_state: TableState,
    pub current_page: Page,
    pub show_detail: bool,
}

impl App {
    pub fn new(catalog: HotelCatalog) -> Self {
        let content = SiteContent::with_defaults();
        let carousel = content.hero_carousel();
        let filtered: Vec<HotelRecord> = catalog.records().to_vec();
        let locations = catalog.unique_locations();

        let mut state = TableState::default();
        if !filtered.is_empty() {
            state.select(Some(0));
        }

        let mut filter_state = TableState::default();
        filter_state.select(Some(0));

        Self {
            catalog,
            content,
            carousel,
            engine: FilterEngine::new(),
            selection: FacetSelection::new(),
            window: PaginationWindow::new(),
            filtered,
            locations,
            state,
            filter_state,
            current_page: Page::Hotels,
            show_detail: false,
        }
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    /// Hotels covered by the pagination window
    pub fn visible_hotels(&self) -> &[HotelRecord] {
        self.window.window(&self.filtered)
    }

    pub fn selected_hotel(&self) -> Option<&HotelRecord> {
        self.state
            .selected()
            .and_then(|i| self.visible_hotels().get(i))
    }

    /// Recompute the filtered view; the pagination window is left as-is
    pub fn refilter(&mut self) {
        self.filtered = self
            .engine
            .apply(self.catalog.records(), &self.selection)
            .into_iter()
            .cloned()
            .collect();

        let visible = self.visible_hotels().len();
        if visible == 0 {
            self.state.select(None);
        } else {
            match self.state.selected() {
                Some(i) if i < visible => {}
                _ => self.state.select(Some(0)),
            }
        }
    }

    pub fn show_more(&mut self) {
        if self.window.has_more(self.filtered.len()) {
            self.window.show_more();
        }
    }

    pub fn clear_filters(&mut self) {
        self.selection.clear();
        self.refilter();
    }

    /// Rows on the Filters page, in panel order: beds, prices, locations
    pub fn filter_entries(&self) -> Vec<FilterEntry> {
        let mut entries = Vec::new();

        for beds in 1..=4 {
            entries.push(FilterEntry::Bed(beds));
        }

        for range in self.engine.ranges() {
            entries.push(FilterEntry::Price {
                id: range.id.clone(),
                label: range.label.clone(),
            });
        }

        for location in &self.locations {
            entries.push(FilterEntry::Location(location.clone()));
        }

        entries
    }

    pub fn toggle_selected_filter(&mut self) {
        let entries = self.filter_entries();
        let Some(entry) = self.filter_state.selected().and_then(|i| entries.get(i)) else {
            return;
        };

        match entry {
            FilterEntry::Bed(beds) => self.selection.toggle_bed(*beds),
            FilterEntry::Price { id, .. } => self.selection.toggle_price_range(id),
            FilterEntry::Location(location) => self.selection.toggle_location(location),
        }

        self.refilter();
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    fn active_rows(&self) -> usize {
        match self.current_page {
            Page::Filters => self.filter_entries().len(),
            _ => self.visible_hotels().len(),
        }
    }

    fn active_state(&mut self) -> &mut TableState {
        match self.current_page {
            Page::Filters => &mut self.filter_state,
            _ => &mut self.state,
        }
    }

    pub fn next(&mut self) {
        let rows = self.active_rows();
        if rows == 0 {
            return;
        }
        let state = self.active_state();
        let i = match state.selected() {
            Some(i) if i + 1 < rows => i + 1,
            Some(_) => 0,
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let rows = self.active_rows();
        if rows == 0 {
            return;
        }
        let state = self.active_state();
        let i = match state.selected() {
            Some(0) | None => rows - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let rows = self.active_rows();
        if rows == 0 {
            return;
        }
        let state = self.active_state();
        let i = state.selected().unwrap_or(0);
        state.select(Some((i + 5).min(rows - 1)));
    }

    pub fn page_up(&mut self) {
        let state = self.active_state();
        let i = state.selected().unwrap_or(0);
        state.select(Some(i.saturating_sub(5)));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Idle ticks rotate the hero imagery
        if !event::poll(HERO_ROTATION_INTERVAL)? {
            app.carousel.advance();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => match app.current_page {
                    Page::Filters => app.toggle_selected_filter(),
                    Page::Hotels => app.toggle_detail(),
                    Page::Home => {}
                },
                KeyCode::Char(' ') if app.current_page == Page::Filters => {
                    app.toggle_selected_filter();
                }
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Char('m') => app.show_more(),
                KeyCode::Char('c') => app.clear_filters(),
                KeyCode::Char('n') if app.current_page == Page::Home => {
                    app.carousel.advance();
                }
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::Home => app.active_state().select(Some(0)),
                KeyCode::End => {
                    let rows = app.active_rows();
                    if rows > 0 {
                        app.active_state().select(Some(rows - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    if app.show_detail && app.current_page == Page::Hotels {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // Hotel list
                Constraint::Percentage(45), // Detail panel
            ])
            .split(chunks[1]);

        render_hotel_table(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        match app.current_page {
            Page::Home => render_home(f, chunks[1], app),
            Page::Hotels => render_hotel_table(f, chunks[1], app),
            Page::Filters => render_filters(f, chunks[1], app),
        }
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = vec![Page::Home, Page::Hotels, Page::Filters];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
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

        tab_spans.push(Span::styled(page.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Listed: {}", app.catalog.len()),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Matching: {}", app.filtered.len()),
        Style::default().fg(Color::Green),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Visible: {}", app.visible_hotels().len()),
        Style::default().fg(Color::Cyan),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_hotel_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Hotel", "Location", "County", "Stars", "Beds", "KSh/night"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    // Field-level borrows keep app.state free for the stateful render
    let visible_hotels = app.window.window(&app.filtered);

    let rows = visible_hotels.iter().map(|hotel| {
        let price_color = if hotel.price >= 15000 {
            Color::Magenta
        } else {
            Color::Green
        };

        let cells = vec![
            Cell::from(truncate(&hotel.name, 28)),
            Cell::from(truncate(&hotel.location, 22)),
            Cell::from(truncate(&hotel.county, 16)),
            Cell::from("★".repeat(hotel.stars as usize))
                .style(Style::default().fg(Color::Yellow)),
            Cell::from(format!("{}", hotel.beds)),
            Cell::from(format!("{}", hotel.price)).style(Style::default().fg(price_color)),
        ];

        Row::new(cells).height(1)
    });

    let shown = visible_hotels.len();
    let matching = app.filtered.len();

    let table = Table::new(
        rows,
        [
            Constraint::Length(30),
            Constraint::Length(24),
            Constraint::Length(18),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" Hotel Rooms ({}/{}) ", shown, matching)),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_filters(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Facet", "Value", "On"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let entries = app.filter_entries();
    let rows = entries.iter().map(|entry| {
        let (facet, value, selected) = match entry {
            FilterEntry::Bed(beds) => (
                "Beds",
                if *beds == 1 {
                    "1 Bed".to_string()
                } else {
                    format!("{} Beds", beds)
                },
                app.selection.beds.contains(beds),
            ),
            FilterEntry::Price { id, label } => (
                "Price",
                label.clone(),
                app.selection.price_ranges.contains(id),
            ),
            FilterEntry::Location(location) => (
                "Location",
                location.clone(),
                app.selection.locations.contains(location),
            ),
        };

        let mark = if selected { "✓" } else { " " };
        let mark_style = if selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(facet),
            Cell::from(value),
            Cell::from(mark).style(mark_style),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(28),
            Constraint::Length(4),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Filter Rooms "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.filter_state);
}

fn render_home(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    if let Some(slide) = app.carousel.current() {
        lines.push(Line::from(vec![Span::styled(
            format!("  {}", slide.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(format!("  {}", slide.description)));
        lines.push(Line::from(Span::styled(
            format!(
                "  Slide {}/{}",
                app.carousel.active_index() + 1,
                app.carousel.len()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Featured Hotels",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    for featured in &app.content.featured {
        lines.push(Line::from(format!(
            "  • {} — {} — KSh {}/night ({:.1})",
            featured.name, featured.location, featured.price, featured.rating
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Exclusive Offers",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    for offer in &app.content.offers {
        lines.push(Line::from(format!(
            "  • {} off — {} — {}",
            offer.discount,
            offer.title,
            offer.expiry_label()
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Guest Stories",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    for testimonial in &app.content.testimonials {
        lines.push(Line::from(format!(
            "  • {} ({}): \"{}\"",
            testimonial.name,
            testimonial.stay,
            truncate(&testimonial.content, 70)
        )));
    }

    let home = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Safari Stays "),
    );

    f.render_widget(home, area);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    if let Some(hotel) = app.selected_hotel() {
        lines.push(Line::from(vec![Span::styled(
            format!("  {}", hotel.name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(format!("  {}, {}", hotel.location, hotel.county)));
        lines.push(Line::from(vec![Span::styled(
            format!("  {}", "★".repeat(hotel.stars as usize)),
            Style::default().fg(Color::Yellow),
        )]));
        lines.push(Line::from(""));
        lines.push(Line::from(format!("  KSh {}/night", hotel.price)));
        lines.push(Line::from(format!(
            "  {} bed(s), sleeps up to {} guests",
            hotel.beds,
            hotel.max_guests()
        )));
        lines.push(Line::from(""));

        let mut amenities = Vec::new();
        if hotel.amenities.wifi {
            amenities.push("Free WiFi");
        }
        if hotel.amenities.breakfast {
            amenities.push("Complimentary Breakfast");
        }
        if hotel.amenities.room_service {
            amenities.push("24/7 Room Service");
        }
        lines.push(Line::from(format!("  Amenities: {}", amenities.join(", "))));
        lines.push(Line::from(""));

        if let Some(description) = &hotel.description {
            lines.push(Line::from(format!("  {}", description)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("  Gallery: {}", hotel.gallery().join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from("  No hotel selected"));
    }

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Hotel Details "),
    );

    f.render_widget(detail, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let visible = app.visible_hotels().len();

    let mut status_spans = vec![Span::styled(
        format!(" Row: {}/{} ", selected, visible),
        Style::default().fg(Color::Cyan),
    )];

    if !app.selection.is_empty() {
        let parts = [
            (app.selection.beds.len(), "beds"),
            (app.selection.price_ranges.len(), "prices"),
            (app.selection.locations.len(), "locations"),
        ];
        let summary: Vec<String> = parts
            .iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, name)| format!("{} {}", count, name))
            .collect();

        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            format!("Filter: {}", summary.join(", ")),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw(" ("));
        status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" clear)"));
    }

    if app.window.has_more(app.filtered.len()) {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled("m", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Show More"));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(match app.current_page {
        Page::Filters => " Toggle | ",
        _ => " Details | ",
    }));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Nav | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
