//! TUI rendering using ratatui.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use wayfarer_core::{
    CrowdLevel, Difficulty, EventKind, ExplorationType, ExplorerView, ItineraryView, PriceRange,
    RestaurantView, SortKey, ViewState, rating_stars,
};

use super::app::{App, FormField};

/// Render the current view.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // main content
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    match &app.state {
        ViewState::Home => render_form(f, app, chunks[0]),
        ViewState::Itinerary(view) => render_itinerary(f, app, view, chunks[0]),
        ViewState::Restaurants(view) => render_restaurants(f, app, view, chunks[0]),
        ViewState::Explorer(view) => render_explorer(f, app, view, chunks[0]),
    }

    render_status_bar(f, app, chunks[1]);
}

fn heading() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;

    let mut lines = vec![
        Line::from(Span::styled("  Travel Planner", heading())),
        Line::from("  Your intelligent travel companion for perfect trips"),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Where do you want to explore?  "),
            Span::styled(
                format!("[{}_]", form.destination),
                focus_style(form.focus == FormField::Destination),
            ),
        ]),
        Line::from(vec![
            Span::raw("  How many days are you planning? "),
            Span::styled(
                format!("< {} >", form.days_input),
                focus_style(form.focus == FormField::Days),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  What would you like to explore?",
            if form.focus == FormField::Exploration {
                heading()
            } else {
                Style::default()
            },
        )),
    ];

    for kind in ExplorationType::ALL {
        let selected = kind == form.exploration;
        let marker = if selected { "(*)" } else { "( )" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {marker} {:<16}", kind.label()),
                focus_style(selected && form.focus == FormField::Exploration),
            ),
            Span::styled(kind.description(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Enter to start planning your trip",
        Style::default().fg(Color::Cyan),
    )));

    let form_widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" New Trip "),
    );
    f.render_widget(form_widget, area);
}

fn render_itinerary(f: &mut Frame, app: &App, view: &ItineraryView, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        format!(
            " {}-day personalized travel plan with seasonal recommendations",
            view.plan.days()
        ),
        Style::default().fg(Color::DarkGray),
    ))];

    for day in &view.days {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!(" Day {} ", day.day), heading()),
            Span::raw(format!(" {} {} ", day.season.emoji(), day.season)),
            crowd_colored(day.crowd_level),
        ]));

        lines.push(Line::from(Span::styled(
            "   Must-Visit Places",
            Style::default().fg(Color::Cyan),
        )));
        for place in &day.must_visit_places {
            lines.push(Line::from(format!(
                "     {} ({}) {} | {} | best: {}",
                place.name,
                place.category,
                place.rating,
                place.estimated_duration,
                place.best_time_to_visit
            )));
        }

        lines.push(Line::from(Span::styled(
            "   Recommended Activities",
            Style::default().fg(Color::Cyan),
        )));
        for activity in &day.activities {
            lines.push(Line::from(vec![
                Span::raw(format!(
                    "     {} | {} | {} | ",
                    activity.name, activity.duration, activity.price
                )),
                difficulty_colored(activity.difficulty),
            ]));
        }

        lines.push(Line::from(Span::styled(
            "   Travel Tips",
            Style::default().fg(Color::Cyan),
        )));
        for tip in &day.suggestions {
            lines.push(Line::from(format!("     - {tip}")));
        }
    }

    let itinerary = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Your {} Itinerary ", view.plan.destination())),
        );
    f.render_widget(itinerary, area);
}

fn render_restaurants(f: &mut Frame, app: &App, view: &RestaurantView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let sort_spans: Vec<Span> = SortKey::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, key)| {
            let style = if *key == view.sort {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            [
                Span::styled(format!(" {}:{} ", i + 1, key.label()), style),
                Span::raw(" "),
            ]
        })
        .collect();

    let header = Paragraph::new(Line::from(sort_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sort by "),
    );
    f.render_widget(header, chunks[0]);

    let header_cells = ["Name", "Cuisine", "Price", "Rating", "Reviews", "Google", "Distance"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let table_header = Row::new(header_cells).height(1);

    let rows = view.restaurants(&app.catalog).into_iter().map(|r| {
        Row::new(vec![
            Cell::from(r.name.clone()),
            Cell::from(r.cuisine.clone()),
            Cell::from(price_colored(r.price_range)),
            Cell::from(format!("{} {}", r.rating, rating_stars(r.rating))),
            Cell::from(r.customer_reviews.to_string()),
            Cell::from(r.google_rating.to_string()),
            Cell::from(r.distance.clone().unwrap_or_else(|| "-".to_string())),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(22),
            Constraint::Percentage(20),
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(9),
        ],
    )
    .header(table_header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Best Restaurants in {} ", view.plan.destination())),
    );

    f.render_widget(table, chunks[1]);
}

fn render_explorer(f: &mut Frame, app: &App, view: &ExplorerView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // filters
            Constraint::Min(5),    // activities
            Constraint::Min(5),    // events
        ])
        .split(area);

    let search_style = if app.editing_search {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let filters = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Yellow)),
        Span::styled(format!("[{}]", view.filter.search), search_style),
        Span::styled("  Month: ", Style::default().fg(Color::Yellow)),
        Span::raw(view.filter.month.to_string()),
        Span::styled("  Season: ", Style::default().fg(Color::Yellow)),
        Span::raw(view.filter.season.to_string()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Explore Specific Places in {} ", view.plan.destination())),
    );
    f.render_widget(filters, chunks[0]);

    if view.is_empty(&app.catalog) {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("  No activities or events found", heading())),
            Line::from(
                "  Try adjusting your search terms or filters to find activities and events.",
            ),
        ])
        .block(Block::default().borders(Borders::ALL));
        let rest = Rect {
            height: chunks[1].height + chunks[2].height,
            ..chunks[1]
        };
        f.render_widget(empty, rest);
        return;
    }

    let activity_header = Row::new(
        ["Activity", "Season", "Difficulty", "Duration", "Price"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow))),
    );
    let activity_rows = view.activities(&app.catalog).into_iter().map(|a| {
        Row::new(vec![
            Cell::from(a.name.clone()),
            Cell::from(format!("{} {}", a.season.emoji(), a.season)),
            Cell::from(difficulty_colored(a.difficulty)),
            Cell::from(a.duration.clone()),
            Cell::from(a.price.clone()),
        ])
    });
    let activities = Table::new(
        activity_rows,
        [
            Constraint::Percentage(35),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(activity_header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Special Activities "),
    );
    f.render_widget(activities, chunks[1]);

    let event_header = Row::new(
        ["Event", "Type", "Month", "Location"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow))),
    );
    let event_rows = view.events(&app.catalog).into_iter().map(|e| {
        Row::new(vec![
            Cell::from(e.name.clone()),
            Cell::from(event_kind_colored(e.kind)),
            Cell::from(e.month.to_string()),
            Cell::from(e.location.clone()),
        ])
    });
    let events = Table::new(
        event_rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Percentage(30),
        ],
    )
    .header(event_header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Seasonal Events & Occasions "),
    );
    f.render_widget(events, chunks[2]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (view_name, keys) = match &app.state {
        ViewState::Home => (
            "New Trip",
            "Tab:next field  Left/Right:change  Enter:plan  Esc:quit",
        ),
        ViewState::Itinerary(_) => ("Itinerary", "j/k:scroll  Esc:home"),
        ViewState::Restaurants(_) => ("Restaurants", "1/2/3:sort  Esc:home"),
        ViewState::Explorer(_) if app.editing_search => {
            ("Explorer", "type to search  Enter/Esc:done")
        }
        ViewState::Explorer(_) => ("Explorer", "/:search  m:month  s:season  r:reset  Esc:home"),
    };

    let status_msg = app.status_message.as_deref().unwrap_or("");

    let bar = Line::from(vec![
        Span::styled(
            format!(" {view_name} "),
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(status_msg, Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(keys, Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(Paragraph::new(bar), area);
}

// -- Helpers --

fn crowd_colored(level: CrowdLevel) -> Span<'static> {
    let color = match level {
        CrowdLevel::Low => Color::Green,
        CrowdLevel::Medium => Color::Yellow,
        CrowdLevel::High => Color::Red,
    };
    Span::styled(format!("{level} crowd"), Style::default().fg(color))
}

fn difficulty_colored(difficulty: Difficulty) -> Span<'static> {
    let color = match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Moderate => Color::Yellow,
        Difficulty::Challenging => Color::Red,
    };
    Span::styled(difficulty.to_string(), Style::default().fg(color))
}

fn price_colored(price: PriceRange) -> Span<'static> {
    let color = match price {
        PriceRange::Budget => Color::Green,
        PriceRange::Moderate => Color::Yellow,
        PriceRange::Expensive => Color::LightRed,
        PriceRange::Luxury => Color::Red,
    };
    Span::styled(price.to_string(), Style::default().fg(color))
}

fn event_kind_colored(kind: EventKind) -> Span<'static> {
    let color = match kind {
        EventKind::Festival => Color::Magenta,
        EventKind::Activity => Color::Blue,
        EventKind::Occasion => Color::LightMagenta,
    };
    Span::styled(kind.to_string(), Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use wayfarer_core::Catalog;

    use super::*;

    fn app(exploration: ExplorationType) -> App {
        App::new(
            Cow::Borrowed(Catalog::sample()),
            StdRng::seed_from_u64(2),
            2,
            exploration,
            SortKey::Rating,
        )
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn submitted(exploration: ExplorationType) -> App {
        let mut app = app(exploration);
        for c in "Paris".chars() {
            app.type_char(c);
        }
        app.navigate_enter();
        app
    }

    #[test]
    fn form_shows_exploration_choices() {
        let screen = draw(&app(ExplorationType::Itinerary));
        assert!(screen.contains("New Trip"));
        assert!(screen.contains("Specific Places"));
    }

    #[test]
    fn restaurant_view_lists_catalog() {
        let screen = draw(&submitted(ExplorationType::Restaurant));
        assert!(screen.contains("Best Restaurants in Paris"));
        assert!(screen.contains("Le Bernardin"));
        assert!(screen.contains("Joe's Pizza"));
    }

    #[test]
    fn explorer_view_shows_empty_message() {
        let mut app = submitted(ExplorationType::SpecificPlaces);
        app.start_search();
        for c in "submarine".chars() {
            app.type_char(c);
        }
        let screen = draw(&app);
        assert!(screen.contains("No activities or events found"));
    }

    #[test]
    fn itinerary_view_shows_days() {
        let screen = draw(&submitted(ExplorationType::Itinerary));
        assert!(screen.contains("Your Paris Itinerary"));
        assert!(screen.contains("Day 1"));
        assert!(screen.contains("Day 2"));
    }
}
