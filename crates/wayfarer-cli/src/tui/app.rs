//! TUI application state: the entry form plus the view state machine.

use std::borrow::Cow;

use rand::rngs::StdRng;

use wayfarer_core::plan::{MAX_DAYS, MIN_DAYS};
use wayfarer_core::{clamp_days, parse_days};
use wayfarer_core::{Catalog, ExplorationType, Month, Season, SortKey, TravelPlan, ViewState};

/// Entry form field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Destination,
    Days,
    Exploration,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            Self::Destination => Self::Days,
            Self::Days => Self::Exploration,
            Self::Exploration => Self::Destination,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Destination => Self::Exploration,
            Self::Days => Self::Destination,
            Self::Exploration => Self::Days,
        }
    }
}

/// Values typed into the entry form. They survive a round trip through a
/// view so the user can tweak and resubmit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub destination: String,
    /// Digits as typed. May be empty while editing; read with
    /// [`Form::days`].
    pub days_input: String,
    pub exploration: ExplorationType,
    pub focus: FormField,
}

impl Form {
    /// Day count the form would submit. Empty or zero input counts as 1.
    pub fn days(&self) -> u32 {
        parse_days(&self.days_input)
    }
}

/// Application state for the TUI.
pub struct App {
    pub catalog: Cow<'static, Catalog>,
    pub rng: StdRng,
    pub state: ViewState,
    pub form: Form,
    pub default_sort: SortKey,
    /// True while keystrokes go to the explorer search box.
    pub editing_search: bool,
    /// Vertical scroll offset for the itinerary view.
    pub scroll: u16,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(
        catalog: Cow<'static, Catalog>,
        rng: StdRng,
        days: u32,
        exploration: ExplorationType,
        default_sort: SortKey,
    ) -> Self {
        Self {
            catalog,
            rng,
            state: ViewState::Home,
            form: Form {
                destination: String::new(),
                days_input: days.clamp(MIN_DAYS, MAX_DAYS).to_string(),
                exploration,
                focus: FormField::Destination,
            },
            default_sort,
            editing_search: false,
            scroll: 0,
            should_quit: false,
            status_message: None,
        }
    }

    // -- Navigation --

    /// Esc: leave search editing, else go back home, else quit.
    pub fn navigate_back(&mut self) {
        if self.editing_search {
            self.editing_search = false;
            return;
        }
        match self.state {
            ViewState::Home => self.should_quit = true,
            _ => {
                self.state = std::mem::take(&mut self.state).back();
                self.scroll = 0;
            }
        }
    }

    /// Enter: submit the form from home, or finish search editing.
    pub fn navigate_enter(&mut self) {
        if self.editing_search {
            self.editing_search = false;
            return;
        }
        if !matches!(self.state, ViewState::Home) {
            return;
        }

        let days = self.form.days();
        self.form.days_input = days.to_string();

        let plan = match TravelPlan::new(&self.form.destination, days, self.form.exploration) {
            Ok(plan) => plan,
            Err(e) => {
                self.status_message = Some(format!("Cannot start planning: {e}"));
                return;
            }
        };

        let state = std::mem::take(&mut self.state).submit_with(&mut self.rng, plan, &self.catalog);
        self.state = state;
        if let ViewState::Restaurants(view) = &mut self.state {
            view.sort = self.default_sort;
        }
        self.scroll = 0;
    }

    pub fn move_up(&mut self) {
        match &self.state {
            ViewState::Home => self.form.focus = self.form.focus.prev(),
            ViewState::Itinerary(_) => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn move_down(&mut self) {
        match &self.state {
            ViewState::Home => self.form.focus = self.form.focus.next(),
            ViewState::Itinerary(_) => self.scroll = self.scroll.saturating_add(1),
            _ => {}
        }
    }

    /// Left/Right on the form adjusts the focused days or mode field.
    pub fn adjust(&mut self, step: i32) {
        if !matches!(self.state, ViewState::Home) {
            return;
        }
        match self.form.focus {
            FormField::Destination => {}
            FormField::Days => {
                let days = i64::from(self.form.days()) + i64::from(step);
                self.form.days_input = clamp_days(days).to_string();
            }
            FormField::Exploration => {
                let all = ExplorationType::ALL;
                let current = all
                    .iter()
                    .position(|e| *e == self.form.exploration)
                    .unwrap_or(0);
                let len = all.len() as i32;
                let next = (current as i32 + step).rem_euclid(len) as usize;
                self.form.exploration = all[next];
            }
        }
    }

    // -- Text input --

    /// Route a typed character. Returns true if it was consumed as text.
    pub fn type_char(&mut self, c: char) -> bool {
        if self.editing_search {
            if let ViewState::Explorer(view) = &mut self.state {
                view.filter.search.push(c);
                return true;
            }
        }
        if matches!(self.state, ViewState::Home) {
            match self.form.focus {
                FormField::Destination => {
                    self.form.destination.push(c);
                    return true;
                }
                FormField::Days => {
                    if c.is_ascii_digit() {
                        self.form.days_input.push(c);
                        if self.form.days() == MAX_DAYS {
                            self.form.days_input = MAX_DAYS.to_string();
                        }
                        return true;
                    }
                }
                FormField::Exploration => {}
            }
        }
        false
    }

    pub fn backspace(&mut self) {
        if self.editing_search {
            if let ViewState::Explorer(view) = &mut self.state {
                view.filter.search.pop();
            }
            return;
        }
        if matches!(self.state, ViewState::Home) {
            match self.form.focus {
                FormField::Destination => {
                    self.form.destination.pop();
                }
                FormField::Days => {
                    self.form.days_input.pop();
                }
                FormField::Exploration => {}
            }
        }
    }

    // -- View controls --

    pub fn set_sort(&mut self, sort: SortKey) {
        if let ViewState::Restaurants(view) = &mut self.state {
            view.sort = sort;
            self.status_message = Some(format!("Sorted by {}", sort.label()));
        }
    }

    pub fn start_search(&mut self) {
        if matches!(self.state, ViewState::Explorer(_)) {
            self.editing_search = true;
        }
    }

    pub fn cycle_month(&mut self) {
        if let ViewState::Explorer(view) = &mut self.state {
            view.filter.month = view.filter.month.cycle(&Month::ALL);
        }
    }

    pub fn cycle_season(&mut self) {
        if let ViewState::Explorer(view) = &mut self.state {
            view.filter.season = view.filter.season.cycle(&Season::ALL);
        }
    }

    pub fn reset_filters(&mut self) {
        if let ViewState::Explorer(view) = &mut self.state {
            view.filter.reset();
            self.status_message = Some("Filters reset".to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use wayfarer_core::Selection;

    fn app() -> App {
        App::new(
            Cow::Borrowed(Catalog::sample()),
            StdRng::seed_from_u64(11),
            3,
            ExplorationType::Itinerary,
            SortKey::Rating,
        )
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.type_char(c);
        }
    }

    #[test]
    fn empty_destination_stays_on_form() {
        let mut app = app();
        app.navigate_enter();
        assert_eq!(app.state, ViewState::Home);
        assert!(
            app.status_message
                .as_deref()
                .unwrap()
                .contains("destination must not be empty")
        );
    }

    #[test]
    fn submit_itinerary_then_back_keeps_form() {
        let mut app = app();
        type_str(&mut app, "Paris");
        app.navigate_enter();

        let ViewState::Itinerary(view) = &app.state else {
            panic!("expected itinerary view");
        };
        assert_eq!(view.days.len(), 3);

        app.navigate_back();
        assert_eq!(app.state, ViewState::Home);
        assert_eq!(app.form.destination, "Paris");
        assert!(!app.should_quit);

        app.navigate_back();
        assert!(app.should_quit);
    }

    #[test]
    fn form_fields_adjust_and_clamp() {
        let mut app = app();
        app.move_down();
        assert_eq!(app.form.focus, FormField::Days);
        for _ in 0..40 {
            app.adjust(1);
        }
        assert_eq!(app.form.days(), MAX_DAYS);
        for _ in 0..40 {
            app.adjust(-1);
        }
        assert_eq!(app.form.days(), MIN_DAYS);

        app.move_down();
        app.adjust(-1);
        assert_eq!(app.form.exploration, ExplorationType::SpecificPlaces);
        app.adjust(1);
        assert_eq!(app.form.exploration, ExplorationType::Itinerary);
    }

    #[test]
    fn typed_days_are_clamped() {
        let mut app = app();
        app.move_down();
        app.backspace();
        assert_eq!(app.form.days_input, "");
        app.type_char('1');
        app.type_char('9');
        assert_eq!(app.form.days(), 19);
        app.type_char('9');
        assert_eq!(app.form.days_input, "30");
        assert!(!app.type_char('x'));
    }

    #[test]
    fn cleared_day_field_accepts_a_single_digit() {
        let mut app = app();
        app.move_down();
        app.backspace();
        app.type_char('7');
        assert_eq!(app.form.days(), 7);

        app.move_up();
        type_str(&mut app, "Paris");
        app.navigate_enter();
        let ViewState::Itinerary(view) = &app.state else {
            panic!("expected itinerary view");
        };
        assert_eq!(view.days.len(), 7);
    }

    #[test]
    fn empty_day_field_submits_one_day() {
        let mut app = app();
        type_str(&mut app, "Paris");
        app.move_down();
        app.backspace();
        app.navigate_enter();

        assert_eq!(app.form.days_input, "1");
        let ViewState::Itinerary(view) = &app.state else {
            panic!("expected itinerary view");
        };
        assert_eq!(view.days.len(), 1);
    }

    #[test]
    fn restaurant_view_starts_with_default_sort() {
        let mut app = App::new(
            Cow::Borrowed(Catalog::sample()),
            StdRng::seed_from_u64(11),
            5,
            ExplorationType::Restaurant,
            SortKey::GoogleRating,
        );
        type_str(&mut app, "Paris");
        app.navigate_enter();

        let ViewState::Restaurants(view) = &app.state else {
            panic!("expected restaurant view");
        };
        assert_eq!(view.sort, SortKey::GoogleRating);

        app.set_sort(SortKey::Reviews);
        let ViewState::Restaurants(view) = &app.state else {
            panic!("expected restaurant view");
        };
        assert_eq!(view.restaurants(&app.catalog)[0].name, "Joe's Pizza");
    }

    #[test]
    fn explorer_search_editing() {
        let mut app = app();
        type_str(&mut app, "Paris");
        app.form.exploration = ExplorationType::SpecificPlaces;
        app.navigate_enter();

        app.start_search();
        type_str(&mut app, "festival");
        app.navigate_enter();
        assert!(!app.editing_search);

        app.cycle_season();
        let ViewState::Explorer(view) = &app.state else {
            panic!("expected explorer view");
        };
        assert_eq!(view.filter.search, "festival");
        assert_eq!(view.filter.season, Selection::Only(Season::Spring));
        let events = view.events(&app.catalog);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Cherry Blossom Festival");

        app.reset_filters();
        let ViewState::Explorer(view) = &app.state else {
            panic!("expected explorer view");
        };
        assert_eq!(view.filter.search, "");
        assert_eq!(view.filter.season, Selection::All);
    }

    #[test]
    fn esc_while_searching_only_stops_editing() {
        let mut app = app();
        type_str(&mut app, "Paris");
        app.form.exploration = ExplorationType::SpecificPlaces;
        app.navigate_enter();
        app.start_search();

        app.navigate_back();
        assert!(!app.editing_search);
        assert!(matches!(app.state, ViewState::Explorer(_)));
    }
}
