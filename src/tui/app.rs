use std::time::Instant;

use crate::competition::{Competition, CountryId, EventId, TopN, MAX_PLACEMENTS};
use crate::config::Config;
use crate::query::{self, CountryEventResult, PlacementResult};
use crate::ranking::{self, SortKey, Standing};
use crate::scoring;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Entry,
    Standings,
    Query,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    InitForm,
    CellInput,
    QueryInput,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Country,
    Event,
}

/// Controls the status-bar color of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// The n/m/w form shown before a competition exists (and on re-initialize).
#[derive(Debug, Clone, Default)]
pub struct InitForm {
    pub field: usize,
    pub values: [String; 3],
}

impl InitForm {
    pub fn prefilled(config: &Config) -> Self {
        let mut form = Self::default();
        if let Some(defaults) = config.defaults {
            form.values = [
                defaults.countries.to_string(),
                defaults.men_events.to_string(),
                defaults.women_events.to_string(),
            ];
        }
        form
    }
}

pub struct App {
    pub config: Config,
    pub competition: Option<Competition>,
    /// Validation status per event, shown in the entry table's last column.
    pub statuses: Vec<String>,
    pub current_tab: Tab,
    pub input_mode: InputMode,
    pub entry_row: usize,
    /// 0 = mode column, 1..=5 placement columns.
    pub entry_col: usize,
    pub cell_input: String,
    pub init_form: InitForm,
    pub sort_key: SortKey,
    pub ascending: bool,
    pub query_kind: QueryKind,
    pub query_input: String,
    pub country_results: Option<(CountryId, Vec<CountryEventResult>)>,
    pub event_results: Option<(EventId, Vec<PlacementResult>)>,
    pub flash_message: Option<(String, FlashKind, Instant)>,
    pub should_quit: bool,
}

const UNCHECKED: &str = "unchecked";

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            competition: None,
            statuses: Vec::new(),
            current_tab: Tab::Entry,
            input_mode: InputMode::Normal,
            entry_row: 0,
            entry_col: 1,
            cell_input: String::new(),
            init_form: InitForm::default(),
            sort_key: SortKey::Id,
            ascending: true,
            query_kind: QueryKind::Country,
            query_input: String::new(),
            country_results: None,
            event_results: None,
            flash_message: None,
            should_quit: false,
        }
    }

    pub fn show_success(&mut self, msg: String) {
        self.flash_message = Some((msg, FlashKind::Success, Instant::now()));
    }

    pub fn show_error(&mut self, msg: String) {
        self.flash_message = Some((msg, FlashKind::Error, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, _, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Entry => Tab::Standings,
            Tab::Standings => Tab::Query,
            Tab::Query => Tab::Entry,
        };
    }

    pub fn previous_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Entry => Tab::Query,
            Tab::Standings => Tab::Entry,
            Tab::Query => Tab::Standings,
        };
    }

    // ----- initialize form -----

    pub fn open_init_form(&mut self) {
        self.init_form = InitForm::prefilled(&self.config);
        self.input_mode = InputMode::InitForm;
    }

    pub fn cancel_init_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Parse the form and rebuild the competition. On bad input the old
    /// competition stays untouched and the form stays open.
    pub fn submit_init_form(&mut self) {
        let parsed: Result<Vec<u32>, _> = self
            .init_form
            .values
            .iter()
            .map(|v| {
                let text = if v.is_empty() { "0" } else { v.as_str() };
                text.parse::<u32>()
            })
            .collect();

        let Ok(nums) = parsed else {
            self.show_error("n, m and w must be whole numbers".to_string());
            return;
        };

        match Competition::initialize(nums[0], nums[1], nums[2]) {
            Ok(comp) => {
                let events = comp.event_count();
                self.install_competition(comp);
                self.show_success(format!(
                    "Initialized {} events ({} men's, {} women's), {} countries",
                    events, nums[1], nums[2], nums[0]
                ));
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    /// Load the preset sample competition (7 countries, 5 filled events).
    pub fn load_sample(&mut self) {
        self.install_competition(Competition::sample());
        self.show_success("Sample data loaded".to_string());
    }

    fn install_competition(&mut self, comp: Competition) {
        self.statuses = vec![UNCHECKED.to_string(); comp.event_count() as usize];
        self.competition = Some(comp);
        self.entry_row = 0;
        self.entry_col = 1;
        self.country_results = None;
        self.event_results = None;
        self.input_mode = InputMode::Normal;
        self.current_tab = Tab::Entry;
    }

    // ----- entry table -----

    fn event_total(&self) -> usize {
        self.competition
            .as_ref()
            .map(|c| c.event_count() as usize)
            .unwrap_or(0)
    }

    /// Rightmost selectable column for the cursor's row (mode-dependent).
    fn max_col(&self) -> usize {
        self.competition
            .as_ref()
            .and_then(|c| c.configs().get(self.entry_row))
            .map(|cfg| cfg.top_n.required())
            .unwrap_or(MAX_PLACEMENTS)
    }

    pub fn next_row(&mut self) {
        let total = self.event_total();
        if total == 0 {
            return;
        }
        self.entry_row = if self.entry_row >= total - 1 {
            0
        } else {
            self.entry_row + 1
        };
        self.clamp_col();
    }

    pub fn previous_row(&mut self) {
        let total = self.event_total();
        if total == 0 {
            return;
        }
        self.entry_row = if self.entry_row == 0 {
            total - 1
        } else {
            self.entry_row - 1
        };
        self.clamp_col();
    }

    pub fn next_col(&mut self) {
        if self.entry_col < self.max_col() {
            self.entry_col += 1;
        }
    }

    pub fn previous_col(&mut self) {
        if self.entry_col > 0 {
            self.entry_col -= 1;
        }
    }

    fn clamp_col(&mut self) {
        let max = self.max_col();
        if self.entry_col > max {
            self.entry_col = max;
        }
    }

    fn cursor_event_id(&self) -> Option<EventId> {
        self.competition
            .as_ref()
            .and_then(|c| c.configs().get(self.entry_row))
            .map(|cfg| cfg.event_id)
    }

    /// Flip the cursor row's event between top-3 and top-5.
    pub fn toggle_mode(&mut self) {
        let Some(event_id) = self.cursor_event_id() else {
            return;
        };
        let Some(comp) = self.competition.as_mut() else {
            return;
        };
        let current = comp
            .config(event_id)
            .map(|cfg| cfg.top_n)
            .unwrap_or_default();
        let next = match current {
            TopN::Top3 => TopN::Top5,
            TopN::Top5 => TopN::Top3,
        };
        if comp.set_top_n(event_id, next).is_ok() {
            self.statuses[self.entry_row] = UNCHECKED.to_string();
            self.clamp_col();
        }
    }

    pub fn start_cell_input(&mut self) {
        if self.competition.is_none() || self.entry_col == 0 {
            return;
        }
        self.cell_input.clear();
        if let (Some(comp), Some(event_id)) = (self.competition.as_ref(), self.cursor_event_id()) {
            if let Ok(entry) = comp.entry(event_id) {
                if let Some(id) = entry.get(self.entry_col - 1) {
                    self.cell_input = id.to_string();
                }
            }
        }
        self.input_mode = InputMode::CellInput;
    }

    pub fn cancel_cell_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.cell_input.clear();
    }

    /// Commit the edited cell. Empty input clears the slot; no value
    /// validation happens here (the validator reports problems separately).
    pub fn confirm_cell_input(&mut self) {
        let Some(event_id) = self.cursor_event_id() else {
            self.input_mode = InputMode::Normal;
            return;
        };
        let placement = self.entry_col - 1;

        let country = if self.cell_input.is_empty() {
            None
        } else {
            match self.cell_input.parse::<CountryId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    self.show_error(format!("Not a country id: '{}'", self.cell_input));
                    self.input_mode = InputMode::Normal;
                    self.cell_input.clear();
                    return;
                }
            }
        };

        if let Some(comp) = self.competition.as_mut() {
            match comp.set_rank(event_id, placement, country) {
                Ok(()) => self.statuses[self.entry_row] = UNCHECKED.to_string(),
                Err(e) => self.show_error(e.to_string()),
            }
        }
        self.input_mode = InputMode::Normal;
        self.cell_input.clear();
    }

    pub fn clear_cell(&mut self) {
        if self.entry_col == 0 {
            return;
        }
        let Some(event_id) = self.cursor_event_id() else {
            return;
        };
        let placement = self.entry_col - 1;
        if let Some(comp) = self.competition.as_mut() {
            if comp.set_rank(event_id, placement, None).is_ok() {
                self.statuses[self.entry_row] = UNCHECKED.to_string();
            }
        }
    }

    /// Run the validator over every event and record the per-event messages.
    pub fn validate(&mut self) {
        let Some(comp) = self.competition.as_ref() else {
            self.show_error("Initialize the competition first".to_string());
            return;
        };
        self.statuses = scoring::validate_all(comp.configs(), comp.entries(), comp.country_count());
        let problems = self.statuses.iter().filter(|m| *m != "valid").count();
        if problems == 0 {
            self.show_success("All entries valid".to_string());
        } else {
            self.show_error(format!("{} event(s) with problems", problems));
        }
    }

    // ----- standings -----

    pub fn set_sort(&mut self, key: SortKey, ascending: bool) {
        self.sort_key = key;
        self.ascending = ascending;
    }

    /// Recompute standings from the current entries. No caching, so standings
    /// always reflect the latest edits.
    pub fn standings(&self) -> Vec<Standing> {
        let Some(comp) = self.competition.as_ref() else {
            return Vec::new();
        };
        let maps = scoring::compute_scores(comp.configs(), comp.entries(), comp.country_count());
        ranking::rank(&maps, comp.country_count(), self.sort_key, self.ascending)
    }

    // ----- queries -----

    pub fn start_query(&mut self, kind: QueryKind) {
        if self.competition.is_none() {
            self.show_error("Initialize the competition first".to_string());
            return;
        }
        self.query_kind = kind;
        self.query_input.clear();
        self.input_mode = InputMode::QueryInput;
    }

    pub fn cancel_query(&mut self) {
        self.input_mode = InputMode::Normal;
        self.query_input.clear();
    }

    pub fn confirm_query(&mut self) {
        let input = self.query_input.clone();
        self.input_mode = InputMode::Normal;
        self.query_input.clear();

        let Ok(id) = input.parse::<u32>() else {
            self.show_error(format!("Not a number: '{}'", input));
            return;
        };
        let Some(comp) = self.competition.as_ref() else {
            return;
        };

        match self.query_kind {
            QueryKind::Country => match query::query_country(comp, id) {
                Ok(results) => self.country_results = Some((id, results)),
                Err(e) => self.show_error(e.to_string()),
            },
            QueryKind::Event => match query::query_event(comp, id) {
                Ok(results) => self.event_results = Some((id, results)),
                Err(e) => self.show_error(e.to_string()),
            },
        }
    }

    // ----- help -----

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
