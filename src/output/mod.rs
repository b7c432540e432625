pub mod formatter;

pub use formatter::{
    format_country_query, format_event_query, format_standings_table, format_standings_tsv,
    should_use_colors,
};
