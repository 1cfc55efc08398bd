pub mod category;
mod collection;
pub mod date_key;
pub mod grouping;
pub mod iso_week;
pub mod models;
mod progress;
pub mod selection;
pub mod stores;

pub use category::EventCategory;
pub use collection::TournamentCollection;
pub use date_key::{DateKey, date_key, today_date_key};
pub use grouping::{filter_tournaments, group_by_day, group_by_week};
pub use iso_week::{IsoWeek, WeekInfo, WeekKey, iso_week, week_info};
pub use models::*;
pub use progress::FetchProgress;
pub use selection::FilterSelection;
pub use stores::StoreType;
