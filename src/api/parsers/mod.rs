pub mod query;
pub mod response;

pub use query::parse_selection;
pub use response::{reported_count, result_items};
