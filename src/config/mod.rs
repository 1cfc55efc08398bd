pub mod settings;
pub mod stores;

pub use settings::AppConfig;
pub use stores::{PermanentStore, permanent_stores};
