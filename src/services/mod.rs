pub mod fetch;
pub mod listing;
pub mod server;
