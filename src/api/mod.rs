pub mod handlers;
pub mod konami_client;
pub mod models;
pub mod parsers;
pub mod routes;
pub mod search_request;

pub use konami_client::KonamiClient;
