// Library for tests to access modules

pub mod aggregation;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod session;
pub mod source;
pub mod time_window;
pub mod version;
