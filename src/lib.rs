pub mod app;
pub mod config;
pub mod error;
pub mod ingest;
pub mod menus;
pub mod profiles;
pub mod reference;
pub mod state;
pub mod storage;
