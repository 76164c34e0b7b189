pub mod api;
pub mod core;
pub mod db;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod time;
pub mod transformations;
