pub mod services;
pub mod tracker;
pub mod utils;
