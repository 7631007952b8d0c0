pub mod engine;
pub mod history;
