pub mod command;
pub mod render;
pub mod run;

pub use run::run_app;
