pub mod commands;
pub mod settings;
pub mod trace_init;
