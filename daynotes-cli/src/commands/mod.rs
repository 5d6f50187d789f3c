pub mod config;
pub mod get;
pub mod list;
pub mod remove;
pub mod set;
pub mod show;
