pub mod at;
pub mod config;
pub mod convert;
pub mod play;
pub mod show;
