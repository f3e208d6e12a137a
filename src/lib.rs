// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod params;
pub mod specs;

pub mod browser;
pub mod csv;
pub mod extract;
pub mod file;
pub mod manual;
pub mod page;
pub mod progress;
pub mod prompt;
pub mod record;
pub mod runner;
