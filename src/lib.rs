// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;

pub mod browser;
pub mod coerce;
pub mod config;
pub mod error;
pub mod gui;
pub mod log;
pub mod parse;
pub mod session;
pub mod table;
pub mod teams;
