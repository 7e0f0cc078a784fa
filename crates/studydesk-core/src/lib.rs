//! Core studydesk library (config, paths, logging).

pub mod config;
pub mod logging;
