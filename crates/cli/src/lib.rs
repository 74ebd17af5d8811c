#![forbid(unsafe_code)]

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod handler;
pub mod report;
pub mod signals;
