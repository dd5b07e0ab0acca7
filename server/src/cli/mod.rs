// server/src/cli/mod.rs

pub mod cli;
