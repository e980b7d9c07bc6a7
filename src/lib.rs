pub mod call;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod keys;
pub mod rpc;
pub mod submit;
pub mod types;
pub mod unit;
