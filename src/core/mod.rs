//! Core translation action module

pub mod action;
pub mod client;
pub mod config;
pub mod errors;
pub mod tokenizer;
