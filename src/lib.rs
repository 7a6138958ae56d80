pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dataset;
pub mod notifier;
pub mod render;
pub mod session;
pub mod spinner;
pub mod summarizer;

#[cfg(test)]
mod testing;
