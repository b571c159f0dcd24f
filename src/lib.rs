//! Item checklist core: the item creation workflow and the one-way effect
//! channel that drives navigation.

pub mod config;
pub mod logging;
pub mod model;
pub mod services;
pub mod ui;
