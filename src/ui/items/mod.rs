//! Item list screens.

pub mod create;
