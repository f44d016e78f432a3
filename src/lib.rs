//! Skirmish - real-time two-team battle simulation core

pub mod battle;
pub mod core;
