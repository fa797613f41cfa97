//! Commute planner server.
//!
//! A backend that stores users, their calendar events and chat rooms, and
//! answers: "what is the best way to get from here to my next event?"

pub mod config;
pub mod domain;
pub mod maps;
pub mod planner;
pub mod store;
pub mod web;
