//! Headless front end for `life_engine`: configuration, a ticking session
//! and a text renderer.

pub mod config;
pub mod render;
pub mod session;
