//! imslc: analog IC lifecycle knowledge base
//!
//! Lifecycle stages with their risk registers, quality indicators with the
//! regulatory documents that govern them, and a static site generator that
//! renders all of it as three linked pages.

pub mod cli;
pub mod core;
pub mod entities;
pub mod site;
pub mod yaml;
