//! Terminal subdomain: the visitor shell over the portfolio content.
//!
//! - [`command`]: the closed command vocabulary and line parsing
//! - [`outcome`]: what a command produces
//! - [`render`]: text blocks for experience and project records
//! - [`screens`]: fixed screens (banner, boot sequence, messages)

pub mod command;
pub mod outcome;
pub mod render;
pub mod screens;
