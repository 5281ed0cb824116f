//! Tint and shade ramp generation with hue-synchronised reference colors.
//!
//! A row holds a base color plus dark and light endpoints. Its ramp mixes
//! the base toward each endpoint in evenly spaced steps. With hue sync on,
//! editing any reference color carries its hue over to the other two.

pub mod cli;
pub mod cli_args;
pub mod collection;
pub mod color;
pub mod config;
pub mod curves;
pub mod export;
pub mod generate;
pub mod interpolation;
pub mod logging;
pub mod reference;
pub mod session;
pub mod tui;
