//! Salary Conversion Engine
//!
//! This crate converts a salary figure between billing periods, tax treatments
//! (gross and net) and currencies (EUR and USD), and projects raise scenarios
//! on top of the converted figures.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
