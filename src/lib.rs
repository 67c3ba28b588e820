//! Pay Stub Engine
//!
//! This crate calculates gross pay, deductions and net pay from pay stub form
//! values, lays out a single-page pay stub, and renders it to a document.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod models;
