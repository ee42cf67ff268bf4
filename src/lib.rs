//! Deduction Calculation Engine for Australian work-related expenses
//!
//! This crate provides functionality for calculating Australian Taxation
//! Office (ATO) work-related expense deductions: a declarative category
//! rule table, the deduction calculation itself, and a work-from-home log
//! resolver that derives the work-use percentage from daily attendance.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod rules;
pub mod worklog;
