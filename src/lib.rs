//! Expense Tracker - a command-line personal expense tracker
//!
//! This library provides the core functionality for the `expense-tracker`
//! binary. Expenses and budget entries live together in a single JSON array;
//! every command loads that collection, works on it, and writes it back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, budget entries, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal output formatting
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use expense_tracker::services::{ExpenseService, NewExpense};
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new(None);
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, &settings);
//! ExpenseService::new(&storage).add(NewExpense::new("coffee", "3.50".parse()?))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
