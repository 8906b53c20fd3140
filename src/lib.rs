//! # Primer
//!
//! Small introductory console programs: "Hello, World" variants, variable and
//! type showcases, a four-function calculator and a grade calculator.
//!
//! ## Usage
//!
//! ```bash
//! primer hello [classic|enhanced|functions|interactive|messages]
//! primer variables [basic|profile|tour]
//! primer calc [10 + 3]
//! primer grades [95 92 91] [--json]
//! ```
//!
//! ## Modules
//!
//! - `input` - scanf-style typed reads that return `Result`s
//! - `console` - input scanner, output sink and prompt policy in one place
//! - `calc` - operator dispatch for the calculator
//! - `grading` - letter grade bands and the grade report
//! - `programs` - the console programs themselves
//! - `cli` - argument parsing and routing
//! - `app` - logging, configuration assembly and fatal error handling
//! - `config` - layered TOML and environment configuration
//! - `error` - the unified error type and its codes
//!
//! ## Example
//!
//! ```rust
//! use primer::calc;
//! use primer::grading::{GradeReport, LetterGrade};
//!
//! let sum = calc::evaluate(10.0, '+', 3.0).unwrap();
//! assert_eq!(sum.to_string(), "10.00 + 3.00 = 13.00");
//! assert!(calc::evaluate(10.0, '/', 0.0).is_err());
//!
//! let report = GradeReport::from_scores([95.0, 92.0, 91.0]);
//! assert_eq!(report.letter, LetterGrade::A);
//! assert!(report.honor_roll);
//! ```
pub mod app;
pub mod calc;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod grading;
pub mod input;
pub mod programs;
