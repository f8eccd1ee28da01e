//! Payslip (holerite) extraction for Brazilian payroll documents.
//!
//! This crate reads the HTML rendering of a payslip and produces a typed
//! [`Payslip`](models::Payslip): its earning and deduction line items plus the
//! summary figures (salary base, INSS/IRRF/FGTS bases, totals and net pay).
//!
//! # Example
//!
//! ```no_run
//! use holerite_parser::config::ConfigLoader;
//! use holerite_parser::parsing::PayslipParser;
//!
//! let config = ConfigLoader::load("./config/holerite.yaml")?.into_config();
//! let parser = PayslipParser::new(config);
//! let payslip = parser.parse(&std::fs::read_to_string("holerite.html").unwrap())?;
//! println!("Net pay: {}", payslip.summary.net_pay);
//! # Ok::<(), holerite_parser::error::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
