//! Core library for minitools
//!
//! This crate is the **Functional Core** of the minitools catalog. Every
//! converter and calculator is a pure function here; the `minitools` crate
//! is the Imperative Shell that collects input, performs HTTP, and renders.
//!
//! # Architecture Overview
//!
//! - **`minitools_core`** (this crate): pure computations with zero I/O
//! - **`minitools`**: CLI, HTTP clients and the MCP server
//!
//! Tool families never call each other. A shell collects raw input, calls a
//! single function from one of the modules below, and renders either the
//! value or the error it returns.
//!
//! # Module Organization
//!
//! - [`numeral`]: base 2/8/10/16 conversion, text and ASCII code units, hex arithmetic
//! - [`calendar`]: Gregorian to Bengali, Hijri, Roman, Hindi and English renderings
//! - [`calc`]: CPM, LTV, EPS, tax, margins, valuation, discounts, statistics
//! - [`text`]: case conversion, counting, repetition and word combination
//! - [`cms`]: CMS response models and the article/SEO transforms
//! - [`remote`]: wire models for the remote fee and price calculators
//! - [`catalog`]: the shared registry of tools, keyed by slug
//! - [`theme`]: the light/dark theme observable handed to renderers
//!
//! # Example Usage
//!
//! ```rust
//! use minitools_core::numeral::{hex_arithmetic, ArithmeticOp};
//!
//! assert_eq!(hex_arithmetic("1A", "2B", ArithmeticOp::Add).unwrap(), "45");
//! ```

pub mod calc;
pub mod calendar;
pub mod catalog;
pub mod cms;
pub mod numeral;
pub mod remote;
pub mod text;
pub mod theme;
