//! Core library for sumtools
//!
//! This crate implements the **Functional Core** of the sumtools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The sumtools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`sumtools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`sumtools`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`script`]: Transformations for turning long-form text into short video
//!   narration scripts: prompt assembly, the Gemini `generateContent` wire
//!   model, response payload extraction, marker-segment extraction, and
//!   output rendering.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use sumtools_core::script::{build_prompt, ScriptRequest};
//!
//! let request = ScriptRequest {
//!     instruction: "Summarize: {text}".to_string(),
//!     source_text: "AI is transforming healthcare.".to_string(),
//! };
//!
//! let prompt = build_prompt(&request);
//! assert_eq!(prompt, "Summarize: AI is transforming healthcare.");
//! ```
//!
//! The key insight: **data transformation logic should be pure and ignorant of
//! where data comes from or where it goes**. Everything between reading the
//! source text and printing the result is expressible as a pure function, so
//! the single network call in the shell stays a thin adapter.

pub mod script;
