//! Startup-state echo fixture.
//!
//! **[Crates.io](https://crates.io/crates/kindling) │ [Repo](https://github.com/alecmocatta/kindling)**
//!
//! `kindling` is what you burn to check the fire works: a minimal native
//! binary that prints the command-line arguments and environment variables
//! it was started with, then exits 0. Pointing a build/test harness at it
//! validates that the harness can compile a trivial executable, run it,
//! pass arguments and environment through, and read the output back.
//!
//! The library half exists so the output contract is testable without
//! spawning a process: [`env`] snapshots the process's startup state, and
//! [`report`] writes the two sections the binary prints.
//!
//! # Examples
//!
//! ```
//! let mut out = Vec::new();
//! kindling::report::write(&mut out).unwrap();
//! assert!(out.starts_with(b"Command Line Arguments:\n"));
//! ```

#![doc(html_root_url = "https://docs.rs/kindling/0.1.0")]
#![warn(
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	trivial_casts,
	trivial_numeric_casts,
	unused_import_braces,
	unused_qualifications,
	unused_results,
	clippy::pedantic
)] // from https://github.com/rust-unofficial/patterns/blob/master/anti_patterns/deny-warnings.md
#![allow(clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod env;
pub mod report;
