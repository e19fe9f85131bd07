//! Snapshot of the process's startup state.
//!
//! The argument list and environment block are captured once, on first
//! access, and every accessor observes that same snapshot; the two print
//! loops in the fixture therefore see identical data even if something
//! mutates the environment between them.
//!
//! Acquisition goes through the stdlib's cross-platform accessors rather
//! than a raw `argv`/`environ` walk — the output contract, not the access
//! mechanism, is what harnesses depend on.
//!
//! # Examples
//!
//! ```
//! use kindling::env;
//!
//! // Prints each argument on a separate line
//! for argument in env::args_os() {
//!     println!("{:?}", argument);
//! }
//! ```

use std::ffi::{OsStr, OsString};

lazy_static::lazy_static! {
	static ref SNAPSHOT: Snapshot = Snapshot::capture();
}

struct Snapshot {
	args: Vec<OsString>,
	vars: Vec<(OsString, OsString)>,
}

impl Snapshot {
	fn capture() -> Self {
		Self {
			args: std::env::args_os().collect(),
			vars: std::env::vars_os().collect(),
		}
	}
}

/// Returns the arguments this program was started with (normally passed
/// via the command line), in platform-supplied order.
///
/// The first element is traditionally the path of the executable, but it
/// can be set to arbitrary text, and it may not even exist, so it should
/// not be relied upon for security purposes.
pub fn args_os() -> Vec<OsString> {
	SNAPSHOT.args.clone()
}

/// Returns a vector of (variable, value) pairs of OS strings, for all the
/// environment variables of the current process, in platform-supplied
/// order.
pub fn vars_os() -> Vec<(OsString, OsString)> {
	SNAPSHOT.vars.clone()
}

/// Returns the environment as verbatim `NAME=VALUE` entry strings, the
/// form the report prints.
///
/// A value may be empty (`NAME=`); every entry contains at least one `=`.
pub fn entries_os() -> Vec<OsString> {
	SNAPSHOT
		.vars
		.iter()
		.map(|(key, value)| join_entry(key, value))
		.collect()
}

fn join_entry(key: &OsStr, value: &OsStr) -> OsString {
	let mut entry = OsString::with_capacity(key.len() + value.len() + 1);
	entry.push(key);
	entry.push("=");
	entry.push(value);
	entry
}
