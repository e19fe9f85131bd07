//! Echo the command line arguments and environment variables.
//!
//! This is the whole fixture: a harness that can build this binary, run
//! it, and read the two sections back has proven its compile-run-capture
//! path end to end.

use std::io::{self, Write};

fn main() {
	let stdout = io::stdout();
	let mut stdout = stdout.lock();
	// Output failure is not surfaced; the exit status is 0 unconditionally.
	let _ = kindling::report::write(&mut stdout);
	let _ = stdout.flush();
}
