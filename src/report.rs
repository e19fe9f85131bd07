//! The fixture's output contract.
//!
//! Two sections on standard output: the argument list, then the
//! environment block. One value per line, verbatim, no escaping or
//! quoting. Harnesses parse this output byte-for-byte, so the layout here
//! is load-bearing; it is pinned by the tests at the bottom of this file
//! and end-to-end by `tests/echo.rs`.

#[cfg(unix)]
use std::os::unix::ffi::OsStrExt;
use std::{
	ffi::{OsStr, OsString}, io::{self, Write}
};

use crate::env;

/// Header line opening the argument section.
pub const ARGS_HEADER: &str = "Command Line Arguments:";
/// Header line opening the environment section.
pub const VARS_HEADER: &str = "Environment Variables:";

/// Writes the whole report from the process's own startup snapshot: the
/// argument section, then the environment section.
///
/// # Errors
///
/// Returns any error the sink reports; nothing is written beyond the
/// failing write.
pub fn write<W: Write>(out: &mut W) -> io::Result<()> {
	write_args(out, &env::args_os())?;
	write_vars(out, &env::entries_os())
}

/// Writes the argument section: the header, then each argument on its own
/// line, in the order supplied. An empty argument prints as a blank line.
///
/// # Errors
///
/// Returns any error the sink reports.
pub fn write_args<W: Write>(out: &mut W, args: &[OsString]) -> io::Result<()> {
	writeln!(out, "{}", ARGS_HEADER)?;
	for arg in args {
		write_value(out, arg)?;
	}
	Ok(())
}

/// Writes the environment section: a blank line, the header, then each
/// `NAME=VALUE` entry on its own line, in the order supplied.
///
/// # Errors
///
/// Returns any error the sink reports.
pub fn write_vars<W: Write>(out: &mut W, entries: &[OsString]) -> io::Result<()> {
	writeln!(out)?;
	writeln!(out, "{}", VARS_HEADER)?;
	for entry in entries {
		write_value(out, entry)?;
	}
	Ok(())
}

// Verbatim on unix means raw bytes: arguments and environment entries need
// not be valid UTF-8. Elsewhere the platform's env API is Unicode and the
// lossy conversion is lossless in practice.
fn write_value<W: Write>(out: &mut W, value: &OsStr) -> io::Result<()> {
	#[cfg(unix)]
	out.write_all(value.as_bytes())?;
	#[cfg(not(unix))]
	write!(out, "{}", value.to_string_lossy())?;
	out.write_all(b"\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn values(values: &[&str]) -> Vec<OsString> {
		values.iter().map(OsString::from).collect()
	}

	#[test]
	fn args_section() {
		let mut out = Vec::new();
		write_args(&mut out, &values(&["/bin/fixture", "a", "b c", ""])).unwrap();
		assert_eq!(out, b"Command Line Arguments:\n/bin/fixture\na\nb c\n\n".to_vec());
	}

	#[test]
	fn vars_section() {
		let mut out = Vec::new();
		write_vars(&mut out, &values(&["PATH=/usr/bin", "EMPTY="])).unwrap();
		assert_eq!(
			out,
			b"\nEnvironment Variables:\nPATH=/usr/bin\nEMPTY=\n".to_vec()
		);
	}

	#[test]
	fn full_layout() {
		let mut out = Vec::new();
		write_args(&mut out, &values(&["fixture", "one", "two"])).unwrap();
		write_vars(&mut out, &values(&["TESTVAR=42"])).unwrap();
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"Command Line Arguments:\nfixture\none\ntwo\n\nEnvironment Variables:\nTESTVAR=42\n"
		);
	}

	#[test]
	fn no_arguments_still_prints_header() {
		let mut out = Vec::new();
		write_args(&mut out, &[]).unwrap();
		assert_eq!(out, b"Command Line Arguments:\n".to_vec());
	}

	#[test]
	fn write_uses_process_snapshot() {
		let mut out = Vec::new();
		write(&mut out).unwrap();
		let text = String::from_utf8_lossy(&out);
		assert!(text.starts_with("Command Line Arguments:\n"));
		assert!(text.contains("\nEnvironment Variables:\n"));
	}

	#[cfg(unix)]
	#[test]
	fn non_utf8_verbatim() {
		use std::os::unix::ffi::OsStringExt;

		let mut out = Vec::new();
		write_args(&mut out, &[OsString::from_vec(b"a\xff b".to_vec())]).unwrap();
		assert_eq!(out, b"Command Line Arguments:\na\xff b\n".to_vec());
	}

	#[test]
	fn sink_errors_propagate() {
		struct Broken;
		impl Write for Broken {
			fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
				Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
			}
			fn flush(&mut self) -> io::Result<()> {
				Ok(())
			}
		}
		assert!(write_args(&mut Broken, &values(&["x"])).is_err());
		assert!(write_vars(&mut Broken, &values(&["X=1"])).is_err());
	}
}
