//! The line-oriented command loop: tokenize each input line, dispatch to
//! the session and print one status line per command.
//!
//! Command names are matched exactly and case-sensitively; malformed arity
//! or non-integer argument tokens are rejected here with `Invalid command`
//! before the engine is called.

use anyhow::Result;
use pnmedit_core::{ColorMode, EditError, Session};
use std::fs;
use std::io::{BufRead, Write};

enum Flow {
	Continue,
	Exit,
}

/// Runs the editor loop until EOF or a successful `EXIT`.
pub fn run(input: impl BufRead, mut output: impl Write) -> Result<()> {
	let mut session = Session::new();
	for line in input.lines() {
		match execute(&mut session, &line?, &mut output)? {
			Flow::Continue => {}
			Flow::Exit => break,
		}
	}
	Ok(())
}

fn execute(session: &mut Session, line: &str, out: &mut impl Write) -> Result<Flow> {
	let mut tokens = line.split_ascii_whitespace();
	let command = tokens.next().unwrap_or("");
	let args: Vec<&str> = tokens.collect();

	match (command, args.as_slice()) {
		("LOAD", [file]) => load(session, file, out)?,
		("SELECT", ["ALL"]) => match session.select_all() {
			Ok(_) => writeln!(out, "Selected ALL")?,
			Err(error) => report(out, &error)?,
		},
		("SELECT", [x1, y1, x2, y2]) => {
			match (parse_int(x1), parse_int(y1), parse_int(x2), parse_int(y2)) {
				(Some(x1), Some(y1), Some(x2), Some(y2)) => {
					match session.select(x1, y1, x2, y2) {
						Ok(s) => writeln!(out, "Selected {} {} {} {}", s.x1, s.y1, s.x2, s.y2)?,
						Err(EditError::InvalidArguments(_)) => writeln!(out, "Invalid command")?,
						Err(error) => report(out, &error)?,
					}
				}
				_ => writeln!(out, "Invalid command")?,
			}
		}
		("HISTOGRAM", [x, y]) => match (x.parse::<u32>(), y.parse::<u32>()) {
			(Ok(x), Ok(y)) => match session.histogram(x, y) {
				Ok(rows) => {
					for stars in rows {
						writeln!(out, "{stars}\t|\t{}", "*".repeat(stars as usize))?;
					}
				}
				Err(EditError::InvalidArguments(_)) => writeln!(out, "Invalid command")?,
				Err(error) => report(out, &error)?,
			},
			_ => writeln!(out, "Invalid command")?,
		},
		("EQUALIZE", []) => match session.equalize() {
			Ok(()) => writeln!(out, "Equalize done")?,
			Err(error) => report(out, &error)?,
		},
		("ROTATE", [angle]) => match angle.parse::<i32>() {
			Ok(angle) => match session.rotate(angle) {
				Ok(()) => writeln!(out, "Rotated {angle}")?,
				Err(EditError::InvalidArguments(_)) => writeln!(out, "Unsupported rotation angle")?,
				Err(error) => report(out, &error)?,
			},
			Err(_) => writeln!(out, "Invalid command")?,
		},
		("CROP", []) => match session.crop() {
			Ok(()) => writeln!(out, "Image cropped")?,
			Err(error) => report(out, &error)?,
		},
		("APPLY", [filter]) => match session.apply(filter) {
			Ok(()) => writeln!(out, "APPLY {filter} done")?,
			Err(EditError::InvalidArguments(_)) => writeln!(out, "APPLY parameter invalid")?,
			Err(error) => report(out, &error)?,
		},
		("SAVE", [file]) => save(session, file, false, out)?,
		("SAVE", [file, "ascii"]) => save(session, file, true, out)?,
		("EXIT", []) => {
			if session.has_image() {
				return Ok(Flow::Exit);
			}
			writeln!(out, "No image loaded")?;
		}
		_ => writeln!(out, "Invalid command")?,
	}
	Ok(Flow::Continue)
}

/// Reads and decodes `file`. A failed load drops any current image, like
/// the editor always has.
fn load(session: &mut Session, file: &str, out: &mut impl Write) -> Result<()> {
	let result = fs::read(file)
		.map_err(|error| EditError::Decode(error.to_string()))
		.and_then(|bytes| session.load(&bytes));
	match result {
		Ok(()) => writeln!(out, "Loaded {file}")?,
		Err(error) => {
			log::debug!("loading {file} failed: {error}");
			session.clear();
			writeln!(out, "Failed to load {file}")?;
		}
	}
	Ok(())
}

fn save(session: &Session, file: &str, ascii: bool, out: &mut impl Write) -> Result<()> {
	match session.save(ascii) {
		Ok(bytes) => {
			if fs::write(file, bytes).is_ok() {
				writeln!(out, "Saved {file}")?;
			} else {
				writeln!(out, "Failed to save {file}")?;
			}
		}
		Err(error) => report(out, &error)?,
	}
	Ok(())
}

/// Allows negative values through so the engine can reject them itself.
fn parse_int(token: &str) -> Option<i64> {
	token.parse::<i64>().ok()
}

/// The status line for every error that is not command-specific.
fn report(out: &mut impl Write, error: &EditError) -> Result<()> {
	let message = match error {
		EditError::NoImage => "No image loaded",
		EditError::InvalidRange => "Invalid set of coordinates",
		EditError::SelectionNotSquare => "The selection must be square",
		EditError::ColorMismatch(ColorMode::Grayscale) => "Black and white image needed",
		EditError::ColorMismatch(ColorMode::Color) => "Easy, Charlie Chaplin",
		_ => "Invalid command",
	};
	writeln!(out, "{message}")?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	const GRAY_2X2: &[u8] = b"P2\n2 2\n255\n10 20\n30 40\n";

	fn run_script(lines: &str) -> String {
		let mut output = Vec::new();
		run(Cursor::new(lines.to_string()), &mut output).unwrap();
		String::from_utf8(output).unwrap()
	}

	fn run_with_image(image: &[u8], lines: &str) -> String {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("input.pgm");
		std::fs::write(&path, image).unwrap();
		run_script(&format!("LOAD {}\n{lines}", path.display()))
	}

	#[test]
	fn test_unknown_command() {
		assert_eq!(run_script("FROTZ\n"), "Invalid command\n");
	}

	#[test]
	fn test_exit_without_image() {
		assert_eq!(run_script("EXIT\nEXIT\n"), "No image loaded\nNo image loaded\n");
	}

	#[test]
	fn test_no_image_statuses() {
		let output = run_script("CROP\nSELECT ALL\nROTATE 90\nEQUALIZE\n");
		assert_eq!(
			output,
			"No image loaded\nNo image loaded\nNo image loaded\nNo image loaded\n"
		);
	}

	#[test]
	fn test_load_failure_message() {
		let output = run_script("LOAD /no/such/file.pgm\n");
		assert_eq!(output, "Failed to load /no/such/file.pgm\n");
	}

	#[test]
	fn test_select_statuses() {
		let output = run_with_image(GRAY_2X2, "SELECT 1 1 0 0\nSELECT 5 5 5 5\nSELECT a b c d\n");
		assert!(output.ends_with(
			"Selected 0 0 1 1\nInvalid set of coordinates\nInvalid command\n"
		));
	}

	#[test]
	fn test_rotate_statuses() {
		let output = run_with_image(GRAY_2X2, "ROTATE 90\nROTATE 45\nROTATE x\n");
		assert!(output.ends_with("Rotated 90\nUnsupported rotation angle\nInvalid command\n"));
	}

	#[test]
	fn test_apply_statuses_on_grayscale() {
		let output = run_with_image(GRAY_2X2, "APPLY EDGE\nAPPLY NOPE\n");
		assert!(output.ends_with("Easy, Charlie Chaplin\nEasy, Charlie Chaplin\n"));
	}

	#[test]
	fn test_histogram_output_format() {
		let output = run_with_image(GRAY_2X2, "HISTOGRAM 2 2\n");
		assert!(output.ends_with("2\t|\t**\n0\t|\t\n"));
	}

	#[test]
	fn test_wrong_arity_is_invalid() {
		let output = run_with_image(GRAY_2X2, "CROP 1\nEQUALIZE now\nSELECT 1 2 3\nROTATE\n");
		assert!(output.ends_with(
			"Invalid command\nInvalid command\nInvalid command\nInvalid command\n"
		));
	}
}
