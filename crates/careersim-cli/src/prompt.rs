//! Line-based prompts on stdin — stand-ins for the prototype's dialogs.

use std::io::{self, BufRead, Write};

/// Print `question` and read one line, without the trailing newline.
pub fn ask(question: &str) -> io::Result<String> {
  ask_from(&mut io::stdin().lock(), &mut io::stdout(), question)
}

/// Ask a yes/no question; anything but `y`/`yes` counts as no.
pub fn confirm(question: &str) -> io::Result<bool> {
  Ok(is_yes(&ask(&format!("{question} [y/N] "))?))
}

pub fn ask_from(
  input: &mut impl BufRead,
  output: &mut impl Write,
  question: &str,
) -> io::Result<String> {
  write!(output, "{question}")?;
  output.flush()?;
  let mut line = String::new();
  input.read_line(&mut line)?;
  Ok(line.trim_end_matches('\n').trim_end_matches('\r').to_string())
}

pub fn is_yes(answer: &str) -> bool {
  matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
