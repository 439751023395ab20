//! Line input for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// It trims whitespace from the input and returns `None` on EOF or read errors.
/// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line is still
/// a line the caller can reject and re-prompt for.
///
/// # Arguments
///
/// * `stdin` - Buffered reader to read from (typically stdin)
///
/// # Returns
///
/// * `Some(String)` - Trimmed input line (may be empty after trimming)
/// * `None` - EOF or I/O error occurred
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use blackjack_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut buf = Vec::new();
    match stdin.read_until(b'\n', &mut buf) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let mut line = String::from_utf8_lossy(&buf).into_owned();
            strip_utf8_bom(&mut line);
            Some(line.trim().to_string())
        }
        Err(_) => None, // Read error
    }
}

/// Strip UTF-8 BOM (Byte Order Mark) from the beginning of a string.
///
/// Input piped from files saved by some editors starts with U+FEFF, which
/// would otherwise hide the first character of the first answer.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
