use std::io::{self, Write};

/// Prints `prompt` and reads one line. Returns `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Only colon commands quit; plain words such as "quit" are looked up.
pub fn is_quit_command(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), ":q" | ":quit")
}

/// Shows a value kept in the input field after a lookup; typing a line replaces it.
pub fn prompt(kept: &str) -> String {
    let kept = kept.trim();
    if kept.is_empty() {
        ">> ".to_owned()
    } else {
        format!("[{kept}] >> ")
    }
}
