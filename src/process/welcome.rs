use std::io::{self, Write};
use terminal_size::{Width, terminal_size};

const DEFAULT_WIDTH: usize = 80;

/// Print the startup banner, centred on the terminal when its width is known.
pub fn welcome(out: &mut dyn Write, quit_keyword: &str) -> io::Result<()> {
    let width = terminal_size()
        .and_then(|(Width(w), _)| usize::try_from(w).ok())
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_WIDTH);

    writeln!(out, "{}", center_line("Welcome to conduit.", width))?;
    writeln!(
        out,
        "{}",
        center_line(&format!("Type '{quit_keyword}' to exit."), width)
    )?;
    out.flush()
}

/// Centre a single line of text within the provided width.
fn center_line(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_string();
    }
    let padding = (width - len) / 2;
    format!("{}{}", " ".repeat(padding), text)
}
