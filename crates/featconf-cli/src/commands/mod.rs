pub mod configure;
pub mod mwp;
pub mod upload;
pub mod visualize;

use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin
pub(crate) fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
