//! Interactive product prompt.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags
//! - the prompt provides the "run `agri` and type a product" UX
//!
//! The answer is returned as typed (trimmed); validation against the catalog
//! happens in `analysis::select` so `--product` and the prompt behave the same.

use std::io::{self, BufRead, Write};

use crate::error::AppError;

/// Source of the user's product choice.
pub trait ProductPrompt {
    fn prompt_for_product(&mut self) -> Result<String, AppError>;
}

/// Prompts on stdout and reads one line from stdin. Blocks until a line arrives.
pub struct StdinPrompt;

impl ProductPrompt for StdinPrompt {
    fn prompt_for_product(&mut self) -> Result<String, AppError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_product(&mut stdin.lock(), &mut stdout.lock())
    }
}

/// Write the prompt to `output`, then read a single line from `input`.
pub fn read_product<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, AppError> {
    write!(output, "Enter product name: ")
        .and_then(|_| output.flush())
        .map_err(|e| AppError::Io(format!("Failed to write prompt: {e}")))?;

    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .map_err(|e| AppError::Io(format!("Failed to read input: {e}")))?;

    if bytes == 0 {
        return Err(AppError::Io(
            "No input received. Pass a product with `agri --product <NAME>`.".to_string(),
        ));
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_and_trims_one_line() {
        let mut input = Cursor::new("  Wheat \nCorn\n");
        let mut output = Vec::new();
        let product = read_product(&mut input, &mut output).unwrap();
        assert_eq!(product, "Wheat");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter product name: ");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut input = Cursor::new("");
        let err = read_product(&mut input, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
