use crate::error::{AnimalError, Result};
use crate::fetcher::AnimalSource;
use crate::page;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const PROMPT: &str = "Please enter an animal: ";

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Page written with this many cards.
    Generated { count: usize, output: PathBuf },
    /// No matches; the "doesn't exist" page was written.
    NoResults { output: PathBuf },
    /// Nothing written.
    FetchFailed { message: String },
    WriteFailed { output: PathBuf, message: String },
}

impl Outcome {
    /// The single line reported to the user.
    pub fn status_line(&self) -> String {
        match self {
            Outcome::Generated { count, .. } => {
                format!("✅ Website generated with {} animal(s).", count)
            }
            Outcome::NoResults { output } => format!(
                "ℹ️ No results found. Error page created in {}.",
                output.display()
            ),
            Outcome::FetchFailed { message } => format!("❌ Error fetching data: {}", message),
            Outcome::WriteFailed { output, message } => {
                format!("❌ Could not write {}: {}", output.display(), message)
            }
        }
    }
}

/// Show the prompt and read one trimmed line.
pub fn prompt_animal<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Fetch, render and write the page for `query`.
///
/// Every failure is folded into the returned [`Outcome`]; nothing here
/// retries.
pub async fn generate_site(source: &dyn AnimalSource, query: &str, output: &Path) -> Outcome {
    let animals = match source.fetch(query).await {
        Ok(animals) => animals,
        Err(e) => {
            return Outcome::FetchFailed {
                message: e.to_string(),
            }
        }
    };

    let html = page::create_html_page(&animals, query);
    if let Err(e) = write_page(output, &html) {
        return Outcome::WriteFailed {
            output: output.to_path_buf(),
            message: e.to_string(),
        };
    }

    if animals.is_empty() {
        Outcome::NoResults {
            output: output.to_path_buf(),
        }
    } else {
        Outcome::Generated {
            count: animals.len(),
            output: output.to_path_buf(),
        }
    }
}

fn write_page(output: &Path, html: &str) -> Result<()> {
    std::fs::write(output, html).map_err(AnimalError::Io)?;
    info!("Wrote {} bytes to {}", html.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_answer() {
        let mut input = Cursor::new("  red fox \n");
        let mut shown = Vec::new();

        let answer = prompt_animal(&mut input, &mut shown).unwrap();

        assert_eq!(answer, "red fox");
        assert_eq!(String::from_utf8(shown).unwrap(), PROMPT);
    }

    #[test]
    fn test_prompt_on_closed_stdin() {
        let mut input = Cursor::new("");
        let mut shown = Vec::new();
        assert_eq!(prompt_animal(&mut input, &mut shown).unwrap(), "");
    }

    #[test]
    fn test_status_lines() {
        let output = PathBuf::from("animals.html");

        assert_eq!(
            Outcome::Generated { count: 3, output: output.clone() }.status_line(),
            "✅ Website generated with 3 animal(s)."
        );
        assert_eq!(
            Outcome::NoResults { output: output.clone() }.status_line(),
            "ℹ️ No results found. Error page created in animals.html."
        );
        assert_eq!(
            Outcome::FetchFailed { message: "Network error: HTTP 500".into() }.status_line(),
            "❌ Error fetching data: Network error: HTTP 500"
        );
        assert!(Outcome::WriteFailed { output, message: "denied".into() }
            .status_line()
            .starts_with("❌ Could not write animals.html"));
    }
}
