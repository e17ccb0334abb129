//! Line-based console input

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Prompted, line-at-a-time reader over stdin
pub struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print `label` and read one trimmed line; `None` on end of input
    pub async fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        print!("{}", label);
        std::io::stdout().flush()?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }

    /// Show an error and wait for acknowledgement
    pub async fn notify(&mut self, error: &dyn std::fmt::Display) -> anyhow::Result<()> {
        println!("\n⚠️  {}", error);
        self.prompt("Press Enter to continue...").await?;
        Ok(())
    }
}
