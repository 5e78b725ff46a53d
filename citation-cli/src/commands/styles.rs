use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use citation_formatter::CitationStyle;

#[derive(Args, Debug)]
pub struct Styles {}

impl Styles {
    pub fn execute(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", describe_styles())?;
        Ok(())
    }
}

/// One line per style: its name followed by the record kinds it covers
pub fn describe_styles() -> String {
    CitationStyle::ALL
        .iter()
        .map(|style| {
            let kinds: Vec<String> = style
                .supported_kinds()
                .iter()
                .map(|kind| kind.to_string())
                .collect();
            format!("{style}: {}\n", kinds.join(", "))
        })
        .collect()
}
