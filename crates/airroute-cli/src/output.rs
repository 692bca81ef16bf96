//! Output formatting for query results.
//!
//! Summaries come from `airroute-lib` already rendered as plain text; this
//! module picks between that text and JSON and applies terminal styling.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::terminal::ColorPalette;

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// How text output should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A result: the first line is a heading.
    Result,
    /// An empty outcome such as "no route".
    Notice,
}

/// Write `value` to stdout in the requested format. `text` is only rendered
/// for [`OutputFormat::Text`].
pub fn emit<T, F>(format: OutputFormat, value: &T, tone: Tone, text: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    let rendered = match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(value).context("failed to serialise output")?;
            json.push('\n');
            json
        }
        OutputFormat::Text => style_text(&text(), tone, ColorPalette::detect()),
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write output")?;
    Ok(())
}

/// Apply `palette` to rendered text.
pub fn style_text(text: &str, tone: Tone, palette: ColorPalette) -> String {
    let (color, reset) = match tone {
        Tone::Result => (palette.white_bold, palette.reset),
        Tone::Notice => (palette.yellow, palette.reset),
    };
    if color.is_empty() {
        return text.to_string();
    }

    let mut lines = text.lines();
    let mut styled = String::with_capacity(text.len() + 16);
    if let Some(first) = lines.next() {
        styled.push_str(color);
        styled.push_str(first);
        styled.push_str(reset);
        styled.push('\n');
    }
    for line in lines {
        styled.push_str(line);
        styled.push('\n');
    }
    styled
}
