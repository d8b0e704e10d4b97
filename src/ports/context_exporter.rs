//! Path-context exporter
//!
//! Writes triples as newline-terminated records in one of three formats.
//! `Raw` is the historical wire format and does not escape anything: a token
//! containing a comma (e.g. the string literal `"a,b"`) yields a record that
//! splits into more than three fields. `Csv` quotes such fields instead.

use std::io::{Result, Write};

use clap::ValueEnum;

use crate::domain::context::Triple;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `left,path,right`, unescaped
    #[default]
    Raw,
    /// RFC 4180 quoting where a field needs it
    Csv,
    /// One JSON object per line
    Jsonl,
}

pub struct ContextExporter {
    format: OutputFormat,
}

impl ContextExporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Write every triple as one record.
    pub fn export<W: Write>(&self, triples: &[Triple], out: &mut W) -> Result<()> {
        match self.format {
            OutputFormat::Raw => {
                for triple in triples {
                    writeln!(out, "{}", triple)?;
                }
                Ok(())
            }
            OutputFormat::Csv => write_csv(triples, out),
            OutputFormat::Jsonl => {
                for triple in triples {
                    serde_json::to_writer(&mut *out, triple)?;
                    out.write_all(b"\n")?;
                }
                Ok(())
            }
        }
    }
}

fn write_csv<W: Write>(triples: &[Triple], out: &mut W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    for triple in triples {
        writer.write_record([&triple.left, &triple.path, &triple.right])?;
    }
    writer.flush()
}
