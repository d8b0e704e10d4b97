use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::domain::context::{function_contexts, Triple};
use crate::infrastructure::project_loader::SourceFile;
use crate::ports::context_exporter::{ContextExporter, OutputFormat};
use crate::ports::AstParser;

/// Run-time settings, built from the command line.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    pub format: OutputFormat,
    /// Rayon worker count; `None` uses the default pool size.
    pub jobs: Option<usize>,
    /// Log and skip files that fail to parse instead of aborting.
    pub keep_going: bool,
}

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files: usize,
    pub skipped_files: usize,
    pub functions: usize,
    pub triples: usize,
}

/// Path-contexts of one source file.
pub struct FileContexts {
    pub path: String,
    pub functions: usize,
    pub triples: Vec<Triple>,
}

/// Extracted files in input order, plus the number skipped under `keep_going`.
pub struct Extraction {
    pub files: Vec<FileContexts>,
    pub skipped_files: usize,
}

pub struct ExtractUsecase<'a> {
    pub parser: &'a dyn AstParser,
    pub config: &'a ExtractConfig,
}

impl<'a> ExtractUsecase<'a> {
    /// Extract every file in parallel, then write the triples in input order.
    ///
    /// Without `keep_going` the first parse failure aborts before anything is written.
    pub fn run<W: Write>(&self, sources: &[SourceFile], out: &mut W) -> Result<ExtractSummary> {
        let extraction = self.extract(sources)?;
        self.export(&extraction, out)
    }

    /// Like [`run`](Self::run), but writes to `output` (stdout when `None`).
    ///
    /// The file is created only once extraction has succeeded, so a failed run
    /// leaves an existing file untouched.
    pub fn run_to(&self, sources: &[SourceFile], output: Option<&Path>) -> Result<ExtractSummary> {
        let extraction = self.extract(sources)?;
        match output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?;
                self.export(&extraction, &mut BufWriter::new(file))
            }
            None => self.export(&extraction, &mut BufWriter::new(io::stdout().lock())),
        }
    }

    pub fn extract(&self, sources: &[SourceFile]) -> Result<Extraction> {
        let results: Vec<_> = sources
            .par_iter()
            .map(|source| self.extract_file(source))
            .collect();

        let mut extraction = Extraction {
            files: Vec::with_capacity(results.len()),
            skipped_files: 0,
        };
        for result in results {
            match result {
                Ok(file) => extraction.files.push(file),
                Err(e) if self.config.keep_going => {
                    warn!(error = %e, "skipping file");
                    extraction.skipped_files += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(extraction)
    }

    pub fn export<W: Write>(&self, extraction: &Extraction, out: &mut W) -> Result<ExtractSummary> {
        let mut summary = ExtractSummary {
            skipped_files: extraction.skipped_files,
            ..ExtractSummary::default()
        };
        let exporter = ContextExporter::new(self.config.format);
        for file in &extraction.files {
            exporter
                .export(&file.triples, out)
                .with_context(|| format!("failed to write path-contexts of {}", file.path))?;
            summary.files += 1;
            summary.functions += file.functions;
            summary.triples += file.triples.len();
        }
        out.flush().context("failed to flush output")?;

        info!(
            files = summary.files,
            skipped = summary.skipped_files,
            functions = summary.functions,
            triples = summary.triples,
            "extraction finished"
        );
        Ok(summary)
    }

    fn extract_file(&self, source: &SourceFile) -> crate::error::Result<FileContexts> {
        let tree = self.parser.parse(&source.path, &source.content)?;
        debug!(file = %source.path, nodes = tree.node_count(), "parsed");
        let per_function = function_contexts(&tree);

        let functions = per_function.len();
        let mut triples = Vec::new();
        for function in per_function {
            debug!(
                file = %source.path,
                function = %function.name,
                leaves = function.leaf_count,
                triples = function.triples.len(),
                "extracted function"
            );
            triples.extend(function.triples);
        }

        Ok(FileContexts {
            path: source.path.clone(),
            functions,
            triples,
        })
    }
}
