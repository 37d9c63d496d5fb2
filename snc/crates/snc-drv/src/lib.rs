//! snc-drv - Compiler Driver
//!
//! Loads Sindarin source files, lexes them in parallel and writes the token
//! stream. The driver owns everything the library crates leave to their
//! caller: configuration, the worker pool, diagnostics rendering and output.

pub mod config;
pub mod emit;
pub mod error;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;
use snc_lex::LexerConfig;
use snc_util::{Arena, Diagnostic, FileId, Handler, SourceFile, SourceMap};
use tracing::{debug, info};

pub use config::{Config, OutputFormat};
pub use emit::{FileTokens, TokenRecord};
pub use error::{DriverError, Result};

/// What the driver produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EmitType {
    /// The token stream of every input
    #[default]
    Tokens,
}

/// Settings for one driver run, after merging file configuration and
/// command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Source files in the order given
    pub inputs: Vec<PathBuf>,
    /// What to produce
    pub emit: EmitType,
    /// Dump format
    pub format: OutputFormat,
    /// Write the dump here instead of stdout
    pub output: Option<PathBuf>,
    /// Worker threads
    pub jobs: usize,
    /// Lexer limits
    pub lexer: LexerConfig,
}

impl Options {
    /// Options taken from `config` alone, with no inputs.
    pub fn from_config(config: &Config) -> Self {
        Self {
            inputs: Vec::new(),
            emit: EmitType::default(),
            format: config.output.format,
            output: None,
            jobs: config.effective_jobs(),
            lexer: config.lexer_config(),
        }
    }
}

/// Result of lexing one file.
#[derive(Debug, Clone)]
pub struct LexedFile {
    /// Owned token dump
    pub tokens: FileTokens,
    /// One diagnostic per error token
    pub diagnostics: Vec<Diagnostic>,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files lexed
    pub files: usize,
    /// Tokens produced, EOF included
    pub tokens: usize,
}

/// One compilation session.
pub struct Session {
    options: Options,
    sources: SourceMap,
    diagnostics: Handler,
}

impl Session {
    /// Creates a session and reads every input file.
    pub fn new(options: Options) -> Result<Self> {
        let mut session = Self::with_options(options);
        for path in session.options.inputs.clone() {
            let content =
                std::fs::read_to_string(&path).map_err(|e| DriverError::io(&path, e))?;
            session.add_source(path.display().to_string(), content);
        }
        Ok(session)
    }

    /// Creates a session without reading anything.
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            sources: SourceMap::new(),
            diagnostics: Handler::new(),
        }
    }

    /// Registers an in-memory source.
    pub fn add_source(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.sources.add_file(name, content);
        debug!(file = id.index(), "registered source");
        id
    }

    /// The options in effect.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Diagnostics recorded by [`Session::run`].
    pub fn diagnostics(&self) -> &Handler {
        &self.diagnostics
    }

    /// Lexes every registered file on a pool of `jobs` threads.
    ///
    /// Each file gets its own arena, so workers share nothing. Results come
    /// back in registration order.
    pub fn lex(&self) -> Result<Vec<LexedFile>> {
        let files: Vec<Arc<SourceFile>> = self.sources.iter().cloned().collect();
        let lexer_config = &self.options.lexer;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.jobs)
            .build()
            .map_err(|e| DriverError::Config(format!("Failed to start worker pool: {}", e)))?;

        info!(files = files.len(), jobs = self.options.jobs, "lexing");
        Ok(pool.install(|| {
            files
                .par_iter()
                .map(|file| lex_file(file, lexer_config))
                .collect()
        }))
    }

    /// Lexes every file, writes the dump and reports diagnostics on stderr.
    ///
    /// Fails with [`DriverError::LexFailed`] when any error token was
    /// produced; the dump is still written first.
    pub fn run(&self) -> Result<RunSummary> {
        let lexed = self.lex()?;

        let mut dumps = Vec::with_capacity(lexed.len());
        for file in lexed {
            for diagnostic in file.diagnostics {
                self.diagnostics.emit_diagnostic(diagnostic);
            }
            dumps.push(file.tokens);
        }

        let summary = RunSummary {
            files: dumps.len(),
            tokens: dumps.iter().map(|f| f.tokens.len()).sum(),
        };

        match self.options.emit {
            EmitType::Tokens => self.write_output(&emit::render(&dumps, self.options.format)?)?,
        }

        let report = self.render_diagnostics();
        if !report.is_empty() {
            eprint!("{}", report);
        }

        let errors = self.diagnostics.error_count();
        info!(files = summary.files, tokens = summary.tokens, errors, "done");
        if errors > 0 {
            return Err(DriverError::LexFailed { errors });
        }
        Ok(summary)
    }

    fn write_output(&self, dump: &str) -> Result<()> {
        match &self.options.output {
            Some(path) => std::fs::write(path, dump).map_err(|e| DriverError::io(path, e)),
            None => std::io::stdout()
                .lock()
                .write_all(dump.as_bytes())
                .map_err(|e| DriverError::io("<stdout>", e)),
        }
    }

    /// Every recorded diagnostic as `file:line: error[E1xxx]: message`,
    /// followed by the offending source line, its notes and its helps.
    pub fn render_diagnostics(&self) -> String {
        let mut out = String::new();
        for diagnostic in self.diagnostics.diagnostics() {
            let name = self
                .sources
                .get(diagnostic.span.file_id)
                .map(|f| f.name().to_string())
                .unwrap_or_else(|| "<unknown>".to_string());
            out.push_str(&format!("{}:{}: {}\n", name, diagnostic.span.line, diagnostic));
            match self.sources.format_span(diagnostic.span) {
                Ok(snippet) => {
                    out.push_str(&snippet);
                    out.push('\n');
                },
                Err(error) => debug!(%error, "no source snippet for diagnostic"),
            }
            for (level, text) in diagnostic.children() {
                out.push_str(&format!("  = {}: {}\n", level, text));
            }
        }
        out
    }
}

fn lex_file(file: &SourceFile, config: &LexerConfig) -> LexedFile {
    let arena = Arena::new();
    let tokens = snc_lex::tokenize_with_config(file.content(), file.name(), &arena, config.clone());

    let diagnostics = tokens
        .iter()
        .filter_map(|token| token.to_diagnostic())
        .map(|mut diagnostic| {
            diagnostic.span = diagnostic.span.with_file_id(file.id());
            diagnostic
        })
        .collect();

    debug!(
        file = file.name(),
        tokens = tokens.len(),
        arena_bytes = arena.allocated_bytes(),
        "lexed file"
    );

    LexedFile {
        tokens: FileTokens {
            file: file.name().to_string(),
            tokens: tokens.iter().map(TokenRecord::from_token).collect(),
        },
        diagnostics,
    }
}
