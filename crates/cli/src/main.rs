//! SPIR-V instruction-word inspector.
//!
//! This binary exposes the core library from the shell. It performs:
//! 1. **Dump:** Walk a module (or a bare instruction stream) and print every instruction with its categories.
//! 2. **Classify:** Print the categories and memory-semantics operands of a single opcode.
//! 3. **Generator:** Resolve a generator id to its registered vendor and tool.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use spvword_core::common::MODULE_HEADER_WORDS;
use spvword_core::common::endian::raw_words;
use spvword_core::config::StreamConfig;
use spvword_core::isa::{Categories, InstructionStream, ModuleHeader};
use spvword_core::{Config, Endianness, Opcode, vendor};

#[derive(Parser, Debug)]
#[command(
    name = "spvword",
    author,
    version,
    about = "SPIR-V instruction-word inspector",
    long_about = "Decode SPIR-V instruction streams, classify opcodes and resolve generator ids.\n\nExamples:\n  spvword dump shader.spv\n  spvword dump --endian big --json shader.spv\n  spvword classify OpAtomicCompareExchange\n  spvword classify 0x15\n  spvword generator 8"
)]
struct Cli {
    /// JSON configuration file (stream byte order, module header handling).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every instruction in a binary with its offset, size and categories.
    Dump {
        /// Binary to read.
        file: PathBuf,

        /// Byte order of the file; overrides the configuration.
        #[arg(long)]
        endian: Option<Endianness>,

        /// The file is a bare instruction stream without the five-word module header.
        #[arg(long)]
        no_header: bool,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the categories and memory-semantics operand positions of an opcode.
    Classify {
        /// Opcode value (decimal or `0x` hex) or mnemonic, with or without the `Op` prefix.
        opcode: String,
    },

    /// Print the registered vendor and tool for a generator id.
    Generator {
        /// Tool id (decimal or `0x` hex), i.e. the high half of the header's generator word.
        id: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] spvword_core::Error),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no opcode named `{0}`")]
    UnknownMnemonic(String),

    #[error("invalid number `{0}`")]
    BadNumber(String),

    #[error("cannot encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// One decoded instruction as reported by `dump`.
#[derive(Debug, Serialize)]
struct DumpRecord {
    offset: usize,
    opcode: &'static str,
    word_count: usize,
    categories: Categories,
}

#[derive(Debug, Serialize)]
struct DumpReport {
    header: Option<ModuleHeader>,
    instructions: Vec<DumpRecord>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Dump {
            file,
            endian,
            no_header,
            json,
        } => {
            let mut stream = config.stream;
            if let Some(endian) = endian {
                stream.endianness = endian;
            }
            if no_header {
                stream.module_header = false;
            }
            let bytes = read_file(&file)?;
            dump(&bytes, &stream, json)
        }
        Commands::Classify { opcode } => classify(&opcode),
        Commands::Generator { id } => generator(&id),
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the configuration file, or the defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(Config::from_json(&text)?)
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
fn parse_number(text: &str) -> Result<u32, CliError> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| CliError::BadNumber(text.to_owned()))
}

fn resolve_opcode(query: &str) -> Result<Opcode, CliError> {
    if query.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(Opcode::try_from(parse_number(query)?)?)
    } else {
        Opcode::from_name(query).ok_or_else(|| CliError::UnknownMnemonic(query.to_owned()))
    }
}

/// Decodes `bytes` and renders the instruction listing.
///
/// # Arguments
///
/// * `bytes` - File contents; the length must be a multiple of four.
/// * `stream` - Byte order and whether a module header leads the stream.
/// * `json` - Render JSON instead of the text listing.
fn dump(bytes: &[u8], stream: &StreamConfig, json: bool) -> Result<String, CliError> {
    let words = raw_words(bytes)?;
    let endian = stream.endianness;

    let (header, start) = if stream.module_header {
        (Some(ModuleHeader::parse(&words, endian)?), MODULE_HEADER_WORDS)
    } else {
        (None, 0)
    };

    let mut instructions = Vec::new();
    let mut offset = start;
    for inst in InstructionStream::with_offset(&words, endian, start) {
        let inst = inst?;
        instructions.push(DumpRecord {
            offset,
            opcode: inst.opcode().name(),
            word_count: inst.word_count(),
            categories: inst.opcode().categories(),
        });
        offset += inst.word_count();
    }
    info!(count = instructions.len(), ?endian, "decoded instructions");

    let report = DumpReport {
        header,
        instructions,
    };
    if json {
        Ok(serde_json::to_string_pretty(&report)? + "\n")
    } else {
        Ok(render_text(&report))
    }
}

fn render_text(report: &DumpReport) -> String {
    let mut lines = Vec::with_capacity(report.instructions.len() + 1);
    if let Some(header) = &report.header {
        let (major, minor) = header.version();
        lines.push(format!(
            "; SPIR-V {major}.{minor}, generator {} ({:#010x}), bound {}",
            header.generator_name(),
            header.generator,
            header.bound
        ));
    }
    for record in &report.instructions {
        let line = format!(
            "{:>6}  {:<40} {:>3}  {}",
            record.offset, record.opcode, record.word_count, record.categories
        );
        lines.push(line.trim_end().to_owned());
    }
    lines.join("\n") + "\n"
}

fn classify(query: &str) -> Result<String, CliError> {
    let op = resolve_opcode(query)?;

    let categories = op.categories();
    let categories = if categories.is_empty() {
        String::from("none")
    } else {
        categories.to_string()
    };
    let semantics = op.memory_semantics_operand_indices();
    let semantics = if semantics.is_empty() {
        String::from("none")
    } else {
        semantics
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    Ok(format!(
        "{op} ({code})\n  categories: {categories}\n  memory semantics operands: {semantics}\n",
        code = op.code()
    ))
}

fn generator(text: &str) -> Result<String, CliError> {
    let id = parse_number(text)?;
    Ok(format!("{id}: {}\n", vendor::generator_name(id)))
}
