// spellmend: Write a correction for every misspelled word.
//
// Each word of the misspelling list is matched against every dictionary
// entry; the entry with the smallest weighted edit distance is written as
//   <word> --> <correction>
// one line per input word, in input order.
//
// Usage:
//   spellmend [-d DICT] [OPTIONS] [MISSPELLINGS]
//
// Options:
//   -d, --dict PATH      Dictionary word list (default: $SPELLMEND_DICT)
//   -o, --output PATH    Output file, `-` for stdout (default: suggestions.txt)
//   --costs PATH         JSON cost profile
//   --json               Write one JSON object per line instead
//   -v, --verbose        More log output (repeatable)
//   -q, --quiet          Errors only
//   -h, --help           Print help

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use spellmend_core::{Correction, SpellmendError};
use spellmend_engine::Corrector;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = spellmend_cli::parse_dict_path(&args);

    if spellmend_cli::wants_help(&args) {
        println!("spellmend: Suggest a dictionary correction for each misspelled word.");
        println!();
        println!("Usage: spellmend [-d DICT] [OPTIONS] [MISSPELLINGS]");
        println!();
        println!("Reads misspelled words from MISSPELLINGS (one per line), or from");
        println!("stdin if no file is given, and writes `word --> correction` lines.");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH      Dictionary word list (default: ${})", spellmend_cli::DICT_ENV);
        println!("  -o, --output PATH    Output file, `-` for stdout (default: {})", spellmend_cli::DEFAULT_OUTPUT);
        println!("  --costs PATH         JSON cost profile");
        println!("  --json               Write one JSON object per line");
        println!("  -v, --verbose        More log output (repeatable)");
        println!("  -q, --quiet          Errors only");
        println!("  -h, --help           Print this help");
        return;
    }

    spellmend_cli::init_logging(spellmend_cli::verbosity(&args));

    let mut output = PathBuf::from(spellmend_cli::DEFAULT_OUTPUT);
    let mut costs_path: Option<PathBuf> = None;
    let mut json = false;
    let mut input: Option<PathBuf> = None;
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-o" | "--output" | "--costs" => {
                let Some(value) = args.get(i + 1) else {
                    spellmend_cli::fatal(&format!("{arg} requires a value"));
                };
                if arg == "--costs" {
                    costs_path = Some(PathBuf::from(value));
                } else {
                    output = PathBuf::from(value);
                }
                skip_next = true;
            }
            "--json" => json = true,
            "-v" | "-vv" | "--verbose" | "-q" | "--quiet" => {}
            other if other.starts_with('-') && other != "-" => {
                spellmend_cli::fatal(&format!("unknown option: {other}"));
            }
            other => {
                if input.is_some() {
                    spellmend_cli::fatal("only one misspelling list may be given");
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let dict = spellmend_cli::resolve_dict_path(dict_path.as_deref())
        .unwrap_or_else(|e| spellmend_cli::fatal(&e));

    if let Err(e) = run(&dict, input.as_deref(), &output, costs_path.as_deref(), json) {
        spellmend_cli::fatal(&e.to_string());
    }
}

fn run(
    dict: &Path,
    input: Option<&Path>,
    output: &Path,
    costs: Option<&Path>,
    json: bool,
) -> Result<(), SpellmendError> {
    let dictionary = spellmend_cli::read_word_list(dict)?;
    log::info!("loaded {} dictionary entries from {}", dictionary.len(), dict.display());

    let queries = match input {
        Some(path) if path != Path::new("-") => spellmend_cli::read_word_list(path)?,
        _ => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|source| SpellmendError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            spellmend_cli::parse_word_list(&bytes, "<stdin>")?
        }
    };

    let mut corrector = Corrector::new(dictionary)?;
    if let Some(path) = costs {
        corrector = corrector.with_costs(spellmend_cli::load_cost_profile(path)?);
        log::info!("using cost profile {}", path.display());
    }

    let to_stdout = output == Path::new("-");
    let io_err = |source: io::Error| SpellmendError::Io {
        path: output.to_path_buf(),
        source,
    };
    let sink: Box<dyn Write> = if to_stdout {
        Box::new(io::stdout().lock())
    } else {
        Box::new(File::create(output).map_err(io_err)?)
    };
    let mut out = BufWriter::new(sink);

    log::info!(
        "writing corrections to {}, this may take a few minutes...",
        if to_stdout { "stdout".to_string() } else { output.display().to_string() }
    );

    for query in &queries {
        let correction = corrector.correct(&query.to_string())?;
        write_correction(&mut out, &correction, json).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    log::info!(
        "done: {} words, {} distinct",
        queries.len(),
        corrector.cache_len()
    );
    Ok(())
}

fn write_correction(out: &mut impl Write, correction: &Correction, json: bool) -> io::Result<()> {
    if json {
        let line = serde_json::to_string(correction).map_err(io::Error::other)?;
        writeln!(out, "{line}")
    } else {
        writeln!(out, "{correction}")
    }
}
