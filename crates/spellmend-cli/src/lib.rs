// spellmend-cli: shared utilities for the CLI tools.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use env_logger::Builder;
use log::LevelFilter;
use spellmend_core::{SpellmendError, Word};
use spellmend_engine::TunedCosts;

/// Environment variable naming the default dictionary file.
pub const DICT_ENV: &str = "SPELLMEND_DICT";

/// Default output file of the `spellmend` tool.
pub const DEFAULT_OUTPUT: &str = "suggestions.txt";

/// Read a word list: one word per line, order preserved.
///
/// Lines are split on `\n` (a preceding `\r` is dropped). Nothing is
/// trimmed, deduplicated or sorted, and blank interior lines stay as empty
/// words. A final line break does not add an extra word.
pub fn read_word_list(path: &Path) -> Result<Vec<Word>, SpellmendError> {
    let bytes = std::fs::read(path).map_err(|source| SpellmendError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_word_list(&bytes, &path.display().to_string())
}

/// Parse word-list bytes. `source_name` is only used in error messages.
pub fn parse_word_list(bytes: &[u8], source_name: &str) -> Result<Vec<Word>, SpellmendError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        SpellmendError::InvalidInput {
            source_name: source_name.to_string(),
            line,
            reason: "not valid UTF-8".to_string(),
        }
    })?;
    Ok(text.lines().map(Word::from).collect())
}

/// Load a JSON cost profile.
pub fn load_cost_profile(path: &Path) -> Result<TunedCosts, SpellmendError> {
    let text = std::fs::read_to_string(path).map_err(|source| SpellmendError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    TunedCosts::from_json(&text)
        .map_err(|e| SpellmendError::InvalidCostProfile(format!("{}: {e}", path.display())))
}

/// Resolve the dictionary path.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `SPELLMEND_DICT` environment variable
pub fn resolve_dict_path(dict_path: Option<&str>) -> Result<PathBuf, String> {
    if let Some(p) = dict_path {
        return Ok(PathBuf::from(p));
    }
    match std::env::var(DICT_ENV) {
        Ok(p) if !p.is_empty() => Ok(PathBuf::from(p)),
        _ => Err(format!(
            "no dictionary given: pass --dict PATH or set {DICT_ENV}"
        )),
    }
}

/// Parse a `--dict=PATH`, `--dict PATH` or `-d PATH` argument.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Count `-v`/`--verbose` and `-q`/`--quiet` flags into a verbosity level.
///
/// 0 is quiet (errors only), 1 the default (warnings), 2 info, 3+ debug.
pub fn verbosity(args: &[String]) -> u8 {
    let mut level: i32 = 1;
    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => level += 1,
            "-vv" => level += 2,
            "-q" | "--quiet" => level = 0,
            _ => {}
        }
    }
    level.clamp(0, u8::MAX as i32) as u8
}

/// Initialize logging to stderr. `RUST_LOG` overrides the flag-derived level.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    let _ = builder.try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
