// spellmend-distance: Print the weighted edit distance between two words.
//
// Usage:
//   spellmend-distance [OPTIONS] QUERY CANDIDATE
//
// Options:
//   --costs PATH   JSON cost profile
//   --uniform      Plain Levenshtein costs instead of the spelling table
//   --matrix       Also print the full dynamic-programming table
//   -h, --help     Print help

use spellmend_engine::{CostModel, TunedCosts, UniformCosts, distance_matrix};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if spellmend_cli::wants_help(&args) {
        println!("spellmend-distance: Print the weighted edit distance between two words.");
        println!();
        println!("Usage: spellmend-distance [OPTIONS] QUERY CANDIDATE");
        println!();
        println!("Options:");
        println!("  --costs PATH   JSON cost profile");
        println!("  --uniform      Plain Levenshtein costs instead of the spelling table");
        println!("  --matrix       Also print the full dynamic-programming table");
        println!("  -h, --help     Print this help");
        return;
    }

    spellmend_cli::init_logging(spellmend_cli::verbosity(&args));

    let mut costs_path: Option<String> = None;
    let mut uniform = false;
    let mut show_matrix = false;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--costs" => {
                let Some(value) = args.get(i + 1) else {
                    spellmend_cli::fatal("--costs requires a value");
                };
                costs_path = Some(value.clone());
                skip_next = true;
            }
            "--uniform" => uniform = true,
            "--matrix" => show_matrix = true,
            "-v" | "-vv" | "--verbose" | "-q" | "--quiet" => {}
            // `--` ends option parsing so words may start with '-'
            "--" => {
                words.extend(args[i + 1..].iter().cloned());
                break;
            }
            other if other.starts_with("--") => {
                spellmend_cli::fatal(&format!("unknown option: {other}"));
            }
            other => words.push(other.to_string()),
        }
    }

    let [query, candidate] = words.as_slice() else {
        spellmend_cli::fatal("expected exactly two words: QUERY CANDIDATE");
    };

    if uniform && costs_path.is_some() {
        spellmend_cli::fatal("--uniform and --costs cannot be combined");
    }

    let tuned = match &costs_path {
        Some(path) => spellmend_cli::load_cost_profile(std::path::Path::new(path))
            .unwrap_or_else(|e| spellmend_cli::fatal(&e.to_string())),
        None => TunedCosts::default(),
    };
    let model: &dyn CostModel = if uniform { &UniformCosts } else { &tuned };

    let query: Vec<char> = query.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();
    let table = distance_matrix(model, &query, &candidate);

    if show_matrix {
        print!("{table}");
    }
    println!("{}", table.total());
}
