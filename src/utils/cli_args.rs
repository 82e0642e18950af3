//! Command-line flag scanning for the solver binary.
//!
//! Flags are looked up by scanning the argument list, as the perf runners do.
//! Everything that is neither a flag nor a flag value is joined into the
//! board setup text.

use crate::game_state::chess_errors::{ChessRangerError, RangerResult};
use crate::utils::board_setup::BoardSetup;

pub const MAX_NODES_ENV: &str = "CHESS_RANGER_MAX_NODES";
pub const MOVETIME_ENV: &str = "CHESS_RANGER_MOVETIME_MS";

/// Flags that consume the following argument.
const VALUE_FLAGS: [&str; 3] = ["--max-nodes", "--movetime-ms", "--fen"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `None` when the setup has to be read from stdin.
    pub setup: Option<BoardSetup>,
    pub max_nodes: Option<u64>,
    pub movetime_ms: Option<u64>,
    pub render: bool,
}

/// Scan `args` (program name already stripped). `env` supplies fallbacks for
/// the numeric flags; pass `|key| std::env::var(key).ok()` in production.
pub fn parse_cli_args<F>(args: &[String], env: F) -> RangerResult<CliOptions>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(CliOptions {
        setup: setup_from_args(args)?,
        max_nodes: parse_arg_u64(args, "--max-nodes", env(MAX_NODES_ENV).as_deref())?,
        movetime_ms: parse_arg_u64(args, "--movetime-ms", env(MOVETIME_ENV).as_deref())?,
        render: args.iter().any(|a| a == "--render"),
    })
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> RangerResult<Option<&'a str>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| ChessRangerError::InvalidArgument(format!("{flag} needs a value"))),
        None => Ok(None),
    }
}

fn parse_arg_u64(args: &[String], flag: &str, fallback: Option<&str>) -> RangerResult<Option<u64>> {
    let raw = match flag_value(args, flag)? {
        Some(value) => Some(value),
        None => fallback,
    };

    raw.map(|value| {
        value.trim().parse::<u64>().map_err(|_| {
            ChessRangerError::InvalidArgument(format!("invalid value for {flag}: {value}"))
        })
    })
    .transpose()
}

/// `--fen` wins over free arguments; no setup at all yields `None`.
fn setup_from_args(args: &[String]) -> RangerResult<Option<BoardSetup>> {
    if let Some(fen) = flag_value(args, "--fen")? {
        return Ok(Some(BoardSetup::Fen(fen.to_owned())));
    }

    let mut free = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
        } else if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
        } else if !arg.starts_with("--") {
            free.push(arg.as_str());
        }
    }

    if free.is_empty() {
        Ok(None)
    } else {
        Ok(Some(BoardSetup::detect(&free.join(" "))))
    }
}
