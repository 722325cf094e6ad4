//! Line-oriented console prompt.
//!
//! Each line is either a `FROM-TO` query, answered with the rendered route
//! outcome, or `exit`/`quit` to leave. End of input also ends the session.

use std::io::{self, BufRead, Write};

use farepath_lib::{find_cheapest_path, RouteGraph};
use tracing::debug;

/// Prompt printed before every line is read.
pub const PROMPT: &str = "Enter route (FROM-TO) or 'exit' to quit:";

/// Reply for lines that are neither a query nor an exit command.
pub const INVALID_FORMAT: &str = "Invalid format. Use FROM-TO.";

/// Split a `FROM-TO` query into its two identifiers.
///
/// Returns `None` unless the line contains exactly one `-`. Either side may
/// be empty; the search reports that as invalid input.
pub fn parse_query(line: &str) -> Option<(&str, &str)> {
    let (from, to) = line.split_once('-')?;
    if to.contains('-') {
        return None;
    }
    Some((from, to))
}

fn is_exit_command(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Run the prompt loop until `exit`, `quit` or end of input.
///
/// Returns the number of queries answered.
pub fn run_console<R: BufRead, W: Write>(
    graph: &RouteGraph,
    mut input: R,
    mut output: W,
) -> io::Result<usize> {
    let mut answered = 0;
    let mut line = String::new();

    loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!(answered, "console input closed");
            break;
        }
        let entry = line.trim_end_matches(['\r', '\n']);

        if is_exit_command(entry) {
            break;
        }

        match parse_query(entry) {
            Some((from, to)) => {
                let outcome = find_cheapest_path(graph, from, to);
                debug!(from, to, outcome = outcome.label(), "console query");
                writeln!(output, "{outcome}")?;
                answered += 1;
            }
            None => writeln!(output, "{INVALID_FORMAT}")?,
        }
    }

    Ok(answered)
}
