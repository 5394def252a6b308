//! Route command handler.

use std::io;

use anyhow::{Context, Result};

use klroute_cli::output::{render_route, same_landmark_warning, OutputFormat};
use klroute_cli::terminal::ColorPalette;
use klroute_lib::{plan_route, Error as LibError, Graph, RouteRequest, RouteSummary};

/// Plan and print the shortest route between two landmarks.
///
/// Asking for a route from a landmark to itself prints a warning instead of
/// a route and still exits successfully.
pub fn handle_route_command(
    graph: &Graph,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let start = graph.resolve(from).map_err(handle_route_failure)?;
    let goal = graph.resolve(to).map_err(handle_route_failure)?;
    if start == goal {
        eprintln!(
            "{}",
            same_landmark_warning(graph.label(start).unwrap_or(from), ColorPalette::detect())
        );
        return Ok(());
    }

    let request = RouteRequest::new(from, to);
    let plan = plan_route(graph, &request).map_err(handle_route_failure)?;
    let summary =
        RouteSummary::from_plan(&plan).context("failed to build route summary for display")?;

    render_route(&mut io::stdout().lock(), &summary, format)
        .context("failed to write route output")
}

fn handle_route_failure(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownVertex { name, suggestions } => {
            anyhow::anyhow!(format_unknown_landmark_message(&name, &suggestions))
        }
        LibError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal))
        }
        other => anyhow::Error::new(other),
    }
}

pub(crate) fn format_unknown_landmark_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown landmark '{}'.", name);
    if let [suggestion] = suggestions {
        message.push_str(&format!(" Did you mean '{suggestion}'?"));
    } else if !suggestions.is_empty() {
        let joined = suggestions
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str(&format!(" Did you mean one of: {}?", joined));
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str) -> String {
    format!(
        "No route found between {} and {}. The landmarks are not connected in this network.",
        start, goal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_landmark_without_suggestions() {
        assert_eq!(
            format_unknown_landmark_message("Nowhere", &[]),
            "Unknown landmark 'Nowhere'."
        );
    }

    #[test]
    fn unknown_landmark_with_one_suggestion() {
        let message = format_unknown_landmark_message("KL Towr", &["KL Tower".to_string()]);
        assert_eq!(message, "Unknown landmark 'KL Towr'. Did you mean 'KL Tower'?");
    }

    #[test]
    fn unknown_landmark_with_many_suggestions() {
        let message = format_unknown_landmark_message(
            "KL",
            &["KLCC".to_string(), "KL Tower".to_string()],
        );
        assert!(message.ends_with("Did you mean one of: 'KLCC', 'KL Tower'?"));
    }

    #[test]
    fn route_not_found_names_both_ends() {
        let message = format_route_not_found_message("KLCC", "Putrajaya");
        assert!(message.starts_with("No route found between KLCC and Putrajaya."));
    }
}
