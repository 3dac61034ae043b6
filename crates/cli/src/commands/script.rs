//! Apply commands from arguments or a script file.
//!
//! Scripts are a YAML (or JSON) list whose entries are either tagged command
//! objects or text-form commands:
//!
//! ```yaml
//! - fav 3
//! - type: add_to_cart
//!   product_id: 3
//! - qty 2 -4
//! ```
//!
//! The whole input is parsed before any command is applied, so a typo
//! leaves the session untouched.

use std::path::Path;

use serde_yaml::Value;
use shop_cart_storefront::{Command, Outcome, ParseCommandError, Session};
use thiserror::Error;
use tracing::info;

/// Errors from loading or parsing a command script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid script: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Command {index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ParseCommandError,
    },
    #[error("Command {index}: {source}")]
    Step {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parse text-form commands; `index` in errors is 1-based.
///
/// # Errors
///
/// Returns `ScriptError::Parse` for the first line that does not parse.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Command>, ScriptError> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.as_ref()
                .parse()
                .map_err(|source| ScriptError::Parse {
                    index: i + 1,
                    source,
                })
        })
        .collect()
}

/// Parse a YAML or JSON script.
///
/// String entries use the text form; anything else must be a tagged command
/// object. `index` in errors is 1-based.
///
/// # Errors
///
/// Returns `ScriptError::Yaml` if the document is not a list,
/// `ScriptError::Parse` for a bad text command and `ScriptError::Step` for a
/// malformed command object.
pub fn parse_script(content: &str) -> Result<Vec<Command>, ScriptError> {
    let steps: Vec<Value> = serde_yaml::from_str(content)?;
    steps
        .into_iter()
        .enumerate()
        .map(|(i, step)| parse_step(i + 1, step))
        .collect()
}

fn parse_step(index: usize, step: Value) -> Result<Command, ScriptError> {
    match step {
        Value::String(text) => text
            .parse()
            .map_err(|source| ScriptError::Parse { index, source }),
        other => serde_yaml::from_value(other).map_err(|source| ScriptError::Step { index, source }),
    }
}

/// Parse and apply text-form commands.
///
/// # Errors
///
/// Returns an error if any command fails to parse; nothing is applied then.
pub fn run_lines<S: AsRef<str>>(session: &mut Session, lines: &[S]) -> Result<(), ScriptError> {
    let commands = parse_lines(lines)?;
    apply(session, &commands);
    Ok(())
}

/// Load, parse and apply a script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed; nothing is applied then.
pub fn replay_file(session: &mut Session, path: &Path) -> Result<(), ScriptError> {
    info!(path = %path.display(), "Loading command script");
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let commands = parse_script(&content)?;
    apply(session, &commands);
    Ok(())
}

fn apply(session: &mut Session, commands: &[Command]) {
    let outcomes = session.dispatch_all(commands);
    let ignored = outcomes.iter().filter(|o| **o == Outcome::Ignored).count();
    info!(
        applied = outcomes.len() - ignored,
        ignored, "Commands applied"
    );
}

#[cfg(test)]
mod tests {
    use shop_cart_storefront::{Cart, seed};
    use shop_cart_storefront::views::StorefrontView;

    use super::*;

    #[test]
    fn test_parse_script_mixed_forms() {
        let script = "
- fav 3
- type: add_to_cart
  product_id: 3
- qty 2 -4
- type: set_favorites_only
  enabled: true
";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[1].to_string(), "add 3");
        assert_eq!(commands[2].to_string(), "qty 2 -4");
        assert_eq!(commands[3].to_string(), "filter on");
    }

    #[test]
    fn test_parse_script_json() {
        let script = r#"[{"type": "clear_cart"}, "add 1"]"#;
        let commands = parse_script(script).unwrap();
        assert_eq!(commands, vec![Command::ClearCart, "add 1".parse().unwrap()]);
    }

    #[test]
    fn test_parse_script_reports_bad_line() {
        let err = parse_script("- add 1\n- buy 2\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse { index: 2, .. }));
    }

    #[test]
    fn test_parse_script_reports_bad_object() {
        let script = "
- add 1
- type: add_to_cart
  product_id: abc
";
        let err = parse_script(script).unwrap_err();
        assert!(matches!(err, ScriptError::Step { index: 2, .. }));
        assert!(err.to_string().starts_with("Command 2: "));
        assert!(!err.to_string().contains("untagged"));

        let err = parse_script("- type: buy_now\n  product_id: 1\n").unwrap_err();
        assert!(matches!(err, ScriptError::Step { index: 1, .. }));
        assert!(err.to_string().contains("buy_now"), "{err}");
    }

    #[test]
    fn test_parse_script_rejects_non_command_scalars() {
        let err = parse_script("- add 1\n- 42\n").unwrap_err();
        assert!(matches!(err, ScriptError::Step { index: 2, .. }));
    }

    #[test]
    fn test_parse_script_not_a_list() {
        assert!(matches!(parse_script("add: 1"), Err(ScriptError::Yaml(_))));
    }

    #[test]
    fn test_run_lines_is_all_or_nothing() {
        let mut session = Session::new(seed::catalog(), Cart::new());
        let result = run_lines(&mut session, &["add 1", "add x"]);

        assert!(matches!(result, Err(ScriptError::Parse { index: 2, .. })));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_run_lines_applies_in_order() {
        let mut session = Session::new(seed::catalog(), Cart::new());
        run_lines(&mut session, &["add 4", "add 4", "add 9", "dec 4"]).unwrap();

        let view = StorefrontView::new(&session);
        assert_eq!(view.cart.total, "68,000원");
    }

    #[test]
    fn test_replay_missing_file() {
        let mut session = Session::default();
        let err = replay_file(&mut session, Path::new("/nonexistent/script.yaml")).unwrap_err();
        assert!(matches!(err, ScriptError::Read { .. }));
    }
}
