//! Interactive prompt.
//!
//! Reads one text-form command per line and re-renders the storefront after
//! each. `show` re-renders without a command, `help` lists the commands,
//! `quit`/`exit` (or end of input) leaves. Lines starting with `#` are
//! ignored so command files can be piped in.

use std::io::{BufRead, Write};

use shop_cart_storefront::{Command, Outcome, Session};

use super::render::{Format, write_view};

const HELP: &str = "\
commands:
  fav <id>          toggle favorite
  add <id>          add one to cart
  inc <id>          quantity +1
  dec <id>          quantity -1
  qty <id> <delta>  change quantity by delta
  rm <id>           remove from cart
  clear             empty the cart
  filter on|off     favorites-only listing
  show              render again
  quit              leave";

/// Run the prompt until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Bad commands
/// are reported on `out` and do not end the loop.
pub fn run(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    write_view(out, &session.view(), format)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "" => continue,
            _ if line.starts_with('#') => continue,
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "show" => write_view(out, &session.view(), format)?,
            _ => match line.parse::<Command>() {
                Ok(command) => {
                    if session.dispatch(&command) == Outcome::Ignored {
                        writeln!(out, "(no change: {command})")?;
                    }
                    write_view(out, &session.view(), format)?;
                }
                Err(e) => writeln!(out, "error: {e} (try 'help')")?,
            },
        }
        out.flush()?;
    }

    Ok(())
}
