//! Review command - interactive correction of a parsed receipt.
//!
//! Drives the ledger's staged-edit lifecycle from a line-oriented prompt.
//! The "which row is being edited" pointer lives here, not in the ledger:
//! the core keys drafts by index and this loop decides which one the user
//! is talking to.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use billy_core::{ItemField, Ledger, LedgerView, extract_items, format_total};

use super::{parse_total_arg, read_input, render_text};

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    /// Receipt OCR text dump
    #[arg(required = true)]
    input: PathBuf,

    /// Receipt total as printed on the bill
    #[arg(short, long)]
    total: Option<String>,
}

pub fn run(args: ReviewArgs) -> anyhow::Result<()> {
    let total = args.total.as_deref().map(parse_total_arg).transpose()?;

    let raw_text = read_input(&args.input)?;
    let ledger = Ledger::new(extract_items(&raw_text), total);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let view = review_loop(ledger, stdin.lock(), stdout.lock())?;

    print!("{}", render_text(&view));
    Ok(())
}

/// Run the interactive session until `done` or end of input, returning the
/// final committed view.
fn review_loop(
    mut ledger: Ledger,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<LedgerView> {
    // Caller-held single-active-edit pointer.
    let mut active: Option<usize> = None;

    writeln!(out, "{}", render_text(&ledger.view()))?;
    writeln!(
        out,
        "Commands: show | edit <n> | set qty|desc|price <value> | commit | cancel | total <value> | done"
    )?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(line, "review command");

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "show" => writeln!(out, "{}", render_text(&ledger.view()))?,
            "edit" => {
                // Rows are 1-based at the prompt, matching the printed table.
                match rest.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                    Some(index) => match ledger.begin_edit(index) {
                        Ok(()) => active = Some(index),
                        Err(err) => complain(&mut out, &err.to_string())?,
                    },
                    None => complain(&mut out, &format!("not a row number: {rest}"))?,
                }
            }
            "set" => {
                let Some(index) = active else {
                    complain(&mut out, "no row is being edited; use `edit <n>` first")?;
                    continue;
                };
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = match name {
                    "qty" => ItemField::Quantity,
                    "desc" => ItemField::Description,
                    "price" => ItemField::UnitPrice,
                    _ => {
                        complain(&mut out, &format!("unknown field: {name}"))?;
                        continue;
                    }
                };
                if let Err(err) = ledger.update_field(index, field, value.trim()) {
                    complain(&mut out, &err.to_string())?;
                }
            }
            "commit" => match active.take() {
                Some(index) => match ledger.commit_edit(index) {
                    Ok(outcome) => {
                        for field in outcome.rejected_fields() {
                            writeln!(
                                out,
                                "{} kept previous value for {:?}: staged input did not parse",
                                style("!").yellow(),
                                field
                            )?;
                        }
                    }
                    Err(err) => complain(&mut out, &err.to_string())?,
                },
                None => complain(&mut out, "nothing to commit")?,
            },
            "cancel" => match active.take() {
                Some(index) => {
                    if let Err(err) = ledger.cancel_edit(index) {
                        complain(&mut out, &err.to_string())?;
                    }
                }
                None => complain(&mut out, "nothing to cancel")?,
            },
            "total" => {
                ledger.begin_edit_total();
                ledger.update_total(rest)?;
                let outcome = ledger.commit_total()?;
                if !outcome.status.is_applied() {
                    writeln!(
                        out,
                        "{} kept previous total {}: staged input did not parse",
                        style("!").yellow(),
                        format_total(outcome.total)
                    )?;
                }
            }
            "done" | "quit" => break,
            _ => complain(&mut out, &format!("unknown command: {command}"))?,
        }
    }

    Ok(ledger.view())
}

fn complain(out: &mut impl Write, message: &str) -> std::io::Result<()> {
    writeln!(out, "{} {message}", style("!").red())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const RECEIPT: &str = "2 Cheeseburger $9.50\n1 Fries 3.00\n";

    fn run_session(script: &str) -> LedgerView {
        let ledger = Ledger::from(extract_items(RECEIPT));
        let mut out = Vec::new();
        review_loop(ledger, Cursor::new(script.to_string()), &mut out).unwrap()
    }

    #[test]
    fn test_edit_and_commit() {
        let view = run_session("edit 1\nset qty 3\nset price 10.00\ncommit\ndone\n");
        assert_eq!(view.items[0].quantity, 3);
        assert_eq!(view.items[0].unit_price.to_string(), "10.00");
    }

    #[test]
    fn test_cancel_keeps_committed_row() {
        let view = run_session("edit 2\nset desc Onion Rings\ncancel\ndone\n");
        assert_eq!(view.items[1].description, "Fries");
    }

    #[test]
    fn test_total_command() {
        let view = run_session("total 28.00\ndone\n");
        assert_eq!(view.total.unwrap().to_string(), "28.00");
    }

    #[test]
    fn test_invalid_total_keeps_previous_value() {
        let view = run_session("total 28.00\ntotal garbage\ndone\n");
        assert_eq!(view.total.unwrap().to_string(), "28.00");
    }

    #[test]
    fn test_invalid_row_number_is_reported_not_fatal() {
        let view = run_session("edit 99\nedit abc\nset qty 5\ndone\n");
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.items[1].quantity, 1);
    }

    #[test]
    fn test_session_ends_on_eof() {
        let view = run_session("edit 1\nset qty 7\ncommit\n");
        assert_eq!(view.items[0].quantity, 7);
    }
}
