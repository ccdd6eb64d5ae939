//! Terminal Output
//!
//! Everything the player reads. Writers are generic so the session can be
//! driven against in-memory buffers.

use std::io::{self, Write};

use crate::game::engine::ResolvedRound;
use crate::game::input::{EXIT_TOKEN, HELP_TOKEN};
use crate::game::moves::{MoveSet, MoveSetError};
use crate::game::rules::RuleMatrix;
use crate::proof::commitment::Commitment;

/// Top-left cell of the rule table.
pub const TABLE_CORNER: &str = "You \\ Computer";

/// Narrowest outcome column ("lose", "draw").
const MIN_CELL_WIDTH: usize = 4;

/// Every violation with its description and a corrective example.
pub fn write_violations<W: Write>(out: &mut W, error: &MoveSetError) -> io::Result<()> {
    for violation in &error.violations {
        writeln!(out, "Error: {}", violation.title())?;
        writeln!(out, "    Description: {}", violation.description())?;
        writeln!(out, "    Correct example: {}", violation.example())?;
    }
    Ok(())
}

/// Commitment line, shown before the menu.
pub fn write_commitment<W: Write>(out: &mut W, commitment: &Commitment) -> io::Result<()> {
    writeln!(out, "HMAC: {}", commitment)
}

/// Numbered move menu.
pub fn write_menu<W: Write>(out: &mut W, moves: &MoveSet) -> io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (id, name) in moves.iter() {
        writeln!(out, "{} - {}", id.menu_number(), name)?;
    }
    writeln!(out, "{} - exit", EXIT_TOKEN)?;
    writeln!(out, "{} - help", HELP_TOKEN)
}

/// Outcome table: rows are your move, columns the computer's.
pub fn write_rule_table<W: Write>(
    out: &mut W,
    moves: &MoveSet,
    rules: &RuleMatrix,
) -> io::Result<()> {
    let names = moves.names();
    let first = names
        .iter()
        .map(|n| n.chars().count())
        .chain(std::iter::once(TABLE_CORNER.len()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = names
        .iter()
        .map(|n| n.chars().count().max(MIN_CELL_WIDTH))
        .collect();

    let border = separator(first, &widths);

    writeln!(out, "{}", border)?;
    write_row(out, TABLE_CORNER, first, names.iter().map(String::as_str), &widths)?;
    writeln!(out, "{}", border)?;
    for (id, name) in moves.iter() {
        write_row(out, name, first, rules.row(id).iter().map(|o| o.label()), &widths)?;
    }
    writeln!(out, "{}", border)?;
    writeln!(out, "Each cell is the result for you.")
}

fn separator(first: usize, widths: &[usize]) -> String {
    let mut line = format!("+{}+", "-".repeat(first + 2));
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn write_row<'a, W, I>(
    out: &mut W,
    head: &str,
    first: usize,
    cells: I,
    widths: &[usize],
) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a str>,
{
    let mut line = format!("| {:<first$} |", head, first = first);
    for (cell, width) in cells.zip(widths) {
        line.push_str(&format!(" {:<width$} |", cell, width = *width));
    }
    writeln!(out, "{}", line)
}

/// Round result, then the key. Order matters for the player checking the HMAC.
pub fn write_resolution<W: Write>(out: &mut W, round: &ResolvedRound<'_>) -> io::Result<()> {
    writeln!(out, "Your move: {}", round.player_name())?;
    writeln!(out, "Computer move: {}", round.opponent_name())?;
    writeln!(out, "You {}!", round.outcome())?;
    writeln!(out, "HMAC key: {}", round.revealed_key().to_hex())
}

// =============================================================================
// TESTS
// =============================================================================
