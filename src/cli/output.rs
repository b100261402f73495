//! Output formatting and progress spinners for the CLI

use std::io::{self, Write};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    session::Status,
    tictactoe::{Board, SIZE},
};

/// Create a spinner for long-running tasks; hidden when `enabled` is false
pub fn create_spinner(message: &str, enabled: bool) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board as a framed grid with row and column indices
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");
    for row in 0..SIZE {
        let cells: Vec<String> = (0..SIZE)
            .map(|col| {
                let c = board.get(row, col).to_char();
                format!(" {} ", if c == '.' { ' ' } else { c })
            })
            .collect();
        out.push_str(&format!("{row}  {}\n", cells.join("|")));
        if row + 1 < SIZE {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// Write a board to `out` followed by a blank line
pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out, "\n{}", render_board(board))
}

/// Message shown when a game ends; `None` while it is still running
pub fn status_message(status: Status) -> Option<&'static str> {
    match status {
        Status::ComputerWon => Some("Computer won! Better luck next time."),
        Status::HumanWon => Some("You won! You have done the impossible."),
        Status::Draw => Some("Tie!"),
        Status::InProgress => None,
    }
}
