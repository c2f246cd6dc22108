//! Console formatting helpers for CLI commands

use crate::{
    engine::{Pattern, StrategyTable},
    hexapawn::{Board, Signature},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a signature as three rows.
pub fn format_signature(signature: &Signature) -> String {
    let text = signature.encode();
    format!("{}/{}/{}", &text[0..3], &text[3..6], &text[6..9])
}

/// One-line description of a pattern.
pub fn format_pattern(index: usize, pattern: &Pattern) -> String {
    let moves: Vec<String> = pattern
        .relocations()
        .iter()
        .map(|relocation| relocation.to_string())
        .collect();
    let moves = if moves.is_empty() {
        "(no moves)".to_string()
    } else {
        moves.join(", ")
    };
    format!(
        "  #{index:<2} {}  mirror {}  {moves}",
        format_signature(pattern.signature()),
        format_signature(pattern.mirrored())
    )
}

pub fn print_table(table: &StrategyTable) {
    for (turn, patterns) in table.turns() {
        println!("\nTurn {turn}:");
        for (index, pattern) in patterns.iter().enumerate() {
            println!("{}", format_pattern(index, pattern));
        }
    }
}

pub fn print_board(board: &Board) {
    println!();
    print!("{board}");
}
