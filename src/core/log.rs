use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// Colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "insert" => Colour::Green,
        "update" | "edit" => Colour::Yellow,
        "del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(e: &LogEntry) -> String {
    let color = color_for_operation(&e.operation);
    let op = color.paint(e.operation.as_str()).to_string();
    let text = if e.target.is_empty() {
        op
    } else {
        format!("{op} ({})", e.target)
    };

    let visible = strip_ansi(&text);
    if visible.chars().count() <= MAX_OP_WIDTH {
        return text;
    }

    // Truncate the plain text, then re-colour the operation word.
    let mut cut: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
    cut.push_str("...");
    match cut.split_once(' ') {
        Some((word, rest)) => format!("{} {}", color.paint(word), rest),
        None => color.paint(cut.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let rendered: Vec<String> = entries.iter().map(op_target).collect();
        let op_w = rendered
            .iter()
            .map(|s| strip_ansi(s).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (e, op) in entries.iter().zip(&rendered) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(op).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                op,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
