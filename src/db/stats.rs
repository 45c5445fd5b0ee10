use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path.display(), RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL PRODUCT CODES
    //
    let total = queries::count(&pool.conn)?;
    println!(
        "{}• Product codes:{} {}{}{}",
        CYAN, RESET, GREEN, total, RESET
    );

    //
    // 3) BREAKDOWN BY DISCOUNT CODE
    //
    let mut stmt = pool.conn.prepare(
        "SELECT discountCode, COUNT(*) FROM PRODUCT_CODE
         GROUP BY discountCode
         ORDER BY discountCode ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    println!("{}• By discount code:{}", CYAN, RESET);
    let mut any = false;
    for r in rows {
        let (discount, n) = r?;
        println!("    {}: {}", discount, n);
        any = true;
    }
    if !any {
        println!("    {GREY}--{RESET}");
    }

    //
    // 4) LAST CHANGE
    //
    let last_change: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM log
             WHERE operation IN ('insert', 'update', 'edit', 'del')
             ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!(
        "{}• Last change:{} {}",
        CYAN,
        RESET,
        last_change.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
