//! Table rendering of view states.

use roster::store::view::{self, RowView, ViewState};

use super::terminal::{is_narrow, Colorize};

const HEADERS: [&str; 6] = ["ID", "Name", "Email", "Role", "Status", "Created"];

/// Prints a view state to stdout.
///
/// Wide terminals get an aligned table, narrow ones a stacked layout. The
/// empty state prints its message instead of headers.
pub fn print(state: &ViewState) {
    match state {
        ViewState::Empty => println!("{}", view::EMPTY_MESSAGE.dim()),
        ViewState::Rows(rows) => {
            if is_narrow() {
                print_stacked(rows);
            } else {
                print_table(rows);
            }
        }
    }
}

fn print_table(rows: &[RowView]) {
    let data: Vec<[String; 6]> = rows.iter().map(columns).collect();

    // Determine column widths for alignment.
    let widths: Vec<usize> = HEADERS
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            data.iter()
                .map(|row| row[idx].len())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    for (header, &width) in HEADERS.iter().zip(&widths) {
        print!("{header:<width$}  ");
    }
    println!();

    for &width in &widths {
        print!("{:-<width$}  ", "");
    }
    println!();

    for row in data {
        for (value, &width) in row.iter().zip(&widths) {
            print!("{value:<width$}  ");
        }
        println!();
    }
}

fn print_stacked(rows: &[RowView]) {
    for row in rows {
        println!("#{} {}", row.id, row.name);
        println!("   {}", row.email.dim());
        println!("   {} • {} • {}", row.role, row.status, row.created.dim());
    }
}

fn columns(row: &RowView) -> [String; 6] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.email.clone(),
        row.role.clone(),
        row.status.clone(),
        row.created.clone(),
    ]
}
