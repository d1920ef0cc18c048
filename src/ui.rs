//! Plain-text rendering of board snapshots.

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{Board, Occupancy, Snapshot},
    config::BOARD_SIZE,
    game::Game,
};

const COLUMN_LABELS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// Glyph drawn for a cell state.
pub fn symbol(occupancy: Occupancy) -> char {
    match occupancy {
        Occupancy::Empty => '·',
        Occupancy::Ship => '■',
        Occupancy::Hit => 'X',
        Occupancy::Miss => 'O',
        Occupancy::OrientationPreview => '□',
    }
}

/// Rows numbered 1-8 down the left, columns lettered A-H along the bottom.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for (r, row) in snapshot.iter().enumerate() {
        let _ = write!(out, "{}  ", r + 1);
        let cells: Vec<String> = row.iter().map(|&occ| symbol(occ).to_string()).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out.push_str("   ");
    let labels: Vec<String> = COLUMN_LABELS.iter().map(|c| c.to_string()).collect();
    out.push_str(&labels.join(" "));
    out.push('\n');
    out
}

/// Render what the viewer may see of `board`.
pub fn render_board(board: &Board) -> String {
    render_snapshot(&board.snapshot())
}

/// Display the computer's board (top) and the player's board (bottom).
pub fn print_player_view(game: &Game) {
    println!("Computer's board ({} cells left):", game.computer_board().ship_count());
    print!("{}", render_board(game.computer_board()));
    println!("\nYour board ({} cells left):", game.human_board().ship_count());
    print!("{}", render_board(game.human_board()));
}

/// Display both boards with every ship revealed.
pub fn print_revealed(game: &Game) {
    println!("Computer's fleet:");
    print!("{}", render_snapshot(&game.computer_board().revealed_snapshot()));
    println!("\nYour fleet:");
    print!("{}", render_snapshot(&game.human_board().revealed_snapshot()));
}
