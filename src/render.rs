use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use sliding_puzzle::State;

use std::io::{stdout, Write};

/// Draws the board, colouring tiles that already sit in their goal cell
pub fn draw<const N: usize>(state: &State<N>) -> Result<()> {
    let mut stdout = stdout();
    let goal = State::<N>::goal();
    let width = (N * N - 1).to_string().len();

    for (row, goal_row) in state.rows().iter().zip(goal.rows().iter()) {
        for (&tile, &goal_tile) in row.iter().zip(goal_row.iter()) {
            let text = format!(" {:>width$} ", tile, width = width);
            let cell = match tile {
                0 => style(text).on(Color::DarkGrey).with(Color::Black),
                _ if tile == goal_tile => style(text)
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(Color::Green),
                _ => style(text)
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(Color::White),
            };
            stdout.queue(PrintStyledContent(cell))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
