use anyhow::{anyhow, Result};

use std::io::{stdin, stdout, Write};

use sliding_puzzle::*;

mod render;

fn main() -> Result<()> {
    println!("Sliding puzzle\n");

    // the board comes from the command line, or from a prompt if none was given
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        prompt("Board input (row by row, 0 for the blank) > ")?
    } else {
        args.join(" ")
    };

    let cell_count = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .count();
    match cell_count {
        9 => play(input.parse::<State3x3>()?),
        16 => play(input.parse::<State4x4>()?),
        n => Err(anyhow!(
            "expected 9 cells for a 3x3 board or 16 for a 4x4 board, got {}",
            n
        )),
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer.trim().to_string())
}

fn play<const N: usize>(mut state: State<N>) -> Result<()> {
    if !state.is_valid() {
        println!(
            "Invalid board, every value from 0 to {} must appear exactly once",
            N * N - 1
        );
        return Ok(());
    }
    if !state.is_solvable()? {
        render::draw(&state)?;
        println!("This board can never reach the goal.");
        return Ok(());
    }

    let mut moves = String::new();
    loop {
        render::draw(&state)?;
        if state.is_goal_state() {
            let played = if moves.is_empty() { "none" } else { moves.as_str() };
            println!("Solved! Moves played: {}", played);
            break;
        }

        let children = state.children()?;
        let labels: Vec<String> = children.iter().map(|(_, dir)| dir.to_string()).collect();
        let answer = prompt(&format!("Moves {} (q to quit) > ", labels.join(" ")))?;

        match answer.to_lowercase().chars().next() {
            Some('q') => break,
            Some(label) => match children.iter().find(|(_, dir)| dir.label() == label) {
                Some(&(child, dir)) => {
                    state = child;
                    moves.push(dir.label());
                }
                None => println!("'{}' is not a legal move here", label),
            },
            None => println!("Unknown answer given"),
        }
    }
    Ok(())
}
