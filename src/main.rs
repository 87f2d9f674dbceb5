use anyhow::{anyhow, Result};
use tracing::debug;

use std::io::{stdin, stdout, BufRead, Write};

use connect4_minimax::{board::*, solver::find_best_move};

// the bot always plays second
const BOT: Player = Player::Two;

fn read_line() -> Result<String> {
    stdout().flush()?;
    let stdin = stdin();
    let mut input = stdin.lock();
    read_line_from(&mut input)
}

fn read_line_from<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buffer = String::new();
    if reader.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("stdin closed"));
    }
    Ok(buffer)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    println!("Welcome to Connect 4\n");

    loop {
        // choose game mode
        let vs_bot = loop {
            print!("Select game mode:\n1. One player (vs bot)\n2. Two players\nEnter your choice (1-2): ");
            match read_line()?.trim() {
                "1" => break true,
                "2" => break false,
                _ => println!("Invalid input, try again"),
            }
        };
        debug!(vs_bot, "starting game");

        play_game(vs_bot)?;

        // play again?
        let again = loop {
            print!("Play again? y/n: ");
            match read_line()?.to_lowercase().chars().next() {
                Some('y') => break true,
                Some('n') => break false,
                _ => println!("Unknown answer given"),
            }
        };
        if !again {
            break;
        }
    }
    Ok(())
}

fn play_game(vs_bot: bool) -> Result<()> {
    let mut board = Board::new();
    let mut player = Player::One;

    loop {
        board.display()?;

        let next_move = if vs_bot && player == BOT {
            println!("Bot is thinking...");
            match find_best_move(&mut board, BOT) {
                Some(column) => {
                    println!("Bot plays column {}", column + 1);
                    column + 1
                }
                // a full board is reported as a draw before the bot is asked
                None => return Ok(()),
            }
        } else {
            print!("Player {} move input > ", player.symbol());
            let input = read_line()?;
            match input.trim().parse::<usize>() {
                Err(_) => {
                    println!("Invalid number: {}", input.trim());
                    continue;
                }
                Ok(column) => column,
            }
        };

        match board.play_checked(next_move, player) {
            Err(err) => {
                println!("{}", err);
                // try the move again
                continue;
            }
            Ok(GameState::Playing) => player = player.opponent(),

            // end states
            Ok(GameState::Win(winner)) => {
                board.display()?;
                if vs_bot && winner == BOT {
                    println!("Bot wins!");
                } else {
                    println!("Player {} wins!", winner.symbol());
                }
                return Ok(());
            }
            Ok(GameState::Draw) => {
                board.display()?;
                println!("It's a draw!");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;

    use super::read_line_from;

    #[test]
    fn input_lines() -> Result<()> {
        let mut input = &b"4\ny\n"[..];
        assert_eq!(read_line_from(&mut input)?, "4\n");
        assert_eq!(read_line_from(&mut input)?, "y\n");
        // end of input is an error rather than an endless prompt
        assert!(read_line_from(&mut input).is_err());
        Ok(())
    }
}
