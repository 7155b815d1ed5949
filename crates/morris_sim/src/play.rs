//! Interactive terminal game against the bot.

use anyhow::{Context, Result};
use morris_core::{Action, Bot, Game, GameStatus, Phase, Player, Position};
use std::io::{BufRead, Write, stdin, stdout};
use tracing::debug;

/// Runs one game at the terminal. The human types cells as coordinates
/// ("b2"), indices ("4"), or names ("center").
pub fn run(seed: Option<u64>, bot_first: bool) -> Result<()> {
    let human = if bot_first { Player::Two } else { Player::One };
    let mut bot = match seed {
        Some(s) => Bot::seeded(human.opponent(), s),
        None => Bot::new(human.opponent()),
    };
    let mut game = Game::new();

    println!("You play {} against the bot's {}.", human.mark(), human.opponent().mark());
    let stdin = stdin();
    let mut lines = stdin.lock().lines();

    while game.status() == GameStatus::InProgress {
        let mover = game.current_player();
        if mover == human {
            println!("{}", game.board().display());
            let action = match read_action(&mut lines, &game, human)? {
                Some(action) => action,
                None => {
                    println!("Game abandoned.");
                    return Ok(());
                }
            };
            if let Err(err) = game.apply(action) {
                println!("Illegal move: {err}");
                continue;
            }
        } else {
            let action = bot_action(&mut bot, &game)?;
            debug!(%action, "bot move");
            println!("Bot plays {action}.");
            game.apply(action).context("applying bot move")?;
        }
    }

    println!("{}", game.board().display());
    if let GameStatus::Won(winner) = game.status() {
        if winner == human {
            println!("You win.");
        } else {
            println!("The bot wins.");
        }
    }
    Ok(())
}

fn bot_action(bot: &mut Bot, game: &Game) -> Result<Action> {
    let piece = bot.piece();
    match game.phase(piece) {
        Phase::Placing => {
            let at = bot
                .choose_placement(game.board(), game.remaining(piece.opponent()))
                .context("bot placement")?;
            Ok(Action::Place { at })
        }
        Phase::Moving => {
            let (from, to) = bot.choose_shift(game.board()).context("bot shift")?;
            Ok(Action::Shift { from, to })
        }
    }
}

/// Prompts until the input parses. Returns `None` on end of input or
/// "quit"; legality is left to [`Game::apply`].
fn read_action(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    game: &Game,
    human: Player,
) -> Result<Option<Action>> {
    loop {
        match game.phase(human) {
            Phase::Placing => print!("place ({} left)> ", game.remaining(human)),
            Phase::Moving => print!("move (from to)> "),
        }
        stdout().flush().context("flushing prompt")?;

        let line = match lines.next() {
            Some(line) => line.context("reading input")?,
            None => return Ok(None),
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        match (game.phase(human), words.as_slice()) {
            (_, []) => continue,
            (_, ["quit" | "q"]) => return Ok(None),
            (Phase::Placing, [cell]) => match Position::parse(cell) {
                Some(at) => return Ok(Some(Action::Place { at })),
                None => println!("Unknown cell {cell:?}; try a coordinate like b2."),
            },
            (Phase::Moving, [from, to]) => match (Position::parse(from), Position::parse(to)) {
                (Some(from), Some(to)) => return Ok(Some(Action::Shift { from, to })),
                _ => println!("Unknown cell; try coordinates like a1 b2."),
            },
            (Phase::Placing, _) => println!("Name one cell to place on, or quit."),
            (Phase::Moving, _) => println!("Name a piece and its destination, or quit."),
        }
    }
}
