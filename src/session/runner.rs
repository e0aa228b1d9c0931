//! The interactive arcade loop.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::core::{ArcadeConfig, GameKind, GameRng, MAX_DIMENSION};
use crate::rules::MoveOutcome;

use super::arcade::ArcadeGame;

/// Choice offered after each game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextAction {
    Replay,
    Switch,
    Quit,
}

impl NextAction {
    fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(NextAction::Replay),
            2 => Some(NextAction::Switch),
            3 => Some(NextAction::Quit),
            _ => None,
        }
    }
}

/// Drives menus and games over any line-oriented input and text output.
///
/// End of input ends the session as if the player chose to quit; a game in
/// progress is quit first so its summary is still printed.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: ArcadeConfig,
    rng: GameRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: ArcadeConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(seed = rng.seed(), "session started");
        Self {
            input,
            output,
            config,
            rng,
        }
    }

    /// Hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run menus and games until the player quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.welcome()?;

        let mut preselected = self.config.first_game;
        loop {
            let kind = match preselected.take() {
                Some(kind) => kind,
                None => match self.choose_game()? {
                    Some(kind) => kind,
                    None => return self.farewell(),
                },
            };

            loop {
                let Some(names) = self.ask_names(kind)? else {
                    return self.farewell();
                };
                let Some(mut game) = self.setup(kind, &names)? else {
                    return self.farewell();
                };
                if !self.play(&mut game)? {
                    return self.farewell();
                }

                match self.next_action()? {
                    Some(NextAction::Replay) => continue,
                    Some(NextAction::Switch) => break,
                    Some(NextAction::Quit) | None => return self.farewell(),
                }
            }
        }
    }

    fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Welcome to Terminal Game Arcade !!!! ===")?;
        writeln!(
            self.output,
            "Please follow the instructions in order to proceed! Press q to exit."
        )
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nThank you for playing!")?;
        self.output.flush()
    }

    fn error(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "\nError: {message}\n")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn choose_game(&mut self) -> io::Result<Option<GameKind>> {
        loop {
            writeln!(self.output, "\nWhich game would you like to play?")?;
            for kind in GameKind::ALL {
                writeln!(self.output, "{}. {}", kind.menu_index(), kind)?;
            }

            let Some(line) = self.prompt("\nYour choice: ")? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>().ok().and_then(GameKind::from_menu_index) {
                Some(kind) => {
                    debug!(%kind, "game chosen");
                    return Ok(Some(kind));
                }
                None => self.error("Not a valid game please try again!")?,
            }
        }
    }

    fn ask_names(&mut self, kind: GameKind) -> io::Result<Option<Vec<String>>> {
        let seats = kind.player_count();
        let mut names = Vec::with_capacity(seats);
        for seat in 1..=seats {
            let question = if seats == 1 {
                "What is your name?: ".to_string()
            } else {
                format!("What is Player {seat}'s name?: ")
            };
            let Some(answer) = self.prompt(&question)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            names.push(if answer.is_empty() {
                format!("Player {seat}")
            } else {
                answer.to_string()
            });
        }
        Ok(Some(names))
    }

    /// Read one dimension; `Ok(Some(None))` means the answer was rejected.
    fn ask_dimension(&mut self, label: &str) -> io::Result<Option<Option<i64>>> {
        let Some(answer) = self.prompt(label)? else {
            return Ok(None);
        };
        let max = self.config.max_input_dimension;
        match answer.trim().parse::<i64>() {
            Ok(value) if (1..=max).contains(&value) => Ok(Some(Some(value))),
            _ => {
                self.error("invalid input")?;
                Ok(Some(None))
            }
        }
    }

    fn ask_dimensions(&mut self) -> io::Result<Option<(i64, i64)>> {
        loop {
            writeln!(self.output, "\nChoose your board dimensions M x N")?;
            writeln!(
                self.output,
                "(Each dimension has to be greater than 0 and at most {MAX_DIMENSION})"
            )?;

            let Some(rows) = self.ask_dimension("Rows: ")? else {
                return Ok(None);
            };
            let Some(rows) = rows else { continue };
            let Some(columns) = self.ask_dimension("Columns: ")? else {
                return Ok(None);
            };
            let Some(columns) = columns else { continue };
            return Ok(Some((rows, columns)));
        }
    }

    fn setup(&mut self, kind: GameKind, names: &[String]) -> io::Result<Option<ArcadeGame>> {
        loop {
            let dimensions = if kind.asks_dimensions() {
                match self.ask_dimensions()? {
                    Some(dimensions) => Some(dimensions),
                    None => return Ok(None),
                }
            } else {
                None
            };

            match ArcadeGame::build(kind, names, dimensions, self.rng.fork()) {
                Ok(game) => {
                    info!(%kind, ?dimensions, "game started");
                    for line in game.instructions() {
                        writeln!(self.output, "{line}")?;
                    }
                    return Ok(Some(game));
                }
                Err(err) => {
                    debug!(%kind, error = %err, "setup rejected");
                    self.error(&err)?;
                }
            }
        }
    }

    /// Play until the game leaves `Active`. Returns `false` if input ran out.
    fn play(&mut self, game: &mut ArcadeGame) -> io::Result<bool> {
        while game.is_active() {
            self.show_board(game)?;
            for line in game.status_lines() {
                writeln!(self.output, "{line}")?;
            }

            let Some(line) = self.prompt(&game.move_prompt())? else {
                game.quit();
                self.finish(game)?;
                return Ok(false);
            };

            match game.apply_input(&line) {
                Ok(MoveOutcome::ExtraTurn { closed }) => {
                    if let Some(message) = game.extra_turn_message(closed) {
                        writeln!(self.output, "{message}")?;
                    }
                }
                Ok(MoveOutcome::Continue | MoveOutcome::Quit) => {}
                Err(err) => self.error(&err)?,
            }
        }

        self.finish(game)?;
        Ok(true)
    }

    fn show_board(&mut self, game: &ArcadeGame) -> io::Result<()> {
        writeln!(self.output)?;
        for line in game.render() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn finish(&mut self, game: &ArcadeGame) -> io::Result<()> {
        self.show_board(game)?;
        let closing = if game.is_won() {
            game.victory_message()
        } else {
            game.summary()
        };
        writeln!(self.output, "{closing}")
    }

    fn next_action(&mut self) -> io::Result<Option<NextAction>> {
        writeln!(self.output, "\nWhat would you like to do?")?;
        writeln!(self.output, "1. Play again (same game)")?;
        writeln!(self.output, "2. Play a different game")?;
        writeln!(self.output, "3. Quit")?;

        loop {
            let Some(answer) = self.prompt("Enter your choice (1-3): ")? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                writeln!(self.output, "Input cannot be empty. Please try again.")?;
                continue;
            }
            match answer.parse::<i64>() {
                Ok(choice) => match NextAction::from_choice(choice) {
                    Some(action) => return Ok(Some(action)),
                    None => self.error("Please enter 1, 2, or 3")?,
                },
                Err(_) => self.error("Please enter a valid number")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, config: ArcadeConfig) -> String {
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), config);
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_empty_input_ends_session() {
        let out = run("", ArcadeConfig::default().with_seed(1));
        assert!(out.contains("Welcome to Terminal Game Arcade"));
        assert!(out.ends_with("\nThank you for playing!\n"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let out = run("7\nabc\n", ArcadeConfig::default().with_seed(1));
        assert_eq!(out.matches("Error: Not a valid game please try again!").count(), 2);
    }

    #[test]
    fn test_next_action_errors() {
        let out = run(
            "2\nA\nB\nq\n\n9\nx\n3\n",
            ArcadeConfig::default().with_seed(1),
        );
        assert!(out.contains("Input cannot be empty. Please try again."));
        assert!(out.contains("Error: Please enter 1, 2, or 3"));
        assert!(out.contains("Error: Please enter a valid number"));
        assert_eq!(out.matches("Thank you for playing!").count(), 1);
    }

    #[test]
    fn test_next_action_from_choice() {
        assert_eq!(NextAction::from_choice(1), Some(NextAction::Replay));
        assert_eq!(NextAction::from_choice(3), Some(NextAction::Quit));
        assert_eq!(NextAction::from_choice(0), None);
    }
}
