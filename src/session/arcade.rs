//! Closed set of playable engines behind one value.

use crate::core::{DimensionError, GameKind, GameRng, MoveError};
use crate::games::{DotsAndBoxes, Quoridor, SlidingPuzzle};
use crate::rules::{Game, GameResult, GameStatus, MoveOutcome};

/// One engine of any kind, dispatched by `match`.
#[derive(Clone, Debug)]
pub enum ArcadeGame {
    Sliding(SlidingPuzzle),
    Dots(DotsAndBoxes),
    Quoridor(Quoridor),
}

macro_rules! dispatch {
    ($self:expr, $game:ident => $body:expr) => {
        match $self {
            ArcadeGame::Sliding($game) => $body,
            ArcadeGame::Dots($game) => $body,
            ArcadeGame::Quoridor($game) => $body,
        }
    };
}

impl ArcadeGame {
    /// Build a fresh game of `kind`.
    ///
    /// `names` holds one name per seat; missing names fall back to
    /// "Player n". `dimensions` is ignored by Quoridor.
    pub fn build(
        kind: GameKind,
        names: &[String],
        dimensions: Option<(i64, i64)>,
        rng: GameRng,
    ) -> Result<Self, DimensionError> {
        let name = |seat: usize| {
            names
                .get(seat)
                .cloned()
                .unwrap_or_else(|| format!("Player {}", seat + 1))
        };

        let game = match kind {
            GameKind::SlidingPuzzle => {
                let mut builder = SlidingPuzzle::builder().player_name(name(0));
                if let Some((rows, columns)) = dimensions {
                    builder = builder.rows(rows).columns(columns);
                }
                ArcadeGame::Sliding(builder.build_with_rng(rng)?)
            }
            GameKind::DotsAndBoxes => {
                let mut builder = DotsAndBoxes::builder().player_names(name(0), name(1));
                if let Some((rows, columns)) = dimensions {
                    builder = builder.rows(rows).columns(columns);
                }
                ArcadeGame::Dots(builder.build()?)
            }
            GameKind::Quoridor => {
                ArcadeGame::Quoridor(Quoridor::builder().player_names(name(0), name(1)).build()?)
            }
        };
        Ok(game)
    }

    pub fn kind(&self) -> GameKind {
        match self {
            ArcadeGame::Sliding(_) => GameKind::SlidingPuzzle,
            ArcadeGame::Dots(_) => GameKind::DotsAndBoxes,
            ArcadeGame::Quoridor(_) => GameKind::Quoridor,
        }
    }

    pub fn initialize(&mut self) {
        dispatch!(self, game => game.initialize())
    }

    pub fn apply_input(&mut self, raw: &str) -> Result<MoveOutcome, MoveError> {
        dispatch!(self, game => game.apply_input(raw))
    }

    pub fn quit(&mut self) {
        dispatch!(self, game => game.quit())
    }

    pub fn status(&self) -> GameStatus {
        dispatch!(self, game => game.status())
    }

    pub fn is_active(&self) -> bool {
        dispatch!(self, game => game.is_active())
    }

    pub fn is_won(&self) -> bool {
        dispatch!(self, game => game.is_won())
    }

    pub fn result(&self) -> Option<GameResult> {
        dispatch!(self, game => game.result())
    }

    pub fn render(&self) -> Vec<String> {
        dispatch!(self, game => game.render())
    }

    pub fn status_lines(&self) -> Vec<String> {
        dispatch!(self, game => game.status_lines())
    }

    pub fn instructions(&self) -> Vec<String> {
        dispatch!(self, game => game.instructions())
    }

    pub fn victory_message(&self) -> String {
        dispatch!(self, game => game.victory_message())
    }

    pub fn summary(&self) -> String {
        dispatch!(self, game => game.summary())
    }

    pub fn move_prompt(&self) -> String {
        dispatch!(self, game => game.move_prompt())
    }

    /// Announcement after a move that earned another turn.
    pub fn extra_turn_message(&self, closed: usize) -> Option<String> {
        match self {
            ArcadeGame::Dots(game) => Some(format!(
                "{} closed {} box{} and goes again!",
                game.player_name(game.current_player()),
                closed,
                if closed == 1 { "" } else { "es" }
            )),
            _ => None,
        }
    }
}

impl From<SlidingPuzzle> for ArcadeGame {
    fn from(game: SlidingPuzzle) -> Self {
        ArcadeGame::Sliding(game)
    }
}

impl From<DotsAndBoxes> for ArcadeGame {
    fn from(game: DotsAndBoxes) -> Self {
        ArcadeGame::Dots(game)
    }
}

impl From<Quoridor> for ArcadeGame {
    fn from(game: Quoridor) -> Self {
        ArcadeGame::Quoridor(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_each_kind() {
        for kind in GameKind::ALL {
            let game = ArcadeGame::build(kind, &names(&["Ann", "Bo"]), Some((3, 3)), GameRng::new(7))
                .unwrap();
            assert_eq!(game.kind(), kind);
            assert!(game.is_active());
            assert!(!game.is_won());
            assert!(!game.render().is_empty());
        }
    }

    #[test]
    fn test_build_rejects_dimensions() {
        let err = ArcadeGame::build(
            GameKind::DotsAndBoxes,
            &names(&["Ann", "Bo"]),
            Some((11, 2)),
            GameRng::new(1),
        )
        .unwrap_err();
        assert!(matches!(err, DimensionError::TooLarge { .. }));

        let err = ArcadeGame::build(GameKind::SlidingPuzzle, &[], Some((1, 1)), GameRng::new(1))
            .unwrap_err();
        assert_eq!(err, DimensionError::TooFewCells);
    }

    #[test]
    fn test_missing_names_default() {
        let game = ArcadeGame::build(GameKind::Quoridor, &[], None, GameRng::new(1)).unwrap();
        assert_eq!(game.move_prompt(), "Player 1 to move (M U/D/L/R | H/V r c | q): ");
    }

    #[test]
    fn test_quit_dispatch() {
        let mut game = ArcadeGame::build(GameKind::Quoridor, &names(&["A", "B"]), None, GameRng::new(1))
            .unwrap();
        assert_eq!(game.apply_input("Q"), Ok(MoveOutcome::Quit));
        assert_eq!(game.status(), GameStatus::Quit);
        assert!(game.result().is_none());

        game.initialize();
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn test_extra_turn_message() {
        let mut game: ArcadeGame = DotsAndBoxes::builder()
            .rows(1)
            .columns(1)
            .player_names("Ann", "Bo")
            .build()
            .unwrap()
            .into();
        for edge in ["H 1 1", "H 2 1", "V 1 1"] {
            game.apply_input(edge).unwrap();
        }
        assert_eq!(game.apply_input("V 1 2"), Ok(MoveOutcome::ExtraTurn { closed: 1 }));
        assert_eq!(
            game.extra_turn_message(1).as_deref(),
            Some("Bo closed 1 box and goes again!")
        );
    }
}
