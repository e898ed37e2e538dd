//! Turn state machine driving two players against each other's boards.

use alloc::boxed::Box;

use crate::engine::board::Board;
use crate::player::{Player, PlayerError, TurnView};

/// One of the two seats at the table. Player A moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    PlayerA,
    PlayerB,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::PlayerA => Side::PlayerB,
            Side::PlayerB => Side::PlayerA,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::PlayerA => 0,
            Side::PlayerB => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    PlayerATurn,
    PlayerBTurn,
    PlayerAWon,
    PlayerBWon,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::PlayerAWon | GameState::PlayerBWon)
    }

    /// Side entitled to move, if the game is still running.
    pub fn active_side(self) -> Option<Side> {
        match self {
            GameState::PlayerATurn => Some(Side::PlayerA),
            GameState::PlayerBTurn => Some(Side::PlayerB),
            GameState::PlayerAWon | GameState::PlayerBWon => None,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameState::PlayerAWon => Some(Side::PlayerA),
            GameState::PlayerBWon => Some(Side::PlayerB),
            GameState::PlayerATurn | GameState::PlayerBTurn => None,
        }
    }

    fn turn_of(side: Side) -> Self {
        match side {
            Side::PlayerA => GameState::PlayerATurn,
            Side::PlayerB => GameState::PlayerBTurn,
        }
    }
}

/// Owns both players and their boards and alternates turns until one fleet
/// is gone.
pub struct GameLoop {
    player_a: Box<dyn Player>,
    board_a: Board,
    player_b: Box<dyn Player>,
    board_b: Board,
    state: GameState,
    shots: [usize; 2],
}

impl GameLoop {
    /// Seat two players, each with its own board. Player A moves first.
    pub fn new(
        player_a: Box<dyn Player>,
        board_a: Board,
        player_b: Box<dyn Player>,
        board_b: Board,
    ) -> Self {
        Self {
            player_a,
            board_a,
            player_b,
            board_b,
            state: GameState::PlayerATurn,
            shots: [0; 2],
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::PlayerA => &self.board_a,
            Side::PlayerB => &self.board_b,
        }
    }

    /// Accepted shots fired by `side` so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Player A's win is checked first and wins ties.
    fn terminal_state(&self) -> Option<GameState> {
        if self.board_b.is_defeated() {
            Some(GameState::PlayerAWon)
        } else if self.board_a.is_defeated() {
            Some(GameState::PlayerBWon)
        } else {
            None
        }
    }

    /// Play a single turn and return the resulting state.
    ///
    /// A hit or a sink keeps the turn with the shooter, a miss passes it.
    /// Terminal states are sticky and nothing moves once one is reached.
    pub fn step(&mut self) -> Result<GameState, PlayerError> {
        let side = match self.state.active_side() {
            Some(side) => side,
            None => return Ok(self.state),
        };
        if let Some(done) = self.terminal_state() {
            self.state = done;
            return Ok(done);
        }

        let (mover, own, target_board, watcher) = match side {
            Side::PlayerA => (
                &mut self.player_a,
                &self.board_a,
                &mut self.board_b,
                &mut self.player_b,
            ),
            Side::PlayerB => (
                &mut self.player_b,
                &self.board_b,
                &mut self.board_a,
                &mut self.player_a,
            ),
        };

        watcher.handle_opponent_turn_start(&TurnView {
            own: &*target_board,
            opponent: own,
        })?;
        mover.handle_turn_start(&TurnView {
            own,
            opponent: &*target_board,
        })?;
        let shot = mover.make_move(own, target_board)?;
        watcher.handle_opponent_shot(shot.target, shot.result)?;
        self.shots[side.index()] += 1;
        log::debug!("{:?} fired at {}: {}", side, shot.target, shot.result);

        self.state = match self.terminal_state() {
            Some(done) => {
                log::info!("game over: {:?} after {} shots", done, self.shots[0] + self.shots[1]);
                done
            }
            None if shot.result.grants_extra_turn() => GameState::turn_of(side),
            None => GameState::turn_of(side.opponent()),
        };
        Ok(self.state)
    }

    /// Play until a terminal state is reached.
    pub fn run(&mut self) -> Result<GameState, PlayerError> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.state)
    }
}
