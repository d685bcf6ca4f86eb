use anyhow::{anyhow, Result};
use log::info;

use crate::board::{Board, GameState, Player};
use crate::player::Agent;
use crate::rules;

/// Runs a game between two agents, player one moving first
pub struct Game {
    board: Board,
    connect: usize,
    agents: [Box<dyn Agent>; 2],
    to_move: Player,
    state: GameState,
}

impl Game {
    pub fn new(board: Board, connect: usize, one: Box<dyn Agent>, two: Box<dyn Agent>) -> Self {
        let state = rules::classify(&board, connect);
        Self {
            board,
            connect,
            agents: [one, two],
            to_move: Player::One,
            state,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn connect(&self) -> usize {
        self.connect
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn agent(&self, player: Player) -> &dyn Agent {
        match player {
            Player::One => &*self.agents[0],
            Player::Two => &*self.agents[1],
        }
    }

    /// Whether neither side is controlled by a person
    pub fn is_unattended(&self) -> bool {
        self.agents.iter().all(|agent| !agent.is_interactive())
    }

    /// Asks the side to move for a column and plays it
    ///
    /// Fails without touching the board if the game is already over or the
    /// agent offers no move or an unplayable one.
    pub fn take_turn(&mut self) -> Result<GameState> {
        if self.state.is_terminal() {
            return Err(anyhow!("The game is already over"));
        }

        let player = self.to_move;
        let agent = match player {
            Player::One => &mut self.agents[0],
            Player::Two => &mut self.agents[1],
        };
        let column = agent
            .choose_move(&self.board, self.connect, player)
            .ok_or_else(|| anyhow!("{} did not choose a move", agent.name()))?;

        if !self.board.make_move(column, player) {
            return Err(anyhow!(
                "{} chose column {}, which is full or out of range",
                agent.name(),
                column
            ));
        }
        info!("{} plays column {}", agent.name(), column);

        self.to_move = player.opponent();
        self.state = rules::classify(&self.board, self.connect);
        Ok(self.state)
    }

    /// Plays turns until the game is over, calling `observe` after every move
    pub fn play<F: FnMut(&Board)>(&mut self, mut observe: F) -> Result<GameState> {
        while !self.state.is_terminal() {
            self.take_turn()?;
            observe(&self.board);
        }
        info!("game over after {} moves: {:?}", self.board.num_moves(), self.state);
        Ok(self.state)
    }
}
