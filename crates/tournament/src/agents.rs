//! Built-in agents
//!
//! The LLM-backed proposer lives outside this workspace; these two cover
//! everything the runner itself needs. `ScriptedAgent` replays a fixed
//! move list (tests, reproductions), `RandomAgent` emits syntactically
//! valid random tokens and leans on the engine's rejection path for
//! legality.

use std::collections::VecDeque;

use rand::Rng;

use game_core::{Agent, AgentError, Variant};

/// Replays a canned move list, failing once it runs out.
pub struct ScriptedAgent {
    name: String,
    moves: VecDeque<String>,
}

impl ScriptedAgent {
    pub fn new(name: &str, moves: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            moves: moves.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl Agent for ScriptedAgent {
    fn get_move(&mut self, _context: &str) -> Result<String, AgentError> {
        self.moves
            .pop_front()
            .ok_or_else(|| AgentError(format!("{} has no moves left", self.name)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Proposes uniformly random well-formed tokens for the variant.
///
/// Most chess proposals are illegal and get rejected; the scheduler's
/// error budget keeps games moving anyway, which also makes this a handy
/// stress test for the rejection paths.
pub struct RandomAgent {
    name: String,
    variant: Variant,
}

impl RandomAgent {
    pub fn new(name: &str, variant: Variant) -> Self {
        Self {
            name: name.to_string(),
            variant,
        }
    }

    fn random_cell(rng: &mut impl Rng, size: u8) -> String {
        let file = (b'a' + rng.gen_range(0..size)) as char;
        let rank = rng.gen_range(1..=size);
        format!("{}{}", file, rank)
    }
}

impl Agent for RandomAgent {
    fn get_move(&mut self, _context: &str) -> Result<String, AgentError> {
        let mut rng = rand::thread_rng();
        let token = match self.variant {
            Variant::Chess => format!(
                "{}-{}",
                Self::random_cell(&mut rng, 8),
                Self::random_cell(&mut rng, 8)
            ),
            Variant::TicTacToe => Self::random_cell(&mut rng, 3),
            Variant::ConnectFour => rng.gen_range(1..=7u8).to_string(),
        };
        Ok(token)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
