pub struct Table {
    ruleset: Ruleset,
    choices: Vec<String>,
    user: Box<dyn Player>,
    opponent: Box<dyn Player>,
    reporter: Box<dyn Reporter>,
}

impl Table {
    pub fn new(
        ruleset: Ruleset,
        user: Box<dyn Player>,
        opponent: Box<dyn Player>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        let choices = ruleset
            .symbols()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<String>>();
        log::debug!("seating {:?} against {:?} over {:?}", user, opponent, choices);
        Self {
            ruleset,
            choices,
            user,
            opponent,
            reporter,
        }
    }

    /// Plays until `rounds` decisive results have been reported. Every
    /// round is reported exactly once; draws are reported but do not
    /// advance the count, so the session runs as long as it has to.
    pub fn play(&self, rounds: usize) {
        let mut decisive = 0;
        while decisive < rounds {
            let (outcome, user, computer) = self.round();
            self.reporter.send(outcome, user, computer);
            match outcome.is_decisive() {
                true => decisive += 1,
                false => continue,
            }
        }
    }

    /// One full round: acquire both symbols, classify, report nothing.
    pub fn round(&self) -> (Outcome, Symbol, Symbol) {
        let user = Symbol::from(self.user.choose(&self.choices).as_str());
        let computer = Symbol::from(self.opponent.choose(&self.choices).as_str());
        log::debug!("user {} vs computer {}", user, computer);
        match user == computer {
            true => (Outcome::Draw, user, computer),
            false => match self.ruleset.decide(user, computer) == user {
                true => (Outcome::User, user, computer),
                false => (Outcome::Computer, user, computer),
            },
        }
    }
}

use super::outcome::Outcome;
use super::player::Player;
use super::reporter::Reporter;
use crate::symbols::ruleset::Ruleset;
use crate::symbols::symbol::Symbol;
