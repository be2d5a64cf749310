pub struct Robot;

impl Player for Robot {
    fn choose(&self, choices: &[String]) -> String {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        choices.choose(rng).cloned().expect("empty symbol universe")
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot")
    }
}

use crate::play::player::Player;
use std::fmt::{Debug, Formatter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_the_universe() {
        let choices = ["rock", "paper", "scissors"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<String>>();
        for _ in 0..100 {
            assert!(choices.contains(&Robot.choose(&choices)));
        }
    }
}
