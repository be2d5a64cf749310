pub struct Console;

impl Reporter for Console {
    fn send(&self, outcome: Outcome, user: Symbol, computer: Symbol) {
        println!("And I choose {}", computer);
        match outcome {
            Outcome::Draw => println!("{}", "DRAW ! Another round ... ".yellow()),
            Outcome::User => println!("{}", "You win !".green()),
            Outcome::Computer => {
                println!("{}", format!("Tough luck {} beats {}!", computer, user).red())
            }
        }
    }
}

use crate::play::outcome::Outcome;
use crate::play::reporter::Reporter;
use crate::symbols::symbol::Symbol;
use colored::Colorize;
