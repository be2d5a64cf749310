/// Reserved exit word. Never a valid symbol label, so it can only be read
/// as a quit signal.
pub const STOP: &str = "STOP";

pub struct Human;

impl Player for Human {
    fn choose(&self, choices: &[String]) -> String {
        loop {
            let entry = Input::<String>::new()
                .with_prompt(format!(
                    "Choose your symbol [{}] [Enter {} to exit]",
                    choices.join(", "),
                    STOP
                ))
                .report(false)
                .interact()
                .unwrap();
            if entry == STOP {
                println!("Bye !");
                std::process::exit(0);
            }
            match choices.iter().any(|c| *c == entry) {
                true => return entry,
                false => println!("Invalid choice, please try again"),
            }
        }
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use crate::play::player::Player;
use dialoguer::Input;
use std::fmt::{Debug, Formatter};
