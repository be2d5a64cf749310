use super::ruleset::Ruleset;
use super::symbol::Symbol;
use clap::ValueEnum;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Registered game flavors, in registration order. The first one is the
/// CLI default; unknown keys never get past clap, so the engine only ever
/// sees a constructed Ruleset.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Flavor {
    /// Three symbols, one cyclic triangle
    #[value(name = "vanilla")]
    Vanilla,
    /// Five symbols, two wins and two losses each
    #[value(name = "rpsls")]
    Lizard,
}

impl Flavor {
    pub fn ruleset(&self) -> Ruleset {
        match self {
            Flavor::Vanilla => Ruleset::from(BTreeMap::from([
                (Symbol::Rock, BTreeSet::from([Symbol::Scissors])),
                (Symbol::Paper, BTreeSet::from([Symbol::Rock])),
                (Symbol::Scissors, BTreeSet::from([Symbol::Paper])),
            ])),
            Flavor::Lizard => Ruleset::from(BTreeMap::from([
                (Symbol::Rock, BTreeSet::from([Symbol::Scissors, Symbol::Lizard])),
                (Symbol::Paper, BTreeSet::from([Symbol::Rock, Symbol::Spock])),
                (Symbol::Scissors, BTreeSet::from([Symbol::Paper, Symbol::Lizard])),
                (Symbol::Lizard, BTreeSet::from([Symbol::Paper, Symbol::Spock])),
                (Symbol::Spock, BTreeSet::from([Symbol::Rock, Symbol::Scissors])),
            ])),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Flavor::Vanilla => {
                "Vanilla Rock-Paper-Scissors:\n\
                 Scissors cuts Paper\n\
                 Paper covers Rock\n\
                 Rock crushes Scissors."
            }
            Flavor::Lizard => {
                "Rock-Paper-Scissors-Lizard-Spock:\n\
                 Scissors cuts Paper\n\
                 Paper covers Rock\n\
                 Rock crushes Lizard\n\
                 Lizard poisons Spock\n\
                 Spock smashes Scissors\n\
                 Scissors decapitates Lizard\n\
                 Lizard eats Paper\n\
                 Paper disproves Spock\n\
                 Spock vaporizes Rock\n\
                 (and as it always has) Rock crushes Scissors"
            }
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Flavor::Vanilla => "vanilla",
                Flavor::Lizard => "rpsls",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanilla_is_a_triangle() {
        let ruleset = Flavor::Vanilla.ruleset();
        let universe = ruleset.symbols();
        assert!(universe.len() == 3);
        for symbol in universe {
            assert!(ruleset.defeats(symbol).len() == 1);
        }
    }

    #[test]
    fn lizard_is_balanced() {
        let ruleset = Flavor::Lizard.ruleset();
        let universe = ruleset.symbols();
        assert!(universe.len() == 5);
        for symbol in universe.iter().copied() {
            assert!(ruleset.defeats(symbol).len() == 2);
        }
        let oriented = universe
            .iter()
            .copied()
            .flat_map(|s| ruleset.defeats(s).iter().copied().map(move |d| (s, d)))
            .collect::<BTreeSet<(Symbol, Symbol)>>();
        assert!(oriented.len() == 10);
    }

    #[test]
    fn lizard_in_degree_matches_out_degree() {
        let ruleset = Flavor::Lizard.ruleset();
        for symbol in ruleset.symbols() {
            let losses = ruleset
                .symbols()
                .into_iter()
                .filter(|rival| ruleset.defeats(*rival).contains(&symbol))
                .count();
            assert!(losses == 2);
        }
    }
}
