#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Symbol {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Lizard = 3,
    Spock = 4,
}

impl Symbol {
    pub const MAX: Self = Symbol::Spock;
    pub const MIN: Self = Symbol::Rock;
}

/// u8 isomorphism
impl From<u8> for Symbol {
    fn from(n: u8) -> Symbol {
        match n {
            0 => Symbol::Rock,
            1 => Symbol::Paper,
            2 => Symbol::Scissors,
            3 => Symbol::Lizard,
            4 => Symbol::Spock,
            _ => panic!("Invalid symbol u8: {}", n),
        }
    }
}
impl From<Symbol> for u8 {
    fn from(s: Symbol) -> u8 {
        s as u8
    }
}

/// label isomorphism
///
/// The lowercase label is the wire format between ports and engine,
/// so Display and From<&str> must stay inverses.
impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        match s {
            "rock" => Symbol::Rock,
            "paper" => Symbol::Paper,
            "scissors" => Symbol::Scissors,
            "lizard" => Symbol::Lizard,
            "spock" => Symbol::Spock,
            _ => panic!("Invalid symbol label: {}", s),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Symbol::Rock => "rock",
                Symbol::Paper => "paper",
                Symbol::Scissors => "scissors",
                Symbol::Lizard => "lizard",
                Symbol::Spock => "spock",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let symbol = Symbol::Lizard;
        assert!(symbol == Symbol::from(u8::from(symbol)));
    }

    #[test]
    fn bijective_label() {
        for n in u8::from(Symbol::MIN)..=u8::from(Symbol::MAX) {
            let symbol = Symbol::from(n);
            assert!(symbol == Symbol::from(symbol.to_string().as_str()));
        }
    }
}
