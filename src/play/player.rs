/// One seat at the table. Implementations must return a member of the
/// offered labels; validation and retry belong here, never to the engine.
/// The console implementation recognizes a quit sentinel and terminates
/// the process instead of returning.
pub trait Player: Debug {
    fn choose(&self, choices: &[String]) -> String;
}
use std::fmt::Debug;
