//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod pvp;
pub mod show;
