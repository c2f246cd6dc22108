//! Subcommands of the `hexapawn` binary

pub mod inspect;
pub mod play;
pub mod train;
