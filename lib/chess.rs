mod board;
mod check;
mod color;
mod file;
mod game;
mod moves;
mod r#move;
mod piece;
mod promotion;
mod rank;
mod record;
mod role;
mod square;
mod status;

pub use board::*;
pub use color::*;
pub use file::*;
pub use game::*;
pub use moves::*;
pub use piece::*;
pub use promotion::*;
pub use r#move::*;
pub use rank::*;
pub use record::*;
pub use role::*;
pub use square::*;
pub use status::*;
