mod piece_values;
pub mod scores;
mod traits;

pub use piece_values::PieceValues;
pub use scores::{TaperedScore, MATE_VALUE, MAX_EVAL};
pub use traits::HCE;
