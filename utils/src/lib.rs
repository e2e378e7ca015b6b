pub mod distance;
pub mod masks;
mod material;
mod mirror;
mod position;
mod see;

pub use material::{
    has_opposite_bishops, is_bare_king, majors, minors, side_has_insufficient_material,
};
pub use mirror::mirror_fen;
pub use position::{pawn_key, Position, MAX_PHASE, PHASE_WEIGHTS};
pub use see::{see, see_value};
