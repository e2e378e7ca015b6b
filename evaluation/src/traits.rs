// Evaluator traits for position evaluation.
//
// The `evaluation` crate provides shared interfaces and types for evaluation.
// The concrete hand-crafted evaluator lives in the `hce` crate; callers such as
// the `sable` binary depend only on this interface.

use utils::Position;

/// Hand-Crafted Evaluation interface.
///
/// One instance per worker: the evaluator owns its caches and is never shared.
pub trait HCE: Send {
    fn name(&self) -> String;

    /// Evaluate position relative to the side to move. Positive = side to move is better.
    /// The result is bounded by `MAX_EVAL`.
    fn evaluate(&mut self, position: &Position) -> i16;

    /// Drop every cached whole-position score.
    fn clear_eval_cache(&mut self);

    /// Drop every cached pawn-structure entry.
    fn clear_pawn_cache(&mut self);

    /// Start a new game: both caches are cleared and `game_key` seeds the evaluation blur.
    fn new_game(&mut self, game_key: u64);
}
