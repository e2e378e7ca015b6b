mod cache;
mod compose;
mod config;
mod context;
mod eval_bishops;
mod eval_drawish;
mod eval_king;
mod eval_knights;
mod eval_material;
mod eval_passers;
mod eval_patterns;
mod eval_pawns;
mod eval_pieces;
mod eval_queens;
mod eval_rooks;
mod eval_shelter;
mod eval_threats;
mod mobility;
mod pst;
mod tables;

pub use cache::DEFAULT_CACHE_SIZE;
pub use config::{blur_for_elo, EvalParams, OptionType, ParamOption};

use cache::{Cache, EvalCache, PawnCache, PawnEntry};
use context::EvalContext;
use cozy_chess::{Color, Piece};
use evaluation::scores::relative_to;
use evaluation::{TaperedScore, HCE};
use log::debug;
use tables::EvalTables;
use utils::Position;

/// Bonus for the side to move.
const TEMPO: TaperedScore = TaperedScore::new(14, 7);

/// Hand-Crafted Evaluation: material, piece activity, pawn structure, king safety and
/// a library of known patterns, blended by game phase.
///
/// <https://www.chessprogramming.org/Evaluation>
pub struct Evaluator {
    params: EvalParams,
    tables: EvalTables,
    eval_cache: EvalCache,
    pawn_cache: PawnCache,
    /// The side the engine plays; gets the "own" attack and mobility weights.
    program_side: Color,
    game_key: u64,
}

impl Evaluator {
    pub fn new(params: EvalParams) -> Self {
        Self::with_cache_size(params, DEFAULT_CACHE_SIZE)
    }

    /// Evaluator whose eval and pawn caches hold `entries` slots each.
    pub fn with_cache_size(params: EvalParams, entries: usize) -> Self {
        Self {
            tables: EvalTables::new(&params),
            params,
            eval_cache: Cache::new(entries),
            pawn_cache: Cache::new(entries),
            program_side: Color::White,
            game_key: 0,
        }
    }

    /// Installs a new parameter snapshot. Derived tables are rebuilt and every cached
    /// score is dropped.
    pub fn configure(&mut self, params: EvalParams) {
        debug!("Configuring evaluator, rebuilding derived tables");
        self.tables = EvalTables::new(&params);
        self.params = params;
        self.clear_eval_cache();
        self.clear_pawn_cache();
    }

    pub fn set_program_side(&mut self, color: Color) {
        if self.program_side != color {
            debug!("Program side set to {:?}", color);
            self.program_side = color;
            self.clear_eval_cache();
        }
    }

    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    /// Full evaluation from White's point of view, bypassing the eval cache.
    fn evaluate_uncached(&mut self, position: &Position) -> i32 {
        let stm = position.board.side_to_move();
        let mut ctx = EvalContext::new(position, &self.params, &self.tables, self.program_side);

        for color in Color::ALL {
            eval_material::evaluate(&mut ctx, color);
        }
        for color in Color::ALL {
            eval_pieces::evaluate(&mut ctx, color);
        }
        evaluate_pawn_structure(&mut ctx, &mut self.pawn_cache);
        for color in Color::ALL {
            eval_passers::evaluate(&mut ctx, color);
        }
        eval_passers::evaluate_unstoppable(&mut ctx);
        for color in Color::ALL {
            eval_threats::evaluate(&mut ctx, color);
            eval_threats::evaluate_space(&mut ctx, color);
        }

        ctx.add(stm, TEMPO);

        for color in Color::ALL {
            eval_patterns::evaluate(&mut ctx, color);
        }
        for color in Color::ALL {
            eval_king::evaluate(&mut ctx, color);
        }

        for color in Color::ALL {
            let pawns = ctx.pawns[color as usize];
            ctx.add(color, pawns);
        }

        // Asymmetric bonus for keeping certain pieces on the board
        let side = self.program_side;
        let keep = [
            (Piece::Pawn, self.params.keep_pawn.value),
            (Piece::Knight, self.params.keep_knight.value),
            (Piece::Bishop, self.params.keep_bishop.value),
            (Piece::Rook, self.params.keep_rook.value),
            (Piece::Queen, self.params.keep_queen.value),
        ];
        let bonus: i32 = keep
            .iter()
            .map(|&(piece, weight)| weight * ctx.count(side, piece))
            .sum();
        ctx.add(side, TaperedScore::new(bonus, 0));

        for color in Color::ALL {
            eval_patterns::evaluate_pins(&mut ctx, color);
        }

        compose::compose(&ctx, self.game_key)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvalParams::default())
    }
}

/// Pawn-only terms: shield, storm, chains, binds and per-pawn structure. They depend
/// on pawns and kings alone, so they are cached by the structural pawn key.
fn evaluate_pawn_structure(ctx: &mut EvalContext, cache: &mut PawnCache) {
    let key = ctx.position.pawn_key();
    if let Some(entry) = cache.probe(key) {
        ctx.pawns = [entry.white, entry.black];
        return;
    }

    for color in Color::ALL {
        eval_pawns::evaluate(ctx, color);
    }
    for color in Color::ALL {
        eval_shelter::evaluate(ctx, color);
    }
    for color in Color::ALL {
        eval_pawns::evaluate_binds(ctx, color);
    }
    eval_pawns::evaluate_empty_wings(ctx);
    for color in Color::ALL {
        eval_pawns::evaluate_islands(ctx, color);
    }

    cache.store(
        key,
        PawnEntry {
            white: ctx.pawns[0],
            black: ctx.pawns[1],
        },
    );
}

impl HCE for Evaluator {
    fn name(&self) -> String {
        "Sable HCE".to_string()
    }

    /// Evaluates relative to the side to move. Positive = side to move is better.
    fn evaluate(&mut self, position: &Position) -> i16 {
        let stm = position.board.side_to_move();
        let key = position.hash();

        let score = match self.eval_cache.probe(key) {
            Some(score) => score,
            None => {
                let score = self.evaluate_uncached(position);
                self.eval_cache.store(key, score);
                score
            }
        };

        relative_to(score, stm) as i16
    }

    fn clear_eval_cache(&mut self) {
        debug!("Clearing eval cache ({} entries)", self.eval_cache.capacity());
        self.eval_cache.clear();
    }

    fn clear_pawn_cache(&mut self) {
        debug!("Clearing pawn cache ({} entries)", self.pawn_cache.capacity());
        self.pawn_cache.clear();
    }

    fn new_game(&mut self, game_key: u64) {
        debug!("New game, key {:#018x}", game_key);
        self.game_key = game_key;
        self.clear_eval_cache();
        self.clear_pawn_cache();
    }
}
