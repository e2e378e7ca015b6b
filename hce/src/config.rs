use evaluation::PieceValues;
use std::str::FromStr;

/// How an evaluation parameter is presented as an engine option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Spin { min: i32, max: i32 },
    Check,
}

impl OptionType {
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            OptionType::Spin { min, max } => {
                let parsed = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid integer: {}", e))?;
                if parsed < *min || parsed > *max {
                    return Err(format!("Value {} out of range [{}, {}]", parsed, min, max));
                }
                Ok(())
            }
            OptionType::Check => match value.trim().to_lowercase().as_str() {
                "true" | "false" => Ok(()),
                _ => Err("Boolean value must be 'true' or 'false'".to_string()),
            },
        }
    }

    pub fn option_line<T>(&self, name: &str, current_value: &T) -> String
    where
        T: ToString,
    {
        match self {
            OptionType::Spin { min, max } => {
                format!(
                    "option name {} type spin default {} min {} max {}",
                    name,
                    current_value.to_string(),
                    min,
                    max
                )
            }
            OptionType::Check => {
                format!(
                    "option name {} type check default {}",
                    name,
                    current_value.to_string()
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamOption {
    pub name: &'static str,
    pub option_type: OptionType,
    /// Exposed to automated tuning.
    pub tunable: bool,
}

/// Integer view of a parameter value; check options read as 0/1.
pub trait AsOptionValue {
    fn as_option_value(&self) -> i32;
}

impl AsOptionValue for i32 {
    fn as_option_value(&self) -> i32 {
        *self
    }
}

impl AsOptionValue for bool {
    fn as_option_value(&self) -> i32 {
        *self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigParam<T> {
    pub value: T,
    pub option: ParamOption,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString + Copy,
    T::Err: std::fmt::Display,
{
    pub fn update(&mut self, value: &str) -> Result<(), String> {
        self.option.option_type.validate(value)?;

        let normalized = value.trim().to_lowercase();
        let new_value = normalized
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;

        self.value = new_value;
        Ok(())
    }

    pub fn option_line(&self) -> String {
        self.option
            .option_type
            .option_line(self.option.name, &self.value)
    }
}

macro_rules! define_params {
    ($(($field:ident: $type:ty, $name:literal, $option_type:expr, $default:expr, $tunable:expr)),* $(,)?) => {
        /// Immutable snapshot of every evaluation parameter. Changing a value
        /// produces a new snapshot through [`EvalParams::set`].
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct EvalParams {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EvalParams {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        option: ParamOption {
                            name: $name,
                            option_type: $option_type,
                            tunable: $tunable,
                        },
                    },)*
                }
            }
        }

        impl EvalParams {
            /// Returns a copy with `name` set to `value`, or an error naming what was wrong.
            pub fn set(&self, name: &str, value: &str) -> Result<Self, String> {
                let mut next = self.clone();
                match name {
                    $($name => next.$field.update(value)?,)*
                    _ => return Err(format!("Unknown parameter: {}", name)),
                }
                Ok(next)
            }

            pub fn get(&self, name: &str) -> Option<i32> {
                match name {
                    $($name => Some(self.$field.value.as_option_value()),)*
                    _ => None,
                }
            }

            /// One `option name ...` line per parameter, in declaration order.
            pub fn options(&self) -> impl Iterator<Item = String> {
                vec![$(self.$field.option_line(),)*].into_iter()
            }

            pub fn descriptors(&self) -> Vec<ParamOption> {
                vec![$(self.$field.option,)*]
            }

            pub fn tunable(&self) -> impl Iterator<Item = ParamOption> {
                self.descriptors().into_iter().filter(|option| option.tunable)
            }
        }
    };
}

define_params!(
    // Piece values
    (pawn_value_mg: i32, "PawnValueMg", OptionType::Spin { min: 50, max: 150 }, 90, true),
    (pawn_value_eg: i32, "PawnValueEg", OptionType::Spin { min: 50, max: 150 }, 110, true),
    (knight_value_mg: i32, "KnightValueMg", OptionType::Spin { min: 200, max: 400 }, 380, true),
    (knight_value_eg: i32, "KnightValueEg", OptionType::Spin { min: 200, max: 400 }, 360, true),
    (bishop_value_mg: i32, "BishopValueMg", OptionType::Spin { min: 200, max: 400 }, 390, true),
    (bishop_value_eg: i32, "BishopValueEg", OptionType::Spin { min: 200, max: 400 }, 370, true),
    (rook_value_mg: i32, "RookValueMg", OptionType::Spin { min: 400, max: 700 }, 530, true),
    (rook_value_eg: i32, "RookValueEg", OptionType::Spin { min: 400, max: 700 }, 650, true),
    (queen_value_mg: i32, "QueenValueMg", OptionType::Spin { min: 800, max: 1500 }, 1160, true),
    (queen_value_eg: i32, "QueenValueEg", OptionType::Spin { min: 800, max: 1500 }, 1190, true),

    // Material adjustments
    (bishop_pair_mg: i32, "BishopPairMg", OptionType::Spin { min: -100, max: 100 }, 51, false),
    (bishop_pair_eg: i32, "BishopPairEg", OptionType::Spin { min: -100, max: 100 }, 51, false),
    (knight_pair: i32, "KnightPair", OptionType::Spin { min: -50, max: 50 }, -1, false),
    (rook_pair: i32, "RookPair", OptionType::Spin { min: -50, max: 50 }, -11, false),
    (elephantiasis: i32, "ELEPH", OptionType::Spin { min: -50, max: 50 }, 5, false), // queen loses this per enemy minor
    (exchange_imbalance: i32, "A_EXC", OptionType::Spin { min: -50, max: 50 }, 10, false),
    (knight_pawn_adj: i32, "N_CL", OptionType::Spin { min: -50, max: 50 }, 6, false), // knight gains this per own pawn
    (rook_pawn_adj: i32, "R_OP", OptionType::Spin { min: -50, max: 50 }, 0, false), // rook loses this per own pawn

    // King attack units: ATT1 for zone squares not covered by enemy pawns, ATT2 for covered ones.
    // These index the danger table rather than being scores themselves.
    (knight_attack: i32, "N_ATT1", OptionType::Spin { min: 0, max: 50 }, 5, true),
    (knight_attack_covered: i32, "N_ATT2", OptionType::Spin { min: 0, max: 50 }, 5, true),
    (bishop_attack: i32, "B_ATT1", OptionType::Spin { min: 0, max: 50 }, 7, true),
    (bishop_attack_covered: i32, "B_ATT2", OptionType::Spin { min: 0, max: 50 }, 3, true),
    (rook_attack: i32, "R_ATT1", OptionType::Spin { min: 0, max: 50 }, 12, true),
    (rook_attack_covered: i32, "R_ATT2", OptionType::Spin { min: 0, max: 50 }, 4, true),
    (queen_attack: i32, "Q_ATT1", OptionType::Spin { min: 0, max: 50 }, 15, true),
    (queen_attack_covered: i32, "Q_ATT2", OptionType::Spin { min: 0, max: 50 }, 5, true),

    // Check threats
    (knight_check: i32, "N_CHK", OptionType::Spin { min: 0, max: 50 }, 12, true),
    (bishop_check: i32, "B_CHK", OptionType::Spin { min: 0, max: 50 }, 20, true),
    (rook_check: i32, "R_CHK", OptionType::Spin { min: 0, max: 50 }, 18, true),
    (queen_check: i32, "Q_CHK", OptionType::Spin { min: 0, max: 50 }, 12, true),
    (queen_contact_check: i32, "Q_CONTACT", OptionType::Spin { min: 0, max: 50 }, 36, true),

    // Minor pieces
    (knight_own_half_mg: i32, "N_OWH_MG", OptionType::Spin { min: -50, max: 0 }, -1, true),
    (knight_own_half_eg: i32, "N_OWH_EG", OptionType::Spin { min: -50, max: 0 }, 0, true),
    (bishop_own_half_mg: i32, "B_OWH_MG", OptionType::Spin { min: -50, max: 0 }, -3, true),
    (bishop_own_half_eg: i32, "B_OWH_EG", OptionType::Spin { min: -50, max: 0 }, -7, true),
    (knight_reach_mg: i32, "N_REACH_MG", OptionType::Spin { min: 0, max: 50 }, 11, true),
    (knight_reach_eg: i32, "N_REACH_EG", OptionType::Spin { min: 0, max: 50 }, 4, true),
    (bishop_reach_mg: i32, "B_REACH_MG", OptionType::Spin { min: 0, max: 50 }, 5, false),
    (bishop_reach_eg: i32, "B_REACH_EG", OptionType::Spin { min: 0, max: 50 }, 0, false),
    (knight_shielded_mg: i32, "N_SH_MG", OptionType::Spin { min: 0, max: 50 }, 7, true),
    (knight_shielded_eg: i32, "N_SH_EG", OptionType::Spin { min: 0, max: 50 }, 7, true),
    (bishop_shielded_mg: i32, "B_SH_MG", OptionType::Spin { min: 0, max: 50 }, 5, false),
    (bishop_shielded_eg: i32, "B_SH_EG", OptionType::Spin { min: 0, max: 50 }, 5, false),

    // Patterns
    (knight_trapped: i32, "N_TRAP", OptionType::Spin { min: -300, max: 0 }, -168, true),
    (knight_blocks_c_pawn: i32, "N_BLOCK", OptionType::Spin { min: -50, max: 0 }, -17, true),
    (king_no_luft_mg: i32, "K_NO_LUFT_MG", OptionType::Spin { min: -50, max: 0 }, -11, true),
    (king_no_luft_eg: i32, "K_NO_LUFT_EG", OptionType::Spin { min: -50, max: 0 }, -11, true),
    (king_castle_short: i32, "K_CASTLE_KS", OptionType::Spin { min: 0, max: 50 }, 32, true),
    (king_castle_long: i32, "K_CASTLE_QS", OptionType::Spin { min: 0, max: 50 }, 21, true),
    (bishop_trapped_a2: i32, "B_TRAP_A2", OptionType::Spin { min: -300, max: 0 }, -138, false),
    (bishop_trapped_a3: i32, "B_TRAP_A3", OptionType::Spin { min: -300, max: 0 }, -45, false),
    (bishop_blocked: i32, "B_BLOCK", OptionType::Spin { min: -100, max: 0 }, -45, false),
    (bishop_fianchetto: i32, "B_FIANCH", OptionType::Spin { min: 0, max: 50 }, 13, false),
    (bishop_bad_fianchetto: i32, "B_BADF", OptionType::Spin { min: -50, max: 0 }, -27, false),
    (bishop_king_fianchetto: i32, "B_KING", OptionType::Spin { min: 0, max: 50 }, 20, false),
    (bishop_fianchetto_blocked_mg: i32, "B_BF_MG", OptionType::Spin { min: -50, max: 0 }, -12, false),
    (bishop_fianchetto_blocked_eg: i32, "B_BF_EG", OptionType::Spin { min: -50, max: 0 }, -20, false),
    (bishop_opp_pawns: i32, "B_OPP_P", OptionType::Spin { min: -50, max: 0 }, -1, false),
    (bishop_own_pawns: i32, "B_OWN_P", OptionType::Spin { min: -50, max: 0 }, -4, false),
    (bishop_return: i32, "B_RETURN", OptionType::Spin { min: 0, max: 50 }, 7, false),

    // King pawn shield, by rank of the first own pawn on the file
    (shield_none: i32, "P_SH_NONE", OptionType::Spin { min: -50, max: 50 }, -40, false),
    (shield_rank2: i32, "P_SH_2", OptionType::Spin { min: -50, max: 50 }, 2, false),
    (shield_rank3: i32, "P_SH_3", OptionType::Spin { min: -50, max: 50 }, -6, false),
    (shield_rank4: i32, "P_SH_4", OptionType::Spin { min: -50, max: 50 }, -15, false),
    (shield_rank5: i32, "P_SH_5", OptionType::Spin { min: -50, max: 50 }, -23, false),
    (shield_rank6: i32, "P_SH_6", OptionType::Spin { min: -50, max: 50 }, -24, false),
    (shield_rank7: i32, "P_SH_7", OptionType::Spin { min: -50, max: 50 }, -35, false),

    // Pawn storm, by rank of the nearest enemy pawn
    (storm_open: i32, "P_ST_OPEN", OptionType::Spin { min: -50, max: 50 }, -6, false),
    (storm_rank3: i32, "P_ST_3", OptionType::Spin { min: -50, max: 50 }, -16, false),
    (storm_rank4: i32, "P_ST_4", OptionType::Spin { min: -50, max: 50 }, -16, false),
    (storm_rank5: i32, "P_ST_5", OptionType::Spin { min: -50, max: 50 }, -3, false),

    // Pawn weaknesses
    (isolated_mg: i32, "ISO_MG", OptionType::Spin { min: -50, max: 0 }, -7, false),
    (isolated_eg: i32, "ISO_EG", OptionType::Spin { min: -50, max: 0 }, -7, false),
    (isolated_open: i32, "ISO_OF", OptionType::Spin { min: -50, max: 0 }, -13, false),
    (backward_mg: i32, "BK_MID", OptionType::Spin { min: -50, max: 0 }, -2, false),
    (backward_eg: i32, "BK_END", OptionType::Spin { min: -50, max: 0 }, -1, false),
    (backward_open: i32, "BK_OPE", OptionType::Spin { min: -50, max: 0 }, -10, false),
    (doubled_mg: i32, "DB_MID", OptionType::Spin { min: -50, max: 0 }, -8, false),
    (doubled_eg: i32, "DB_END", OptionType::Spin { min: -50, max: 0 }, -21, false),

    // Passed pawns, by relative rank
    (passed_mg2: i32, "PMG2", OptionType::Spin { min: 0, max: 300 }, 2, false),
    (passed_mg3: i32, "PMG3", OptionType::Spin { min: 0, max: 300 }, 2, false),
    (passed_mg4: i32, "PMG4", OptionType::Spin { min: 0, max: 300 }, 11, false),
    (passed_mg5: i32, "PMG5", OptionType::Spin { min: 0, max: 300 }, 33, false),
    (passed_mg6: i32, "PMG6", OptionType::Spin { min: 0, max: 300 }, 71, false),
    (passed_mg7: i32, "PMG7", OptionType::Spin { min: 0, max: 300 }, 135, false),
    (passed_eg2: i32, "PEG2", OptionType::Spin { min: 0, max: 300 }, 12, false),
    (passed_eg3: i32, "PEG3", OptionType::Spin { min: 0, max: 300 }, 21, false),
    (passed_eg4: i32, "PEG4", OptionType::Spin { min: 0, max: 300 }, 48, false),
    (passed_eg5: i32, "PEG5", OptionType::Spin { min: 0, max: 300 }, 93, false),
    (passed_eg6: i32, "PEG6", OptionType::Spin { min: 0, max: 300 }, 161, false),
    (passed_eg7: i32, "PEG7", OptionType::Spin { min: 0, max: 300 }, 266, false),
    (passed_blocked_mul: i32, "P_BL_MUL", OptionType::Spin { min: 0, max: 50 }, 42, false),

    // Candidate passers, by relative rank
    (candidate_mg2: i32, "CMG2", OptionType::Spin { min: 0, max: 300 }, 0, false),
    (candidate_mg3: i32, "CMG3", OptionType::Spin { min: 0, max: 300 }, 0, false),
    (candidate_mg4: i32, "CMG4", OptionType::Spin { min: 0, max: 300 }, 3, false),
    (candidate_mg5: i32, "CMG5", OptionType::Spin { min: 0, max: 300 }, 11, false),
    (candidate_mg6: i32, "CMG6", OptionType::Spin { min: 0, max: 300 }, 23, false),
    (candidate_eg2: i32, "CEG2", OptionType::Spin { min: 0, max: 300 }, 4, false),
    (candidate_eg3: i32, "CEG3", OptionType::Spin { min: 0, max: 300 }, 7, false),
    (candidate_eg4: i32, "CEG4", OptionType::Spin { min: 0, max: 300 }, 16, false),
    (candidate_eg5: i32, "CEG5", OptionType::Spin { min: 0, max: 300 }, 31, false),
    (candidate_eg6: i32, "CEG6", OptionType::Spin { min: 0, max: 300 }, 53, false),

    // Passer multipliers and special pawn terms
    (passed_our_stop_mul: i32, "P_OURSTOP_MUL", OptionType::Spin { min: 0, max: 50 }, 27, false),
    (passed_opp_stop_mul: i32, "P_OPPSTOP_MUL", OptionType::Spin { min: 0, max: 50 }, 29, false),
    (passed_defended_mul: i32, "P_DEFMUL", OptionType::Spin { min: 0, max: 50 }, 6, false),
    (passed_stop_defended_mul: i32, "P_STOPMUL", OptionType::Spin { min: 0, max: 50 }, 6, false),
    (pawn_bind: i32, "P_BIND", OptionType::Spin { min: 0, max: 50 }, 2, false),
    (pawn_bad_bind: i32, "P_BADBIND", OptionType::Spin { min: 0, max: 50 }, 13, false),
    (pawn_island: i32, "P_ISL", OptionType::Spin { min: 0, max: 50 }, 5, false),

    // Pawn chains pointing at the king
    (chain_big: i32, "P_BIGCHAIN", OptionType::Spin { min: 0, max: 50 }, 38, true),
    (chain_small: i32, "P_SMALLCHAIN", OptionType::Spin { min: 0, max: 50 }, 27, true),
    (chain_storm1: i32, "P_CS1", OptionType::Spin { min: 0, max: 50 }, 12, true),
    (chain_storm2: i32, "P_CS2", OptionType::Spin { min: 0, max: 50 }, 4, true),
    (chain_storm_edge: i32, "P_CS_EDGE", OptionType::Spin { min: 0, max: 50 }, 8, true),
    (chain_storm_fail: i32, "P_CSFAIL", OptionType::Spin { min: 0, max: 50 }, 32, true),

    // Rooks and queens
    (rook_open_mg: i32, "ROF_MG", OptionType::Spin { min: 0, max: 50 }, 30, false),
    (rook_open_eg: i32, "ROF_EG", OptionType::Spin { min: 0, max: 50 }, 2, false),
    (rook_half_open_mg: i32, "RGH_MG", OptionType::Spin { min: 0, max: 50 }, 15, false),
    (rook_half_open_eg: i32, "RGH_EG", OptionType::Spin { min: 0, max: 50 }, 20, false),
    (rook_half_open_defended_mg: i32, "RBH_MG", OptionType::Spin { min: 0, max: 50 }, 0, false),
    (rook_half_open_defended_eg: i32, "RBH_EG", OptionType::Spin { min: 0, max: 50 }, 0, false),
    (rook_seventh_mg: i32, "RSR_MG", OptionType::Spin { min: 0, max: 50 }, 16, false),
    (rook_seventh_eg: i32, "RSR_EG", OptionType::Spin { min: 0, max: 50 }, 32, false),
    (rook_queen_file_mg: i32, "ROQ_MG", OptionType::Spin { min: 0, max: 50 }, 9, false),
    (rook_queen_file_eg: i32, "ROQ_EG", OptionType::Spin { min: 0, max: 50 }, 18, false),
    (rooks_seventh_mg: i32, "RS2_MG", OptionType::Spin { min: 0, max: 50 }, 20, false),
    (rooks_seventh_eg: i32, "RS2_EG", OptionType::Spin { min: 0, max: 50 }, 31, false),
    (queen_seventh_mg: i32, "QSR_MG", OptionType::Spin { min: 0, max: 50 }, 0, false),
    (queen_seventh_eg: i32, "QSR_EG", OptionType::Spin { min: 0, max: 50 }, 2, false),
    (rook_blocked_mg: i32, "R_BLOCK_MG", OptionType::Spin { min: -100, max: 0 }, -50, false),
    (rook_blocked_eg: i32, "R_BLOCK_EG", OptionType::Spin { min: -100, max: 0 }, -20, false),

    // Weights, in percent
    (material_weight: i32, "Material", OptionType::Spin { min: 0, max: 200 }, 100, false),
    (primary_pst_weight: i32, "PrimaryPstWeight", OptionType::Spin { min: 0, max: 200 }, 58, false),
    (secondary_pst_weight: i32, "SecondaryPstWeight", OptionType::Spin { min: 0, max: 200 }, 40, false),
    (own_attack: i32, "OwnAttack", OptionType::Spin { min: 0, max: 500 }, 110, false),
    (opp_attack: i32, "OppAttack", OptionType::Spin { min: 0, max: 500 }, 110, false),
    (own_mobility: i32, "OwnMobility", OptionType::Spin { min: 0, max: 500 }, 50, false),
    (opp_mobility: i32, "OppMobility", OptionType::Spin { min: 0, max: 500 }, 50, false),
    (flat_mobility: i32, "FlatMobility", OptionType::Spin { min: 0, max: 500 }, 50, false),
    (threats_weight: i32, "PiecePressure", OptionType::Spin { min: 0, max: 500 }, 109, false),
    (tropism_weight: i32, "KingTropism", OptionType::Spin { min: -500, max: 500 }, 25, false),
    (passers_weight: i32, "PassedPawns", OptionType::Spin { min: 0, max: 500 }, 102, false),
    (shield_weight: i32, "PawnShield", OptionType::Spin { min: 0, max: 500 }, 120, false),
    (storm_weight: i32, "PawnStorm", OptionType::Spin { min: 0, max: 500 }, 95, false),
    (mass_weight: i32, "W_MASS", OptionType::Spin { min: 0, max: 500 }, 98, false),
    (chains_weight: i32, "W_CHAINS", OptionType::Spin { min: 0, max: 500 }, 100, false),
    (lines_weight: i32, "Lines", OptionType::Spin { min: 0, max: 500 }, 109, false),
    (outposts_weight: i32, "Outposts", OptionType::Spin { min: 0, max: 500 }, 73, false),
    (space_weight: i32, "Space", OptionType::Spin { min: 0, max: 500 }, 0, false),

    // Pawn mobility
    (pawn_mobility_mg: i32, "P_MOB_MG", OptionType::Spin { min: 0, max: 50 }, 2, true),
    (pawn_mobility_eg: i32, "P_MOB_EG", OptionType::Spin { min: 0, max: 50 }, 2, true),

    // Style options
    (primary_pst_style: i32, "PrimaryPstStyle", OptionType::Spin { min: 0, max: 1 }, 0, false),
    (secondary_pst_style: i32, "SecondaryPstStyle", OptionType::Spin { min: 0, max: 1 }, 1, false),
    (keep_pawn: i32, "KeepPawn", OptionType::Spin { min: 0, max: 500 }, 0, false),
    (keep_knight: i32, "KeepKnight", OptionType::Spin { min: 0, max: 500 }, 0, false),
    (keep_bishop: i32, "KeepBishop", OptionType::Spin { min: 0, max: 500 }, 0, false),
    (keep_rook: i32, "KeepRook", OptionType::Spin { min: 0, max: 500 }, 0, false),
    (keep_queen: i32, "KeepQueen", OptionType::Spin { min: 0, max: 500 }, 0, false),
    (eval_blur: i32, "EvalBlur", OptionType::Spin { min: 0, max: 5_000_000 }, 0, false),
    (mobility_rebalancing: bool, "MobilityRebalancing", OptionType::Check, false, false),
);

impl EvalParams {
    /// Raw piece values, before the `Material` weight is applied.
    pub fn piece_values(&self) -> PieceValues {
        PieceValues {
            pawn_value_mg: self.pawn_value_mg.value,
            pawn_value_eg: self.pawn_value_eg.value,
            knight_value_mg: self.knight_value_mg.value,
            knight_value_eg: self.knight_value_eg.value,
            bishop_value_mg: self.bishop_value_mg.value,
            bishop_value_eg: self.bishop_value_eg.value,
            rook_value_mg: self.rook_value_mg.value,
            rook_value_eg: self.rook_value_eg.value,
            queen_value_mg: self.queen_value_mg.value,
            queen_value_eg: self.queen_value_eg.value,
        }
    }

    /// Snapshot with the evaluation blur matching a playing strength.
    pub fn with_elo(&self, elo: i32) -> Result<Self, String> {
        self.set("EvalBlur", &blur_for_elo(elo).to_string())
    }
}

/// Weaker levels get their evaluation blurred.
pub fn blur_for_elo(elo: i32) -> i32 {
    if elo < 1500 {
        (1500 - elo) / 3
    } else {
        0
    }
}
