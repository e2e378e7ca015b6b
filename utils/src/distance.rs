use cozy_chess::Square;

#[inline(always)]
fn deltas(a: Square, b: Square) -> (i32, i32) {
    let file_delta = (a.file() as i32 - b.file() as i32).abs();
    let rank_delta = (a.rank() as i32 - b.rank() as i32).abs();
    (file_delta, rank_delta)
}

/// King-move distance.
#[inline(always)]
pub fn chebyshev(a: Square, b: Square) -> i32 {
    let (f, r) = deltas(a, b);
    f.max(r)
}

/// File plus rank distance (0..14).
#[inline(always)]
pub fn manhattan(a: Square, b: Square) -> i32 {
    let (f, r) = deltas(a, b);
    f + r
}

/// Fruit-style proximity: 14 for the same square, 0 for opposite corners.
#[inline(always)]
pub fn closeness(a: Square, b: Square) -> i32 {
    14 - manhattan(a, b)
}
