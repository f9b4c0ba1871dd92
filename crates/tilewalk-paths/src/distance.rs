use tilewalk_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two coordinates: the number of 8-way
/// steps on an open map.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Octile distance: the cost of the cheapest 8-way walk on an open map when
/// orthogonal steps cost `straight` and diagonal steps cost `diagonal`.
/// Saturates at `i32::MAX`.
#[inline]
pub fn octile(a: Coord, b: Coord, straight: i32, diagonal: i32) -> i32 {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
    diagonal
        .saturating_mul(lo)
        .saturating_add(straight.saturating_mul(hi - lo))
}
