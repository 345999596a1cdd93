//! Floating-point snapping shared by every grid boundary decision.
//!
//! Extents and cell sizes usually arrive as the result of prior
//! subtraction/division chains, so quotients that are mathematically
//! whole carry residues on the order of 1e-13. All rounding decisions in
//! this crate go through the helpers here so that a single tolerance
//! policy governs dimension counts, boundary lookups, lattice snapping,
//! and alignment checks.

/// Relative tolerance for deciding that a quotient is a whole number.
///
/// Scaled by operand magnitude before use. Large enough to absorb
/// accumulated round-off in coordinate arithmetic, small enough that a
/// genuine sub-cell offset (one part in 1e6 is the smallest that occurs
/// in practice) is never mistaken for alignment.
pub(crate) const REL_TOL: f64 = 1e-9;

fn tol_for(q: f64) -> f64 {
    (1.0 + q.abs()) * REL_TOL
}

/// True if `q` is within relative tolerance of a whole number.
pub(crate) fn is_whole(q: f64) -> bool {
    (q - q.round()).abs() <= tol_for(q)
}

/// Floor of `q`, except that a `q` sitting a residue away from a whole
/// number resolves to that whole number.
pub(crate) fn snap_down(q: f64) -> f64 {
    if is_whole(q) {
        q.round()
    } else {
        q.floor()
    }
}

/// Ceiling of `q`, except that a `q` sitting a residue away from a whole
/// number resolves to that whole number.
pub(crate) fn snap_up(q: f64) -> f64 {
    if is_whole(q) {
        q.round()
    } else {
        q.ceil()
    }
}

/// Number of whole cells of size `step` spanning `span`.
///
/// Rounds to the nearest count, which absorbs the residue left by spans
/// that are themselves computed from inexact endpoints.
pub(crate) fn cell_count(span: f64, step: f64) -> usize {
    let n = (span / step).round();
    if n > 0.0 {
        n as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_whole_absorbs_residue() {
        assert!(is_whole(5.0));
        assert!(is_whole(4.999999999999999)); // 0.5 / 0.1
        assert!(is_whole(-0.0000000000001));
        assert!(!is_whole(2.5));
        assert!(!is_whole(0.999999)); // one part in 1e6 is a real offset
    }

    #[test]
    fn test_snap_down() {
        assert_eq!(snap_down(135.7), 135.0);
        assert_eq!(snap_down(358.99999999999994), 359.0);
        assert_eq!(snap_down(359.00000000000006), 359.0);
        assert_eq!(snap_down(-0.3), -1.0);
    }

    #[test]
    fn test_snap_up() {
        assert_eq!(snap_up(63.3), 64.0);
        assert_eq!(snap_up(77.00000000000001), 77.0);
        assert_eq!(snap_up(76.99999999999994), 77.0);
    }

    #[test]
    fn test_cell_count_robust_to_noise() {
        // 16.2 - 8.5 in f64 is 7.699999999999999
        assert_eq!(cell_count(16.2 - 8.5, 0.1), 77);
        assert_eq!(cell_count(13.1 - 1.6, 0.1), 115);
        assert_eq!(cell_count(360.0, 0.5), 720);
        assert_eq!(cell_count(-1.0, 0.5), 0);
    }
}
