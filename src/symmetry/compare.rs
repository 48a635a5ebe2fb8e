//! Ordering rules used to pick the canonical orientation of a position.
//!
//! Every comparison works on lines of cell weights (blank 1, white 2, black 3)
//! and walks them from the outside in. `Ordering::Greater` means the first
//! argument is preferred, `Ordering::Less` the second, `Ordering::Equal` that
//! the comparison could not tell them apart.

use std::cmp::Ordering;

/// How two equal-length lines relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSymmetry {
    /// Both lines are palindromes and identical.
    Symmetric,
    /// The second line is the first reversed.
    Rotational,
    /// The lines are identical.
    Reflective,
    Asymmetric,
}

/// Classify a pair of lines. Checks run from most to least symmetric.
pub fn classify(v1: &[u8], v2: &[u8]) -> PairSymmetry {
    let n = v1.len();
    if (0..n).all(|i| v1[i] == v1[n - 1 - i] && v1[i] == v2[i] && v2[i] == v2[n - 1 - i]) {
        PairSymmetry::Symmetric
    } else if (0..n).all(|i| v1[i] == v2[n - 1 - i]) {
        PairSymmetry::Rotational
    } else if v1 == v2 {
        PairSymmetry::Reflective
    } else {
        PairSymmetry::Asymmetric
    }
}

/// Compare the middle cells of odd-length lines.
fn middle(v1: &[u8], v2: &[u8]) -> Ordering {
    let n = v1.len();
    if n % 2 == 1 {
        v1[n / 2].cmp(&v2[n / 2])
    } else {
        Ordering::Equal
    }
}

/// Outer cell pairs `(lt, rt, lb, rb)` from the outside in.
fn corners<'a>(v1: &'a [u8], v2: &'a [u8]) -> impl Iterator<Item = (u32, u32, u32, u32)> + 'a {
    let n = v1.len();
    (0..n / 2).map(move |i| {
        (
            u32::from(v1[i]),
            u32::from(v1[n - 1 - i]),
            u32::from(v2[i]),
            u32::from(v2[n - 1 - i]),
        )
    })
}

/// Order lines that are 180 degree images of each other.
pub fn rotational_direction(v1: &[u8], v2: &[u8]) -> Ordering {
    for (lt, rt, lb, rb) in corners(v1, v2) {
        let by_product = (lt * rt).cmp(&(lb * rb));
        if by_product != Ordering::Equal {
            return by_product;
        }
        let by_cross = (lt * rb).cmp(&(rt * lb));
        if by_cross != Ordering::Equal {
            return by_cross;
        }
    }
    middle(v1, v2)
}

/// Order lines that are mirror images of each other.
pub fn reflection_direction(v1: &[u8], v2: &[u8]) -> Ordering {
    for (lt, rt, lb, rb) in corners(v1, v2) {
        let by_product = (lt * rt).cmp(&(lb * rb));
        if by_product != Ordering::Equal {
            return by_product;
        }
        let by_side = (lt * lb).cmp(&(rt * rb));
        if by_side != Ordering::Equal {
            return by_side;
        }
    }
    middle(v1, v2)
}

/// Order unrelated lines using only the pair products.
pub fn asymmetric_direction(v1: &[u8], v2: &[u8]) -> Ordering {
    for (lt, rt, lb, rb) in corners(v1, v2) {
        let by_product = (lt * rt).cmp(&(lb * rb));
        if by_product != Ordering::Equal {
            return by_product;
        }
    }
    middle(v1, v2)
}

/// Fold the first rotational and first reflective verdicts into one.
fn combine(rot: Option<Ordering>, refl: Option<Ordering>) -> Ordering {
    match (rot, refl) {
        (Some(Ordering::Equal), _) | (_, Some(Ordering::Equal)) => Ordering::Equal,
        (Some(a), Some(b)) if a == b => Ordering::Greater,
        (Some(_), Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Compare two lines by walking their outer cell pairs.
///
/// The first asymmetric pair decides on its own. Otherwise a differing odd
/// middle decides, and failing that the first rotational and first
/// reflective pair verdicts are combined.
pub fn vector_direction(v1: &[u8], v2: &[u8]) -> Ordering {
    let n = v1.len();
    let mut rot = None;
    let mut refl = None;

    for i in 0..n / 2 {
        let a = [v1[i], v1[n - 1 - i]];
        let b = [v2[i], v2[n - 1 - i]];
        match classify(&a, &b) {
            PairSymmetry::Symmetric => {}
            PairSymmetry::Rotational => {
                rot.get_or_insert_with(|| rotational_direction(&a, &b));
            }
            PairSymmetry::Reflective => {
                refl.get_or_insert_with(|| reflection_direction(&a, &b));
            }
            PairSymmetry::Asymmetric => return asymmetric_direction(&a, &b),
        }
    }

    match middle(v1, v2) {
        Ordering::Equal => combine(rot, refl),
        decided => decided,
    }
}

/// Compare a sequence of line pairs, e.g. matching rows of two half-boards.
pub fn vector_list_direction<V: AsRef<[u8]>>(pairs: &[(V, V)]) -> Ordering {
    let mut rot = None;
    let mut refl = None;

    for (v1, v2) in pairs {
        let (v1, v2) = (v1.as_ref(), v2.as_ref());
        match classify(v1, v2) {
            PairSymmetry::Symmetric => {}
            PairSymmetry::Rotational => {
                rot.get_or_insert_with(|| rotational_direction(v1, v2));
            }
            PairSymmetry::Reflective => {
                refl.get_or_insert_with(|| reflection_direction(v1, v2));
            }
            PairSymmetry::Asymmetric => return vector_direction(v1, v2),
        }
    }

    combine(rot, refl)
}

/// Compare two half-boards row by row, pairing the last row of `m1` with
/// the first row of `m2` so that rows equidistant from the fold meet.
pub fn matrix_direction(m1: &[Vec<u8>], m2: &[Vec<u8>]) -> Ordering {
    let pairs: Vec<(&[u8], &[u8])> = (0..m1.len())
        .map(|i| (m1[m1.len() - 1 - i].as_slice(), m2[i].as_slice()))
        .collect();
    vector_list_direction(&pairs)
}
