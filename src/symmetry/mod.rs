//! Board symmetries: detection predicates, the orientation comparator, the
//! flip/transpose generators and the canonical form built from them.

pub mod canonical;
pub mod compare;
mod detect;
mod transform;

pub use canonical::{canonicalize, Canonical};
pub use detect::{is_reflection_symmetry, is_rotational_symmetry, RotationAngle, SymmetryAxis};
pub use transform::{
    apply_all, map_action_from_canonical, map_action_to_canonical, restore, Transform,
    START_PRESERVING_SYMMETRIES,
};
