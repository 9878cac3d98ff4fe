//! Shared comparison and hashing for every outcome type.
use core::hash::{Hash, Hasher};

/// Borrowed view of an outcome: the success payload or the error payload.
///
/// `Status` views its success as `Branch::Success(&())`.
pub(crate) enum Branch<'a, V, E> {
    Success(&'a V),
    Failure(&'a E),
}

/// Two outcomes are equal when they are in the same state with equal payloads.
///
/// Nullable payloads are modelled as `Option`, whose equality already treats
/// two `None`s as equal and `None` as distinct from any `Some`.
#[inline]
pub(crate) fn branches_eq<V, E>(lhs: Branch<'_, V, E>, rhs: Branch<'_, V, E>) -> bool
where
    V: PartialEq,
    E: PartialEq,
{
    match (lhs, rhs) {
        (Branch::Success(a), Branch::Success(b)) => a == b,
        (Branch::Failure(a), Branch::Failure(b)) => a == b,
        _ => false,
    }
}

/// Hashes the success flag followed by the success payload, or only the flag
/// for a failure.
///
/// All failures of a type fall into one bucket, which is consistent with
/// [`branches_eq`] since equal failures still hash identically.
#[inline]
pub(crate) fn hash_branch<V, E, H>(branch: Branch<'_, V, E>, state: &mut H)
where
    V: Hash,
    H: Hasher,
{
    match branch {
        Branch::Success(value) => {
            true.hash(state);
            value.hash(state);
        },
        Branch::Failure(_) => false.hash(state),
    }
}
