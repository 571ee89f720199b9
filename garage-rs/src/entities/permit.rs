use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Number of distinct [`Permit`] kinds
pub const N_PERMITS: usize = 2;

/// A permit a [`Vehicle`](crate::entities::Vehicle) can hold and a
/// [`ParkingSpace`](crate::entities::ParkingSpace) can require.
/// The declaration order defines the precedence between permit-restricted spaces:
/// a vehicle holding several permits is first steered towards the spaces of the earliest permit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permit {
    Disability,
    Premium,
}

impl Permit {
    pub const ALL: [Permit; N_PERMITS] = [Permit::Disability, Permit::Premium];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Set of [`Permit`]s, the empty set is [`PermitSet::NONE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Permit>", into = "Vec<Permit>")]
pub struct PermitSet([bool; N_PERMITS]);

impl PermitSet {
    pub const NONE: PermitSet = PermitSet([false; N_PERMITS]);

    pub fn contains(&self, permit: Permit) -> bool {
        self.0[permit.index()]
    }

    pub fn insert(&mut self, permit: Permit) {
        self.0[permit.index()] = true;
    }

    pub fn union(self, other: PermitSet) -> PermitSet {
        let mut set = self;
        other.iter().for_each(|p| set.insert(p));
        set
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|held| !held)
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|held| **held).count()
    }

    /// Iterates over the permits in the set, in order of precedence
    pub fn iter(&self) -> impl Iterator<Item = Permit> + '_ {
        Permit::ALL.into_iter().filter(|p| self.contains(*p))
    }

    /// True if every permit in `required` is also in this set.
    /// Any set satisfies [`PermitSet::NONE`].
    pub fn satisfies(&self, required: PermitSet) -> bool {
        required.iter().all(|p| self.contains(p))
    }

    /// The permit with the highest precedence in the set, if any
    pub fn first(&self) -> Option<Permit> {
        self.iter().next()
    }
}

impl From<Permit> for PermitSet {
    fn from(permit: Permit) -> Self {
        let mut set = PermitSet::NONE;
        set.insert(permit);
        set
    }
}

impl From<Vec<Permit>> for PermitSet {
    fn from(permits: Vec<Permit>) -> Self {
        permits.into_iter().collect()
    }
}

impl From<PermitSet> for Vec<Permit> {
    fn from(set: PermitSet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<Permit> for PermitSet {
    fn from_iter<I: IntoIterator<Item = Permit>>(iter: I) -> Self {
        let mut set = PermitSet::NONE;
        iter.into_iter().for_each(|p| set.insert(p));
        set
    }
}

impl BitOr for PermitSet {
    type Output = PermitSet;

    fn bitor(self, rhs: PermitSet) -> PermitSet {
        self.union(rhs)
    }
}

impl BitOr<Permit> for PermitSet {
    type Output = PermitSet;

    fn bitor(self, rhs: Permit) -> PermitSet {
        self.union(rhs.into())
    }
}

impl BitOr for Permit {
    type Output = PermitSet;

    fn bitor(self, rhs: Permit) -> PermitSet {
        PermitSet::from(self) | rhs
    }
}

impl BitOrAssign<Permit> for PermitSet {
    fn bitor_assign(&mut self, rhs: Permit) {
        self.insert(rhs);
    }
}

impl Display for PermitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.is_empty() {
            true => write!(f, "none"),
            false => write!(f, "{}", self.iter().map(|p| format!("{p:?}")).join("+")),
        }
    }
}
