//! Name supply used by employee synthesis.
//!
//! Repeats are allowed; callers must not rely on unique names.

use crate::model::employee::PersonName;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Lisa", "Matthew", "Nancy", "Anthony", "Betty", "Mark",
    "Margaret", "Donald", "Sandra", "Steven", "Ashley", "Andrew", "Emily", "Kenneth", "Donna",
    "Joshua", "Michelle", "Kevin", "Carol", "Brian", "Amanda", "George", "Melissa", "Timothy",
    "Deborah",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera",
];

/// Produces a first/last name pair on demand.
pub trait NameSupply {
    fn next_name(&mut self) -> PersonName;
}

impl<F> NameSupply for F
where
    F: FnMut() -> PersonName,
{
    fn next_name(&mut self) -> PersonName {
        self()
    }
}

/// Draws names uniformly from embedded first/last name lists.
pub struct RandomNameSupply {
    rng: StdRng,
}

impl RandomNameSupply {
    /// Creates an entropy-seeded supply.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a supply that replays the same names for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNameSupply {
    fn default() -> Self {
        Self::new()
    }
}

impl NameSupply for RandomNameSupply {
    fn next_name(&mut self) -> PersonName {
        // Both lists are non-empty constants.
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Alex");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Doe");
        PersonName::new(first, last)
    }
}
