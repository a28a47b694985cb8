//! User generation with profiles and role sets.

use json_bench::{Profile, User};
use rand::Rng;
use time::OffsetDateTime;

use super::fields;

/// Generates users anchored at a fixed generation time.
pub struct UserGenerator {
    now: OffsetDateTime,
}

impl UserGenerator {
    /// Creates a generator whose `updated_at` is the current UTC time.
    pub fn new() -> Self {
        Self::at(OffsetDateTime::now_utc())
    }

    /// Creates a generator with an explicit generation time.
    pub fn at(now: OffsetDateTime) -> Self {
        Self { now }
    }

    /// Generation time stamped into `updated_at`.
    pub fn now(&self) -> OffsetDateTime {
        self.now
    }

    /// Generates a single user with the given id.
    pub fn generate(&self, id: u64, rng: &mut impl Rng) -> User {
        User {
            id,
            username: User::username_for(id),
            email: User::email_for(id),
            first_name: fields::random_name(rng),
            last_name: fields::random_name(rng),
            active: rng.gen_bool(0.5),
            created_at: fields::random_date(self.now, rng),
            updated_at: self.now,
            profile: self.generate_profile(id, rng),
            roles: fields::random_roles(rng),
        }
    }

    /// Generates `count` users with ids `1..=count`.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<User> {
        (1..=count as u64).map(|id| self.generate(id, rng)).collect()
    }

    fn generate_profile(&self, id: u64, rng: &mut impl Rng) -> Profile {
        Profile {
            bio: fields::random_bio(rng),
            avatar: Profile::avatar_for(id),
            location: fields::random_location(rng),
            website: Profile::website_for(id),
            metadata: fields::random_metadata(rng),
        }
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates `count` users stamped with the current time.
pub fn generate_users(count: usize, rng: &mut impl Rng) -> Vec<User> {
    UserGenerator::new().generate_batch(count, rng)
}
