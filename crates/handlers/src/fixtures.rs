//! Fake user records for batch inserts and tests.

use attrstore_core::{item, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Builder;

const GIVEN_NAMES: &[&str] = &[
    "Ana", "Ben", "Carla", "Diego", "Elena", "Felix", "Grace", "Hugo", "Iris", "Jonas", "Karin",
    "Liam", "Mara", "Nils", "Olga", "Pavel", "Quinn", "Rosa", "Sven", "Tara", "Udo", "Vera",
    "Wanda", "Yusuf",
];

const FAMILY_NAMES: &[&str] = &[
    "Abbott", "Barnes", "Castillo", "Drummond", "Eriksen", "Fontaine", "Garber", "Holloway",
    "Ibarra", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov", "Quintana",
    "Reyes", "Sandoval", "Tanaka", "Ueda", "Vasquez", "Werner", "Zhao",
];

const STREETS: &[&str] = &[
    "Maple Street", "Oak Avenue", "Cedar Lane", "Birch Road", "Elm Drive", "Willow Way",
    "Juniper Court", "Aspen Boulevard", "Chestnut Place", "Poplar Terrace", "Sycamore Row",
    "Hawthorn Close",
];

const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Lakewood", "Fairview", "Greenfield", "Ashford", "Milltown",
    "Brookhaven", "Clearwater", "Eastport", "Northgate", "Westbrook",
];

const STATES: &[&str] = &[
    "AZ", "CA", "CO", "FL", "GA", "IL", "MA", "NC", "NY", "OH", "TX", "WA",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

/// Generator of user records shaped like the system's test data:
/// `_id` (uuid), `Name`, `Address`, `Email`, `Phone`.
///
/// Seeded generators produce the same records in the same order, ids
/// included; the ids are still well-formed v4 uuids.
#[derive(Debug)]
pub struct FakeUsers {
    rng: StdRng,
}

impl FakeUsers {
    /// A generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One fake user record.
    pub fn user(&mut self) -> Item {
        let given = self.pick(GIVEN_NAMES);
        let family = self.pick(FAMILY_NAMES);
        let id = Builder::from_random_bytes(self.rng.gen()).into_uuid();

        // Single-line address, "." between the street and locality parts.
        let address = format!(
            "{} {}.{}, {} {:05}",
            self.rng.gen_range(1..10000),
            self.pick(STREETS),
            self.pick(CITIES),
            self.pick(STATES),
            self.rng.gen_range(10000..100000),
        );
        let email = format!(
            "{}.{}@{}",
            given.to_lowercase(),
            family.to_lowercase(),
            self.pick(EMAIL_DOMAINS),
        );
        let phone = format!(
            "({}) 555-{:04}",
            self.rng.gen_range(200..990),
            self.rng.gen_range(0..10000),
        );

        item([
            ("_id", id.to_string()),
            ("Name", format!("{} {}", given, family)),
            ("Address", address),
            ("Email", email),
            ("Phone", phone),
        ])
    }

    /// `count` fake user records.
    pub fn users(&mut self, count: usize) -> Vec<Item> {
        (0..count).map(|_| self.user()).collect()
    }

    fn pick<'a>(&mut self, table: &[&'a str]) -> &'a str {
        table[self.rng.gen_range(0..table.len())]
    }
}

impl Default for FakeUsers {
    fn default() -> Self {
        Self::new()
    }
}
