//! Demo dataset: randomly generated people rows, the tabular data the
//! selection demo runs over.

use gridspan_engine::Column;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Edsger", "Barbara", "Donald", "Niklaus", "Margaret", "Tony", "Radia",
    "Leslie", "Frances", "John",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Dijkstra", "Liskov", "Knuth", "Wirth", "Hamilton", "Hoare",
    "Perlman", "Lamport", "Allen", "Backus",
];

const STATUSES: &[&str] = &["single", "complicated", "relationship"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub visits: u32,
    pub status: String,
    pub progress: u32,
}

impl Person {
    /// Cell text for one logical column of this row.
    pub fn cell_text(&self, column_id: &str) -> String {
        match column_id {
            "first_name" => self.first_name.clone(),
            "last_name" => self.last_name.clone(),
            "age" => self.age.to_string(),
            "visits" => self.visits.to_string(),
            "status" => self.status.clone(),
            "progress" => format!("{}%", self.progress),
            _ => String::new(),
        }
    }
}

/// The demo grid's column ordering.
pub fn columns() -> Vec<Column> {
    vec![
        Column::new("first_name", "First Name"),
        Column::new("last_name", "Last Name"),
        Column::new("age", "Age"),
        Column::new("visits", "Visits"),
        Column::new("status", "Status"),
        Column::new("progress", "Progress"),
    ]
}

/// Generate `count` rows. Seeded so a given refresh is reproducible.
pub fn make_rows(count: usize, seed: u64) -> Vec<Person> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Person {
            first_name: FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string(),
            last_name: LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())].to_string(),
            age: rng.gen_range(18..=65),
            visits: rng.gen_range(0..1000),
            status: STATUSES[rng.gen_range(0..STATUSES.len())].to_string(),
            progress: rng.gen_range(0..=100),
        })
        .collect()
}
