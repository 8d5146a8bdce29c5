use serde::{Deserialize, Serialize};

/// One roster member. Immutable for the duration of a scheduling run;
/// workers with `excluded = true` never reach the allocator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Worker {
    #[serde(default)]
    pub id: i64,         // ⇔ workers.id (0 = let the store pick one)
    pub name: String,    // ⇔ workers.name
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub excluded: bool, // ⇔ workers.excluded (0/1)
}

impl Worker {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            department: String::new(),
            rank: String::new(),
            email: String::new(),
            phone: String::new(),
            excluded: false,
        }
    }
}
