//! User entities.

/// A registered rider. Owned by exactly one network's user list.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: u64,
    name: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
