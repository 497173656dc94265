//! Shared fixtures for storage tests.

use portico_core::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl Person {
    pub fn new(name: &str, email: &str, age: i64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }
}

impl Record for Person {
    const KIND: &'static str = "Person";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

pub fn people() -> Vec<Person> {
    vec![
        Person::new("John", "john@example.com", 30),
        Person::new("Jane", "jane@example.com", 25),
        Person::new("Joe", "joe@example.com", 35),
    ]
}
