#![allow(dead_code)]

pub mod json_server;

use scout_core::model::Record;

pub fn person(id: i64, name: &str, age: i64, number: &str) -> Record {
    Record {
        id,
        name: name.to_string(),
        age,
        phone_number: number.to_string(),
        photo_url: format!("https://example.com/{}.jpg", id),
        bio: String::new(),
    }
}
