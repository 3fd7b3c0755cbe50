#![allow(dead_code)]

use catalog_core::{
    models::{Dealership, Review, ReviewDraft},
    seed::SeedData,
};
use catalog_sqlite::{Db, config::SqliteConfig};
use serde_json::json;

pub async fn open() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

pub fn draft(name: &str, dealership: i64) -> ReviewDraft {
    ReviewDraft {
        name: name.to_owned(),
        dealership,
        review: format!("{name} had a great experience"),
        purchase: true,
        purchase_date: "04/01/2021".to_owned(),
        car_make: "Toyota".to_owned(),
        car_model: "Corolla".to_owned(),
        car_year: 2018,
    }
}

pub fn review(id: i64, name: &str, dealership: i64) -> Review {
    Review {
        id,
        data: draft(name, dealership),
    }
}

pub fn dealership(id: i64, state: &str, city: &str) -> Dealership {
    serde_json::from_value(json!({
        "id": id,
        "city": city,
        "state": state,
        "address": format!("{id} Main Street"),
        "zip": "00000",
        "lat": 30.0,
        "long": -97.0,
        "short_name": city,
        "full_name": format!("{city} Car Dealership"),
    }))
    .expect("valid dealership")
}

pub fn seed() -> SeedData {
    SeedData {
        reviews: vec![
            review(1, "Berkly Shepley", 15),
            review(2, "Gwenora Zettoi", 23),
            review(3, "Angelo Stuckey", 15),
            review(7, "Lion Cleaver", 1),
        ],
        dealerships: vec![
            dealership(1, "Texas", "El Paso"),
            dealership(15, "Kansas", "Topeka"),
            dealership(23, "Texas", "Austin"),
        ],
    }
}
