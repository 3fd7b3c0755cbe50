#![allow(dead_code)]

use catalog_core::{
    models::{Dealership, Review, ReviewDraft},
    ports::{Application, DealershipRepository, Repository, ReviewRepository},
    seed::SeedData,
};
use serde_json::json;

/// The application state handed to the router: just the repository.
#[derive(Clone)]
pub struct TestApp<R>(pub R);

impl<R: Repository> Application for TestApp<R> {
    type Repository = R;

    fn database(&self) -> &Self::Repository {
        &self.0
    }
}

// A store whose every operation fails, to exercise the error responses.
#[derive(Clone)]
pub struct BrokenDb;

fn broken() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "store unreachable")
}

impl Repository for BrokenDb {
    type Error = std::io::Error;
}

impl ReviewRepository for BrokenDb {
    async fn list_reviews(&self) -> Result<Vec<Review>, Self::Error> {
        Err(broken())
    }

    async fn query_reviews_by_dealership(
        &self,
        _dealership: &str,
    ) -> Result<Vec<Review>, Self::Error> {
        Err(broken())
    }

    async fn create_review(&self, _draft: ReviewDraft) -> Result<Review, Self::Error> {
        Err(broken())
    }

    async fn insert_reviews(&self, _reviews: Vec<Review>) -> Result<usize, Self::Error> {
        Err(broken())
    }

    async fn delete_reviews(&self) -> Result<usize, Self::Error> {
        Err(broken())
    }
}

impl DealershipRepository for BrokenDb {
    async fn list_dealerships(&self) -> Result<Vec<Dealership>, Self::Error> {
        Err(broken())
    }

    async fn query_dealerships_by_state(
        &self,
        _state: &str,
    ) -> Result<Vec<Dealership>, Self::Error> {
        Err(broken())
    }

    async fn get_dealership(&self, _dealership_id: i64) -> Result<Option<Dealership>, Self::Error> {
        Err(broken())
    }

    async fn insert_dealerships(
        &self,
        _dealerships: Vec<Dealership>,
    ) -> Result<usize, Self::Error> {
        Err(broken())
    }

    async fn delete_dealerships(&self) -> Result<usize, Self::Error> {
        Err(broken())
    }
}

pub fn review(id: i64, name: &str, dealership: i64) -> Review {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "dealership": dealership,
        "review": format!("{name} was happy with the service"),
        "purchase": true,
        "purchase_date": "02/16/2021",
        "car_make": "Honda",
        "car_model": "Civic",
        "car_year": 2017,
    }))
    .expect("valid review")
}

pub fn dealership(id: i64, state: &str, city: &str) -> Dealership {
    serde_json::from_value(json!({
        "id": id,
        "city": city,
        "state": state,
        "address": format!("{id} Market Street"),
        "zip": "10001",
        "lat": 40.7,
        "long": -74.0,
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
            review(7, "Lion Cleaver", 40),
        ],
        dealerships: vec![
            dealership(1, "Texas", "El Paso"),
            dealership(15, "Kansas", "Topeka"),
            dealership(23, "Texas", "Austin"),
            dealership(40, "New York", "Albany"),
        ],
    }
}
