mod common;

use catalog_core::{ports::ReviewRepository as _, seed::reseed};
use std::collections::HashSet;

#[tokio::test]
async fn lists_reviews_in_insertion_order() -> anyhow::Result<()> {
    let db = common::open().await?;
    reseed(&db, common::seed()).await?;

    let reviews = db.list_reviews().await?;
    assert_eq!(reviews, common::seed().reviews);

    Ok(())
}

#[tokio::test]
async fn filters_by_dealership_as_text() -> anyhow::Result<()> {
    let db = common::open().await?;
    reseed(&db, common::seed()).await?;

    let ids = |reviews: Vec<catalog_core::models::Review>| {
        reviews.into_iter().map(|r| r.id).collect::<Vec<_>>()
    };

    assert_eq!(ids(db.query_reviews_by_dealership("15").await?), vec![1, 3]);
    assert_eq!(ids(db.query_reviews_by_dealership("23").await?), vec![2]);

    // no coercion of the path segment
    assert!(db.query_reviews_by_dealership("015").await?.is_empty());
    assert!(db.query_reviews_by_dealership("15.0").await?.is_empty());
    assert!(db.query_reviews_by_dealership("abc").await?.is_empty());

    // a dealership nobody reviewed
    assert!(db.query_reviews_by_dealership("42").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn new_review_gets_max_id_plus_one() -> anyhow::Result<()> {
    let db = common::open().await?;
    reseed(&db, common::seed()).await?;

    // the seed ids are not contiguous; the maximum is 7
    let created = db.create_review(common::draft("Cordy Tunnah", 23)).await?;
    assert_eq!(created.id, 8);
    assert_eq!(created.data, common::draft("Cordy Tunnah", 23));

    let again = db.create_review(common::draft("Dorey Lawful", 1)).await?;
    assert_eq!(again.id, 9);

    let reviews = db.list_reviews().await?;
    assert_eq!(reviews.len(), 6);
    assert_eq!(reviews.last(), Some(&again));

    let for_23 = db.query_reviews_by_dealership("23").await?;
    assert!(for_23.contains(&created));

    Ok(())
}

#[tokio::test]
async fn first_review_gets_id_one() -> anyhow::Result<()> {
    let db = common::open().await?;

    let created = db.create_review(common::draft("Jane Doe", 5)).await?;
    assert_eq!(created.id, 1);
    assert_eq!(db.list_reviews().await?, vec![created]);

    Ok(())
}

#[tokio::test]
async fn dangling_dealership_is_accepted() -> anyhow::Result<()> {
    let db = common::open().await?;
    reseed(&db, common::seed()).await?;

    let created = db.create_review(common::draft("John Doe", 999_999)).await?;
    assert_eq!(
        db.query_reviews_by_dealership("999999").await?,
        vec![created]
    );

    Ok(())
}

// Important:
// Without a multithreaded runtime, the inserts would never overlap
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_inserts_never_share_an_id() -> anyhow::Result<()> {
    let db = common::open().await?;
    reseed(&db, common::seed()).await?;

    let tasks = (0..32)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move { db.create_review(common::draft("Racer", i)).await })
        })
        .collect::<Vec<_>>();

    let mut ids = HashSet::new();
    for task in tasks {
        let review = task.await??;
        assert!(ids.insert(review.id), "duplicate id {}", review.id);
    }

    assert_eq!(ids, (8..40).collect::<HashSet<_>>());

    Ok(())
}
