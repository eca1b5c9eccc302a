//! Stop ordering under concurrent appends
//!
//! Runs against a WAL database file with several pooled connections, so
//! appends genuinely race instead of queueing on a single connection.

use futures_util::future::join_all;
use pretty_assertions::assert_eq;
use sqlx::SqlitePool;
use tempfile::TempDir;

use globetrotter::backend::server::config::{load_database, ServerConfig};
use globetrotter::backend::trips::db::{count_stops, create_stop, create_trip, delete_stop};
use globetrotter::shared::{NewStop, NewTrip, TripId};

async fn file_pool(dir: &TempDir) -> SqlitePool {
    let path = dir.path().join("globetrotter.db");
    let config = ServerConfig::builder()
        .database_url(format!("sqlite://{}", path.display()))
        .max_connections(8)
        .build()
        .unwrap();

    assert_ok!(load_database(&config).await, "open file database")
}

async fn new_trip(pool: &SqlitePool) -> TripId {
    let trip = create_trip(
        pool,
        &NewTrip {
            name: "Grand Tour".to_string(),
            start_date: "2025-06-01".parse().unwrap(),
            end_date: "2025-08-31".parse().unwrap(),
        },
    )
    .await
    .unwrap();
    trip.id
}

async fn append_concurrently(pool: &SqlitePool, trip_id: TripId, count: usize) -> Vec<i64> {
    let tasks = (1..=count).map(|n| {
        let pool = pool.clone();
        tokio::spawn(async move {
            let request = NewStop {
                city: format!("City {}", n),
                duration_days: 1,
            };
            create_stop(&pool, trip_id, &request).await
        })
    });

    let mut orders = Vec::with_capacity(count);
    for joined in join_all(tasks).await {
        let created = assert_ok!(assert_ok!(joined, "append task"), "create_stop");
        orders.push(created.expect("trip exists").stop_order);
    }
    orders.sort_unstable();
    orders
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_get_distinct_orders() {
    let dir = tempfile::tempdir().unwrap();
    let pool = file_pool(&dir).await;
    let trip_id = new_trip(&pool).await;

    let orders = append_concurrently(&pool, trip_id, 40).await;

    assert_eq!(orders, (1..=40).collect::<Vec<i64>>());
    assert_eq!(count_stops(&pool, trip_id).await.unwrap(), 40);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_after_deletion_continue_counter() {
    let dir = tempfile::tempdir().unwrap();
    let pool = file_pool(&dir).await;
    let trip_id = new_trip(&pool).await;

    let first = create_stop(
        &pool,
        trip_id,
        &NewStop {
            city: "Lisbon".to_string(),
            duration_days: 2,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(delete_stop(&pool, first.id).await.unwrap());

    let orders = append_concurrently(&pool, trip_id, 10).await;
    assert_eq!(orders, (2..=11).collect::<Vec<i64>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_on_separate_trips() {
    let dir = tempfile::tempdir().unwrap();
    let pool = file_pool(&dir).await;
    let north = new_trip(&pool).await;
    let south = new_trip(&pool).await;

    let (north_orders, south_orders) = tokio::join!(
        append_concurrently(&pool, north, 15),
        append_concurrently(&pool, south, 15),
    );

    assert_eq!(north_orders, (1..=15).collect::<Vec<i64>>());
    assert_eq!(south_orders, (1..=15).collect::<Vec<i64>>());
}
