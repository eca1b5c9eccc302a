//! Database operations for the itinerary
//!
//! Trips, stops and activities live in three tables linked by foreign keys
//! with `ON DELETE CASCADE`. Reads that return a `Trip` assemble the nested
//! collections in Rust: stops by ascending `stop_order`, activities by id.
//!
//! Functions that attach a child to a parent return `Ok(None)` when the
//! parent does not exist; the handlers turn that into a 404.

use std::collections::HashMap;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::shared::{
    Activity, ActivityId, NewActivity, NewStop, NewTrip, Stop, StopId, Trip, TripId,
};

fn trip_from_row(row: &SqliteRow) -> Result<Trip, sqlx::Error> {
    Ok(Trip::new(
        row.try_get("id")?,
        row.try_get("name")?,
        row.try_get("start_date")?,
        row.try_get("end_date")?,
    ))
}

fn stop_from_row(row: &SqliteRow) -> Result<Stop, sqlx::Error> {
    Ok(Stop::new(
        row.try_get("id")?,
        row.try_get("trip_id")?,
        row.try_get("city")?,
        row.try_get("duration_days")?,
        row.try_get("stop_order")?,
    ))
}

fn activity_from_row(row: &SqliteRow) -> Result<Activity, sqlx::Error> {
    Ok(Activity {
        id: row.try_get("id")?,
        stop_id: row.try_get("stop_id")?,
        name: row.try_get("name")?,
        cost: row.try_get("cost")?,
    })
}

/// Distribute activities into their stops, then stops into their trips
///
/// Input order is preserved inside each collection.
fn assemble(trips: &mut [Trip], stops: Vec<Stop>, activities: Vec<Activity>) {
    let mut activities_by_stop: HashMap<StopId, Vec<Activity>> = HashMap::new();
    for activity in activities {
        activities_by_stop.entry(activity.stop_id).or_default().push(activity);
    }

    let mut stops_by_trip: HashMap<TripId, Vec<Stop>> = HashMap::new();
    for mut stop in stops {
        stop.activities = activities_by_stop.remove(&stop.id).unwrap_or_default();
        stops_by_trip.entry(stop.trip_id).or_default().push(stop);
    }

    for trip in trips.iter_mut() {
        trip.stops = stops_by_trip.remove(&trip.id).unwrap_or_default();
    }
}

// ===== Trips =====

/// Insert a new trip
///
/// The payload must already be validated.
pub async fn create_trip(pool: &SqlitePool, new_trip: &NewTrip) -> Result<Trip, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO trips (name, start_date, end_date)
        VALUES (?, ?, ?)
        RETURNING id, name, start_date, end_date
        "#,
    )
    .bind(&new_trip.name)
    .bind(new_trip.start_date)
    .bind(new_trip.end_date)
    .fetch_one(pool)
    .await?;

    trip_from_row(&row)
}

/// List every trip with nested stops and activities
pub async fn list_trips(pool: &SqlitePool) -> Result<Vec<Trip>, sqlx::Error> {
    let mut trips = sqlx::query("SELECT id, name, start_date, end_date FROM trips ORDER BY id ASC")
        .fetch_all(pool)
        .await?
        .iter()
        .map(trip_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    let stops = sqlx::query(
        r#"
        SELECT id, trip_id, city, duration_days, stop_order
        FROM stops
        ORDER BY trip_id ASC, stop_order ASC
        "#,
    )
    .fetch_all(pool)
    .await?
    .iter()
    .map(stop_from_row)
    .collect::<Result<Vec<_>, _>>()?;

    let activities = sqlx::query("SELECT id, stop_id, name, cost FROM activities ORDER BY id ASC")
        .fetch_all(pool)
        .await?
        .iter()
        .map(activity_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    assemble(&mut trips, stops, activities);
    Ok(trips)
}

/// Fetch one trip with nested stops and activities
pub async fn get_trip(pool: &SqlitePool, trip_id: TripId) -> Result<Option<Trip>, sqlx::Error> {
    let row = sqlx::query("SELECT id, name, start_date, end_date FROM trips WHERE id = ?")
        .bind(trip_id)
        .fetch_optional(pool)
        .await?;

    let mut trip = match row {
        Some(row) => trip_from_row(&row)?,
        None => return Ok(None),
    };

    let stops = list_stops_for_trip(pool, trip_id).await?;

    let activities = sqlx::query(
        r#"
        SELECT a.id, a.stop_id, a.name, a.cost
        FROM activities a
        JOIN stops s ON s.id = a.stop_id
        WHERE s.trip_id = ?
        ORDER BY a.id ASC
        "#,
    )
    .bind(trip_id)
    .fetch_all(pool)
    .await?
    .iter()
    .map(activity_from_row)
    .collect::<Result<Vec<_>, _>>()?;

    assemble(std::slice::from_mut(&mut trip), stops, activities);
    Ok(Some(trip))
}

/// Check whether a trip exists
pub async fn trip_exists(pool: &SqlitePool, trip_id: TripId) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM trips WHERE id = ?")
        .bind(trip_id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Delete a trip with its stops, activities and messages
///
/// Returns `false` when no such trip existed.
pub async fn delete_trip(pool: &SqlitePool, trip_id: TripId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM trips WHERE id = ?")
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ===== Stops =====

/// Append a stop to a trip
///
/// `stop_order` comes from the trip's `stops_created` counter, bumped in the
/// same transaction as the insert. The transaction is opened with
/// `BEGIN IMMEDIATE`, so it holds the write lock before it reads the counter
/// and concurrent appends queue on the busy timeout instead of failing.
/// Deleting a stop never frees its order for reuse.
///
/// Returns `Ok(None)` when the trip does not exist.
pub async fn create_stop(
    pool: &SqlitePool,
    trip_id: TripId,
    new_stop: &NewStop,
) -> Result<Option<Stop>, sqlx::Error> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    let stop_order: Option<i64> = sqlx::query_scalar(
        r#"
        UPDATE trips
        SET stops_created = stops_created + 1
        WHERE id = ?
        RETURNING stops_created
        "#,
    )
    .bind(trip_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(stop_order) = stop_order else {
        tx.rollback().await?;
        return Ok(None);
    };

    let row = sqlx::query(
        r#"
        INSERT INTO stops (trip_id, city, duration_days, stop_order)
        VALUES (?, ?, ?, ?)
        RETURNING id, trip_id, city, duration_days, stop_order
        "#,
    )
    .bind(trip_id)
    .bind(&new_stop.city)
    .bind(new_stop.duration_days)
    .bind(stop_order)
    .fetch_one(&mut *tx)
    .await?;

    let stop = stop_from_row(&row)?;
    tx.commit().await?;

    Ok(Some(stop))
}

/// Fetch one stop with its activities
pub async fn get_stop(pool: &SqlitePool, stop_id: StopId) -> Result<Option<Stop>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, trip_id, city, duration_days, stop_order FROM stops WHERE id = ?",
    )
    .bind(stop_id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => {
            let mut stop = stop_from_row(&row)?;
            stop.activities = list_activities_for_stop(pool, stop_id).await?;
            Ok(Some(stop))
        }
        None => Ok(None),
    }
}

/// Stops of a trip in ascending `stop_order`, without activities
pub async fn list_stops_for_trip(
    pool: &SqlitePool,
    trip_id: TripId,
) -> Result<Vec<Stop>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT id, trip_id, city, duration_days, stop_order
        FROM stops
        WHERE trip_id = ?
        ORDER BY stop_order ASC
        "#,
    )
    .bind(trip_id)
    .fetch_all(pool)
    .await?
    .iter()
    .map(stop_from_row)
    .collect()
}

/// Number of stops currently attached to a trip
pub async fn count_stops(pool: &SqlitePool, trip_id: TripId) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM stops WHERE trip_id = ?")
        .bind(trip_id)
        .fetch_one(pool)
        .await
}

/// Delete a stop and its activities
///
/// The remaining stops keep their `stop_order`.
pub async fn delete_stop(pool: &SqlitePool, stop_id: StopId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM stops WHERE id = ?")
        .bind(stop_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ===== Activities =====

/// Attach an activity to a stop
///
/// Returns `Ok(None)` when the stop does not exist.
pub async fn create_activity(
    pool: &SqlitePool,
    stop_id: StopId,
    new_activity: &NewActivity,
) -> Result<Option<Activity>, sqlx::Error> {
    // INSERT ... SELECT yields no row when the stop is missing
    let row = sqlx::query(
        r#"
        INSERT INTO activities (stop_id, name, cost)
        SELECT id, ?, ? FROM stops WHERE id = ?
        RETURNING id, stop_id, name, cost
        "#,
    )
    .bind(&new_activity.name)
    .bind(new_activity.cost)
    .bind(stop_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(activity_from_row).transpose()
}

/// Activities of a stop in creation order
pub async fn list_activities_for_stop(
    pool: &SqlitePool,
    stop_id: StopId,
) -> Result<Vec<Activity>, sqlx::Error> {
    sqlx::query("SELECT id, stop_id, name, cost FROM activities WHERE stop_id = ? ORDER BY id ASC")
        .bind(stop_id)
        .fetch_all(pool)
        .await?
        .iter()
        .map(activity_from_row)
        .collect()
}

/// Delete a single activity
pub async fn delete_activity(
    pool: &SqlitePool,
    activity_id: ActivityId,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM activities WHERE id = ?")
        .bind(activity_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
