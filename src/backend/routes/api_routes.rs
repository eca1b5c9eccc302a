/**
 * API Route Handlers
 *
 * Itinerary CRUD plus the derived planning endpoints.
 *
 * # Routes
 *
 * ## Trips
 * - `POST /trip` - Create a trip
 * - `GET /trips` - List trips with their itineraries
 * - `GET /trip/{trip_id}` - One trip with stops and activities
 * - `DELETE /trip/{trip_id}` - Delete a trip and everything it owns
 *
 * ## Stops
 * - `POST /trip/{trip_id}/stop` - Append a stop
 * - `GET /stop/{stop_id}` - One stop with activities
 * - `DELETE /stop/{stop_id}` - Delete a stop
 *
 * ## Activities
 * - `POST /stop/{stop_id}/activity` - Add an activity
 * - `DELETE /activity/{activity_id}` - Delete an activity
 *
 * ## Planning
 * - `GET /trip/{trip_id}/budget` - Budget breakdown
 * - `GET /suggestions?city=` - Activity suggestions for a city
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::planning::{get_suggestions, get_trip_budget};
use crate::backend::server::state::AppState;
use crate::backend::trips::{
    add_activity, add_stop, create_trip, delete_activity, delete_stop, delete_trip, get_stop,
    get_trip, list_trips,
};

/// Configure itinerary and planning routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Trips
        .route("/trip", post(create_trip))
        .route("/trips", get(list_trips))
        .route("/trip/{trip_id}", get(get_trip).delete(delete_trip))
        // Stops
        .route("/trip/{trip_id}/stop", post(add_stop))
        .route("/stop/{stop_id}", get(get_stop).delete(delete_stop))
        // Activities
        .route("/stop/{stop_id}/activity", post(add_activity))
        .route("/activity/{activity_id}", delete(delete_activity))
        // Planning
        .route("/trip/{trip_id}/budget", get(get_trip_budget))
        .route("/suggestions", get(get_suggestions))
}
