/**
 * Chat Fan-out Registry
 *
 * Tracks which chat listeners are connected to which trip and pushes newly
 * stored messages to them.
 *
 * # Listeners
 *
 * A listener is the sending half of a bounded `mpsc` channel. The connection
 * that owns the receiving half forwards every frame to its socket. When the
 * registry drops a sender (disconnect or eviction) the receiver ends, and the
 * connection shuts down.
 *
 * # Delivery
 *
 * `broadcast` copies the trip's senders out under the lock and sends after
 * releasing it, so a slow socket never blocks `connect`/`disconnect` on
 * other trips. Each send is bounded by the configured timeout; a listener
 * whose send fails or times out is evicted. Nothing is queued for listeners
 * that connect later.
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::shared::TripId;

/// Identifies one connected listener
pub type ListenerId = Uuid;

/// Sending half held by the registry for each listener
pub type ListenerHandle = mpsc::Sender<String>;

type Groups = HashMap<TripId, HashMap<ListenerId, ListenerHandle>>;

/// Per-trip listener groups shared by all chat connections
#[derive(Clone)]
pub struct ChatRegistry {
    groups: Arc<RwLock<Groups>>,
    send_timeout: Duration,
}

impl ChatRegistry {
    pub fn new(send_timeout: Duration) -> Self {
        Self {
            groups: Arc::new(RwLock::new(HashMap::new())),
            send_timeout,
        }
    }

    /// Add a listener to a trip's group, creating the group if needed
    pub async fn connect(&self, trip_id: TripId, handle: ListenerHandle) -> ListenerId {
        let listener_id = Uuid::new_v4();
        let mut groups = self.groups.write().await;
        groups.entry(trip_id).or_default().insert(listener_id, handle);

        tracing::debug!(
            "[Registry] Listener {} joined trip {} ({} connected)",
            listener_id,
            trip_id,
            groups.get(&trip_id).map_or(0, |group| group.len())
        );
        listener_id
    }

    /// Remove a listener; empty groups are dropped
    ///
    /// Removing a listener that is not present is a no-op.
    pub async fn disconnect(&self, trip_id: TripId, listener_id: ListenerId) {
        let mut groups = self.groups.write().await;
        Self::remove_locked(&mut groups, trip_id, &[listener_id]);
        tracing::debug!("[Registry] Listener {} left trip {}", listener_id, trip_id);
    }

    /// Deliver `frame` to every listener of `trip_id`
    ///
    /// # Returns
    ///
    /// Number of listeners that accepted the frame (0 if nobody is connected)
    pub async fn broadcast(&self, trip_id: TripId, frame: &str) -> usize {
        let targets: Vec<(ListenerId, ListenerHandle)> = {
            let groups = self.groups.read().await;
            match groups.get(&trip_id) {
                Some(group) => group
                    .iter()
                    .map(|(id, handle)| (*id, handle.clone()))
                    .collect(),
                None => return 0,
            }
        };

        let send_timeout = self.send_timeout;
        let attempts = targets.into_iter().map(|(listener_id, handle)| {
            let frame = frame.to_string();
            async move {
                match handle.send_timeout(frame, send_timeout).await {
                    Ok(()) => Ok(listener_id),
                    Err(e) => {
                        tracing::warn!(
                            "[Registry] Evicting listener {} of trip {}: {}",
                            listener_id,
                            trip_id,
                            e
                        );
                        Err(listener_id)
                    }
                }
            }
        });

        let mut delivered = 0;
        let mut failed = Vec::new();
        for outcome in join_all(attempts).await {
            match outcome {
                Ok(_) => delivered += 1,
                Err(listener_id) => failed.push(listener_id),
            }
        }

        if !failed.is_empty() {
            let mut groups = self.groups.write().await;
            Self::remove_locked(&mut groups, trip_id, &failed);
        }

        tracing::debug!("[Registry] Broadcast to trip {} reached {} listeners", trip_id, delivered);
        delivered
    }

    /// Number of listeners currently connected to a trip
    pub async fn listener_count(&self, trip_id: TripId) -> usize {
        self.groups
            .read()
            .await
            .get(&trip_id)
            .map_or(0, |group| group.len())
    }

    /// Number of trips with at least one listener
    pub async fn group_count(&self) -> usize {
        self.groups.read().await.len()
    }

    fn remove_locked(groups: &mut Groups, trip_id: TripId, listener_ids: &[ListenerId]) {
        if let Some(group) = groups.get_mut(&trip_id) {
            for listener_id in listener_ids {
                group.remove(listener_id);
            }
            if group.is_empty() {
                groups.remove(&trip_id);
            }
        }
    }
}
