//! # SmartQueue gateway
//!
//! [`SmartQueue`] wires both HTTP roots, the session store and the ETA cache over
//! one shared [`KeyValueStore`]. The API root carries the unauthorized rule: a 401
//! from the user or queue service wipes all client storage and then runs the
//! navigation hook installed with [`SmartQueue::on_unauthorized`]. The ETA root
//! has no such rule.

use std::sync::Arc;

use store::{Clock, EtaCache, KeyValueStore, SessionStore, SmartQueueConfig};

use crate::client::{HttpClient, UnauthorizedHandler};
use crate::queue::QueueService;
use crate::transport::Transport;
use crate::user::UserService;

/// Everything the client talks to, behind one handle.
#[derive(Clone, Debug)]
pub struct SmartQueue<T: Transport, S: KeyValueStore, C: Clock> {
    pub queues: QueueService<T, S, C>,
    pub users: UserService<T, S>,
    store: S,
}

impl<T, S, C> SmartQueue<T, S, C>
where
    T: Transport + Clone,
    S: KeyValueStore + Clone + Send + Sync + 'static,
    C: Clock + Clone,
{
    pub fn new(config: &SmartQueueConfig, transport: T, store: S, clock: C) -> Self {
        let mut api = HttpClient::new(transport.clone(), &config.api);
        api.set_unauthorized_handler(clearing_handler(store.clone(), || {}));
        let eta = HttpClient::new(transport, &config.eta);

        Self {
            queues: QueueService::new(api.clone(), eta, EtaCache::new(store.clone(), clock)),
            users: UserService::new(api, SessionStore::new(store.clone())),
            store,
        }
    }

    /// Run `navigate` after storage is wiped on a 401.
    pub fn on_unauthorized(mut self, navigate: impl Fn() + Send + Sync + 'static) -> Self {
        let handler = clearing_handler(self.store.clone(), navigate);
        self.queues.api.set_unauthorized_handler(handler.clone());
        self.users.api.set_unauthorized_handler(handler);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn clearing_handler<S>(store: S, then: impl Fn() + Send + Sync + 'static) -> UnauthorizedHandler
where
    S: KeyValueStore + Send + Sync + 'static,
{
    Arc::new(move || {
        store.clear();
        then();
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use crate::error::ApiError;
    use crate::mock::{smart_queue, API, ETA_TRACK};
    use crate::transport::Method;

    use super::*;

    #[tokio::test]
    async fn test_unauthorized_queue_call_clears_store_and_navigates() {
        let (client, mock, store, _clock) = smart_queue();
        let navigations = Arc::new(AtomicUsize::new(0));
        let counter = navigations.clone();
        let client = client.on_unauthorized(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set("currentUser", r#"{"userId":"u1","email":"a@b.c"}"#);
        store.set("eta_t1", r#"{"remainingMinutes":5,"savedAt":0}"#);
        mock.respond(Method::Get, &format!("{API}/queues"), 401, json!({}));

        let err = client.queues.list_queues().await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized { message: None });
        assert!(store.is_empty());
        assert_eq!(navigations.load(Ordering::SeqCst), 1);
        // Not retried
        assert_eq!(mock.count(Method::Get, &format!("{API}/queues")), 1);
    }

    #[tokio::test]
    async fn test_eta_401_keeps_storage() {
        let (client, mock, store, _clock) = smart_queue();
        store.set("userEmail", "a@b.c");
        mock.respond(Method::Get, ETA_TRACK, 401, json!({}));

        let err = client
            .queues
            .track_eta("q1", "t1", 1, "a@b.c", true)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert_eq!(store.get("userEmail").as_deref(), Some("a@b.c"));
    }
}
