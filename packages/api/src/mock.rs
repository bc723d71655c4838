//! Recording Transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use store::config::EndpointConfig;
use store::{ManualClock, MemoryStore, SmartQueueConfig};

use crate::gateway::SmartQueue;
use crate::queue::QueueService;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use crate::user::UserService;

pub const API: &str = "http://api.test/api";
pub const ETA: &str = "http://eta.test";
pub const ETA_TRACK: &str = "http://eta.test/eta/track";
/// 2023-11-14T22:13:20Z
pub const START_MILLIS: i64 = 1_700_000_000_000;

pub type TestClient = SmartQueue<MockTransport, MemoryStore, ManualClock>;

/// A gateway over a fresh mock, store and clock, configured like production:
/// one read retry on the API root, none on the ETA root.
pub fn smart_queue() -> (TestClient, MockTransport, MemoryStore, ManualClock) {
    let config = SmartQueueConfig {
        api: EndpointConfig::api().with_base_url(API),
        eta: EndpointConfig::eta().with_base_url(ETA),
        ..SmartQueueConfig::default()
    };
    let mock = MockTransport::new();
    let store = MemoryStore::new();
    let clock = ManualClock::new(START_MILLIS);
    let client = SmartQueue::new(&config, mock.clone(), store.clone(), clock.clone());
    (client, mock, store, clock)
}

pub fn queue_service() -> (
    QueueService<MockTransport, MemoryStore, ManualClock>,
    MockTransport,
    MemoryStore,
    ManualClock,
) {
    let (client, mock, store, clock) = smart_queue();
    (client.queues, mock, store, clock)
}

pub fn user_service() -> (UserService<MockTransport, MemoryStore>, MockTransport, MemoryStore) {
    let (client, mock, store, _clock) = smart_queue();
    (client.users, mock, store)
}

type Reply = Result<HttpResponse, TransportError>;

#[derive(Default)]
struct MockState {
    routes: Vec<(Method, String, VecDeque<Reply>)>,
    requests: Vec<HttpRequest>,
}

/// Scripted responses keyed by method + URL. Each route replays its queued
/// replies in order and then keeps repeating the last one. Unknown routes get 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, url: &str, reply: Reply) {
        let mut state = self.state.lock().unwrap();
        if let Some((_, _, replies)) = state
            .routes
            .iter_mut()
            .find(|(m, u, _)| *m == method && u == url)
        {
            replies.push_back(reply);
        } else {
            state
                .routes
                .push((method, url.to_string(), VecDeque::from([reply])));
        }
    }

    pub fn respond(&self, method: Method, url: &str, status: u16, body: Value) {
        self.push(
            method,
            url,
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, method: Method, url: &str, error: TransportError) {
        self.push(method, url, Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: Method, url: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        let route = state
            .routes
            .iter_mut()
            .find(|(m, u, _)| *m == request.method && *u == request.url);
        match route {
            Some((_, _, replies)) if replies.len() > 1 => replies.pop_front().unwrap(),
            Some((_, _, replies)) => replies.front().cloned().unwrap(),
            None => Ok(HttpResponse {
                status: 404,
                body: String::new(),
            }),
        }
    }
}
