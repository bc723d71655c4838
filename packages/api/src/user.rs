//! User operations: register, login, logout, and the user's tickets.

use store::{KeyValueStore, SessionStore, Ticket, User};

use crate::client::{segment, HttpClient};
use crate::error::ApiError;
use crate::schema::{LoginRequest, LoginResponse, RegisterRequest};
use crate::transport::Transport;

const USERS_PATH: &str = "/v1/users";

/// User service client plus the session it maintains.
#[derive(Clone, Debug)]
pub struct UserService<T: Transport, S: KeyValueStore> {
    pub(crate) api: HttpClient<T>,
    session: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStore> UserService<T, S> {
    pub fn new(api: HttpClient<T>, session: SessionStore<S>) -> Self {
        Self { api, session }
    }

    /// Create an account and remember the returned user.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let user: User = self
            .api
            .post(&format!("{USERS_PATH}/register"), request)
            .await?;
        self.session.set_user(&user);
        tracing::info!("Registered {}", user.email);
        Ok(user)
    }

    /// Log in and remember the user.
    ///
    /// The response must carry the user under `user`; otherwise this fails with
    /// [`ApiError::InvalidResponse`] and the session is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .api
            .post(&format!("{USERS_PATH}/login"), &request)
            .await?;
        let Some(user) = response.user else {
            return Err(ApiError::InvalidResponse(
                "Invalid login response from server".to_string(),
            ));
        };
        self.session.set_user(&user);
        tracing::info!("Logged in as {}", user.email);
        Ok(user)
    }

    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("Logged out");
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    pub fn current_email(&self) -> Option<String> {
        self.session.current_email()
    }

    /// All tickets belonging to a user.
    pub async fn my_tickets(&self, user_id: &str) -> Result<Vec<Ticket>, ApiError> {
        self.api
            .get(&format!("{USERS_PATH}/{}/tickets", segment(user_id)), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::session::{CURRENT_USER_KEY, USER_EMAIL_KEY};

    use super::*;
    use crate::mock::{user_service, API};
    use crate::transport::Method;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "+84333138386".into(),
            password: "Secret123".into(),
            email_notification_enabled: true,
            sms_notification_enabled: false,
        }
    }

    #[tokio::test]
    async fn test_login_persists_nested_user() {
        let (service, mock, store) = user_service();
        mock.respond(
            Method::Post,
            &format!("{API}/v1/users/login"),
            200,
            json!({"message": "Login successful",
                   "user": {"userId": "u1", "email": "ann@example.com", "name": "Ann"}}),
        );

        let user = service.login("ann@example.com", "Secret123").await.unwrap();
        assert_eq!(user, User::new("u1", "ann@example.com", "Ann"));
        assert_eq!(service.current_user(), Some(user));
        assert_eq!(store.get(USER_EMAIL_KEY).as_deref(), Some("ann@example.com"));
        assert_eq!(
            mock.requests()[0].body.as_deref(),
            Some(r#"{"email":"ann@example.com","password":"Secret123"}"#)
        );
    }

    #[tokio::test]
    async fn test_login_without_user_is_invalid_response() {
        let (service, mock, store) = user_service();
        mock.respond(
            Method::Post,
            &format!("{API}/v1/users/login"),
            200,
            json!({"message": "Login successful"}),
        );

        let err = service.login("ann@example.com", "Secret123").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::InvalidResponse("Invalid login response from server".to_string())
        );
        assert!(store.get(CURRENT_USER_KEY).is_none());
        assert!(store.get(USER_EMAIL_KEY).is_none());
    }

    #[tokio::test]
    async fn test_login_rejected_wipes_storage() {
        let (service, mock, store) = user_service();
        store.set("eta_t1", "{}");
        mock.respond(
            Method::Post,
            &format!("{API}/v1/users/login"),
            401,
            json!({"error": "Invalid credentials"}),
        );

        let err = service.login("ann@example.com", "nope").await.unwrap_err();
        assert_eq!(err.user_message("Wrong email or password"), "Invalid credentials");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_register_persists_user() {
        let (service, mock, _store) = user_service();
        mock.respond(
            Method::Post,
            &format!("{API}/v1/users/register"),
            201,
            json!({"userId": "u2", "email": "ann@example.com", "name": "Ann",
                   "phone": "+84333138386", "emailNotificationEnabled": true}),
        );

        let user = service.register(&register_request()).await.unwrap();
        assert_eq!(user.user_id, "u2");
        assert_eq!(service.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_register_failure_keeps_session_empty() {
        let (service, mock, _store) = user_service();
        mock.respond(
            Method::Post,
            &format!("{API}/v1/users/register"),
            400,
            json!({"message": "Email already registered"}),
        );

        let err = service.register(&register_request()).await.unwrap_err();
        assert_eq!(err.server_message(), Some("Email already registered"));
        assert!(service.current_user().is_none());
    }

    #[tokio::test]
    async fn test_logout_keeps_eta_cache() {
        let (service, _mock, store) = user_service();
        store.set("eta_t1", r#"{"remainingMinutes":3,"savedAt":0}"#);
        service
            .session
            .set_user(&User::new("u1", "ann@example.com", "Ann"));

        service.logout();
        assert!(service.current_user().is_none());
        assert!(service.current_email().is_none());
        assert!(store.get("eta_t1").is_some());
    }

    #[tokio::test]
    async fn test_my_tickets() {
        let (service, mock, _store) = user_service();
        mock.respond(
            Method::Get,
            &format!("{API}/v1/users/u1/tickets"),
            200,
            json!([{"ticketId": "t1", "queueId": "q1", "position": 2, "status": "SERVED"}]),
        );

        let tickets = service.my_tickets("u1").await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].status, store::TicketStatus::Served);
    }

    #[tokio::test]
    async fn test_my_tickets_escapes_user_id() {
        let (service, mock, _store) = user_service();
        mock.respond(
            Method::Get,
            &format!("{API}/v1/users/a%2Fb%3F/tickets"),
            200,
            json!([]),
        );

        assert!(service.my_tickets("a/b?").await.unwrap().is_empty());
        assert_eq!(mock.count(Method::Get, &format!("{API}/v1/users/a%2Fb%3F/tickets")), 1);
    }
}
