use std::sync::Arc;

use tokio::{
    sync::{broadcast, watch},
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::domain::session::{entities::SessionSnapshot, ports::IdentityProvider};

/// Application-wide auth state. Owns one listener task that mirrors the
/// provider's auth events into a [`SessionSnapshot`].
#[derive(Debug)]
pub struct SessionContext {
    snapshot: watch::Receiver<SessionSnapshot>,
    listener: Option<JoinHandle<()>>,
}

impl SessionContext {
    /// Subscribes to auth events first and only then fetches the current
    /// session, so a change racing the fetch is never lost. A fetched
    /// session is applied only if no event has resolved the state already.
    pub async fn initialize<P: IdentityProvider>(provider: &P) -> Self {
        let mut events = provider.subscribe();
        let (sender, mut snapshot) = watch::channel(SessionSnapshot::loading());
        let sender = Arc::new(sender);

        let listener = tokio::spawn({
            let sender = Arc::clone(&sender);
            async move {
                loop {
                    match events.recv().await {
                        Ok(event) => {
                            debug!(?event, "Auth state changed");
                            sender.send_replace(SessionSnapshot::resolved(
                                event.session().cloned(),
                            ));
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!(skipped, "Auth event listener lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            }
        });

        let current = provider.get_session().await.unwrap_or_else(|error| {
            warn!(%error, "Failed to fetch the current session");
            None
        });

        sender.send_if_modified(|state| {
            if !state.loading {
                return false;
            }
            *state = SessionSnapshot::resolved(current);
            true
        });
        snapshot.borrow_and_update();

        Self {
            snapshot,
            listener: Some(listener),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Waits for the next change. Returns `false` once the listener is gone.
    pub async fn changed(&mut self) -> bool {
        self.snapshot.changed().await.is_ok()
    }

    pub fn is_listening(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|listener| !listener.is_finished())
    }

    /// Stops the listener and drops its subscription.
    pub async fn teardown(mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
            let _ = listener.await;
        }
    }
}

impl Drop for SessionContext {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{
        domain::session::{
            entities::{AuthEvent, Session, SignUpInput, User},
            ports::AuthError,
        },
        infrastructure::identity::InMemoryIdentityProvider,
    };

    /// Records the order in which the context talks to the provider.
    struct RecordingProvider {
        calls: Mutex<Vec<&'static str>>,
        events: broadcast::Sender<AuthEvent>,
    }

    impl RecordingProvider {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                events: broadcast::channel(8).0,
            }
        }
    }

    impl IdentityProvider for RecordingProvider {
        async fn sign_in_with_password(&self, _: String, _: String) -> Result<Session, AuthError> {
            Err(AuthError::InvalidCredentials)
        }

        async fn sign_up(&self, _: SignUpInput) -> Result<User, AuthError> {
            Err(AuthError::AlreadyRegistered)
        }

        async fn reset_password_for_email(&self, _: String, _: String) -> Result<(), AuthError> {
            Ok(())
        }

        async fn update_password(&self, _: String) -> Result<User, AuthError> {
            Err(AuthError::SessionMissing)
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }

        async fn get_session(&self) -> Result<Option<Session>, AuthError> {
            self.calls.lock().unwrap().push("get_session");
            Ok(None)
        }

        fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
            self.calls.lock().unwrap().push("subscribe");
            self.events.subscribe()
        }
    }

    async fn registered_provider() -> InMemoryIdentityProvider {
        let provider = InMemoryIdentityProvider::default();
        provider
            .sign_up(SignUpInput {
                email: "sam@example.com".to_string(),
                password: "Secret123".to_string(),
                full_name: None,
            })
            .await
            .unwrap();
        provider
    }

    #[tokio::test]
    async fn test_subscribes_before_fetching() {
        let provider = RecordingProvider::new();
        let context = SessionContext::initialize(&provider).await;

        assert_eq!(*provider.calls.lock().unwrap(), vec!["subscribe", "get_session"]);
        assert_eq!(context.snapshot(), SessionSnapshot::resolved(None));
    }

    #[tokio::test]
    async fn test_follows_sign_in_and_sign_out() {
        let provider = registered_provider().await;
        let mut context = SessionContext::initialize(&provider).await;
        assert!(!context.snapshot().is_authenticated());

        provider
            .sign_in_with_password("sam@example.com".to_string(), "Secret123".to_string())
            .await
            .unwrap();
        assert!(context.changed().await);
        assert!(context.snapshot().is_authenticated());

        provider.sign_out().await.unwrap();
        assert!(context.changed().await);
        assert!(!context.snapshot().is_authenticated());
    }

    #[tokio::test]
    async fn test_picks_up_existing_session() {
        let provider = registered_provider().await;
        provider
            .sign_in_with_password("sam@example.com".to_string(), "Secret123".to_string())
            .await
            .unwrap();

        let context = SessionContext::initialize(&provider).await;
        let snapshot = context.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(
            snapshot.user().map(|user| user.email.as_str()),
            Some("sam@example.com")
        );
    }

    #[tokio::test]
    async fn test_teardown_unsubscribes() {
        let provider = registered_provider().await;
        let context = SessionContext::initialize(&provider).await;
        assert!(context.is_listening());
        assert_eq!(provider.subscriber_count(), 1);

        context.teardown().await;
        assert_eq!(provider.subscriber_count(), 0);
    }
}
