use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;

use crate::domain::user::{NewUser, Role, User};
use crate::infra::storage::LocalStorage;

/// Storage key holding the serialized session user.
pub const SESSION_KEY: &str = "kms_user";

const MOCK_USER_ID: &str = "1";
const MOCK_USER_NAME: &str = "John Doe";
const MOCK_DEPARTMENT: &str = "Operations";

/// The signed-in user for this process. Begun by login/signup, ended by
/// logout; consumers read it through [`SessionContext::current`].
#[derive(Clone, Default)]
pub struct SessionContext {
    current: Arc<RwLock<Option<User>>>,
}

impl SessionContext {
    pub fn current(&self) -> Option<User> {
        self.current.read().clone()
    }

    fn begin(&self, user: User) {
        *self.current.write() = Some(user);
    }

    fn end(&self) -> Option<User> {
        self.current.write().take()
    }
}

#[derive(Clone)]
pub struct AuthService {
    storage: LocalStorage,
    session: SessionContext,
    latency: Duration,
}

impl AuthService {
    pub fn new(storage: LocalStorage, session: SessionContext, latency: Duration) -> Self {
        Self {
            storage,
            session,
            latency,
        }
    }

    /// Loads the persisted user, if any, into the session. An unreadable
    /// record leaves the process signed out.
    pub async fn restore(&self) -> Result<Option<User>> {
        let Some(raw) = self.storage.get_item(SESSION_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = user.role.as_str(), "session restored");
                self.session.begin(user.clone());
                Ok(Some(user))
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable session record");
                Ok(None)
            }
        }
    }

    /// Mock sign-in: any credentials succeed and the role is taken from the
    /// email address.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User> {
        tokio::time::sleep(self.latency).await;

        let user = User {
            id: MOCK_USER_ID.to_string(),
            name: MOCK_USER_NAME.to_string(),
            email: email.to_string(),
            role: Role::infer_from_email(email),
            department: MOCK_DEPARTMENT.to_string(),
            avatar: None,
        };
        self.start(user).await
    }

    pub async fn signup(&self, new_user: NewUser) -> Result<User> {
        tokio::time::sleep(self.latency).await;

        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let user = User {
            id: millis.to_string(),
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
            department: new_user.department,
            avatar: new_user.avatar,
        };
        self.start(user).await
    }

    /// Drops the persisted record, then ends the session. A failed removal
    /// leaves the user signed in.
    pub async fn logout(&self) -> Result<()> {
        self.storage.remove_item(SESSION_KEY).await?;
        if let Some(user) = self.session.end() {
            tracing::info!(user_id = %user.id, "session ended");
        }
        Ok(())
    }

    async fn start(&self, user: User) -> Result<User> {
        let record = serde_json::to_string(&user)?;
        self.storage.set_item(SESSION_KEY, record).await?;
        tracing::info!(user_id = %user.id, role = user.role.as_str(), "session started");
        self.session.begin(user.clone());
        Ok(user)
    }
}
