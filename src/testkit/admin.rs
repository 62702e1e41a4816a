//! In-memory database administration double.

use parking_lot::Mutex;

use crate::domain::{Credential, RoleGrant, UserInfo};
use crate::error::{Error, Result};
use crate::port::DatabaseAdmin;

#[derive(Debug, Default)]
struct State {
    authenticated: bool,
    users: Vec<UserInfo>,
    collections: Vec<(String, String)>,
    calls: Vec<String>,
    fail_on: Option<&'static str>,
}

/// Instance with a single administrative login.
///
/// Mirrors the server's rules: nothing works before a successful
/// `authenticate`, and creating a duplicate user or collection fails.
#[derive(Debug)]
pub struct MemoryAdmin {
    admin_db: String,
    admin: Credential,
    state: Mutex<State>,
}

impl MemoryAdmin {
    pub fn with_admin(admin_db: impl Into<String>, admin: Credential) -> Self {
        Self {
            admin_db: admin_db.into(),
            admin,
            state: Mutex::new(State::default()),
        }
    }

    /// Users defined on `db`.
    pub fn users(&self, db: &str) -> Vec<UserInfo> {
        self.state
            .lock()
            .users
            .iter()
            .filter(|u| u.db == db)
            .cloned()
            .collect()
    }

    /// Collection names in `db`.
    pub fn collections(&self, db: &str) -> Vec<String> {
        self.state
            .lock()
            .collections
            .iter()
            .filter(|(d, _)| d == db)
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Every port call so far, as `"<op> <args>"`.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn seed_user(&self, db: &str, user: &str, roles: Vec<RoleGrant>) {
        self.state.lock().users.push(UserInfo {
            user: user.to_string(),
            db: db.to_string(),
            roles,
        });
    }

    pub fn seed_collection(&self, db: &str, name: &str) {
        self.state
            .lock()
            .collections
            .push((db.to_string(), name.to_string()));
    }

    /// Make the named operation fail with a database error.
    pub fn fail_on(&self, op: &'static str) {
        self.state.lock().fail_on = Some(op);
    }

    fn enter(&self, op: &'static str, args: &str) -> Result<parking_lot::MutexGuard<'_, State>> {
        let mut state = self.state.lock();
        state.calls.push(format!("{op} {args}"));
        if state.fail_on == Some(op) {
            return Err(Error::Database(format!("{op} failed")));
        }
        if op != "authenticate" && !state.authenticated {
            return Err(Error::Database("command requires authentication".into()));
        }
        Ok(state)
    }
}

impl DatabaseAdmin for MemoryAdmin {
    async fn authenticate(&self, admin_db: &str, credential: &Credential) -> Result<()> {
        let mut state = self.enter("authenticate", admin_db)?;
        if admin_db != self.admin_db || *credential != self.admin {
            return Err(Error::Database("Authentication failed.".into()));
        }
        state.authenticated = true;
        Ok(())
    }

    async fn find_user(&self, db: &str, username: &str) -> Result<Option<UserInfo>> {
        let state = self.enter("find_user", &format!("{db} {username}"))?;
        Ok(state
            .users
            .iter()
            .find(|u| u.db == db && u.user == username)
            .cloned())
    }

    async fn create_user(&self, db: &str, user: &Credential, roles: &[RoleGrant]) -> Result<()> {
        let mut state = self.enter("create_user", &format!("{db} {}", user.username()))?;
        if state
            .users
            .iter()
            .any(|u| u.db == db && u.user == user.username())
        {
            return Err(Error::Database(format!(
                "User \"{}@{db}\" already exists",
                user.username()
            )));
        }
        state.users.push(UserInfo {
            user: user.username().to_string(),
            db: db.to_string(),
            roles: roles.to_vec(),
        });
        Ok(())
    }

    async fn collection_exists(&self, db: &str, name: &str) -> Result<bool> {
        let state = self.enter("collection_exists", &format!("{db} {name}"))?;
        Ok(state.collections.iter().any(|(d, n)| d == db && n == name))
    }

    async fn create_collection(&self, db: &str, name: &str) -> Result<()> {
        let mut state = self.enter("create_collection", &format!("{db} {name}"))?;
        if state.collections.iter().any(|(d, n)| d == db && n == name) {
            return Err(Error::Database(format!(
                "Collection {db}.{name} already exists."
            )));
        }
        state.collections.push((db.to_string(), name.to_string()));
        Ok(())
    }
}
