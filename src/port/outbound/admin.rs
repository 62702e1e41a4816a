//! Administrative interface of the document database.

use std::future::Future;

use crate::domain::{Credential, RoleGrant, UserInfo};
use crate::error::Result;

/// User and collection management on a database instance.
///
/// [`authenticate`](DatabaseAdmin::authenticate) must succeed before any
/// other call; implementations return an error otherwise.
pub trait DatabaseAdmin: Send + Sync {
    /// Log in against `admin_db` with the administrative credential.
    fn authenticate(
        &self,
        admin_db: &str,
        credential: &Credential,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Look up a user defined on `db`.
    fn find_user(
        &self,
        db: &str,
        username: &str,
    ) -> impl Future<Output = Result<Option<UserInfo>>> + Send;

    /// Create a user on `db` holding `roles`.
    fn create_user(
        &self,
        db: &str,
        user: &Credential,
        roles: &[RoleGrant],
    ) -> impl Future<Output = Result<()>> + Send;

    fn collection_exists(&self, db: &str, name: &str)
        -> impl Future<Output = Result<bool>> + Send;

    /// Create an empty collection.
    fn create_collection(&self, db: &str, name: &str) -> impl Future<Output = Result<()>> + Send;
}
