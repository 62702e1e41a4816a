//! [`DatabaseAdmin`] over the MongoDB administrative commands.

use std::sync::OnceLock;

use bson::{doc, Bson, Document};
use mongodb::Client;
use tracing::debug;

use super::client;
use super::settings::MongoConfig;
use crate::domain::{Credential, RoleGrant, UserInfo};
use crate::error::{Error, Result};
use crate::port::DatabaseAdmin;

/// Administrative session against one deployment.
///
/// The client is built by [`authenticate`](DatabaseAdmin::authenticate) and
/// reused for every later command.
pub struct MongoAdmin {
    settings: MongoConfig,
    client: OnceLock<Client>,
}

impl MongoAdmin {
    pub fn new(settings: MongoConfig) -> Self {
        Self {
            settings,
            client: OnceLock::new(),
        }
    }

    fn client(&self) -> Result<&Client> {
        self.client
            .get()
            .ok_or_else(|| Error::Database("not authenticated".into()))
    }
}

fn malformed(what: &str, err: impl std::fmt::Display) -> Error {
    Error::Database(format!("malformed {what}: {err}"))
}

/// Decode one entry of a `usersInfo` reply.
fn parse_user(user: &Document) -> Result<UserInfo> {
    let roles = user
        .get_array("roles")
        .map_err(|e| malformed("user roles", e))?
        .iter()
        .filter_map(Bson::as_document)
        .map(|role| -> Result<RoleGrant> {
            Ok(RoleGrant::new(
                role.get_str("role").map_err(|e| malformed("role", e))?,
                role.get_str("db").map_err(|e| malformed("role", e))?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(UserInfo {
        user: user
            .get_str("user")
            .map_err(|e| malformed("user", e))?
            .to_string(),
        db: user.get_str("db").map_err(|e| malformed("user", e))?.to_string(),
        roles,
    })
}

impl DatabaseAdmin for MongoAdmin {
    async fn authenticate(&self, admin_db: &str, credential: &Credential) -> Result<()> {
        let client = client::connect(&self.settings, credential, admin_db).await?;
        client.database(admin_db).run_command(doc! { "ping": 1 }).await?;
        if self.client.set(client).is_err() {
            debug!("Admin client already initialised, keeping existing session");
        }
        Ok(())
    }

    async fn find_user(&self, db: &str, username: &str) -> Result<Option<UserInfo>> {
        let reply = self
            .client()?
            .database(db)
            .run_command(doc! { "usersInfo": { "user": username, "db": db } })
            .await?;
        let users = reply
            .get_array("users")
            .map_err(|e| malformed("usersInfo reply", e))?;
        users
            .iter()
            .filter_map(Bson::as_document)
            .next()
            .map(parse_user)
            .transpose()
    }

    async fn create_user(&self, db: &str, user: &Credential, roles: &[RoleGrant]) -> Result<()> {
        let roles: Vec<Document> = roles
            .iter()
            .map(|r| doc! { "role": r.role.as_str(), "db": r.db.as_str() })
            .collect();
        self.client()?
            .database(db)
            .run_command(doc! {
                "createUser": user.username(),
                "pwd": user.password(),
                "roles": roles,
            })
            .await?;
        Ok(())
    }

    async fn collection_exists(&self, db: &str, name: &str) -> Result<bool> {
        let names = self
            .client()?
            .database(db)
            .list_collection_names()
            .filter(doc! { "name": name })
            .await?;
        Ok(names.iter().any(|n| n == name))
    }

    async fn create_collection(&self, db: &str, name: &str) -> Result<()> {
        self.client()?.database(db).create_collection(name).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_users_info_entry() {
        let user = doc! {
            "_id": "products.app_user",
            "user": "app_user",
            "db": "products",
            "roles": [ { "role": "readWrite", "db": "products" } ],
        };
        let info = parse_user(&user).unwrap();
        assert_eq!(info.user, "app_user");
        assert_eq!(info.db, "products");
        assert_eq!(info.roles, vec![RoleGrant::read_write("products")]);
    }

    #[test]
    fn missing_roles_is_malformed() {
        let user = doc! { "user": "app_user", "db": "products" };
        assert!(matches!(parse_user(&user), Err(Error::Database(_))));
    }

    #[tokio::test]
    async fn commands_before_authentication_fail() {
        let admin = MongoAdmin::new(MongoConfig::default());
        let err = admin.collection_exists("products", "product").await.unwrap_err();
        assert!(matches!(err, Error::Database(_)));
    }
}
