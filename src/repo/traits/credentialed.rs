use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::owner::Owner;
use crate::models::sitter::Sitter;

/// Shared capability of a password-holding aggregate. Registration, login and
/// hash-check are implemented once over this trait instead of being
/// duplicated per aggregate kind.
pub trait Credentialed: Serialize + DeserializeOwned + Send + Sync + Unpin {
    const COLLECTION: &'static str;

    fn id(&self) -> Option<ObjectId>;
    fn email(&self) -> &str;
    fn password(&self) -> &[u8];
}

impl Credentialed for Owner {
    const COLLECTION: &'static str = "owners";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password(&self) -> &[u8] {
        &self.password
    }
}

impl Credentialed for Sitter {
    const COLLECTION: &'static str = "sitters";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password(&self) -> &[u8] {
        &self.password
    }
}
