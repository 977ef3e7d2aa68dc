use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::auth::AuthUtils;

/// Sitter aggregate. No sub-entities.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Sitter {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: Vec<u8>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SitterRegisterReceive {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SitterLoginReceive {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SitterUpdateReceive {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SitterSend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Sitter {
    pub fn new(receive: SitterRegisterReceive) -> Self {
        Sitter {
            id: None,
            name: receive.name,
            email: receive.email,
            phone: receive.phone,
            password: AuthUtils::hash(&receive.password),
            address: receive.address,
            image: None,
        }
    }

    pub fn to_send(&self) -> SitterSend {
        SitterSend {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            image: self.image.clone(),
        }
    }

    /// Absent fields keep their previous values.
    pub fn apply_update(&mut self, update: SitterUpdateReceive) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
    }
}
