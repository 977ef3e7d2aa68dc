use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::pet::{Pet, PetReceive, PetUpdateReceive};
use crate::utils::auth::AuthUtils;

/// Owner aggregate. Pets live only inside their owner document; the owner is
/// the sole authority that creates, edits or removes them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Owner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: Vec<u8>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub pets: Vec<Pet>,
}

#[derive(Serialize, Deserialize)]
pub struct OwnerRegisterReceive {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OwnerLoginReceive {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct OwnerSend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub pets: Vec<Pet>,
}

impl Owner {
    pub fn new(receive: OwnerRegisterReceive) -> Self {
        Owner {
            id: None,
            name: receive.name,
            email: receive.email,
            phone: receive.phone,
            password: AuthUtils::hash(&receive.password),
            address: receive.address,
            image: None,
            pets: Vec::new(),
        }
    }

    pub fn to_send(&self) -> OwnerSend {
        OwnerSend {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            image: self.image.clone(),
            pets: self.pets.clone(),
        }
    }

    pub fn add_pet(&mut self, receive: PetReceive) -> &Pet {
        self.pets.push(Pet::new(receive));
        self.pets.last().expect("pet was just pushed")
    }

    pub fn pet(&self, pet_id: &ObjectId) -> Option<&Pet> {
        self.pets.iter().find(|p| &p.id == pet_id)
    }

    /// Absent fields keep their previous values.
    pub fn update_pet(&mut self, pet_id: &ObjectId, update: PetUpdateReceive) -> Option<&Pet> {
        let pet = self.pets.iter_mut().find(|p| &p.id == pet_id)?;
        if let Some(petname) = update.petname {
            pet.petname = petname;
        }
        if let Some(pet_type) = update.pet_type {
            pet.pet_type = pet_type;
        }
        if let Some(petimage) = update.petimage {
            pet.petimage = Some(petimage);
        }
        if let Some(petinfo) = update.petinfo {
            pet.petinfo = Some(petinfo);
        }
        Some(pet)
    }

    pub fn remove_pet(&mut self, pet_id: &ObjectId) -> bool {
        let before = self.pets.len();
        self.pets.retain(|p| &p.id != pet_id);
        self.pets.len() != before
    }

    pub fn toggle_open_booking(&mut self, pet_id: &ObjectId) -> Option<&Pet> {
        let pet = self.pets.iter_mut().find(|p| &p.id == pet_id)?;
        pet.toggle_open_booking();
        Some(pet)
    }
}
