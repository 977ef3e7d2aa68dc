use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Pet sub-entity embedded in an owner document. `openbooking` and `booked`
/// are two-value strings ("yes"/"no"), not booleans: API consumers depend on
/// the literal values.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Pet {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub petname: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub petimage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub petinfo: Option<String>,
    #[serde(default = "Pet::default_flag")]
    pub openbooking: String,
    #[serde(default = "Pet::default_flag")]
    pub booked: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PetReceive {
    pub petname: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub petimage: Option<String>,
    pub petinfo: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PetUpdateReceive {
    pub petname: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub petimage: Option<String>,
    pub petinfo: Option<String>,
}

impl Pet {
    pub fn new(receive: PetReceive) -> Self {
        Pet {
            id: ObjectId::new(),
            petname: receive.petname,
            pet_type: receive.pet_type,
            petimage: receive.petimage,
            petinfo: receive.petinfo,
            openbooking: Self::default_flag(),
            booked: Self::default_flag(),
        }
    }

    pub(crate) fn default_flag() -> String {
        "no".to_string()
    }

    /// Flips `openbooking` between "no" and "yes".
    pub fn toggle_open_booking(&mut self) {
        self.openbooking = if self.openbooking == "no" {
            "yes".to_string()
        } else {
            "no".to_string()
        };
    }
}
