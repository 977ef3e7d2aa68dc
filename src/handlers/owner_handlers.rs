use actix_web::{web, HttpResponse, Responder, ResponseError};
use serde_json::json;

use crate::models::owner::{Owner, OwnerLoginReceive, OwnerRegisterReceive};
use crate::models::pet::{PetReceive, PetUpdateReceive};
use crate::repo::database_repository::MongoRepository;
use crate::repo::traits::owner_trait::OwnerTrait;
use crate::handlers::parse_oid;
use crate::utils::config::AppConfig;
use crate::utils::AuthUtils;

const TOKEN_MINUTES: i64 = 60 * 24;

pub async fn register_owner(
    repo: web::Data<MongoRepository>,
    receive: web::Json<OwnerRegisterReceive>,
) -> impl Responder {
    let owner = Owner::new(receive.into_inner());
    match repo.register_profile(owner).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "User created successfully"
        })),
        Err(e) => e.error_response(),
    }
}

pub async fn login_owner(
    repo: web::Data<MongoRepository>,
    credentials: web::Json<OwnerLoginReceive>,
) -> impl Responder {
    let (Some(email), Some(password)) = (&credentials.email, &credentials.password) else {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Please provide a email and password" }));
    };

    match repo.login_profile::<Owner>(email, password).await {
        Ok(Some(owner)) => {
            let secret = &AppConfig::global().secret_key;
            match AuthUtils::generate_token(&owner.email, TOKEN_MINUTES, secret) {
                Ok(token) => HttpResponse::Ok().json(json!({
                    "success": true,
                    "token": token,
                    "userId": owner.id.map(|id| id.to_hex())
                })),
                Err(e) => e.error_response(),
            }
        }
        Ok(None) => HttpResponse::Unauthorized().json(json!({ "message": "Invalid credentials" })),
        Err(e) => e.error_response(),
    }
}

pub async fn get_all_owners(repo: web::Data<MongoRepository>) -> impl Responder {
    match repo.get_all_owners().await {
        Ok(owners) => {
            let data: Vec<_> = owners.iter().map(Owner::to_send).collect();
            HttpResponse::Ok().json(json!({
                "success": true,
                "count": data.len(),
                "data": data
            }))
        }
        Err(e) => e.error_response(),
    }
}

pub async fn get_owner(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match parse_oid(&path, "owner") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    match repo.get_owner_by_id(id).await {
        Ok(Some(owner)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": owner.to_send()
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Owner not found" })),
        Err(e) => e.error_response(),
    }
}

pub async fn add_pet(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
    receive: web::Json<PetReceive>,
) -> impl Responder {
    let id = match parse_oid(&path, "owner") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    let mut owner = match repo.get_owner_by_id(id).await {
        Ok(Some(owner)) => owner,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({ "message": "Owner not found" }));
        }
        Err(e) => return e.error_response(),
    };

    owner.add_pet(receive.into_inner());

    match repo.update_owner(&owner).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": owner.pets
        })),
        Err(e) => e.error_response(),
    }
}

pub async fn update_pet(
    repo: web::Data<MongoRepository>,
    path: web::Path<(String, String)>,
    receive: web::Json<PetUpdateReceive>,
) -> impl Responder {
    let (owner_raw, pet_raw) = path.into_inner();
    let owner_id = match parse_oid(&owner_raw, "owner") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };
    let pet_id = match parse_oid(&pet_raw, "pet") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    let mut owner = match repo.get_owner_by_id(owner_id).await {
        Ok(Some(owner)) => owner,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({ "message": "Owner not found" }));
        }
        Err(e) => return e.error_response(),
    };

    let Some(pet) = owner.update_pet(&pet_id, receive.into_inner()).cloned() else {
        return HttpResponse::NotFound().json(json!({ "message": "Pet not found" }));
    };

    match repo.update_owner(&owner).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": pet
        })),
        Err(e) => e.error_response(),
    }
}

pub async fn delete_pet(
    repo: web::Data<MongoRepository>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (owner_raw, pet_raw) = path.into_inner();
    let owner_id = match parse_oid(&owner_raw, "owner") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };
    let pet_id = match parse_oid(&pet_raw, "pet") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    let mut owner = match repo.get_owner_by_id(owner_id).await {
        Ok(Some(owner)) => owner,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({ "message": "Owner not found" }));
        }
        Err(e) => return e.error_response(),
    };

    if !owner.remove_pet(&pet_id) {
        return HttpResponse::NotFound().json(json!({ "message": "Pet not found" }));
    }

    match repo.update_owner(&owner).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Pet deleted successfully",
            "data": owner.pets
        })),
        Err(e) => e.error_response(),
    }
}

pub async fn toggle_open_booking(
    repo: web::Data<MongoRepository>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (owner_raw, pet_raw) = path.into_inner();
    let owner_id = match parse_oid(&owner_raw, "owner") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };
    let pet_id = match parse_oid(&pet_raw, "pet") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    let mut owner = match repo.get_owner_by_id(owner_id).await {
        Ok(Some(owner)) => owner,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({ "message": "Owner not found" }));
        }
        Err(e) => return e.error_response(),
    };

    let Some(pet) = owner.toggle_open_booking(&pet_id).cloned() else {
        return HttpResponse::NotFound().json(json!({ "message": "Pet not found" }));
    };

    match repo.update_owner(&owner).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": format!("Pet's openBooking status updated to {}", pet.openbooking),
            "data": pet
        })),
        Err(e) => e.error_response(),
    }
}
