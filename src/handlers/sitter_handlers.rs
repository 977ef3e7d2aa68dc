use actix_web::{web, HttpResponse, Responder, ResponseError};
use serde_json::json;

use crate::models::sitter::{Sitter, SitterLoginReceive, SitterRegisterReceive, SitterUpdateReceive};
use crate::repo::database_repository::MongoRepository;
use crate::repo::traits::sitter_trait::SitterTrait;
use crate::handlers::parse_oid;
use crate::utils::config::AppConfig;
use crate::utils::AuthUtils;

const TOKEN_MINUTES: i64 = 60 * 24;

pub async fn register_sitter(
    repo: web::Data<MongoRepository>,
    receive: web::Json<SitterRegisterReceive>,
) -> impl Responder {
    let sitter = Sitter::new(receive.into_inner());
    match repo.register_profile(sitter).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "User created successfully"
        })),
        Err(e) => e.error_response(),
    }
}

pub async fn login_sitter(
    repo: web::Data<MongoRepository>,
    credentials: web::Json<SitterLoginReceive>,
) -> impl Responder {
    let (Some(email), Some(password)) = (&credentials.email, &credentials.password) else {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Please provide a email and password" }));
    };

    match repo.login_profile::<Sitter>(email, password).await {
        Ok(Some(sitter)) => {
            let secret = &AppConfig::global().secret_key;
            match AuthUtils::generate_token(&sitter.email, TOKEN_MINUTES, secret) {
                Ok(token) => HttpResponse::Ok().json(json!({
                    "success": true,
                    "token": token,
                    "sitterId": sitter.id.map(|id| id.to_hex()),
                    "sitter": sitter.to_send()
                })),
                Err(e) => e.error_response(),
            }
        }
        Ok(None) => HttpResponse::Unauthorized().json(json!({ "message": "Invalid credentials" })),
        Err(e) => e.error_response(),
    }
}

pub async fn get_all_sitters(repo: web::Data<MongoRepository>) -> impl Responder {
    match repo.get_all_sitters().await {
        Ok(sitters) => {
            let data: Vec<_> = sitters.iter().map(Sitter::to_send).collect();
            HttpResponse::Ok().json(json!({
                "success": true,
                "count": data.len(),
                "data": data
            }))
        }
        Err(e) => e.error_response(),
    }
}

pub async fn get_sitter(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match parse_oid(&path, "sitter") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    match repo.get_sitter_by_id(id).await {
        Ok(Some(sitter)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": sitter.to_send()
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Sitter not found" })),
        Err(e) => e.error_response(),
    }
}

pub async fn update_sitter(
    repo: web::Data<MongoRepository>,
    path: web::Path<String>,
    receive: web::Json<SitterUpdateReceive>,
) -> impl Responder {
    let id = match parse_oid(&path, "sitter") {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    let mut sitter = match repo.get_sitter_by_id(id).await {
        Ok(Some(sitter)) => sitter,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({ "message": "Sitter not found" }));
        }
        Err(e) => return e.error_response(),
    };

    sitter.apply_update(receive.into_inner());

    match repo.update_sitter(&sitter).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Profile updated successfully",
            "data": sitter.to_send()
        })),
        Err(e) => e.error_response(),
    }
}
