use actix_web::web;

use crate::handlers::booking_handlers::{
    create_booking, delete_booking, get_all_bookings, get_booking_by_id, get_bookings_by_owner,
    get_bookings_by_sitter, update_booking_dates, update_booking_status,
};
use crate::handlers::owner_handlers::{
    add_pet, delete_pet, get_all_owners, get_owner, login_owner, register_owner,
    toggle_open_booking, update_pet,
};
use crate::handlers::sitter_handlers::{
    get_all_sitters, get_sitter, login_sitter, register_sitter, update_sitter,
};

pub fn booking_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/booking")
            .service(web::resource("/create").route(web::post().to(create_booking)))
            .service(
                web::resource("/sitter/{sitter_id}").route(web::get().to(get_bookings_by_sitter)),
            )
            .service(
                web::resource("/owner/{owner_id}").route(web::get().to(get_bookings_by_owner)),
            )
            .service(web::resource("/update/{id}").route(web::patch().to(update_booking_status)))
            .service(web::resource("/{id}/dates").route(web::put().to(update_booking_dates)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_booking_by_id))
                    .route(web::delete().to(delete_booking)),
            )
            .service(web::resource("").route(web::get().to(get_all_bookings))),
    );
}

pub fn owner_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/owner")
            .service(web::resource("/register").route(web::post().to(register_owner)))
            .service(web::resource("/login").route(web::post().to(login_owner)))
            .service(web::resource("/getAllOwners").route(web::get().to(get_all_owners)))
            .service(web::resource("/{id}/addPet").route(web::patch().to(add_pet)))
            .service(
                web::resource("/{id}/updatePet/{pet_id}").route(web::patch().to(update_pet)),
            )
            .service(
                web::resource("/{id}/pets/{pet_id}/toggleOpenBooking")
                    .route(web::patch().to(toggle_open_booking)),
            )
            .service(web::resource("/{id}/pets/{pet_id}").route(web::delete().to(delete_pet)))
            .service(web::resource("/{id}").route(web::get().to(get_owner))),
    );
}

pub fn sitter_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sitter")
            .service(web::resource("/register").route(web::post().to(register_sitter)))
            .service(web::resource("/login").route(web::post().to(login_sitter)))
            .service(web::resource("/getAllSitters").route(web::get().to(get_all_sitters)))
            .service(web::resource("/update/{id}").route(web::put().to(update_sitter)))
            .service(web::resource("/{id}").route(web::get().to(get_sitter))),
    );
}
