use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // Health checks (public). actix answers HEAD for GET routes.
            .service(
                web::scope("/health")
                    .route("", web::get().to(handlers::health))
                    .route("/detailed", web::get().to(handlers::health_detailed))
                    .route("/ping", web::get().to(handlers::ping)),
            )
            // User accounts
            .service(
                web::scope("/users")
                    // Must be registered before /{id} to avoid conflict
                    .route("/login", web::post().to(handlers::login))
                    .route("", web::get().to(handlers::get_users))
                    .route("", web::post().to(handlers::create_user))
                    .route("/{id}", web::get().to(handlers::get_user))
                    .route("/{id}", web::put().to(handlers::update_user))
                    .route("/{id}", web::delete().to(handlers::delete_user)),
            )
            // Property listings
            .service(
                web::scope("/properties")
                    .route("", web::get().to(handlers::get_properties))
                    .route("", web::post().to(handlers::create_property))
                    .route("/{id}", web::get().to(handlers::get_property))
                    .route("/{id}", web::put().to(handlers::update_property))
                    .route("/{id}", web::delete().to(handlers::delete_property)),
            ),
    );
}
