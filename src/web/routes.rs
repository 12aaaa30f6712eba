// src/web/routes.rs
use crate::{
    state::AppState,
    web::{professor_handlers, user_handlers},
};
use axum::{routing::get, Router};

pub const MENSAGEM_RAIZ: &str = "Estou na minha API";

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas de users ---
    // Nota: o PATCH usa o mesmo handler do PUT (exige todos os campos)
    let user_routes = Router::new()
        .route(
            "/users",
            get(user_handlers::list_users).post(user_handlers::create_user),
        )
        .route(
            "/users/{id}",
            get(user_handlers::get_user)
                .put(user_handlers::update_user)
                .patch(user_handlers::update_user)
                .delete(user_handlers::delete_user),
        );

    // --- Rotas de professores ---
    let professor_routes = Router::new()
        .route(
            "/professores",
            get(professor_handlers::list_professores).post(professor_handlers::create_professor),
        )
        .route(
            "/professores/{id}",
            get(professor_handlers::get_professor)
                .put(professor_handlers::update_professor)
                .patch(professor_handlers::patch_professor)
                .delete(professor_handlers::delete_professor),
        );

    Router::new()
        .route("/", get(|| async { MENSAGEM_RAIZ }))
        .merge(user_routes)
        .merge(professor_routes)
        .with_state(app_state)
}
