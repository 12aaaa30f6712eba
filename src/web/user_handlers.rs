// src/web/user_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserPayload},
    services::user_service,
    state::AppState,
    web::corpo_ou_vazio,
};
use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user_service::find_all_users(&state.db_pool).await?;
    Ok(Json(users))
}

// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    user_service::find_user_by_id(&state.db_pool, &id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("User"))
}

// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let novo = UserPayload::from(corpo_ou_vazio(payload)).validar()?;
    user_service::create_user(&state.db_pool, &novo).await?;
    Ok((
        StatusCode::CREATED,
        format!("Usuário {} cadastrado com sucesso", novo.username),
    ))
}

// PUT /users/{id} e PATCH /users/{id}: o PATCH também exige todos os campos.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<String> {
    let user = UserPayload::from(corpo_ou_vazio(payload)).validar()?;
    user_service::update_user(&state.db_pool, &id, &user).await?;
    Ok(format!("Usuário {} atualizado com sucesso", user.username))
}

// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<String> {
    user_service::delete_user(&state.db_pool, &id).await?;
    Ok(format!("Usuário {} deletado com sucesso", id))
}
