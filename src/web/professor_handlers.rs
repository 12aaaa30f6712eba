// src/web/professor_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::professor::{Professor, ProfessorPayload},
    services::professor_service,
    state::AppState,
    web::corpo_ou_vazio,
};
use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

// GET /professores
pub async fn list_professores(State(state): State<AppState>) -> AppResult<Json<Vec<Professor>>> {
    let professores = professor_service::find_all_professores(&state.db_pool).await?;
    Ok(Json(professores))
}

// GET /professores/{id}
pub async fn get_professor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Professor>> {
    professor_service::find_professor_by_id(&state.db_pool, &id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Professor"))
}

// POST /professores
pub async fn create_professor(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let novo = ProfessorPayload::from(corpo_ou_vazio(payload)).validar()?;
    professor_service::create_professor(&state.db_pool, &novo).await?;
    Ok((
        StatusCode::CREATED,
        format!("Professor {} cadastrado com sucesso", novo.nome),
    ))
}

// PUT /professores/{id}
pub async fn update_professor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<String> {
    let professor = ProfessorPayload::from(corpo_ou_vazio(payload)).validar()?;
    professor_service::update_professor(&state.db_pool, &id, &professor).await?;
    Ok(format!("Professor {} atualizado com sucesso", professor.nome))
}

// PATCH /professores/{id}: atualização parcial, ao contrário de /users
pub async fn patch_professor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<&'static str> {
    let alteracoes = ProfessorPayload::from(corpo_ou_vazio(payload)).validar_alteracoes()?;
    professor_service::patch_professor(&state.db_pool, &id, &alteracoes).await?;
    Ok("Professor atualizado com sucesso")
}

// DELETE /professores/{id}
pub async fn delete_professor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<String> {
    professor_service::delete_professor(&state.db_pool, &id).await?;
    Ok(format!("Professor {} deletado com sucesso", id))
}
