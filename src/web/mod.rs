// src/web/mod.rs
pub mod professor_handlers;
pub mod routes;
pub mod user_handlers;

use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

/// Um corpo que não é JSON conta como vazio, e a validação do payload
/// responde com o 400 adequado.
pub(crate) fn corpo_ou_vazio(payload: Result<Json<Value>, JsonRejection>) -> Value {
    match payload {
        Ok(Json(corpo)) => corpo,
        Err(rejection) => {
            tracing::debug!("Corpo JSON ignorado: {}", rejection);
            Value::Null
        }
    }
}
