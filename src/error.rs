// src/error.rs
use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de configuração: {0}")]
    Config(String),

    // Faltou algum campo obrigatório
    #[error("Dados incompletos")]
    DadosIncompletos,

    // PATCH de professores sem nenhum campo
    #[error("Nada para atualizar")]
    NadaParaAtualizar,

    /// Nenhuma linha com o id pedido. Guarda o nome do recurso ("User", "Professor").
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DadosIncompletos | AppError::NadaParaAtualizar => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SqlxError(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Texto devolvido ao cliente. Para erros da base de dados é a mensagem crua do SQLite.
    pub fn client_message(&self) -> String {
        match self {
            AppError::SqlxError(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
            AppError::SqlxError(e) => e.to_string(),
            AppError::Config(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

// Como converter AppError numa resposta HTTP (texto simples)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::debug!("Pedido rejeitado ({}): {}", status, self);
        }

        (status, self.client_message()).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn corpo(err: AppError) -> (StatusCode, String) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn validacao_vira_400_com_texto_fixo() {
        assert_eq!(
            corpo(AppError::DadosIncompletos).await,
            (StatusCode::BAD_REQUEST, "Dados incompletos".to_string())
        );
        assert_eq!(
            corpo(AppError::NadaParaAtualizar).await,
            (StatusCode::BAD_REQUEST, "Nada para atualizar".to_string())
        );
    }

    #[tokio::test]
    async fn not_found_nomeia_o_recurso() {
        assert_eq!(
            corpo(AppError::NotFound("Professor")).await,
            (StatusCode::NOT_FOUND, "Professor not found".to_string())
        );
    }

    #[tokio::test]
    async fn erro_da_base_de_dados_vira_500() {
        let (status, body) = corpo(AppError::SqlxError(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, sqlx::Error::PoolTimedOut.to_string());
    }
}
