// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{NovoUser, User},
};
use sqlx::SqlitePool;

const RECURSO: &str = "User";

/// Busca todos os utilizadores, pela ordem natural da tabela.
pub async fn find_all_users(db_pool: &SqlitePool) -> AppResult<Vec<User>> {
    tracing::debug!("Buscando todos os utilizadores...");
    let users = sqlx::query_as::<_, User>("SELECT * FROM users")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} utilizadores.", users.len());
    Ok(users)
}

/// Busca um utilizador pelo id. O id vem do caminho e não é validado como número.
pub async fn find_user_by_id(db_pool: &SqlitePool, user_id: &str) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador por ID: {}", user_id);
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(user_id)
        .fetch_optional(db_pool)
        .await?;

    if user.is_some() {
        tracing::debug!("Utilizador '{}' encontrado.", user_id);
    } else {
        tracing::debug!("Utilizador '{}' não encontrado.", user_id);
    }
    Ok(user)
}

/// Insere um utilizador e devolve o id gerado.
pub async fn create_user(db_pool: &SqlitePool, user: &NovoUser) -> AppResult<i64> {
    tracing::info!("Tentando criar utilizador: {}", user.username);
    let id = sqlx::query(
        r#"
        INSERT INTO users (username, password, cpf, telefone, email)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&user.username)
    .bind(&user.password)
    .bind(&user.cpf)
    .bind(&user.telefone)
    .bind(&user.email)
    .execute(db_pool)
    .await?
    .last_insert_rowid();

    tracing::info!("✅ Utilizador '{}' criado com id {}.", user.username, id);
    Ok(id)
}

/// Substitui todas as colunas do utilizador. Serve tanto o PUT como o PATCH.
pub async fn update_user(db_pool: &SqlitePool, user_id: &str, user: &NovoUser) -> AppResult<()> {
    tracing::info!("Atualizando dados para user: {}", user_id);

    let rows_affected = sqlx::query(
        r#"
        UPDATE users
        SET
            username = ?1,
            password = ?2,
            cpf = ?3,
            telefone = ?4,
            email = ?5
        WHERE id = ?6
        "#,
    )
    .bind(&user.username)
    .bind(&user.password)
    .bind(&user.cpf)
    .bind(&user.telefone)
    .bind(&user.email)
    .bind(user_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar dados: Utilizador '{}' não encontrado.", user_id);
        return Err(AppError::NotFound(RECURSO));
    }

    tracing::info!("✅ Dados atualizados com sucesso para user: {}", user_id);
    Ok(())
}

pub async fn delete_user(db_pool: &SqlitePool, user_id: &str) -> AppResult<()> {
    tracing::info!("Removendo utilizador: {}", user_id);

    let rows_affected = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(user_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: Utilizador '{}' não encontrado.", user_id);
        return Err(AppError::NotFound(RECURSO));
    }

    tracing::info!("✅ Utilizador '{}' removido.", user_id);
    Ok(())
}
