// src/services/professor_service.rs
use crate::{
    error::{AppError, AppResult},
    models::professor::{NovoProfessor, Professor, ProfessorAlteracoes},
};
use sqlx::SqlitePool;

const RECURSO: &str = "Professor";

pub async fn find_all_professores(db_pool: &SqlitePool) -> AppResult<Vec<Professor>> {
    tracing::debug!("Buscando todos os professores...");
    let professores = sqlx::query_as::<_, Professor>("SELECT * FROM professores")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} professores.", professores.len());
    Ok(professores)
}

pub async fn find_professor_by_id(
    db_pool: &SqlitePool,
    professor_id: &str,
) -> AppResult<Option<Professor>> {
    tracing::debug!("Buscando professor por ID: {}", professor_id);
    let professor = sqlx::query_as::<_, Professor>("SELECT * FROM professores WHERE id = ?1")
        .bind(professor_id)
        .fetch_optional(db_pool)
        .await?;
    Ok(professor)
}

/// Insere um professor e devolve o id gerado.
pub async fn create_professor(db_pool: &SqlitePool, professor: &NovoProfessor) -> AppResult<i64> {
    tracing::info!("Tentando criar professor: {}", professor.nome);
    let id = sqlx::query(
        r#"
        INSERT INTO professores (nome, disciplina, email, telefone)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&professor.nome)
    .bind(&professor.disciplina)
    .bind(&professor.email)
    .bind(&professor.telefone)
    .execute(db_pool)
    .await?
    .last_insert_rowid();

    tracing::info!("✅ Professor '{}' criado com id {}.", professor.nome, id);
    Ok(id)
}

pub async fn update_professor(
    db_pool: &SqlitePool,
    professor_id: &str,
    professor: &NovoProfessor,
) -> AppResult<()> {
    tracing::info!("Atualizando professor: {}", professor_id);

    let rows_affected = sqlx::query(
        r#"
        UPDATE professores
        SET
            nome = ?1,
            disciplina = ?2,
            email = ?3,
            telefone = ?4
        WHERE id = ?5
        "#,
    )
    .bind(&professor.nome)
    .bind(&professor.disciplina)
    .bind(&professor.email)
    .bind(&professor.telefone)
    .bind(professor_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: Professor '{}' não encontrado.", professor_id);
        return Err(AppError::NotFound(RECURSO));
    }
    Ok(())
}

/// Monta `UPDATE professores SET <só as colunas fornecidas> WHERE id = ?`.
pub fn patch_sql(alteracoes: &ProfessorAlteracoes) -> String {
    let sets: Vec<String> = alteracoes
        .colunas()
        .iter()
        .map(|(coluna, _)| format!("{} = ?", coluna))
        .collect();
    format!("UPDATE professores SET {} WHERE id = ?", sets.join(", "))
}

/// Atualização parcial: só as colunas presentes em `alteracoes` mudam.
pub async fn patch_professor(
    db_pool: &SqlitePool,
    professor_id: &str,
    alteracoes: &ProfessorAlteracoes,
) -> AppResult<()> {
    let sql = patch_sql(alteracoes);
    tracing::info!("Atualização parcial do professor {}: {}", professor_id, sql);

    let mut query = sqlx::query(&sql);
    for (_, valor) in alteracoes.colunas() {
        query = query.bind(valor);
    }

    let rows_affected = query
        .bind(professor_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: Professor '{}' não encontrado.", professor_id);
        return Err(AppError::NotFound(RECURSO));
    }
    Ok(())
}

pub async fn delete_professor(db_pool: &SqlitePool, professor_id: &str) -> AppResult<()> {
    tracing::info!("Removendo professor: {}", professor_id);

    let rows_affected = sqlx::query("DELETE FROM professores WHERE id = ?1")
        .bind(professor_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: Professor '{}' não encontrado.", professor_id);
        return Err(AppError::NotFound(RECURSO));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_sql_so_tem_as_colunas_fornecidas() {
        let alteracoes = ProfessorAlteracoes {
            nome: None,
            disciplina: Some("Physics".into()),
            email: None,
            telefone: Some("1".into()),
        };
        assert_eq!(
            patch_sql(&alteracoes),
            "UPDATE professores SET disciplina = ?, telefone = ? WHERE id = ?"
        );
    }
}
