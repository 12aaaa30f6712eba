// src/db.rs
use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT,
        password TEXT,
        cpf TEXT,
        telefone TEXT,
        email TEXT
    )
"#;

const CREATE_PROFESSORES: &str = r#"
    CREATE TABLE IF NOT EXISTS professores (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nome TEXT,
        disciplina TEXT,
        email TEXT,
        telefone TEXT
    )
"#;

/// Colunas que tabelas `users` antigas (só id, username, password) podem não ter.
pub const USERS_COLUNAS_ADICIONAIS: &[&str] = &["cpf", "telefone", "email"];

/// Abre o pool e prepara o esquema. Chamado uma vez no arranque.
pub async fn create_db_pool(database_url: &str) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", database_url);

    // Opções de conexão (criar se não existir, timeout)
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Cria as tabelas e acrescenta as colunas em falta. Pode correr em todos os arranques.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    tracing::info!("Preparando o esquema da base de dados...");

    sqlx::query(CREATE_USERS).execute(pool).await?;

    for coluna in USERS_COLUNAS_ADICIONAIS {
        add_column_if_missing(pool, "users", coluna).await;
    }

    sqlx::query(CREATE_PROFESSORES).execute(pool).await?;

    tracing::info!("Esquema pronto.");
    Ok(())
}

/// Indica se `tabela` já tem a coluna `coluna`.
pub async fn column_exists(pool: &SqlitePool, tabela: &str, coluna: &str) -> AppResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2")
            .bind(tabela)
            .bind(coluna)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

// Falhas aqui nunca interrompem o arranque: "já existe" conta como sucesso, o resto é aviso.
async fn add_column_if_missing(pool: &SqlitePool, tabela: &str, coluna: &str) {
    match column_exists(pool, tabela, coluna).await {
        Ok(true) => {
            tracing::info!("Coluna '{}' já existe", coluna);
            return;
        }
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(
                "Não foi possível verificar a coluna '{}' em '{}': {}",
                coluna,
                tabela,
                e
            );
        }
    }

    let sql = format!("ALTER TABLE {} ADD COLUMN {} TEXT", tabela, coluna);
    match sqlx::query(&sql).execute(pool).await {
        Ok(_) => tracing::info!("Coluna '{}' adicionada à tabela '{}'", coluna, tabela),
        Err(sqlx::Error::Database(db_err)) if db_err.message().contains("duplicate column name") => {
            tracing::info!("Coluna '{}' já existe", coluna);
        }
        Err(e) => {
            tracing::warn!(
                "Falha ao adicionar a coluna '{}' à tabela '{}': {}",
                coluna,
                tabela,
                e
            );
        }
    }
}
