// src/models/user.rs
use super::{campo_preenchido, campos};
use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

// Representa uma linha da tabela 'users'. A password é guardada em texto simples.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub password: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
}

/// Corpo JSON de POST, PUT e PATCH em /users, tal como chega.
#[derive(Debug, Default)]
pub struct UserPayload {
    pub username: Option<Value>,
    pub password: Option<Value>,
    pub cpf: Option<Value>,
    pub telefone: Option<Value>,
    pub email: Option<Value>,
}

/// Dados completos e validados de um utilizador.
#[derive(Debug, Clone, PartialEq)]
pub struct NovoUser {
    pub username: String,
    pub password: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
}

impl From<Value> for UserPayload {
    fn from(corpo: Value) -> Self {
        let mut mapa = campos(corpo);
        Self {
            username: mapa.remove("username"),
            password: mapa.remove("password"),
            cpf: mapa.remove("cpf"),
            telefone: mapa.remove("telefone"),
            email: mapa.remove("email"),
        }
    }
}

impl UserPayload {
    /// Todos os campos são obrigatórios, inclusive no PATCH.
    pub fn validar(self) -> AppResult<NovoUser> {
        Ok(NovoUser {
            username: campo_preenchido(self.username).ok_or(AppError::DadosIncompletos)?,
            password: campo_preenchido(self.password).ok_or(AppError::DadosIncompletos)?,
            cpf: campo_preenchido(self.cpf).ok_or(AppError::DadosIncompletos)?,
            telefone: campo_preenchido(self.telefone).ok_or(AppError::DadosIncompletos)?,
            email: campo_preenchido(self.email).ok_or(AppError::DadosIncompletos)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(v: Value) -> UserPayload {
        UserPayload::from(v)
    }

    #[test]
    fn payload_completo_e_valido() {
        let novo = payload(json!({
            "username": "joao",
            "password": "segredo",
            "cpf": "123.456.789-00",
            "telefone": "5511999999999",
            "email": "joao@x.com",
            "extra": "ignorado"
        }))
        .validar()
        .unwrap();

        assert_eq!(novo.username, "joao");
        assert_eq!(novo.password, "segredo");
        assert_eq!(novo.cpf, "123.456.789-00");
        assert_eq!(novo.telefone, "5511999999999");
        assert_eq!(novo.email, "joao@x.com");
    }

    #[test]
    fn qualquer_campo_em_falta_e_rejeitado() {
        let completo = json!({
            "username": "joao",
            "password": "segredo",
            "cpf": "1",
            "telefone": "2",
            "email": "j@x.com"
        });

        for campo in ["username", "password", "cpf", "telefone", "email"] {
            let mut sem_campo = completo.clone();
            sem_campo.as_object_mut().unwrap().remove(campo);
            let err = payload(sem_campo).validar().unwrap_err();
            assert!(matches!(err, AppError::DadosIncompletos), "campo {}", campo);

            let mut vazio = completo.clone();
            vazio[campo] = json!("");
            let err = payload(vazio).validar().unwrap_err();
            assert!(matches!(err, AppError::DadosIncompletos), "campo {}", campo);
        }
    }

    #[test]
    fn payload_vazio_e_rejeitado() {
        let err = UserPayload::default().validar().unwrap_err();
        assert!(matches!(err, AppError::DadosIncompletos));
    }
}
