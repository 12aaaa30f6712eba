// src/models/professor.rs
use super::{campo_preenchido, campos};
use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

// Representa uma linha da tabela 'professores'
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Professor {
    pub id: i64,
    pub nome: Option<String>,
    pub disciplina: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

/// Corpo JSON de POST, PUT e PATCH em /professores.
#[derive(Debug, Default)]
pub struct ProfessorPayload {
    pub nome: Option<Value>,
    pub disciplina: Option<Value>,
    pub email: Option<Value>,
    pub telefone: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NovoProfessor {
    pub nome: String,
    pub disciplina: String,
    pub email: String,
    pub telefone: String,
}

/// Campos a alterar num PATCH. Pelo menos um é `Some`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorAlteracoes {
    pub nome: Option<String>,
    pub disciplina: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

impl From<Value> for ProfessorPayload {
    fn from(corpo: Value) -> Self {
        let mut mapa = campos(corpo);
        Self {
            nome: mapa.remove("nome"),
            disciplina: mapa.remove("disciplina"),
            email: mapa.remove("email"),
            telefone: mapa.remove("telefone"),
        }
    }
}

impl ProfessorPayload {
    /// Validação de POST e PUT: os quatro campos são obrigatórios.
    pub fn validar(self) -> AppResult<NovoProfessor> {
        Ok(NovoProfessor {
            nome: campo_preenchido(self.nome).ok_or(AppError::DadosIncompletos)?,
            disciplina: campo_preenchido(self.disciplina).ok_or(AppError::DadosIncompletos)?,
            email: campo_preenchido(self.email).ok_or(AppError::DadosIncompletos)?,
            telefone: campo_preenchido(self.telefone).ok_or(AppError::DadosIncompletos)?,
        })
    }

    /// Validação do PATCH: basta um campo preenchido.
    pub fn validar_alteracoes(self) -> AppResult<ProfessorAlteracoes> {
        let alteracoes = ProfessorAlteracoes {
            nome: campo_preenchido(self.nome),
            disciplina: campo_preenchido(self.disciplina),
            email: campo_preenchido(self.email),
            telefone: campo_preenchido(self.telefone),
        };
        if alteracoes.colunas().is_empty() {
            return Err(AppError::NadaParaAtualizar);
        }
        Ok(alteracoes)
    }
}

impl ProfessorAlteracoes {
    /// Pares (coluna, valor) na ordem fixa nome, disciplina, email, telefone.
    pub fn colunas(&self) -> Vec<(&'static str, &str)> {
        [
            ("nome", &self.nome),
            ("disciplina", &self.disciplina),
            ("email", &self.email),
            ("telefone", &self.telefone),
        ]
        .into_iter()
        .filter_map(|(coluna, valor)| valor.as_deref().map(|v| (coluna, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(v: Value) -> ProfessorPayload {
        ProfessorPayload::from(v)
    }

    #[test]
    fn put_exige_os_quatro_campos() {
        let err = payload(json!({"nome": "Ana", "disciplina": "Math", "email": "a@x.com"}))
            .validar()
            .unwrap_err();
        assert!(matches!(err, AppError::DadosIncompletos));

        let novo = payload(json!({
            "nome": "Ana", "disciplina": "Math", "email": "a@x.com", "telefone": 123
        }))
        .validar()
        .unwrap();
        assert_eq!(novo.telefone, "123");
    }

    #[test]
    fn chave_repetida_usa_o_ultimo_valor() {
        let corpo: Value = serde_json::from_str(
            r#"{"nome":"A","nome":"B","disciplina":"M","email":"e","telefone":"1"}"#,
        )
        .unwrap();
        let novo = ProfessorPayload::from(corpo).validar().unwrap();
        assert_eq!(novo.nome, "B");
    }

    #[test]
    fn patch_sem_campos_nada_para_atualizar() {
        let err = payload(json!({})).validar_alteracoes().unwrap_err();
        assert!(matches!(err, AppError::NadaParaAtualizar));

        let err = payload(json!({"nome": "", "email": null, "telefone": 0}))
            .validar_alteracoes()
            .unwrap_err();
        assert!(matches!(err, AppError::NadaParaAtualizar));
    }

    #[test]
    fn patch_mantem_a_ordem_fixa_das_colunas() {
        let alteracoes = payload(json!({
            "telefone": "999",
            "nome": "Bia",
            "disciplina": ""
        }))
        .validar_alteracoes()
        .unwrap();

        assert_eq!(alteracoes.colunas(), vec![("nome", "Bia"), ("telefone", "999")]);
    }
}
