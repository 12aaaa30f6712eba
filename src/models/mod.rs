// src/models/mod.rs
pub mod professor;
pub mod user;

use serde_json::{Map, Value};

/// Campos de um corpo JSON. Um corpo que não é objeto não tem campos.
/// Chaves repetidas ficam com o último valor.
pub(crate) fn campos(corpo: Value) -> Map<String, Value> {
    match corpo {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Devolve o valor como texto se for "verdadeiro" (presente e diferente de
/// `null`, `false`, `0` e `""`). Caso contrário devolve `None`.
///
/// Números e booleanos são guardados na forma em que o SQLite os converteria
/// para uma coluna TEXT (`123` -> "123", `true` -> "1").
pub(crate) fn campo_preenchido(valor: Option<Value>) -> Option<String> {
    match valor? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("1".to_string()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => None,
            // 1.0 e 1e2 são inteiros para o SQLite
            Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && inteiro_i64(f) => {
                Some((f as i64).to_string())
            }
            _ => Some(n.to_string()),
        },
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        outro => Some(outro.to_string()),
    }
}

fn inteiro_i64(f: f64) -> bool {
    f >= i64::MIN as f64 && f < i64::MAX as f64
}
