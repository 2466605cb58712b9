//! # Value — Valores de Variáveis e Operadores de Comparação
//!
//! Uma [`RuleVariable`](super::RuleVariable) guarda um [`Value`]. O motor
//! raciocina de forma booleana, mas os valores em si são genéricos: um
//! booleano ou um token textual (`"sim"`, `"ciclo"`, `"4"`).
//!
//! ## Operadores
//!
//! | Operador | Símbolo | Semântica |
//! |----------|---------|-----------|
//! | `Equals` | `=` | igualdade estrutural (números comparados numericamente) |
//! | `NotEquals` | `!=` | negação de `Equals` |
//! | `GreaterThan` | `>` | numérico se ambos forem números, senão lexicográfico |
//! | `LessThan` | `<` | idem |
//!
//! Comparar qualquer coisa com [`Value::Unknown`] resulta em
//! [`Truth::Unknown`] — nunca em `False`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Truth;

/// Valor de uma variável de regra.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Nenhum valor atribuído ainda.
    #[default]
    Unknown,
    Bool(bool),
    Text(String),
}

impl Value {
    pub fn is_known(&self) -> bool {
        !matches!(self, Value::Unknown)
    }

    /// Interpretação numérica, usada por `>` e `<`.
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Text(t) => t.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Igualdade entre valores conhecidos.
    ///
    /// `Bool(true)` é igual a `Text("true")` (sem diferenciar caixa), e
    /// textos numéricos são comparados como números (`"4"` = `"4.0"`).
    /// `NaN` não é número aqui: cai na comparação textual.
    fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Bool(b), Value::Text(t)) | (Value::Text(t), Value::Bool(b)) => {
                t.trim().eq_ignore_ascii_case(if *b { "true" } else { "false" })
            }
            (Value::Text(a), Value::Text(b)) => match (self.as_number(), other.as_number()) {
                (Some(x), Some(y)) if !x.is_nan() && !y.is_nan() => x == y,
                _ => a == b,
            },
            _ => false,
        }
    }

    fn ordering(&self, other: &Value) -> Option<Ordering> {
        if let (Some(x), Some(y)) = (self.as_number(), other.as_number()) {
            return x.partial_cmp(&y);
        }
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unknown => f.write_str("unknown"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(t) => f.write_str(t),
        }
    }
}

/// Operador de comparação de uma cláusula antecedente.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
}

impl Operator {
    /// Compara o valor atual de uma variável com o valor esperado.
    ///
    /// Função pura: não altera nada, apenas devolve o [`Truth`].
    pub fn compare(self, actual: &Value, expected: &Value) -> Truth {
        if !actual.is_known() || !expected.is_known() {
            return Truth::Unknown;
        }
        let holds = match self {
            Operator::Equals => actual.same_as(expected),
            Operator::NotEquals => !actual.same_as(expected),
            Operator::GreaterThan => actual.ordering(expected) == Some(Ordering::Greater),
            Operator::LessThan => actual.ordering(expected) == Some(Ordering::Less),
        };
        Truth::from(holds)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
