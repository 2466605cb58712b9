//! Erros tipados da base de regras.
//!
//! Nenhum destes erros é fatal para o motor: o encadeamento nunca aborta
//! por causa deles. Eles existem para que o host saiba que pediu um nome
//! que não existe ou tentou registrar algo inválido.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("variable not found: {0}")]
    VariableNotFound(String),
    #[error("sensor not found: {0}")]
    SensorNotFound(String),
    #[error("effector not found: {0}")]
    EffectorNotFound(String),
    #[error("variable already defined: {0}")]
    DuplicateVariable(String),
    #[error("rule already defined: {0}")]
    DuplicateRule(String),
    #[error("rule {0} has no consequent")]
    EmptyConsequent(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
