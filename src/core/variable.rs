//! # RuleVariable — Variável Nomeada da Base de Regras
//!
//! Uma [`RuleVariable`] é um "slot" com nome único dentro da
//! [`RuleBase`](super::RuleBase). Começa **desconhecida** e só recebe
//! valor de três formas:
//!
//! 1. Um [`Fact`](super::Fact) aplicado na inicialização
//! 2. Uma regra disparada no encadeamento para frente
//! 3. Uma regra provada no encadeamento para trás
//!
//! Além do valor, a variável guarda:
//!
//! | Campo | Descrição |
//! |-------|-----------|
//! | `provenance` | Nome da regra (ou `"fact"`) que atribuiu o valor |
//! | `clause_refs` | IDs de todas as cláusulas, de qualquer regra, que leem ou escrevem esta variável |
//!
//! O índice `clause_refs` é o que permite ao encadeamento para trás
//! descobrir quais regras podem derivar um objetivo, e ao encadeamento
//! para frente descobrir quais regras precisam ser reavaliadas.
//!
//! Atribuir um valor **não** notifica as regras dependentes — a
//! invalidação é responsabilidade do motor.

use serde::{Deserialize, Serialize};

use super::clause::ClauseId;
use super::Value;

/// Identificador estável de uma [RuleVariable] dentro da sua base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariableId(pub(crate) usize);

/// Variável de regra: nome imutável, valor, proveniência e índice reverso.
///
/// Só serializa: variáveis nascem em [`RuleBase::add_variable`](super::RuleBase::add_variable).
#[derive(Clone, Debug, Serialize)]
pub struct RuleVariable {
    id: VariableId,
    name: String,
    value: Value,
    /// Quem atribuiu o valor atual. `None` enquanto desconhecida.
    provenance: Option<String>,
    /// Cláusulas que mencionam esta variável, na ordem de registro.
    clause_refs: Vec<ClauseId>,
}

impl RuleVariable {
    pub(crate) fn new(id: VariableId, name: String) -> Self {
        Self {
            id,
            name,
            value: Value::Unknown,
            provenance: None,
            clause_refs: Vec::new(),
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_known(&self) -> bool {
        self.value.is_known()
    }

    pub fn provenance(&self) -> Option<&str> {
        self.provenance.as_deref()
    }

    pub fn clause_refs(&self) -> &[ClauseId] {
        &self.clause_refs
    }

    /// Atribui valor e proveniência de uma vez — nunca parcialmente.
    pub(crate) fn assign(&mut self, value: Value, provenance: impl Into<String>) {
        self.value = value;
        self.provenance = Some(provenance.into());
    }

    /// Volta ao estado desconhecido (usado por `reset()`).
    pub(crate) fn clear(&mut self) {
        self.value = Value::Unknown;
        self.provenance = None;
    }

    pub(crate) fn add_clause_ref(&mut self, clause: ClauseId) {
        self.clause_refs.push(clause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uma variável nova é desconhecida e sem proveniência
    #[test]
    fn test_new_is_unknown() {
        let v = RuleVariable::new(VariableId(0), "motor".to_string());
        assert!(!v.is_known());
        assert_eq!(v.provenance(), None);
        assert!(v.clause_refs().is_empty());
    }

    /// assign grava valor e proveniência; clear apaga os dois
    #[test]
    fn test_assign_and_clear() {
        let mut v = RuleVariable::new(VariableId(0), "motor".to_string());
        v.assign(Value::from("sim"), "R1");
        assert_eq!(v.value(), &Value::from("sim"));
        assert_eq!(v.provenance(), Some("R1"));

        v.clear();
        assert_eq!(v.value(), &Value::Unknown);
        assert_eq!(v.provenance(), None);
    }
}
