//! # Fact — Asserção Inicial
//!
//! Um [`Fact`] é um par `(variável, valor)` aplicado uma única vez, na
//! inicialização do episódio, escrevendo direto na tabela de variáveis.
//! Não participa do encadeamento: não é testado, não dispara, e não
//! passa por nenhuma regra.

use super::variable::{RuleVariable, VariableId};
use super::Value;

/// Proveniência registrada nas variáveis escritas por fatos.
pub const FACT_PROVENANCE: &str = "fact";

#[derive(Clone, Debug)]
pub struct Fact {
    variable: VariableId,
    value: Value,
    /// Já aplicado neste episódio? Limpo por `reset()`.
    applied: bool,
}

impl Fact {
    pub(crate) fn new(variable: VariableId, value: Value) -> Self {
        Self {
            variable,
            value,
            applied: false,
        }
    }

    pub fn variable(&self) -> VariableId {
        self.variable
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn applied(&self) -> bool {
        self.applied
    }

    /// Escreve o valor na variável. Só tem efeito uma vez por episódio.
    pub(crate) fn assert_into(&mut self, variables: &mut [RuleVariable]) -> bool {
        if self.applied {
            return false;
        }
        variables[self.variable.0].assign(self.value.clone(), FACT_PROVENANCE);
        self.applied = true;
        true
    }

    pub(crate) fn reset(&mut self) {
        self.applied = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Um fato só é aplicado uma vez até o próximo reset
    #[test]
    fn test_assert_once() {
        let mut vars = vec![RuleVariable::new(VariableId(0), "size".to_string())];
        let mut fact = Fact::new(VariableId(0), Value::from("medium"));

        assert!(fact.assert_into(&mut vars));
        assert_eq!(vars[0].value(), &Value::from("medium"));
        assert_eq!(vars[0].provenance(), Some(FACT_PROVENANCE));

        vars[0].clear();
        assert!(!fact.assert_into(&mut vars));
        assert!(!vars[0].is_known());

        fact.reset();
        assert!(fact.assert_into(&mut vars));
        assert!(vars[0].is_known());
    }
}
