//! # Clause — Condição ou Ação de uma Regra
//!
//! Uma [`Clause`] liga uma regra a uma variável. Existem dois papéis:
//!
//! - **Antecedente** (condição): `variável operador valor`, avaliada de
//!   forma pura contra o valor atual da variável
//! - **Consequente** (ação): `variável := valor`, apenas *aplicada*
//!   quando a regra dispara ou é provada — nunca testada
//!
//! As cláusulas vivem numa arena dentro da [`RuleBase`](super::RuleBase)
//! e são referenciadas por [`ClauseId`]; variáveis e regras guardam IDs,
//! não referências, o que evita ciclos de posse.
//!
//! Para declarar regras, o host usa as descrições por nome
//! [`Condition`] e [`Assignment`], resolvidas por
//! [`RuleBase::add_rule`](super::RuleBase::add_rule).

use serde::{Deserialize, Serialize};

use super::rule::RuleId;
use super::variable::{RuleVariable, VariableId};
use super::{Operator, Truth, Value};

/// Identificador estável de uma [Clause] na arena da base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClauseId(pub(crate) usize);

/// Cláusula resolvida: regra dona, variável, comparação e papel.
#[derive(Clone, Debug)]
pub struct Clause {
    id: ClauseId,
    rule: RuleId,
    variable: VariableId,
    operator: Operator,
    /// Valor esperado (antecedente) ou valor a atribuir (consequente).
    value: Value,
    consequent: bool,
}

impl Clause {
    pub(crate) fn antecedent(
        id: ClauseId,
        rule: RuleId,
        variable: VariableId,
        operator: Operator,
        value: Value,
    ) -> Self {
        Self {
            id,
            rule,
            variable,
            operator,
            value,
            consequent: false,
        }
    }

    pub(crate) fn consequent(id: ClauseId, rule: RuleId, variable: VariableId, value: Value) -> Self {
        Self {
            id,
            rule,
            variable,
            operator: Operator::Equals,
            value,
            consequent: true,
        }
    }

    pub fn id(&self) -> ClauseId {
        self.id
    }

    pub fn rule(&self) -> RuleId {
        self.rule
    }

    pub fn variable(&self) -> VariableId {
        self.variable
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_consequent(&self) -> bool {
        self.consequent
    }

    /// Avalia a condição contra o valor atual da variável.
    ///
    /// Só faz sentido para antecedentes; um consequente nunca é testado.
    pub fn test(&self, variables: &[RuleVariable]) -> Truth {
        debug_assert!(!self.consequent, "consequent clauses are applied, never tested");
        self.operator
            .compare(variables[self.variable.0].value(), &self.value)
    }
}

/// Antecedente descrito por nome de variável, antes de ser resolvido.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub variable: String,
    pub operator: Operator,
    pub value: Value,
}

impl Condition {
    pub fn new(variable: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            variable: variable.into(),
            operator,
            value: value.into(),
        }
    }

    /// Atalho para o caso mais comum, `variável = valor`.
    pub fn equals(variable: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(variable, Operator::Equals, value)
    }
}

/// Consequente descrito por nome de variável: `variável := valor`.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub variable: String,
    pub value: Value,
}

impl Assignment {
    pub fn new(variable: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> Vec<RuleVariable> {
        let mut wheels = RuleVariable::new(VariableId(0), "num_wheels".to_string());
        wheels.assign(Value::from("4"), "fact");
        let motor = RuleVariable::new(VariableId(1), "motor".to_string());
        vec![wheels, motor]
    }

    /// Antecedente sobre variável conhecida produz True/False
    #[test]
    fn test_antecedent_known() {
        let vars = vars();
        let c = Clause::antecedent(
            ClauseId(0),
            RuleId(0),
            VariableId(0),
            Operator::LessThan,
            Value::from("4"),
        );
        assert_eq!(c.test(&vars), Truth::False);

        let c = Clause::antecedent(
            ClauseId(1),
            RuleId(0),
            VariableId(0),
            Operator::Equals,
            Value::from("4"),
        );
        assert_eq!(c.test(&vars), Truth::True);
    }

    /// Antecedente sobre variável desconhecida produz Unknown
    #[test]
    fn test_antecedent_unknown() {
        let vars = vars();
        let c = Clause::antecedent(
            ClauseId(0),
            RuleId(0),
            VariableId(1),
            Operator::Equals,
            Value::from("yes"),
        );
        assert_eq!(c.test(&vars), Truth::Unknown);
    }

    #[test]
    fn test_condition_shortcut() {
        let c = Condition::equals("motor", "yes");
        assert_eq!(c.operator, Operator::Equals);
        assert_eq!(c.value, Value::from("yes"));
    }
}
