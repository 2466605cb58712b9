//! # RuleBase — Contêiner Central da Base de Regras
//!
//! A [`RuleBase`] é dona de tudo: variáveis, cláusulas, regras, fatos,
//! pilha de objetivos e os registros de sensores/efetores. Este módulo
//! cuida da **contabilidade** (registrar, consultar, reiniciar); os
//! algoritmos de encadeamento estão em [`crate::inference`].
//!
//! ## Armazenamento
//!
//! - **Variáveis**: `Vec<RuleVariable>` + índice `HashMap<String, VariableId>`
//! - **Cláusulas**: arena `Vec<Clause>` endereçada por [`ClauseId`]
//! - **Regras**: `Vec<Rule>` na ordem de declaração + índice por nome
//! - **Fatos**: `Vec<Fact>` na ordem de declaração
//!
//! A ordem das regras tem significado: é o desempate da resolução de
//! conflitos e a ordem de varredura do encadeamento para trás. Variáveis
//! também ficam em ordem de registro, para que dumps e snapshots sejam
//! determinísticos.
//!
//! ## Ciclo de Vida
//!
//! ```text
//! RuleBase::new → add_variable / add_rule / add_fact
//!   └── (episódio) reset → initialize_facts → forward_chain | backward_chain
//! ```
//!
//! ## Exemplo
//!
//! ```rust
//! use sisesp::core::{Assignment, Condition, RuleBase, Value};
//! use sisesp::trace::NullTrace;
//!
//! let mut rb = RuleBase::with_trace("demo", Box::new(NullTrace));
//! for name in ["A", "B", "C"] {
//!     rb.add_variable(name).unwrap();
//! }
//! rb.add_rule(
//!     "R1",
//!     vec![Condition::equals("A", true), Condition::equals("B", true)],
//!     vec![Assignment::new("C", true)],
//! )
//! .unwrap();
//! rb.add_fact("A", true).unwrap();
//! rb.add_fact("B", true).unwrap();
//!
//! rb.reset();
//! rb.initialize_facts();
//! rb.forward_chain();
//! assert_eq!(rb.variable("C").unwrap().value(), &Value::Bool(true));
//! ```
//!
//! ## Concorrência
//!
//! Uma instância tem um único dono e não é compartilhada: `reset`,
//! `forward_chain` e `backward_chain` mutam as tabelas no lugar. Vários
//! agentes = várias instâncias.

use std::collections::HashMap;

use super::clause::{Assignment, Clause, ClauseId, Condition};
use super::fact::Fact;
use super::rule::{Rule, RuleId};
use super::variable::{RuleVariable, VariableId};
use super::{Truth, Value};
use crate::error::{EngineError, Result};
use crate::inference::GoalStack;
use crate::registry::{Handle, HandleKind, HandleRegistry};
use crate::trace::{TraceSink, TracingTrace};

/// Base de regras booleana: tabelas + encadeamento.
pub struct RuleBase {
    name: String,
    pub(crate) variables: Vec<RuleVariable>,
    variable_index: HashMap<String, VariableId>,
    pub(crate) clauses: Vec<Clause>,
    pub(crate) rules: Vec<Rule>,
    rule_index: HashMap<String, RuleId>,
    facts: Vec<Fact>,
    /// Cláusulas sendo provadas agora (guarda contra ciclos).
    pub(crate) goal_stack: GoalStack,
    sensors: HandleRegistry,
    effectors: HandleRegistry,
    trace: Box<dyn TraceSink>,
}

impl RuleBase {
    /// Cria uma base vazia que registra o trace via `tracing`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_trace(name, Box::new(TracingTrace))
    }

    /// Cria uma base vazia com o sink de trace escolhido.
    pub fn with_trace(name: impl Into<String>, trace: Box<dyn TraceSink>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            variable_index: HashMap::new(),
            clauses: Vec::new(),
            rules: Vec::new(),
            rule_index: HashMap::new(),
            facts: Vec::new(),
            goal_stack: GoalStack::new(),
            sensors: HandleRegistry::new(HandleKind::Sensor),
            effectors: HandleRegistry::new(HandleKind::Effector),
            trace,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Troca o sink de trace.
    pub fn set_trace(&mut self, trace: Box<dyn TraceSink>) {
        self.trace = trace;
    }

    pub(crate) fn trace(&mut self, line: &str) {
        self.trace.append(line);
    }

    /// Registra uma variável nova, desconhecida.
    pub fn add_variable(&mut self, name: impl Into<String>) -> Result<VariableId> {
        let name = name.into();
        if self.variable_index.contains_key(&name) {
            return Err(EngineError::DuplicateVariable(name));
        }
        let id = VariableId(self.variables.len());
        tracing::debug!(name = %name, "RB: variável registrada");
        self.variable_index.insert(name.clone(), id);
        self.variables.push(RuleVariable::new(id, name));
        Ok(id)
    }

    /// Registra uma regra a partir de antecedentes e consequentes por nome.
    ///
    /// Resolve todos os nomes antes de alterar qualquer tabela: em caso de
    /// erro, nada é registrado. Cada cláusula criada entra no `clause_refs`
    /// da sua variável (antecedentes primeiro, depois consequentes).
    pub fn add_rule(
        &mut self,
        name: impl Into<String>,
        antecedents: Vec<Condition>,
        consequents: Vec<Assignment>,
    ) -> Result<RuleId> {
        let name = name.into();
        if self.rule_index.contains_key(&name) {
            return Err(EngineError::DuplicateRule(name));
        }
        if consequents.is_empty() {
            return Err(EngineError::EmptyConsequent(name));
        }
        let conditions = antecedents
            .into_iter()
            .map(|c| -> Result<(VariableId, Condition)> { Ok((self.variable_id(&c.variable)?, c)) })
            .collect::<Result<Vec<_>>>()?;
        let assignments = consequents
            .into_iter()
            .map(|a| -> Result<(VariableId, Assignment)> { Ok((self.variable_id(&a.variable)?, a)) })
            .collect::<Result<Vec<_>>>()?;

        let rule_id = RuleId(self.rules.len());
        let mut antecedent_ids = Vec::with_capacity(conditions.len());
        for (var, cond) in conditions {
            let id = ClauseId(self.clauses.len());
            self.clauses
                .push(Clause::antecedent(id, rule_id, var, cond.operator, cond.value));
            self.variables[var.0].add_clause_ref(id);
            antecedent_ids.push(id);
        }
        let mut consequent_ids = Vec::with_capacity(assignments.len());
        for (var, assign) in assignments {
            let id = ClauseId(self.clauses.len());
            self.clauses
                .push(Clause::consequent(id, rule_id, var, assign.value));
            self.variables[var.0].add_clause_ref(id);
            consequent_ids.push(id);
        }

        tracing::debug!(
            name = %name,
            antecedents = antecedent_ids.len(),
            consequents = consequent_ids.len(),
            "RB: regra registrada"
        );
        self.rule_index.insert(name.clone(), rule_id);
        self.rules
            .push(Rule::new(rule_id, name, antecedent_ids, consequent_ids));
        Ok(rule_id)
    }

    /// Registra um fato, aplicado depois por [`initialize_facts`](Self::initialize_facts).
    pub fn add_fact(&mut self, variable: &str, value: impl Into<Value>) -> Result<()> {
        let id = self.variable_id(variable)?;
        self.facts.push(Fact::new(id, value.into()));
        Ok(())
    }

    pub fn add_sensor(&mut self, name: impl Into<String>, handle: Handle) {
        self.sensors.insert(name, handle);
    }

    pub fn sensor(&self, name: &str) -> Result<Handle> {
        self.sensors.get(name)
    }

    pub fn add_effector(&mut self, name: impl Into<String>, handle: Handle) {
        self.effectors.insert(name, handle);
    }

    pub fn effector(&self, name: &str) -> Result<Handle> {
        self.effectors.get(name)
    }

    /// Aplica, em ordem, todos os fatos ainda não aplicados neste episódio.
    pub fn initialize_facts(&mut self) {
        let mut applied = 0;
        for fact in &mut self.facts {
            if fact.assert_into(&mut self.variables) {
                applied += 1;
            }
        }
        tracing::debug!(rb = %self.name, applied, "RB: fatos aplicados");
    }

    /// Prepara um episódio novo e independente.
    ///
    /// Todas as variáveis voltam a desconhecidas, todas as regras a
    /// não-disparadas (com verdade desconhecida), todos os fatos a
    /// não-aplicados, e a pilha de objetivos é esvaziada.
    pub fn reset(&mut self) {
        let line = format!("--- Setting all {} variables to unknown", self.name);
        self.trace(&line);
        for var in &mut self.variables {
            var.clear();
        }
        for fact in &mut self.facts {
            fact.reset();
        }
        for rule in &mut self.rules {
            rule.reset();
        }
        self.goal_stack.clear();
    }

    pub(crate) fn variable_id(&self, name: &str) -> Result<VariableId> {
        self.variable_index
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::VariableNotFound(name.to_string()))
    }

    pub fn variable(&self, name: &str) -> Result<&RuleVariable> {
        let id = self.variable_id(name)?;
        Ok(&self.variables[id.0])
    }

    pub fn variable_by_id(&self, id: VariableId) -> Option<&RuleVariable> {
        self.variables.get(id.0)
    }

    /// Snapshot (cópia) de todas as variáveis, na ordem de registro.
    pub fn variables(&self) -> Vec<RuleVariable> {
        self.variables.clone()
    }

    /// Variáveis que alguma regra consegue derivar (alvo de consequente).
    pub fn goal_variables(&self) -> Vec<&RuleVariable> {
        self.variables
            .iter()
            .filter(|v| {
                v.clause_refs()
                    .iter()
                    .any(|c| self.clauses[c.0].is_consequent())
            })
            .collect()
    }

    /// Escreve o valor de uma variável diretamente, com proveniência `host`.
    ///
    /// Nome desconhecido não é fatal: registra um aviso, não altera nada e
    /// devolve o erro para quem quiser tratá-lo.
    pub fn set_variable_value(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        match self.variable_id(name) {
            Ok(id) => {
                self.variables[id.0].assign(value.into(), "host");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(rb = %self.name, variable = %name, "RB: não é possível atribuir, variável não definida");
                Err(e)
            }
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id.0)
    }

    pub fn rule_by_name(&self, name: &str) -> Option<&Rule> {
        self.rule_index.get(name).map(|id| &self.rules[id.0])
    }

    pub fn clause(&self, id: ClauseId) -> Option<&Clause> {
        self.clauses.get(id.0)
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Reavalia os antecedentes de uma regra contra os valores atuais.
    pub(crate) fn check_rule(&mut self, id: RuleId) -> Truth {
        self.rules[id.0].check(&self.clauses, &self.variables)
    }

    /// Dispara a regra e devolve as variáveis que ela alterou.
    pub(crate) fn fire_rule(&mut self, id: RuleId) -> Vec<VariableId> {
        self.rules[id.0].fire(&self.clauses, &mut self.variables)
    }
}
