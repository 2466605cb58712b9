//! # Rule — Regra SE-ENTÃO
//!
//! Uma [`Rule`] é uma lista ordenada de antecedentes (condições) e uma ou
//! mais ações (consequentes):
//!
//! ```text
//! MiniVan: SE vehicleType = automobile E size = medium E num_doors = 3
//!          ENTÃO vehicle := MiniVan
//! ```
//!
//! ## Estado da Regra
//!
//! | Campo | Significado |
//! |-------|-------------|
//! | `truth` | Cache tri-estado da conjunção dos antecedentes |
//! | `fired` | Já disparou neste episódio? |
//!
//! `fired` só volta a `false` com `reset()`, o que garante no máximo um
//! disparo por regra em cada episódio de inferência — e portanto a
//! terminação do encadeamento para frente.
//!
//! A ordem dos antecedentes é a ordem de declaração e nunca muda.

use serde::{Deserialize, Serialize};

use super::clause::{Clause, ClauseId};
use super::variable::{RuleVariable, VariableId};
use super::Truth;

/// Identificador estável de uma [Rule]; também é sua posição de declaração.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleId(pub(crate) usize);

/// Regra de produção booleana.
#[derive(Clone, Debug)]
pub struct Rule {
    id: RuleId,
    name: String,
    antecedents: Vec<ClauseId>,
    consequents: Vec<ClauseId>,
    truth: Truth,
    fired: bool,
}

impl Rule {
    pub(crate) fn new(
        id: RuleId,
        name: String,
        antecedents: Vec<ClauseId>,
        consequents: Vec<ClauseId>,
    ) -> Self {
        Self {
            id,
            name,
            antecedents,
            consequents,
            truth: Truth::Unknown,
            fired: false,
        }
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn antecedents(&self) -> &[ClauseId] {
        &self.antecedents
    }

    pub fn consequents(&self) -> &[ClauseId] {
        &self.consequents
    }

    /// Número de antecedentes — a "especificidade" da regra.
    pub fn antecedent_count(&self) -> usize {
        self.antecedents.len()
    }

    pub fn truth(&self) -> Truth {
        self.truth
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Elegível para o conjunto de conflito: verdadeira e ainda não disparada.
    pub fn is_eligible(&self) -> bool {
        self.truth.is_true() && !self.fired
    }

    /// Recalcula `truth` pela conjunção de todos os antecedentes.
    pub fn check(&mut self, clauses: &[Clause], variables: &[RuleVariable]) -> Truth {
        self.truth = Truth::all(
            self.antecedents
                .iter()
                .map(|id| clauses[id.0].test(variables)),
        );
        self.truth
    }

    /// Dispara a regra: aplica todos os consequentes e marca `fired`.
    ///
    /// Retorna as variáveis alteradas, para que o motor invalide as
    /// regras que dependem delas.
    ///
    /// # Panics
    ///
    /// Se a regra não estiver `True` ou já tiver disparado neste episódio.
    pub fn fire(&mut self, clauses: &[Clause], variables: &mut [RuleVariable]) -> Vec<VariableId> {
        assert!(
            self.is_eligible(),
            "rule {} fired while truth={} fired={}",
            self.name,
            self.truth,
            self.fired
        );
        let mut touched = Vec::with_capacity(self.consequents.len());
        for id in &self.consequents {
            let clause = &clauses[id.0];
            variables[clause.variable().0].assign(clause.value().clone(), self.name.as_str());
            touched.push(clause.variable());
        }
        self.fired = true;
        touched
    }

    /// Grava o resultado de uma prova por encadeamento para trás.
    /// Não toca em `fired`.
    pub(crate) fn record_truth(&mut self, truth: Truth) {
        self.truth = truth;
    }

    pub(crate) fn reset(&mut self) {
        self.truth = Truth::Unknown;
        self.fired = false;
    }
}
