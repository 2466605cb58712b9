//! # Encadeamento para Frente (guiado por dados)
//!
//! A partir dos valores atuais, dispara repetidamente a "melhor" regra
//! elegível até que nenhuma reste.
//!
//! ## Resolução de Conflitos por Especificidade
//!
//! Entre as regras elegíveis, vence a que tem **mais antecedentes** —
//! a regra mais específica. Empates ficam com a que aparece primeiro no
//! conjunto, ou seja, a primeira declarada (o `match` preserva a ordem).
//!
//! ```text
//! conjunto: R1(2) R2(3) R3(3) R4(1)  →  escolhida: R2
//! ```
//!
//! ## Invalidação
//!
//! Depois de cada disparo, toda regra com antecedente sobre uma variável
//! alterada é reavaliada **antes** do próximo `match`. Sem esse passo,
//! regras habilitadas pelo disparo ficariam invisíveis, já que o
//! `match(false)` reaproveita a verdade em cache.
//!
//! ## Terminação
//!
//! Cada regra dispara no máximo uma vez por episódio, então o laço faz no
//! máximo `|regras|` iterações.

use std::collections::BTreeSet;

use crate::core::{RuleBase, RuleId, VariableId};
use crate::render;

impl RuleBase {
    /// Monta o conjunto de conflito, em ordem de declaração.
    ///
    /// Com `test_antecedents = true`, recalcula a verdade de todas as
    /// regras; com `false`, usa a verdade em cache. Uma regra entra no
    /// conjunto se estiver `True` e ainda não tiver disparado. O conjunto
    /// é registrado no trace.
    pub fn match_rules(&mut self, test_antecedents: bool) -> Vec<RuleId> {
        if test_antecedents {
            for rule in &mut self.rules {
                rule.check(&self.clauses, &self.variables);
            }
        }
        let set: Vec<RuleId> = self
            .rules
            .iter()
            .filter(|r| r.is_eligible())
            .map(|r| r.id())
            .collect();
        let line = render::conflict_set_line(self, &set);
        self.trace(&line);
        set
    }

    /// Escolhe a regra com mais antecedentes; empate → a primeira da lista.
    ///
    /// # Panics
    ///
    /// Se `candidates` estiver vazio — o chamador só deve pedir uma
    /// escolha quando há candidatas.
    pub fn select_rule(&self, candidates: &[RuleId]) -> RuleId {
        assert!(
            !candidates.is_empty(),
            "select_rule called with an empty conflict set"
        );
        let mut best = candidates[0];
        let mut max = self.rules[best.0].antecedent_count();
        for &id in &candidates[1..] {
            let count = self.rules[id.0].antecedent_count();
            if count > max {
                max = count;
                best = id;
            }
        }
        best
    }

    /// Roda o encadeamento para frente até o conjunto de conflito esvaziar.
    ///
    /// Devolve as regras na ordem em que dispararam.
    pub fn forward_chain(&mut self) -> Vec<RuleId> {
        let mut fired = Vec::new();
        let mut candidates = self.match_rules(true);
        while !candidates.is_empty() {
            let chosen = self.select_rule(&candidates);
            let line = format!("Firing rule {}", self.rules[chosen.0].name());
            self.trace(&line);

            let touched = self.fire_rule(chosen);
            fired.push(chosen);
            self.invalidate(&touched);
            candidates = self.match_rules(false);
        }
        tracing::debug!(rb = %self.name(), fired = fired.len(), "RB: encadeamento para frente concluído");
        fired
    }

    /// Reavalia toda regra cujo antecedente lê alguma variável alterada.
    fn invalidate(&mut self, touched: &[VariableId]) {
        let dependents: BTreeSet<RuleId> = touched
            .iter()
            .flat_map(|v| self.variables[v.0].clause_refs())
            .map(|c| &self.clauses[c.0])
            .filter(|c| !c.is_consequent())
            .map(|c| c.rule())
            .collect();
        for rule in dependents {
            self.check_rule(rule);
        }
    }
}
