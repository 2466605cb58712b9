//! Pilha de objetivos do encadeamento para trás.
//!
//! Guarda as cláusulas consequentes que estão sendo provadas no momento.
//! Entrar numa cláusula que já está na pilha significa que a prova
//! voltou a depender de si mesma: [`GoalStack::enter`] recusa, e o motor
//! pula essa regra em vez de recursar para sempre.

use crate::core::ClauseId;

#[derive(Clone, Debug, Default)]
pub struct GoalStack {
    clauses: Vec<ClauseId>,
}

impl GoalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empilha a cláusula. Devolve `false` (sem empilhar) se ela já
    /// estiver em prova — o passo explícito de detecção de ciclo.
    pub fn enter(&mut self, clause: ClauseId) -> bool {
        if self.contains(clause) {
            return false;
        }
        self.clauses.push(clause);
        true
    }

    /// Desempilha a cláusula do topo, que deve ser `clause`.
    pub fn leave(&mut self, clause: ClauseId) {
        let top = self.clauses.pop();
        debug_assert_eq!(top, Some(clause), "goal stack unbalanced");
    }

    pub fn contains(&self, clause: ClauseId) -> bool {
        self.clauses.contains(&clause)
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clear(&mut self) {
        self.clauses.clear();
    }
}
