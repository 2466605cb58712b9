//! # Módulo Inference — Encadeamento para Frente e para Trás
//!
//! Os dois algoritmos clássicos de sistemas de produção, implementados
//! como métodos de [`RuleBase`](crate::core::RuleBase):
//!
//! | Estratégia | Guiada por | Método | Resultado |
//! |------------|------------|--------|-----------|
//! | **Para frente** | dados | [`forward_chain`](crate::core::RuleBase::forward_chain) | dispara regras até o conjunto de conflito esvaziar |
//! | **Para trás** | objetivo | [`backward_chain`](crate::core::RuleBase::backward_chain) | prova uma variável recursivamente, primeira solução |
//!
//! ## Encadeamento para Frente
//!
//! ```text
//! candidatas = match(testar = true)
//! enquanto candidatas ≠ ∅:
//!   escolhida = select_rule(candidatas)   // mais antecedentes; empate → declaração
//!   escolhida.fire()
//!   reavaliar regras que leem variáveis alteradas
//!   candidatas = match(testar = false)
//! ```
//!
//! ## Encadeamento para Trás
//!
//! ```text
//! provar(objetivo):
//!   se objetivo já tem valor → fim
//!   para cada cláusula consequente que atribui o objetivo:
//!     se cláusula já está na pilha → pular (ciclo)
//!     provar cada antecedente (recursando em variáveis desconhecidas)
//!     se regra True → atribuir objetivo, parar
//! ```

/// Pilha de objetivos com detecção explícita de ciclos.
pub mod goal_stack;

/// `match_rules`, `select_rule` e `forward_chain`.
pub mod forward;

/// `backward_chain` e a prova recursiva de regras.
pub mod backward;

pub use goal_stack::GoalStack;
