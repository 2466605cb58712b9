//! # Módulo Core — Modelo de Dados da Base de Regras
//!
//! Os tipos que formam uma base de regras de produção booleana:
//!
//! - [`Truth`] — valor de verdade tri-estado (Unknown / True / False)
//! - [`Value`] e [`Operator`] — valores de variáveis e comparações
//! - [`RuleVariable`] — variável nomeada, com proveniência e índice reverso de cláusulas
//! - [`Clause`] — condição (antecedente) ou ação (consequente) de uma regra
//! - [`Rule`] — regra SE-ENTÃO com verdade em cache e flag de disparo
//! - [`Fact`] — asserção inicial aplicada uma vez por episódio
//! - [`RuleBase`] — contêiner dono de tudo acima
//!
//! ## Referências Cruzadas
//!
//! Variável ↔ cláusula ↔ regra se referenciam mutuamente. Em vez de
//! ponteiros, tudo vive em arenas (`Vec`) dentro da [`RuleBase`] e as
//! referências são IDs estáveis: [`VariableId`], [`ClauseId`], [`RuleId`].
//!
//! ```text
//! RuleVariable.clause_refs ──► Clause.rule ──► Rule.antecedents / consequents
//!        ▲                         │
//!        └──── Clause.variable ◄───┘
//! ```

pub mod truth;
pub mod value;
pub mod variable;
pub mod clause;
pub mod rule;
pub mod fact;
pub mod rule_base;

pub use truth::Truth;
pub use value::{Operator, Value};
pub use variable::{RuleVariable, VariableId};
pub use clause::{Assignment, Clause, ClauseId, Condition};
pub use rule::{Rule, RuleId};
pub use fact::{Fact, FACT_PROVENANCE};
pub use rule_base::RuleBase;
