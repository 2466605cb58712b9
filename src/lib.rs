//! # sisesp — Motor de Inferência por Regras de Produção
//!
//! Base de regras booleana com os dois encadeamentos clássicos, feita para
//! ser embutida num host agente/simulação que fornece os fatos iniciais e
//! consome os valores derivados.
//!
//! ## Fluxo de Uso
//!
//! ```text
//! host
//!   ├── RuleBase::new / with_trace
//!   ├── add_variable, add_rule, add_fact, add_sensor, add_effector
//!   └── por episódio:
//!       ├── reset()
//!       ├── initialize_facts()
//!       └── forward_chain()  |  backward_chain("objetivo")
//! ```
//!
//! ## Módulos
//!
//! | Módulo | Conteúdo |
//! |--------|----------|
//! | [`core`] | Modelo de dados: variáveis, cláusulas, regras, fatos, base |
//! | [`inference`] | Encadeamento para frente e para trás |
//! | [`trace`] | Sink injetável para o trace das decisões |
//! | [`render`] | Dumps textuais de regras e variáveis |
//! | [`registry`] | Sensores/efetores opacos do host |
//! | [`error`] | Erros tipados |
//! | [`config`] | Configuração do binário por variáveis de ambiente |
//! | [`demo`] | Base de exemplo "Vehicles" |

pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod inference;
pub mod registry;
pub mod render;
pub mod trace;

pub use crate::core::{Assignment, Condition, Operator, RuleBase, Truth, Value};
pub use crate::error::{EngineError, Result};
