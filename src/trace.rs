//! # Trace — Registro das Decisões de Encadeamento
//!
//! Cada decisão do motor (conjunto de conflito, regra disparada, regra
//! provada verdadeira/falsa/indecidida, solução encontrada ou não) vira
//! uma **linha de texto** entregue a um [`TraceSink`] injetado.
//!
//! ## Sinks Disponíveis
//!
//! | Sink | Uso |
//! |------|-----|
//! | [`TracingTrace`] | Padrão — repassa cada linha para `tracing::info!` |
//! | [`NullTrace`] | Descarta tudo |
//! | [`MemoryTrace`] | Acumula em memória; o host lê as linhas depois (testes, explicação) |
//!
//! O motor funciona igual com qualquer um deles — inclusive sem nenhuma
//! interface de usuário presente.

use std::sync::Arc;

use parking_lot::Mutex;

/// Consumidor de linhas de trace, somente-anexação.
pub trait TraceSink {
    fn append(&mut self, line: &str);
}

/// Sink que descarta todas as linhas.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn append(&mut self, _line: &str) {}
}

/// Sink que repassa as linhas para o `tracing`, no target `sisesp::trace`.
///
/// Para ver as linhas: `RUST_LOG=sisesp::trace=info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTrace;

impl TraceSink for TracingTrace {
    fn append(&mut self, line: &str) {
        tracing::info!(target: "sisesp::trace", "{}", line);
    }
}

/// Sink em memória, compartilhável.
///
/// Clones apontam para o mesmo buffer: o host guarda um clone e entrega
/// o outro para a [`RuleBase`](crate::core::RuleBase).
///
/// ```rust
/// use sisesp::trace::MemoryTrace;
/// use sisesp::core::RuleBase;
///
/// let trace = MemoryTrace::new();
/// let mut rb = RuleBase::with_trace("demo", Box::new(trace.clone()));
/// rb.reset();
/// assert_eq!(trace.lines().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryTrace {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cópia das linhas registradas até agora.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Alguma linha contém o trecho?
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|l| l.contains(needle))
    }

    /// Quantas linhas contêm o trecho.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.lock().iter().filter(|l| l.contains(needle)).count()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl TraceSink for MemoryTrace {
    fn append(&mut self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
