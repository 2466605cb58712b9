//! # Registry — Sensores e Efetores do Host
//!
//! O host agente/simulação pode pendurar na base de regras objetos
//! externos (sensores que leem o ambiente, efetores que agem sobre ele),
//! cada um sob um nome. O motor **nunca** inspeciona nem chama esses
//! objetos: apenas guarda e devolve.
//!
//! Os handles são `Arc<dyn Any + Send + Sync>`; o host recupera o tipo
//! concreto com `downcast_ref`/`Arc::downcast`.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{EngineError, Result};

/// Handle opaco para um objeto externo.
pub type Handle = Arc<dyn Any + Send + Sync>;

/// Tipo de registro — decide qual erro sai de uma busca falha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleKind {
    Sensor,
    Effector,
}

/// Mapa nome → handle, um por instância de base de regras.
pub struct HandleRegistry {
    kind: HandleKind,
    handles: HashMap<String, Handle>,
}

impl HandleRegistry {
    pub fn new(kind: HandleKind) -> Self {
        Self {
            kind,
            handles: HashMap::new(),
        }
    }

    /// Registra (ou substitui) o handle sob o nome dado.
    pub fn insert(&mut self, name: impl Into<String>, handle: Handle) {
        let name = name.into();
        tracing::debug!(kind = ?self.kind, name = %name, "RB: handle registrado");
        self.handles.insert(name, handle);
    }

    pub fn get(&self, name: &str) -> Result<Handle> {
        self.handles
            .get(name)
            .cloned()
            .ok_or_else(|| match self.kind {
                HandleKind::Sensor => EngineError::SensorNotFound(name.to_string()),
                HandleKind::Effector => EngineError::EffectorNotFound(name.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// O handle devolvido é o mesmo objeto registrado
    #[test]
    fn test_roundtrip_handle() {
        let mut reg = HandleRegistry::new(HandleKind::Sensor);
        reg.insert("thermometer", Arc::new(21.5f64));

        let h = reg.get("thermometer").unwrap();
        assert_eq!(h.downcast_ref::<f64>(), Some(&21.5));

        // Re-registrar substitui
        reg.insert("thermometer", Arc::new(19.0f64));
        let h = reg.get("thermometer").unwrap();
        assert_eq!(h.downcast_ref::<f64>(), Some(&19.0));
    }

    /// Nome ausente vira erro explícito, do tipo certo
    #[test]
    fn test_missing_name() {
        let sensors = HandleRegistry::new(HandleKind::Sensor);
        let effectors = HandleRegistry::new(HandleKind::Effector);
        assert_eq!(
            sensors.get("eye").err(),
            Some(EngineError::SensorNotFound("eye".to_string()))
        );
        assert_eq!(
            effectors.get("arm").err(),
            Some(EngineError::EffectorNotFound("arm".to_string()))
        );
    }
}
