//! # Truth — Valor de Verdade Tri-estado
//!
//! Toda avaliação no motor de regras produz um [`Truth`]: verdadeiro,
//! falso ou **desconhecido**. O estado desconhecido não é um erro — é um
//! resultado de primeira classe que se propaga pelas regras.
//!
//! ## Conjunção de Antecedentes
//!
//! | ∧ | True | False | Unknown |
//! |---|------|-------|---------|
//! | **True** | True | False | Unknown |
//! | **False** | False | False | Unknown |
//! | **Unknown** | Unknown | Unknown | Unknown |
//!
//! Diferente da lógica de Kleene, aqui o `Unknown` domina: basta uma
//! variável sem valor para a regra inteira ficar indecidida. Uma regra só
//! é `False` quando todos os antecedentes são conhecidos e algum falha.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Valor de verdade tri-estado de uma cláusula ou regra.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Truth {
    /// Ainda não é possível decidir (alguma variável sem valor).
    #[default]
    Unknown,
    /// A condição vale para os valores atuais.
    True,
    /// A condição falha para os valores atuais.
    False,
}

impl Truth {
    /// Conjunção de antecedentes — ver tabela no topo do módulo.
    pub fn and(self, other: Truth) -> Truth {
        match (self, other) {
            (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
            (Truth::True, Truth::True) => Truth::True,
            _ => Truth::False,
        }
    }

    /// Conjunção de uma sequência; a sequência vazia é `True`.
    pub fn all<I: IntoIterator<Item = Truth>>(truths: I) -> Truth {
        truths.into_iter().fold(Truth::True, Truth::and)
    }

    pub fn is_true(self) -> bool {
        self == Truth::True
    }

    pub fn is_known(self) -> bool {
        self != Truth::Unknown
    }

    /// Label usado nas linhas de trace.
    pub fn label(self) -> &'static str {
        match self {
            Truth::Unknown => "unknown",
            Truth::True => "true",
            Truth::False => "false",
        }
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        if b {
            Truth::True
        } else {
            Truth::False
        }
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unknown domina a conjunção mesmo com False do outro lado
    #[test]
    fn test_unknown_dominates() {
        assert_eq!(Truth::Unknown.and(Truth::False), Truth::Unknown);
        assert_eq!(Truth::False.and(Truth::Unknown), Truth::Unknown);
        assert_eq!(Truth::True.and(Truth::Unknown), Truth::Unknown);
    }

    /// Sem Unknown, basta um False para derrubar a conjunção
    #[test]
    fn test_all() {
        assert_eq!(Truth::all([Truth::True, Truth::False, Truth::True]), Truth::False);
        assert_eq!(Truth::all([Truth::True, Truth::True]), Truth::True);
        assert_eq!(Truth::all(Vec::<Truth>::new()), Truth::True);
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Truth::default(), Truth::Unknown);
        assert!(!Truth::default().is_known());
    }
}
