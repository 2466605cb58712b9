//! # Encadeamento para Trás (guiado por objetivo)
//!
//! Para provar uma variável-objetivo, o motor procura as regras que a
//! atribuem (cláusulas consequentes no `clause_refs` da variável) e tenta
//! provar os antecedentes de cada uma. Antecedente sobre variável
//! desconhecida vira **subobjetivo**, provado recursivamente antes do teste.
//!
//! ## Regras de Parada
//!
//! - Objetivo que já tem valor não é re-derivado, nem quando o valor
//!   chega no meio da busca por uma prova aninhada
//! - A primeira regra provada `True` atribui o objetivo e encerra a busca
//! - Cláusula que já está na [`GoalStack`] é pulada — evita recursão
//!   infinita em dependências circulares
//! - Sem solução, o objetivo fica desconhecido; isso é registrado no
//!   trace, não é erro
//!
//! ## Prova de uma Regra
//!
//! Os antecedentes são provados na ordem de declaração. O primeiro que
//! der `False` torna a regra `False`; o primeiro que continuar `Unknown`
//! depois da recursão torna a regra `Unknown`. Em ambos os casos os
//! antecedentes seguintes nem são visitados. A prova não marca a regra
//! como disparada.

use crate::core::{RuleBase, RuleId, Truth, Value, VariableId};
use crate::error::Result;

use super::GoalStack;

impl RuleBase {
    /// Tenta derivar o valor da variável `goal`.
    ///
    /// Devolve o valor final do objetivo — `Value::Unknown` se nenhuma
    /// regra conseguiu prová-lo. Só falha se o nome não existir.
    pub fn backward_chain(&mut self, goal: &str) -> Result<Value> {
        let goal_id = match self.variable_id(goal) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(rb = %self.name(), goal = %goal, "RB: objetivo não definido");
                return Err(e);
            }
        };
        let mut stack = std::mem::take(&mut self.goal_stack);
        self.prove_goal(goal_id, &mut stack);
        self.goal_stack = stack;
        Ok(self.variables[goal_id.0].value().clone())
    }

    fn prove_goal(&mut self, goal: VariableId, stack: &mut GoalStack) {
        if self.variables[goal.0].is_known() {
            return;
        }
        let goal_name = self.variables[goal.0].name().to_string();
        let candidates: Vec<_> = self.variables[goal.0]
            .clause_refs()
            .iter()
            .copied()
            .filter(|c| self.clauses[c.0].is_consequent())
            .collect();

        for clause_id in candidates {
            let rule_id = self.clauses[clause_id.0].rule();
            let rule_name = self.rules[rule_id.0].name().to_string();
            if !stack.enter(clause_id) {
                let line = format!("Skipping rule {}, clause already on goal stack", rule_name);
                self.trace(&line);
                continue;
            }

            let truth = self.prove_rule(rule_id, stack);
            stack.leave(clause_id);

            // Uma prova aninhada resolveu o objetivo por outro caminho: o
            // valor dela prevalece e a solução já está no trace.
            if self.variables[goal.0].is_known() {
                return;
            }

            match truth {
                Truth::True => {
                    let value = self.clauses[clause_id.0].value().clone();
                    let line = format!("Rule {} is true, setting {} := {}", rule_name, goal_name, value);
                    self.variables[goal.0].assign(value, rule_name);
                    self.trace(&line);
                    break;
                }
                Truth::False => {
                    let line = format!("Rule {} is false, can't set {}", rule_name, goal_name);
                    self.trace(&line);
                }
                Truth::Unknown => {
                    let line = format!("Rule {} is unknown, can't determine truth value", rule_name);
                    self.trace(&line);
                }
            }
        }

        let line = if self.variables[goal.0].is_known() {
            format!("+++ Found Solution for goal: {}", goal_name)
        } else {
            format!("+++ Could Not Find Solution for goal: {}", goal_name)
        };
        self.trace(&line);
    }

    /// Prova os antecedentes da regra, recursando em variáveis desconhecidas.
    fn prove_rule(&mut self, rule: RuleId, stack: &mut GoalStack) -> Truth {
        let antecedents = self.rules[rule.0].antecedents().to_vec();
        for clause_id in antecedents {
            let var = self.clauses[clause_id.0].variable();
            if !self.variables[var.0].is_known() {
                self.prove_goal(var, stack);
            }
            let truth = self.clauses[clause_id.0].test(&self.variables);
            if truth != Truth::True {
                self.rules[rule.0].record_truth(truth);
                return truth;
            }
        }
        self.rules[rule.0].record_truth(Truth::True);
        Truth::True
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Assignment, Condition, RuleBase, Value};
    use crate::error::EngineError;
    use crate::trace::{MemoryTrace, NullTrace};

    fn abc(trace: MemoryTrace) -> RuleBase {
        let mut rb = RuleBase::with_trace("abc", Box::new(trace));
        for name in ["A", "B", "C"] {
            rb.add_variable(name).unwrap();
        }
        rb.add_rule(
            "R1",
            vec![Condition::equals("A", true), Condition::equals("B", true)],
            vec![Assignment::new("C", true)],
        )
        .unwrap();
        rb
    }

    /// Sem fatos nem regras para A/B, C fica desconhecido e isso é reportado
    #[test]
    fn test_unprovable_goal() {
        let trace = MemoryTrace::new();
        let mut rb = abc(trace.clone());
        rb.reset();

        assert_eq!(rb.backward_chain("C"), Ok(Value::Unknown));
        assert!(trace.contains("+++ Could Not Find Solution for goal: C"));
        assert!(trace.contains("Rule R1 is unknown"));
        assert!(!rb.rule_by_name("R1").unwrap().fired());
        assert!(rb.goal_stack.is_empty());
    }

    /// Com os fatos, C é provado e a regra não conta como disparada
    #[test]
    fn test_provable_goal() {
        let trace = MemoryTrace::new();
        let mut rb = abc(trace.clone());
        rb.add_fact("A", true).unwrap();
        rb.add_fact("B", true).unwrap();
        rb.reset();
        rb.initialize_facts();

        assert_eq!(rb.backward_chain("C"), Ok(Value::Bool(true)));
        assert_eq!(rb.variable("C").unwrap().provenance(), Some("R1"));
        assert!(!rb.rule_by_name("R1").unwrap().fired());
        assert!(trace.contains("+++ Found Solution for goal: C"));
    }

    /// Objetivo já conhecido: nenhuma regra é avaliada
    #[test]
    fn test_known_goal_is_idempotent() {
        let trace = MemoryTrace::new();
        let mut rb = abc(trace.clone());
        rb.reset();
        rb.set_variable_value("C", "preset").unwrap();
        trace.clear();

        assert_eq!(rb.backward_chain("C"), Ok(Value::from("preset")));
        assert!(trace.lines().is_empty());
        assert_eq!(rb.variable("C").unwrap().provenance(), Some("host"));
    }

    /// R1 precisa de B (derivado por R2), R2 precisa de A (derivado por R1)
    #[test]
    fn test_cycle_terminates() {
        let trace = MemoryTrace::new();
        let mut rb = RuleBase::with_trace("cycle", Box::new(trace.clone()));
        rb.add_variable("A").unwrap();
        rb.add_variable("B").unwrap();
        rb.add_rule("R1", vec![Condition::equals("B", true)], vec![Assignment::new("A", true)])
            .unwrap();
        rb.add_rule("R2", vec![Condition::equals("A", true)], vec![Assignment::new("B", true)])
            .unwrap();
        rb.reset();

        assert_eq!(rb.backward_chain("A"), Ok(Value::Unknown));
        assert_eq!(rb.variable("B").unwrap().value(), &Value::Unknown);
        assert!(trace.contains("Skipping rule R1, clause already on goal stack"));
        assert!(rb.goal_stack.is_empty());
    }

    /// Subobjetivos são provados recursivamente; para na primeira solução
    #[test]
    fn test_subgoals_and_first_solution() {
        let trace = MemoryTrace::new();
        let mut rb = RuleBase::with_trace("sub", Box::new(trace.clone()));
        for name in ["x", "y", "goal"] {
            rb.add_variable(name).unwrap();
        }
        rb.add_rule("Y", vec![Condition::equals("x", "on")], vec![Assignment::new("y", true)])
            .unwrap();
        rb.add_rule("G1", vec![Condition::equals("y", true)], vec![Assignment::new("goal", "first")])
            .unwrap();
        rb.add_rule("G2", vec![], vec![Assignment::new("goal", "second")])
            .unwrap();
        rb.add_fact("x", "on").unwrap();
        rb.reset();
        rb.initialize_facts();

        assert_eq!(rb.backward_chain("goal"), Ok(Value::from("first")));
        assert_eq!(rb.variable("y").unwrap().provenance(), Some("Y"));
        assert!(!trace.contains("G2"));
    }

    /// Antecedente falso: tenta a próxima regra candidata
    #[test]
    fn test_false_rule_tries_next_candidate() {
        let trace = MemoryTrace::new();
        let mut rb = RuleBase::with_trace("next", Box::new(trace.clone()));
        rb.add_variable("x").unwrap();
        rb.add_variable("goal").unwrap();
        rb.add_rule("G1", vec![Condition::equals("x", "on")], vec![Assignment::new("goal", "a")])
            .unwrap();
        rb.add_rule("G2", vec![Condition::equals("x", "off")], vec![Assignment::new("goal", "b")])
            .unwrap();
        rb.add_fact("x", "off").unwrap();
        rb.reset();
        rb.initialize_facts();

        assert_eq!(rb.backward_chain("goal"), Ok(Value::from("b")));
        assert!(trace.contains("Rule G1 is false, can't set goal"));
    }

    #[test]
    fn test_unknown_goal_name() {
        let mut rb = RuleBase::with_trace("none", Box::new(NullTrace));
        assert_eq!(
            rb.backward_chain("ghost"),
            Err(EngineError::VariableNotFound("ghost".to_string()))
        );
    }

    /// R1 precisa de Y; Y sai de R3, que precisa de X = b, dado por R2.
    /// O X resolvido no caminho aninhado não pode ser sobrescrito por R1.
    #[test]
    fn test_nested_resolution_keeps_value() {
        let trace = MemoryTrace::new();
        let mut rb = RuleBase::with_trace("nested", Box::new(trace.clone()));
        rb.add_variable("X").unwrap();
        rb.add_variable("Y").unwrap();
        rb.add_rule("R1", vec![Condition::equals("Y", true)], vec![Assignment::new("X", "a")])
            .unwrap();
        rb.add_rule("R2", vec![], vec![Assignment::new("X", "b")])
            .unwrap();
        rb.add_rule("R3", vec![Condition::equals("X", "b")], vec![Assignment::new("Y", true)])
            .unwrap();
        rb.reset();

        assert_eq!(rb.backward_chain("X"), Ok(Value::from("b")));
        assert_eq!(rb.variable("X").unwrap().provenance(), Some("R2"));
        assert_eq!(rb.variable("Y").unwrap().value(), &Value::Bool(true));
        assert_eq!(rb.variable("Y").unwrap().provenance(), Some("R3"));
        assert!(trace.contains("Skipping rule R1, clause already on goal stack"));
        assert!(!trace.contains("Rule R1 is true"));
        assert_eq!(trace.count("+++ Found Solution for goal: X"), 1);
        assert!(rb.goal_stack.is_empty());
    }

    /// O exemplo Vehicles resolve por encadeamento para trás
    #[test]
    fn test_vehicles_backward() {
        let mut rb = crate::demo::vehicles(Box::new(NullTrace)).unwrap();
        rb.reset();
        rb.initialize_facts();
        assert_eq!(rb.backward_chain("vehicle"), Ok(Value::from("MiniVan")));
        assert_eq!(
            rb.variable("vehicleType").unwrap().value(),
            &Value::from("automobile")
        );
    }
}
