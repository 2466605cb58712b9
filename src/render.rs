//! # Render — Dumps Textuais da Base de Regras
//!
//! Representações legíveis para depuração e explicação:
//!
//! - [`render_rules`] — todas as regras (ordem de declaração) e depois os fatos
//! - [`render_variables`] — cada variável com valor e proveniência
//! - [`describe_rule`] — uma regra no formato `SE ... ENTÃO ...`
//! - [`conflict_set_line`] — linha de trace do conjunto de conflito
//!
//! ## Exemplo de Saída
//!
//! ```text
//! Vehicles Rule Base:
//! Cycle: IF num_wheels < 4 THEN vehicleType := cycle
//! MiniVan: IF vehicleType = automobile AND size = medium AND num_doors = 3 THEN vehicle := MiniVan
//! Fact: num_wheels := 4
//! ```
//!
//! O formato é só "legível", não estável: não use como formato de troca.

use std::fmt::Write;

use crate::core::{ClauseId, Rule, RuleBase, RuleId};

/// Nome da variável referenciada por uma cláusula (`?` se o ID não existir).
fn clause_text(rb: &RuleBase, id: ClauseId) -> String {
    let Some(clause) = rb.clause(id) else {
        return "?".to_string();
    };
    let var = rb
        .variable_by_id(clause.variable())
        .map(|v| v.name())
        .unwrap_or("?");
    if clause.is_consequent() {
        format!("{} := {}", var, clause.value())
    } else {
        format!("{} {} {}", var, clause.operator(), clause.value())
    }
}

/// `Nome: IF a AND b THEN c := v`
pub fn describe_rule(rb: &RuleBase, rule: &Rule) -> String {
    let when: Vec<String> = rule
        .antecedents()
        .iter()
        .map(|id| clause_text(rb, *id))
        .collect();
    let then: Vec<String> = rule
        .consequents()
        .iter()
        .map(|id| clause_text(rb, *id))
        .collect();
    if when.is_empty() {
        format!("{}: THEN {}", rule.name(), then.join(" AND "))
    } else {
        format!(
            "{}: IF {} THEN {}",
            rule.name(),
            when.join(" AND "),
            then.join(" AND ")
        )
    }
}

/// Dump completo: cabeçalho, regras em ordem de declaração, depois fatos.
pub fn render_rules(rb: &RuleBase) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} Rule Base:", rb.name());
    for rule in rb.rules() {
        let _ = writeln!(out, "{}", describe_rule(rb, rule));
    }
    for fact in rb.facts() {
        let var = rb
            .variable_by_id(fact.variable())
            .map(|v| v.name())
            .unwrap_or("?");
        let _ = writeln!(out, "Fact: {} := {}", var, fact.value());
    }
    out
}

/// Uma linha por variável: `nome value = valor (from proveniência)`.
pub fn render_variables(rb: &RuleBase) -> String {
    let mut out = String::new();
    for var in rb.variables() {
        match var.provenance() {
            Some(p) => {
                let _ = writeln!(out, "{} value = {} (from {})", var.name(), var.value(), p);
            }
            None => {
                let _ = writeln!(out, "{} value = {}", var.name(), var.value());
            }
        }
    }
    out
}

/// `-- Rules in conflict set: R1(2), R2(1)`
pub fn conflict_set_line(rb: &RuleBase, set: &[RuleId]) -> String {
    let entries: Vec<String> = set
        .iter()
        .filter_map(|id| rb.rule(*id))
        .map(|r| format!("{}({})", r.name(), r.antecedent_count()))
        .collect();
    format!("-- Rules in conflict set: {}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Assignment, Condition, Operator};
    use crate::trace::NullTrace;

    fn base() -> RuleBase {
        let mut rb = RuleBase::with_trace("Vehicles", Box::new(NullTrace));
        for name in ["num_wheels", "motor", "vehicleType"] {
            rb.add_variable(name).unwrap();
        }
        rb.add_rule(
            "Cycle",
            vec![Condition::new("num_wheels", Operator::LessThan, "4")],
            vec![Assignment::new("vehicleType", "cycle")],
        )
        .unwrap();
        rb.add_rule(
            "Automobile",
            vec![
                Condition::equals("num_wheels", "4"),
                Condition::equals("motor", "yes"),
            ],
            vec![Assignment::new("vehicleType", "automobile")],
        )
        .unwrap();
        rb.add_fact("num_wheels", "4").unwrap();
        rb
    }

    /// Regras em ordem de declaração, fatos no fim
    #[test]
    fn test_render_rules() {
        let rb = base();
        let text = render_rules(&rb);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Vehicles Rule Base:");
        assert_eq!(lines[1], "Cycle: IF num_wheels < 4 THEN vehicleType := cycle");
        assert_eq!(
            lines[2],
            "Automobile: IF num_wheels = 4 AND motor = yes THEN vehicleType := automobile"
        );
        assert_eq!(lines[3], "Fact: num_wheels := 4");
    }

    /// Variáveis mostram valor e, quando houver, a proveniência
    #[test]
    fn test_render_variables() {
        let mut rb = base();
        rb.initialize_facts();
        let text = render_variables(&rb);
        assert!(text.contains("num_wheels value = 4 (from fact)"));
        assert!(text.contains("motor value = unknown"));
    }

    #[test]
    fn test_conflict_set_line() {
        let rb = base();
        let ids: Vec<RuleId> = rb.rules().iter().map(|r| r.id()).collect();
        assert_eq!(
            conflict_set_line(&rb, &ids),
            "-- Rules in conflict set: Cycle(1), Automobile(2)"
        );
        assert_eq!(conflict_set_line(&rb, &[]), "-- Rules in conflict set: ");
    }
}
