//! # Demo — Base de Regras "Vehicles"
//!
//! Base de exemplo clássica para classificar veículos a partir de poucas
//! observações. Serve de demonstração no binário e de fixture nos testes.
//!
//! ```text
//! num_wheels < 4                          → vehicleType := cycle
//! num_wheels = 4 E motor = yes            → vehicleType := automobile
//! vehicleType = automobile E size = medium E num_doors = 3 → vehicle := MiniVan
//! ...
//! ```
//!
//! Com os fatos padrão (4 rodas, motor, 3 portas, tamanho médio), ambas
//! as estratégias chegam a `vehicle = MiniVan`.

use crate::core::{Assignment, Condition, Operator, RuleBase};
use crate::error::Result;
use crate::trace::TraceSink;

/// Nome da variável-objetivo natural desta base.
pub const VEHICLE_GOAL: &str = "vehicle";

/// Monta a base Vehicles com os fatos padrão já registrados.
pub fn vehicles(trace: Box<dyn TraceSink>) -> Result<RuleBase> {
    let mut rb = RuleBase::with_trace("Vehicles", trace);
    populate(&mut rb)?;
    tracing::debug!(rules = rb.rules().len(), "Base Vehicles montada");
    Ok(rb)
}

fn populate(rb: &mut RuleBase) -> Result<()> {
    for name in [
        VEHICLE_GOAL,
        "vehicleType",
        "size",
        "num_wheels",
        "num_doors",
        "motor",
    ] {
        rb.add_variable(name)?;
    }

    let cycle = |wheels: &str, motor: &str| {
        vec![
            Condition::equals("vehicleType", "cycle"),
            Condition::equals("num_wheels", wheels),
            Condition::equals("motor", motor),
        ]
    };
    let automobile = |size: &str, doors: &str| {
        vec![
            Condition::equals("vehicleType", "automobile"),
            Condition::equals("size", size),
            Condition::equals("num_doors", doors),
        ]
    };
    let vehicle = |v: &str| vec![Assignment::new(VEHICLE_GOAL, v)];

    rb.add_rule("Bicycle", cycle("2", "no"), vehicle("Bicycle"))?;
    rb.add_rule("Tricycle", cycle("3", "no"), vehicle("Tricycle"))?;
    rb.add_rule("Motorcycle", cycle("2", "yes"), vehicle("Motorcycle"))?;
    rb.add_rule("SportsCar", automobile("small", "2"), vehicle("Sports_Car"))?;
    rb.add_rule("Sedan", automobile("medium", "4"), vehicle("Sedan"))?;
    rb.add_rule("MiniVan", automobile("medium", "3"), vehicle("MiniVan"))?;
    rb.add_rule(
        "SUV",
        automobile("large", "4"),
        vehicle("Sports_Utility_Vehicle"),
    )?;
    rb.add_rule(
        "Cycle",
        vec![Condition::new("num_wheels", Operator::LessThan, "4")],
        vec![Assignment::new("vehicleType", "cycle")],
    )?;
    rb.add_rule(
        "Automobile",
        vec![Condition::equals("num_wheels", "4"), Condition::equals("motor", "yes")],
        vec![Assignment::new("vehicleType", "automobile")],
    )?;

    rb.add_fact("num_wheels", "4")?;
    rb.add_fact("motor", "yes")?;
    rb.add_fact("num_doors", "3")?;
    rb.add_fact("size", "medium")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;
    use crate::error::EngineError;
    use crate::trace::MemoryTrace;

    #[test]
    fn test_vehicles_shape() {
        let rb = vehicles(Box::new(MemoryTrace::new())).unwrap();
        assert_eq!(rb.rules().len(), 9);
        assert_eq!(rb.facts().len(), 4);
        let goals: Vec<&str> = rb.goal_variables().iter().map(|v| v.name()).collect();
        assert_eq!(goals, vec![VEHICLE_GOAL, "vehicleType"]);
    }

    /// Falha de montagem chega ao chamador em vez de virar base pela metade
    #[test]
    fn test_populate_propagates_errors() {
        let mut rb = RuleBase::with_trace("Vehicles", Box::new(MemoryTrace::new()));
        rb.add_variable("motor").unwrap();
        assert_eq!(
            populate(&mut rb),
            Err(EngineError::DuplicateVariable("motor".to_string()))
        );
        assert!(rb.rules().is_empty());
    }

    /// Para frente: Automobile dispara primeiro, depois MiniVan
    #[test]
    fn test_vehicles_forward_order() {
        let trace = MemoryTrace::new();
        let mut rb = vehicles(Box::new(trace.clone())).unwrap();
        rb.reset();
        rb.initialize_facts();
        let fired: Vec<String> = rb
            .forward_chain()
            .into_iter()
            .map(|id| rb.rule(id).unwrap().name().to_string())
            .collect();
        assert_eq!(fired, vec!["Automobile", "MiniVan"]);
        assert_eq!(rb.variable(VEHICLE_GOAL).unwrap().value(), &Value::from("MiniVan"));
        assert!(trace.contains("-- Rules in conflict set: MiniVan(3)"));
    }
}
