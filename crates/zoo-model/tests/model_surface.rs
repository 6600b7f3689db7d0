use std::collections::BTreeMap;

use zoo_algebra::{Group, RepValue};
use zoo_core::Rational;
use zoo_model::{validate_reps_declared, Field, Representation, Symmetry, SymmetryRegistry};

fn standard_model_like_registry() -> SymmetryRegistry {
    let mut registry = SymmetryRegistry::new();
    registry
        .insert(Symmetry::new("color", Group::SU(3), true, "g_s", None, None).unwrap())
        .unwrap();
    registry
        .insert(
            Symmetry::new("weak", Group::SU(2), true, "g", Some("L".into()), None).unwrap(),
        )
        .unwrap();
    registry
        .insert(
            Symmetry::new("hypercharge", Group::U1, true, "g'", Some("Y".into()), None).unwrap(),
        )
        .unwrap();
    registry
}

fn left_quark() -> Field {
    let mut reps = BTreeMap::new();
    reps.insert(
        "color".to_string(),
        Representation::new(RepValue::Weight(vec![1, 0]), Group::SU(3)).unwrap(),
    );
    reps.insert(
        "weak".to_string(),
        Representation::new(RepValue::Weight(vec![1]), Group::SU(2)).unwrap(),
    );
    reps.insert(
        "hypercharge".to_string(),
        Representation::new(RepValue::Charge(Rational::new(1, 6)), Group::U1).unwrap(),
    );
    Field::new("Q", "1/2", reps, Some("left-handed quark doublet".into()), false).unwrap()
}

#[test]
fn declared_fields_validate_against_the_registry() {
    let registry = standard_model_like_registry();
    assert!(validate_reps_declared(&[left_quark()], &registry).is_ok());
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["color", "hypercharge", "weak"]);
}

#[test]
fn spin_drives_class_and_mass_dimension() {
    let quark = left_quark();
    assert!(quark.is_fermion());
    assert_eq!(quark.mass_dim(), Rational::new(3, 2));

    let gluon = Field::new("g", "1", BTreeMap::new(), None, true).unwrap();
    assert!(gluon.is_boson());
    assert_eq!(gluon.mass_dim(), Rational::from_integer(1));
    assert!(gluon.no_mass());

    let scalar = Field::new("phi", "0", BTreeMap::new(), None, false).unwrap();
    assert!(scalar.is_boson());
    assert_eq!(scalar.mass_dim(), Rational::from_integer(0));
}

#[test]
fn fields_serialize_with_their_representation_map() {
    let quark = left_quark();
    let value = serde_json::to_value(&quark).unwrap();
    assert_eq!(value["name"], "Q");
    assert_eq!(value["description"], "left-handed quark doublet");
    assert!(value["representations"]["color"].is_object());
    assert!(value["representations"]["weak"].is_object());
    assert!(value["representations"]["hypercharge"].is_object());
}

#[test]
fn symmetry_tags_render_ahead_of_names() {
    let registry = standard_model_like_registry();
    assert_eq!(registry.get("weak").unwrap().display_tag(), "L");
    assert_eq!(registry.get("color").unwrap().display_tag(), "color");
    assert!(registry.get("hypercharge").unwrap().is_abelian());
    assert!(!registry.get("color").unwrap().is_abelian());
}
