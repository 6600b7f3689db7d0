use zoo_lie::{tensor_decompose, Algebra, IrrepComponent, Series};

#[test]
fn decomposition_components_round_trip_through_json() {
    let a2 = Algebra::new(Series::A, 2).unwrap();
    let components = tensor_decompose(&a2, &[vec![1, 0], vec![0, 1]]).unwrap();
    let encoded = serde_json::to_string(&components).unwrap();
    let decoded: Vec<IrrepComponent> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, components);
}

#[test]
fn component_json_shape_is_stable() {
    let component = IrrepComponent {
        highest_weight: vec![1, 1],
        dim: 8,
        multiplicity: 2,
    };
    let encoded = serde_json::to_string(&component).unwrap();
    assert_eq!(
        encoded,
        r#"{"highest_weight":[1,1],"dim":8,"multiplicity":2}"#
    );
}
