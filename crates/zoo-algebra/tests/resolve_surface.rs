use zoo_algebra::{decompose, resolve_rep, Decomposition, Group, RawRep, RepValue};
use zoo_core::ZooError;

#[test]
fn named_reps_feed_straight_into_the_product() {
    let su3 = Group::SU(3);
    let terms: Vec<RepValue> = ["3", "8", "3*"]
        .iter()
        .map(|name| resolve_rep(&su3, &RawRep::Named((*name).into())).unwrap())
        .collect();
    let Decomposition::Lie(components) = decompose(&terms, &su3).unwrap() else {
        panic!("expected Lie components");
    };
    assert!(components.iter().any(|c| c.dim == 1));
}

#[test]
fn labels_and_names_resolve_to_the_same_value() {
    let su3 = Group::SU(3);
    let named = resolve_rep(&su3, &RawRep::Named("8".into())).unwrap();
    let labelled = resolve_rep(&su3, &RawRep::Labels(vec![1, 1])).unwrap();
    assert_eq!(named, labelled);
}

#[test]
fn non_dominant_labels_are_rejected() {
    let su3 = Group::SU(3);
    assert!(matches!(
        resolve_rep(&su3, &RawRep::Labels(vec![-1, 0])),
        Err(ZooError::Input(_) | ZooError::Config(_))
    ));
    assert!(matches!(
        resolve_rep(&su3, &RawRep::Labels(vec![1])),
        Err(ZooError::Input(_) | ZooError::Config(_))
    ));
}

#[test]
fn raw_reps_round_trip_through_json() {
    let raw = RawRep::Named("10*".into());
    let encoded = serde_json::to_string(&raw).unwrap();
    let decoded: RawRep = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, raw);

    let charge = RawRep::Charge("-1/3".into());
    let encoded = serde_json::to_string(&charge).unwrap();
    let decoded: RawRep = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, charge);
}

#[test]
fn decompositions_round_trip_through_json() {
    let terms = vec![RepValue::Weight(vec![1]), RepValue::Weight(vec![1])];
    let decomposition = decompose(&terms, &Group::SU(2)).unwrap();
    let encoded = serde_json::to_string(&decomposition).unwrap();
    let decoded: Decomposition = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, decomposition);
}
