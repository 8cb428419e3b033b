use commune_core::{
    ReferenceSiren, SelectableMunicipality, SelectionInput, SelectionState, SelectionStore,
};

#[test]
fn new_store_starts_empty() {
    let store = SelectionStore::new();
    assert_eq!(store.state(), &SelectionState::default());
    assert!(store.state().is_empty());
}

#[test]
fn required_fields_only_normalize_optionals_to_empty() {
    let mut store = SelectionStore::new();
    store.set_selected_municipality(&SelectionInput::new("A", "01001"));

    let state = store.state();
    assert_eq!(state.selected_municipality, "A");
    assert_eq!(state.selected_municipality_code, "01001");
    assert_eq!(state.selected_inter_municipality, "");
    assert_eq!(state.selected_inter_municipality_code, "");
    assert_eq!(state.selected_siren, "");
    assert!(state.selected_reference_sirens.is_empty());
}

#[test]
fn reference_sirens_are_projected_in_input_order() {
    let mut store = SelectionStore::new();
    let mut input = SelectionInput::new("B", "02002");
    input.reference_sirens = Some(vec![ReferenceSiren::new("200"), ReferenceSiren::new("201")]);

    store.set_selected_municipality(&input);

    assert_eq!(
        store.state().selected_reference_sirens,
        vec!["200".to_string(), "201".to_string()]
    );
}

#[test]
fn empty_reference_sirens_give_empty_list() {
    let mut store = SelectionStore::new();
    let mut input = SelectionInput::new("B", "02002");
    input.reference_sirens = Some(Vec::new());

    store.set_selected_municipality(&input);
    assert!(store.state().selected_reference_sirens.is_empty());
}

#[test]
fn update_overwrites_every_field_of_previous_selection() {
    let mut store = SelectionStore::new();
    let full = SelectionInput {
        name: "A".to_string(),
        code: "01001".to_string(),
        inter_name: Some("Inter1".to_string()),
        inter_code: Some("E1".to_string()),
        siren: Some("100".to_string()),
        reference_sirens: Some(vec![ReferenceSiren::new("E1")]),
    };
    store.set_selected_municipality(&full);
    assert_eq!(store.state().selected_inter_municipality, "Inter1");

    store.set_selected_municipality(&SelectionInput::new("B", "02002"));

    assert_eq!(
        store.state(),
        &SelectionState {
            selected_municipality: "B".to_string(),
            selected_municipality_code: "02002".to_string(),
            ..SelectionState::default()
        }
    );
}

#[test]
fn repeated_update_is_idempotent() {
    let mut input = SelectionInput::new("A", "01001");
    input.siren = Some("100".to_string());

    let mut once = SelectionStore::new();
    once.set_selected_municipality(&input);
    let mut twice = SelectionStore::new();
    twice.set_selected_municipality(&input);
    twice.set_selected_municipality(&input);

    assert_eq!(once.state(), twice.state());
}

#[test]
fn picker_item_converts_into_selection_input() {
    let item = SelectableMunicipality {
        code: "01001".to_string(),
        name: "A".to_string(),
        inter_name: Some("Inter1".to_string()),
        inter_code: None,
        siren: Some("100".to_string()),
    };

    let mut store = SelectionStore::new();
    store.set_selected_municipality(&SelectionInput::from(&item));

    let state = store.state();
    assert_eq!(state.selected_inter_municipality, "Inter1");
    assert_eq!(state.selected_inter_municipality_code, "");
    assert_eq!(state.selected_siren, "100");
}

#[test]
fn json_payload_decodes_at_the_boundary() {
    let input: SelectionInput = serde_json::from_value(serde_json::json!({
        "name": "B",
        "code": "02002",
        "reference_sirens": [{ "siren": "200" }, { "siren": "201" }]
    }))
    .unwrap();

    let mut store = SelectionStore::new();
    store.set_selected_municipality(&input);
    assert_eq!(store.state().selected_reference_sirens, vec!["200", "201"]);
}

#[test]
fn clear_resets_to_empty_selection() {
    let mut store = SelectionStore::new();
    store.set_selected_municipality(&SelectionInput::new("A", "01001"));
    store.clear();
    assert!(store.state().is_empty());
}
