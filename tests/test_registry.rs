//! Stock registry construction, validation, and draft/commit semantics.

mod common;

use apertura::{AperturaError, Rarity, StockRegistry};

// ---------------------------------------------------------------------------
// from_seeds
// ---------------------------------------------------------------------------

#[test]
fn from_seeds_builds_valid_registry() {
    let reg = common::registry(&[(2, 1000, "Bronce"), (12, 500, "Plata"), (21, 50, "Premium")]);

    assert_eq!(reg.len(), 3);
    assert_eq!(reg.total_stock(), 1550);
    assert_eq!(reg.remaining(2), Some(1000));
    assert_eq!(reg.remaining(99), None);
    assert_eq!(reg.rarity(2), Some(Rarity::Common));
    assert_eq!(reg.rarity(12), Some(Rarity::Silver));
    assert_eq!(reg.rarity(21), Some(Rarity::Premium));
}

#[test]
fn from_seeds_keeps_seed_order() {
    let reg = common::registry(&[(9, 1, "Gold"), (2, 1, "Bronce"), (5, 1, "Plata")]);
    let ids: Vec<u32> = reg.token_ids().collect();
    assert_eq!(ids, vec![9, 2, 5]);
}

#[test]
fn from_seeds_rejects_duplicate_id() {
    let err = StockRegistry::from_seeds(&common::seeds(&[(7, 10, "Bronce"), (7, 5, "Gold")]))
        .unwrap_err();
    assert!(matches!(err, AperturaError::DuplicateToken(7)));
}

#[test]
fn from_seeds_rejects_negative_stock() {
    let err =
        StockRegistry::from_seeds(&common::seeds(&[(3, -1, "Bronce")])).unwrap_err();
    assert!(matches!(
        err,
        AperturaError::NegativeStock { id: 3, stock: -1 }
    ));
}

#[test]
fn from_seeds_rejects_unknown_rarity() {
    let err =
        StockRegistry::from_seeds(&common::seeds(&[(3, 10, "bronce")])).unwrap_err();
    match err {
        AperturaError::UnknownRarity(label) => assert_eq!(label, "bronce"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_stock_seed_is_allowed() {
    let reg = common::registry(&[(1, 0, "Gold"), (2, 3, "Bronce")]);
    assert_eq!(reg.total_stock(), 3);
    assert_eq!(reg.remaining(1), Some(0));
}

// ---------------------------------------------------------------------------
// from_json
// ---------------------------------------------------------------------------

#[test]
fn from_json_parses_seed_array() {
    let reg = StockRegistry::from_json(
        r#"[
            {"id": 2, "stock": 1000, "rarity": "Bronce"},
            {"id": 27, "stock": 100, "rarity": "Gold"}
        ]"#,
    )
    .unwrap();
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.rarity(27), Some(Rarity::Gold));
}

#[test]
fn from_json_surfaces_parse_errors() {
    let err = StockRegistry::from_json("not json").unwrap_err();
    assert!(matches!(err, AperturaError::Json(_)));
}

// ---------------------------------------------------------------------------
// draft
// ---------------------------------------------------------------------------

#[test]
fn draft_is_detached_from_registry() {
    let reg = common::registry(&[(1, 4, "Bronce"), (2, 2, "Plata")]);
    let mut draft = reg.draft();

    assert!(draft.take(1));
    assert_eq!(draft.remaining(1), 3);
    // Committed stock untouched by draft draws.
    assert_eq!(reg.remaining(1), Some(4));
}

#[test]
fn draft_take_refuses_reuse_within_a_pack() {
    let reg = common::registry(&[(1, 10, "Bronce")]);
    let mut draft = reg.draft();

    assert!(draft.take(1));
    // Still has draft stock, but the in-progress pack already holds it.
    assert!(!draft.take(1));
    assert_eq!(draft.remaining(1), 9);
}

#[test]
fn draft_take_refuses_exhausted_or_unknown_tokens() {
    let reg = common::registry(&[(1, 0, "Bronce")]);
    let mut draft = reg.draft();

    assert!(!draft.take(1));
    assert!(!draft.take(42));
}

#[test]
fn draft_candidates_filter_used_and_exhausted() {
    let reg = common::registry(&[(1, 2, "Bronce"), (2, 0, "Plata"), (3, 1, "Gold")]);
    let mut draft = reg.draft();
    draft.take(3);

    let ids: Vec<u32> = draft.candidates().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![1]);
}

// ---------------------------------------------------------------------------
// commit
// ---------------------------------------------------------------------------

#[test]
fn commit_decrements_real_stock() {
    let mut reg = common::registry(&[
        (1, 3, "Bronce"),
        (2, 3, "Bronce"),
        (3, 3, "Plata"),
        (4, 3, "Gold"),
        (5, 3, "Premium"),
    ]);
    reg.commit(&[1, 2, 3, 4, 5]).unwrap();

    assert_eq!(reg.total_stock(), 10);
    for id in 1..=5 {
        assert_eq!(reg.remaining(id), Some(2));
    }
}

#[test]
fn commit_rejects_unknown_token_and_leaves_registry_unchanged() {
    let mut reg = common::registry(&[(1, 3, "Bronce")]);
    let err = reg.commit(&[1, 99]).unwrap_err();

    assert!(matches!(err, AperturaError::InvalidArgument(_)));
    assert_eq!(reg.remaining(1), Some(3));
}

#[test]
fn commit_rejects_out_of_stock_token() {
    let mut reg = common::registry(&[(1, 0, "Bronce"), (2, 5, "Plata")]);
    let err = reg.commit(&[2, 1]).unwrap_err();

    assert!(matches!(err, AperturaError::InvalidArgument(_)));
    assert_eq!(reg.remaining(2), Some(5));
}

#[test]
fn commit_rejects_duplicate_ids_in_one_pack() {
    let mut reg = common::registry(&[(1, 5, "Bronce")]);
    let err = reg.commit(&[1, 1]).unwrap_err();

    assert!(matches!(err, AperturaError::InvalidArgument(_)));
    assert_eq!(reg.remaining(1), Some(5));
}
