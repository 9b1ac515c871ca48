use cultivar_match::alias::AliasTable;
use cultivar_match::cultivar::Catalog;
use cultivar_match::similarity::SimilarityRanker;
use cultivar_match::types::SimilarityResult;

const ALIASES: &str = r#"{
    "β-Myrcen": ["Myrcen", "beta-Myrcen"],
    "caryophyllen": "β-Caryophyllen",
    "Limonen": ["D-Limonen"]
}"#;

const CATALOG: &str = r#"[
    {
        "name": "Lemon Haze",
        "terpenes": ["Limonen", "Myrcen", "Caryophyllen"],
        "genetics": "Lemon Skunk x Silver Haze",
        "smell": "Zitrus, Erdig",
        "aroma": "Süß, Zitrone",
        "status": "aktiv"
    },
    {
        "name": "Silver Haze",
        "terpeneProfile": ["Myrcen", "Limonen", "Pinen"],
        "genetik": "Haze x Northern Lights",
        "smell": "Erdig, Kiefer"
    },
    {
        "name": "Super Lemon",
        "terpenes": ["D-Limonen", "beta-Myrcen", "β-Caryophyllen"],
        "genetics": "Lemon Skunk x Super Silver Haze",
        "smell": ["Zitrus", "Erdig"],
        "taste": "Zitrone"
    },
    {
        "name": "Old Timer",
        "terpenes": ["Limonen"],
        "status": "discontinued"
    },
    { "name": "Empty" },
    { "name": "Pine Only", "smell": "Kiefer" },
    { "name": "Kush", "genetics": "OG Kush", "terpenes": ["Linalool"] }
]"#;

#[test]
fn golden_ranking_is_deterministic() {
    let aliases = AliasTable::from_json_str(ALIASES).unwrap();
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let ranker = SimilarityRanker::default();

    // ------------------------------------------------------------
    // 1. Rank twice, once on a catalog parsed a second time
    // ------------------------------------------------------------
    let result1 = catalog.similar_to("Lemon Haze", &aliases, &ranker).unwrap();
    let catalog2 = Catalog::from_json_str(CATALOG).unwrap();
    let result2 = catalog2.similar_to("Lemon Haze", &aliases, &ranker).unwrap();

    let json1 = serde_json::to_string_pretty(&result1).unwrap();
    let json2 = serde_json::to_string_pretty(&result2).unwrap();
    assert_eq!(json1, json2, "Ranking output is not deterministic");

    // ------------------------------------------------------------
    // 2. Snapshot assertion (freeze contract)
    // ------------------------------------------------------------
    let expected = r#"{
  "matches": [
    {
      "name": "Super Lemon",
      "score": 0.8875000000000001,
      "signals": {
        "weighted_overlap": 1.0,
        "cosine": 1.0,
        "genetic": 0.25,
        "scent": 0.75
      },
      "label": "sehr hoch"
    },
    {
      "name": "Silver Haze",
      "score": 0.425,
      "signals": {
        "weighted_overlap": 0.5,
        "cosine": 0.8571428571428572,
        "genetic": 0.0,
        "scent": 0.3333333333333333
      },
      "label": "mittel"
    },
    {
      "name": "Kush",
      "score": 0.0,
      "signals": {
        "weighted_overlap": 0.0,
        "cosine": 0.0,
        "genetic": 0.0,
        "scent": 0.0
      },
      "label": null
    },
    {
      "name": "Pine Only",
      "score": 0.0,
      "signals": {
        "weighted_overlap": 0.0,
        "cosine": 0.0,
        "genetic": 0.0,
        "scent": 0.0
      },
      "label": null
    }
  ],
  "ranking": {
    "reference": "Lemon Haze",
    "limit": 5,
    "alias_table_version": "sha256:d8918cba11e7ae71ce90829f41c3037aa5432f9d07101d5a88f95e36411e9229",
    "candidates_considered": 6,
    "candidates_comparable": 4,
    "candidates_returned": 4
  }
}"#;

    assert_eq!(json1.trim(), expected.trim(), "Golden snapshot mismatch");

    // ------------------------------------------------------------
    // 3. Roundtrip
    // ------------------------------------------------------------
    let deserialized: SimilarityResult = serde_json::from_str(&json1).unwrap();
    assert_eq!(deserialized.ranking, result1.ranking);
    assert_eq!(deserialized.matches.len(), 4);
    assert_eq!(deserialized.matches[0].label, result1.matches[0].label);
    assert_eq!(deserialized.matches[3].name, "Pine Only");
}

#[test]
fn golden_field_order() {
    let aliases = AliasTable::from_json_str(ALIASES).unwrap();
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let result = catalog
        .similar_to("Super Lemon", &aliases, &SimilarityRanker::default())
        .unwrap();
    let json = serde_json::to_string_pretty(&result).unwrap();

    let matches_pos = json.find("\"matches\":").expect("Missing matches key");
    let ranking_pos = json.find("\"ranking\":").expect("Missing ranking key");
    assert!(matches_pos < ranking_pos);

    let name_pos = json.find("\"name\":").unwrap();
    let score_pos = json.find("\"score\":").unwrap();
    let signals_pos = json.find("\"signals\":").unwrap();
    let label_pos = json.find("\"label\":").unwrap();
    assert!(name_pos < score_pos);
    assert!(score_pos < signals_pos);
    assert!(signals_pos < label_pos);

    assert_eq!(result.matches[0].name, "Lemon Haze");
}

#[test]
fn candidate_order_does_not_change_the_ranking() {
    let aliases = AliasTable::from_json_str(ALIASES).unwrap();
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let reference = catalog.get("Lemon Haze").unwrap();
    let ranker = SimilarityRanker::default();

    let forward: Vec<_> = catalog.iter().cloned().collect();
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(3);

    let expected = serde_json::to_string(&ranker.rank(reference, &forward, &aliases)).unwrap();
    for candidates in [reversed, rotated] {
        let actual = serde_json::to_string(&ranker.rank(reference, &candidates, &aliases)).unwrap();
        assert_eq!(actual, expected);
    }
}
