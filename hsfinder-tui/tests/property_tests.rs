use hsfinder_tui::config::HsfinderConfig;
use hsfinder_tui::controller::SearchForm;
use hsfinder_tui::render::{render_search, NO_NAME};
use hsfinder_tui::types::{Language, SearchResponse};
use proptest::prelude::*;
use serde_json::{json, Value};

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

proptest! {
    #[test]
    fn payload_has_exactly_documented_fields(
        query in "[a-zA-Z][a-zA-Z ]{0,30}",
        size in 1u8..=50,
        tenths in 0u8..=10,
        use_vector in any::<bool>(),
        use_spelling in any::<bool>(),
        language in language(),
    ) {
        let form = SearchForm {
            query: query.clone(),
            size,
            alpha_tenths: tenths,
            use_vector,
            use_spelling,
        };
        let request = form.to_request(language).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        prop_assert_eq!(keys, vec!["alpha", "query", "size", "use_vector"]);
        prop_assert_eq!(&object["query"], &Value::String(query));
        prop_assert_eq!(object["size"].as_u64(), Some(u64::from(size)));
        prop_assert_eq!(object["use_vector"].as_bool(), Some(use_vector));

        let alpha = object["alpha"].as_f64().unwrap();
        prop_assert!((0.0..=1.0).contains(&alpha));
        prop_assert_eq!((alpha * 10.0).round() as u8, tenths);
    }

    #[test]
    fn rendering_is_deterministic(
        codes in prop::collection::vec("[0-9]{2,6}", 0..8),
        scores in prop::collection::vec(prop::option::of(0.0f64..100.0), 8),
        language in language(),
    ) {
        let hits: Vec<Value> = codes
            .iter()
            .zip(scores.iter())
            .map(|(code, score)| json!({"_source": {"code": code}, "_score": score}))
            .collect();
        let response: SearchResponse = serde_json::from_value(json!({
            "total-hits": hits.len(),
            "Ranked-objects": hits,
        }))
        .unwrap();

        let first = render_search(&response, language);
        let second = render_search(&response, language);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.blocks.len(), codes.len());
        for (block, code) in first.blocks.iter().zip(codes.iter()) {
            prop_assert_eq!(&block.title, code);
        }
    }

    #[test]
    fn title_prefers_depth_four_name(
        name in "[A-Za-z][A-Za-z ]{0,20}",
        code in prop::option::of("[0-9]{4}"),
        language in language(),
    ) {
        let key = format!("name_{}_d4", language.code());
        let mut source = json!({});
        source[key.as_str()] = json!(name.clone());
        if let Some(code) = &code {
            source["code"] = json!(code);
        }
        let response: SearchResponse = serde_json::from_value(json!({
            "total-hits": 1,
            "Ranked-objects": [{"_source": source}],
        }))
        .unwrap();
        let rendered = render_search(&response, language);
        prop_assert_eq!(&rendered.blocks[0].title, &name);
        prop_assert_ne!(rendered.blocks[0].title.as_str(), NO_NAME);
    }

    #[test]
    fn default_size_validation_matches_bounds(size in any::<u8>()) {
        let config = HsfinderConfig {
            default_size: size,
            ..HsfinderConfig::default()
        };
        prop_assert_eq!(config.validate().is_ok(), (1..=50).contains(&size));
    }

    #[test]
    fn out_of_range_alpha_is_rejected(alpha in 1.0001f64..10.0) {
        let config = HsfinderConfig {
            default_alpha: alpha,
            ..HsfinderConfig::default()
        };
        prop_assert!(config.validate().is_err());
    }
}

#[test]
fn config_file_is_loaded_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hsfinder.toml");
    std::fs::write(
        &path,
        "api_base_url = \"http://localhost:8000\"\ndefault_size = 25\n[timeouts]\nhealth_ms = 1000\n",
    )
    .unwrap();

    let config = HsfinderConfig::from_path(&path).unwrap();
    assert_eq!(config.base_url(), "http://localhost:8000");
    assert_eq!(config.default_size, 25);
    assert_eq!(config.timeouts.health_ms, 1000);
    assert!(config.validate().is_ok());
}
