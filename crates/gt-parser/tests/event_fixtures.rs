use std::path::PathBuf;

use gt_core::error::{EVENT_NODE_MISSING, XML_PARSE_ERROR};
use gt_parser::{parse_event_file, EventOption};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn forest_fixture_parses_every_event() {
    let _ = pretty_env_logger::try_init();

    let events = parse_event_file(fixture("forest.xml")).expect("forest fixture should parse");
    assert_eq!(
        events.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["forest_entrance", "forest_mire", "forest_path"]
    );

    let entrance = &events["forest_entrance"];
    assert_eq!(entrance.name, "forest_entrance");
    assert_eq!(
        entrance.texts,
        vec![
            "The trees close in behind you.",
            "",
            "",
            "A sign reads: \"Beware <the> mire\".",
        ]
    );
    assert_eq!(
        entrance.options,
        vec![
            EventOption {
                text: "Follow the path".to_string(),
                hidden_text: None,
                destinations: vec!["forest_path".to_string(), "forest_mire".to_string()],
            },
            EventOption {
                text: "Read the sign again".to_string(),
                hidden_text: Some(String::new()),
                destinations: Vec::new(),
            },
            EventOption {
                text: "Turn back".to_string(),
                hidden_text: Some("You feel watched.".to_string()),
                destinations: Vec::new(),
            },
        ]
    );
}

#[test]
fn forest_fixture_keeps_the_last_duplicate() {
    let events = parse_event_file(fixture("forest.xml")).expect("forest fixture should parse");
    assert_eq!(
        events["forest_path"].texts,
        vec!["Birdsong, and something larger."]
    );

    let mire = &events["forest_mire"];
    assert!(mire.texts.is_empty());
    assert!(mire.options.is_empty());
}

#[test]
fn forest_fixture_serializes_to_json() {
    let events = parse_event_file(fixture("forest.xml")).expect("forest fixture should parse");
    let json = serde_json::to_value(&events).expect("events should serialize");
    assert_eq!(
        json["forest_entrance"]["options"][0]["hiddenText"],
        serde_json::Value::Null
    );
    assert_eq!(json["forest_entrance"]["options"][1]["hiddenText"], "");
    assert_eq!(json["forest_mire"]["texts"], serde_json::json!([]));
}

#[test]
fn malformed_fixture_fails_with_xml_error() {
    let path = fixture("malformed.xml");
    let error = parse_event_file(&path).expect_err("malformed fixture should fail");
    assert_eq!(error.code, XML_PARSE_ERROR);
    assert!(error.message.contains("malformed.xml"));
}

#[test]
fn missing_option_text_fixture_fails_with_node_error() {
    let error = parse_event_file(fixture("missing_option_text.xml"))
        .expect_err("option without label should fail");
    assert_eq!(error.code, EVENT_NODE_MISSING);
    assert_eq!(error.span.expect("span").start.line, 5);
}
