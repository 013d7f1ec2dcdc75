use pretty_assertions::assert_eq;
use relink_model::{LayoutDefinition, ModelError, RuleSet};

fn layout_json() -> String {
    serde_json::json!({
        "devices": [
            {
                "id": "default",
                "renderings": [
                    { "id": "hero", "datasource": "/site/home/hero" },
                    { "id": "body", "datasource": "11111111-1111-1111-1111-111111111111" }
                ]
            },
            {
                "id": "print",
                "renderings": [
                    { "id": "hero" }
                ]
            }
        ]
    })
    .to_string()
}

// ── LayoutDefinition::parse ──────────────────────────────────────

#[test]
fn parses_devices_and_renderings() {
    let layout = LayoutDefinition::parse(&layout_json()).unwrap();
    assert_eq!(layout.devices.len(), 2);
    assert_eq!(layout.devices[0].renderings.len(), 2);
    assert_eq!(
        layout.devices[0].renderings[0].datasource.as_deref(),
        Some("/site/home/hero")
    );
}

#[test]
fn missing_optional_parts_default() {
    let layout = LayoutDefinition::parse(r#"{"devices":[{}]}"#).unwrap();
    assert_eq!(layout.devices.len(), 1);
    assert!(layout.devices[0].renderings.is_empty());
    assert!(layout.devices[0].id.is_none());
}

#[test]
fn empty_document_has_no_devices() {
    let layout = LayoutDefinition::parse("{}").unwrap();
    assert!(layout.devices.is_empty());
}

#[test]
fn empty_value_is_rejected() {
    assert!(matches!(
        LayoutDefinition::parse(""),
        Err(ModelError::EmptyValue)
    ));
    assert!(matches!(
        LayoutDefinition::parse("   \n"),
        Err(ModelError::EmptyValue)
    ));
}

#[test]
fn malformed_value_is_rejected() {
    assert!(matches!(
        LayoutDefinition::parse("<layout/>"),
        Err(ModelError::Malformed(_))
    ));
    assert!(matches!(
        LayoutDefinition::parse("{\"devices\": ["),
        Err(ModelError::Malformed(_))
    ));
}

#[test]
fn unknown_keys_are_ignored() {
    let layout = LayoutDefinition::parse(
        r#"{"devices":[{"id":"d","layout":"extra","renderings":[]}],"version":3}"#,
    )
    .unwrap();
    assert_eq!(layout.devices[0].id.as_deref(), Some("d"));
}

// ── RuleSet::parse ───────────────────────────────────────────────

#[test]
fn collects_set_datasource_actions_in_rule_order() {
    let raw = serde_json::json!({
        "rules": [
            {
                "actions": [
                    { "action": "SetDataSource", "dataSource": "/site/home/promo" },
                    { "action": "HideRendering" }
                ]
            },
            {
                "actions": [
                    { "action": "SetDataSource", "dataSource": "/site/home/alt" }
                ]
            }
        ]
    })
    .to_string();

    let rules = RuleSet::parse(&raw).unwrap();
    let datasources: Vec<&str> = rules.datasource_actions().collect();
    assert_eq!(datasources, vec!["/site/home/promo", "/site/home/alt"]);
}

#[test]
fn set_datasource_without_target_is_skipped() {
    let raw = r#"{"rules":[{"actions":[{"action":"SetDataSource"}]}]}"#;
    let rules = RuleSet::parse(raw).unwrap();
    assert_eq!(rules.datasource_actions().count(), 0);
}

#[test]
fn other_actions_are_carried_but_not_reported() {
    let raw = r#"{"rules":[{"actions":[{"action":"SetParameters","dataSource":"/x"}]}]}"#;
    let rules = RuleSet::parse(raw).unwrap();
    assert_eq!(rules.rules[0].actions.len(), 1);
    assert_eq!(rules.datasource_actions().count(), 0);
}

#[test]
fn empty_rule_set_value_is_rejected() {
    assert!(matches!(RuleSet::parse(" "), Err(ModelError::EmptyValue)));
}
