use stacker_core::models::{GroupSpec, LoraEntry, Preset, StackData};

#[test]
fn parses_ui_payload() {
    let json = r#"{
      "groups": [ { "id": 1, "index": 1, "max_model": 1.0, "max_clip": 0.8 } ],
      "loras": [
        { "id": 1, "group_id": 1, "name": "a.safetensors", "preset": "Character",
          "lock_model": false, "locked_model_value": 0.0,
          "lock_clip": true, "locked_clip_value": 0.5 },
        { "id": 2, "group_id": null, "name": "b.safetensors", "preset": "Fix Hands",
          "model_strength": 0.8, "clip_strength": 0.7,
          "random_model": true, "min_model": 0.5, "max_model": 1.0,
          "random_clip": false, "min_clip": 0.0, "max_clip": 1.0 }
      ]
    }"#;
    let data = StackData::from_json(json).unwrap();
    assert_eq!(data.groups.len(), 1);
    assert_eq!(data.groups[0].max_clip, Some(0.8));

    let grouped = &data.loras[0];
    assert_eq!(grouped.group_id, Some(1));
    assert!(grouped.lock_clip);
    assert_eq!(grouped.locked_clip_value, 0.5);
    assert_eq!(grouped.preset_kind(), Preset::Character);

    let solo = &data.loras[1];
    assert_eq!(solo.group_id, None);
    assert_eq!(solo.model_strength, Some(0.8));
    assert!(solo.random_model);
    assert_eq!(solo.preset_kind(), Preset::FixHands);
}

#[test]
fn missing_fields_take_ui_defaults() {
    let data = StackData::from_json(r#"{ "loras": [ {} ] }"#).unwrap();
    let entry = &data.loras[0];
    assert_eq!(entry, &LoraEntry::default());
    assert_eq!(entry.name, "None");
    assert_eq!(entry.preset, "Full");
    assert_eq!(entry.max_model, 1.0);
    assert_eq!(entry.min_clip, 0.0);
    assert!(!entry.is_active());
}

#[test]
fn empty_object_is_empty_stack() {
    assert_eq!(StackData::from_json("{}").unwrap(), StackData::default());
}

#[test]
fn malformed_json_is_error() {
    assert!(StackData::from_json("{\"groups\": [").is_err());
}

#[test]
fn membership_queries() {
    let mut a = LoraEntry::named("a");
    a.group_id = Some(1);
    let b = LoraEntry::named("b");
    let mut c = LoraEntry::named("c");
    c.group_id = Some(1);
    let mut d = LoraEntry::named("d");
    d.group_id = Some(9);

    let data = StackData {
        groups: vec![GroupSpec {
            id: Some(1),
            ..Default::default()
        }],
        loras: vec![a, b, c, d],
    };

    let members: Vec<&str> = data.members_of(1).iter().map(|l| l.name.as_str()).collect();
    assert_eq!(members, vec!["a", "c"]);
    let ungrouped: Vec<&str> = data.ungrouped().map(|l| l.name.as_str()).collect();
    assert_eq!(ungrouped, vec!["b"]);
    let orphans: Vec<&str> = data.orphans().map(|l| l.name.as_str()).collect();
    assert_eq!(orphans, vec!["d"]);
}

#[test]
fn active_names() {
    assert!(LoraEntry::named("x.safetensors").is_active());
    assert!(!LoraEntry::named("None").is_active());
    assert!(!LoraEntry::named("").is_active());
}

#[test]
fn group_label_falls_back() {
    let indexed = GroupSpec {
        index: Some(3),
        ..Default::default()
    };
    assert_eq!(indexed.label(), "3");
    assert_eq!(GroupSpec::default().label(), "N/A");
}

#[test]
fn preset_labels_round_trip() {
    for preset in Preset::ALL {
        assert_eq!(Preset::from_label(preset.label()), preset);
        assert_eq!(preset.to_string(), preset.label());
    }
    assert_eq!(Preset::from_label("Unheard Of"), Preset::Full);
}

#[test]
fn preset_block_ranges() {
    assert_eq!(Preset::Full.block_range(), None);
    assert_eq!(Preset::Character.block_range(), Some((4, 11)));
    assert_eq!(Preset::Style.block_range(), Some((0, 5)));
    assert_eq!(Preset::Concept.block_range(), Some((6, 11)));
    assert_eq!(Preset::FixHands.block_range(), Some((8, 11)));
}

#[test]
fn preset_serde_uses_ui_labels() {
    let json = serde_json::to_string(&Preset::FixHands).unwrap();
    assert_eq!(json, "\"Fix Hands\"");
    let back: Preset = serde_json::from_str("\"Concept\"").unwrap();
    assert_eq!(back, Preset::Concept);
}
