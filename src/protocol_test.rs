use serde_json::{Value, json};

use super::*;

// --- Command vocabulary ---

#[test]
fn command_tags_round_trip() {
    let commands = [
        ControllerCommand::Attention,
        ControllerCommand::Config,
        ControllerCommand::EnqueuePrompt,
        ControllerCommand::AbortWorkflow,
    ];
    for command in commands {
        assert_eq!(ControllerCommand::from_tag(command.tag()), Some(command));
    }
}

#[test]
fn attention_uses_the_reserved_command_tag() {
    assert_eq!(ControllerCommand::Attention.tag(), "command");
}

#[test]
fn unknown_command_tag_is_none() {
    assert_eq!(ControllerCommand::from_tag("bogus_cmd"), None);
    assert_eq!(ControllerCommand::from_tag(""), None);
    assert_eq!(ControllerCommand::from_tag("ENQUEUE_PROMPT"), None);
}

#[test]
fn serde_wire_names_match_tags() {
    let value = serde_json::to_value(ControllerCommand::EnqueuePrompt).unwrap();
    assert_eq!(value, json!("enqueue_prompt"));
    let parsed: ControllerCommand = serde_json::from_value(json!("abort_workflow")).unwrap();
    assert_eq!(parsed, ControllerCommand::AbortWorkflow);
}

// --- Envelope decoding: malformed details ---

#[test]
fn absent_detail_is_an_error() {
    assert!(matches!(decode_detail(None), Err(Error::MissingPayload)));
}

#[test]
fn null_detail_is_an_error() {
    let detail = json!(null);
    assert!(matches!(decode_detail(Some(&detail)), Err(Error::MissingPayload)));
}

#[test]
fn non_object_detail_is_an_error() {
    let detail = json!("pict_cha");
    assert!(matches!(decode_detail(Some(&detail)), Err(Error::MissingPayload)));
    let detail = json!([1, 2, 3]);
    assert!(matches!(decode_detail(Some(&detail)), Err(Error::MissingPayload)));
}

#[test]
fn empty_mapping_decodes_to_nothing() {
    let detail = json!({});
    assert_eq!(decode_detail(Some(&detail)).unwrap(), Vec::new());
}

// --- Envelope decoding: entries ---

#[test]
fn picture_entry_decodes() {
    let detail = json!({ "pict_cha": "data:image/png;base64, AbCd==" });
    let payloads = decode_detail(Some(&detail)).unwrap();
    assert_eq!(
        payloads,
        vec![Payload::Picture(ImageSource::new("data:image/png;base64, AbCd=="))]
    );
}

#[test]
fn picture_entry_normalizes_bare_base64() {
    let detail = json!({ "pict_cha": "AbCd==" });
    let payloads = decode_detail(Some(&detail)).unwrap();
    assert_eq!(
        payloads,
        vec![Payload::Picture(ImageSource::new("data:image/png;base64, AbCd=="))]
    );
}

#[test]
fn command_entry_decodes() {
    let detail = json!({ "comfyui_command": "enqueue_prompt" });
    let payloads = decode_detail(Some(&detail)).unwrap();
    assert_eq!(payloads, vec![Payload::Command("enqueue_prompt".to_owned())]);
}

#[test]
fn unknown_tag_is_skipped() {
    let detail = json!({ "mystery": "value" });
    assert_eq!(decode_detail(Some(&detail)).unwrap(), Vec::new());
}

#[test]
fn unknown_tag_does_not_block_other_entries() {
    let detail = json!({
        "aaa_mystery": 17,
        "pict_cha": "AbCd==",
        "zzz_mystery": true,
    });
    let payloads = decode_detail(Some(&detail)).unwrap();
    assert_eq!(payloads.len(), 1);
    assert!(matches!(payloads[0], Payload::Picture(_)));
}

#[test]
fn non_string_picture_value_is_skipped() {
    let detail = json!({ "pict_cha": 42 });
    assert_eq!(decode_detail(Some(&detail)).unwrap(), Vec::new());
}

#[test]
fn non_string_command_value_is_skipped() {
    let detail = json!({ "comfyui_command": { "nested": true } });
    assert_eq!(decode_detail(Some(&detail)).unwrap(), Vec::new());
}

#[test]
fn both_tags_in_one_envelope_decode() {
    let detail = json!({
        "pict_cha": "AbCd==",
        "comfyui_command": "abort_workflow",
    });
    let payloads = decode_detail(Some(&detail)).unwrap();
    assert_eq!(payloads.len(), 2);
}

#[test]
fn detail_values_are_not_mutated() {
    let detail: Value = json!({ "pict_cha": "AbCd==" });
    let before = detail.clone();
    decode_detail(Some(&detail)).unwrap();
    assert_eq!(detail, before);
}
