use super::*;
use commands::NavCommand;

// =============================================================
// op_for
// =============================================================

#[test]
fn each_command_maps_to_its_operation() {
    assert_eq!(op_for(NavCommand::CloseTab), TabOp::Close);
    assert_eq!(op_for(NavCommand::ReloadTab), TabOp::Reload);
    assert_eq!(op_for(NavCommand::GoBack), TabOp::Back);
    assert_eq!(op_for(NavCommand::GoForward), TabOp::Forward);
}

// =============================================================
// decode_op
// =============================================================

#[test]
fn decodes_each_recognized_action() {
    assert_eq!(decode_op(r#"{"action":"closeTab"}"#), Some(TabOp::Close));
    assert_eq!(decode_op(r#"{"action":"reloadTab"}"#), Some(TabOp::Reload));
    assert_eq!(decode_op(r#"{"action":"goBack"}"#), Some(TabOp::Back));
    assert_eq!(decode_op(r#"{"action":"goForward"}"#), Some(TabOp::Forward));
}

#[test]
fn malformed_json_is_ignored() {
    assert_eq!(decode_op(""), None);
    assert_eq!(decode_op("not json"), None);
    assert_eq!(decode_op(r#"{"action":}"#), None);
}

#[test]
fn unrecognized_action_names_are_ignored() {
    assert_eq!(decode_op(r#"{"action":"openTab"}"#), None);
    assert_eq!(decode_op(r#"{"action":"CloseTab"}"#), None);
    assert_eq!(decode_op(r#"{"action":42}"#), None);
}

#[test]
fn missing_action_field_is_ignored() {
    assert_eq!(decode_op("{}"), None);
    assert_eq!(decode_op("null"), None);
}

#[test]
fn extra_fields_are_tolerated() {
    assert_eq!(decode_op(r#"{"action":"goBack","from":"page"}"#), Some(TabOp::Back));
}
