use summarist::ui::core::actions::{Action, DialogType, FocusPane};

#[test]
fn test_action_enum_exists() {
    // Test that Action enum is accessible and has a valid size
    let action_size = std::mem::size_of::<Action>();
    assert!(action_size > 0, "Action enum should have a non-zero size");
}

#[test]
fn test_completion_actions_carry_payloads() {
    let action = Action::ModelsLoaded(vec!["llama3".to_string()]);
    match action {
        Action::ModelsLoaded(models) => assert_eq!(models, vec!["llama3"]),
        _ => unreachable!(),
    }

    let action = Action::SummarizeFailed("boom".to_string());
    assert!(matches!(action, Action::SummarizeFailed(m) if m == "boom"));
}

#[test]
fn test_dialog_types_are_cloneable() {
    let dialog = DialogType::Error("something broke".to_string());
    let cloned = dialog.clone();
    assert!(matches!(cloned, DialogType::Error(m) if m == "something broke"));
}

#[test]
fn test_default_focus_is_input() {
    assert_eq!(FocusPane::default(), FocusPane::Input);
}
