use super::*;

#[test]
fn slider_event_becomes_channel_input() {
    let intent = Intent::from_ui_event(&UiEvent::slider(Channel::Blue, "128")).expect("intent");
    assert_eq!(
        intent,
        Intent::ChannelInput {
            channel: Channel::Blue,
            value: 128
        }
    );
    assert_eq!(intent.suppresses_default(), None);
}

#[test]
fn slider_value_outside_byte_range_is_rejected() {
    let err = Intent::from_ui_event(&UiEvent::slider(Channel::Red, "256")).expect_err("range");
    assert_eq!(err, IntentError::InvalidValue("256".into()));

    let err = Intent::from_ui_event(&UiEvent::slider(Channel::Red, "-1")).expect_err("range");
    assert_eq!(err, IntentError::InvalidValue("-1".into()));
}

#[test]
fn slider_event_without_scope_is_rejected() {
    let mut event = UiEvent::slider(Channel::Green, "3");
    event.scope = None;
    assert_eq!(
        Intent::from_ui_event(&event).expect_err("scope"),
        IntentError::MissingScope
    );
}

#[test]
fn delete_reads_color_id_attribute_and_suppresses_default() {
    let intent = Intent::from_ui_event(&UiEvent::delete("42")).expect("intent");
    assert_eq!(intent, Intent::Delete(ColorId(42)));
    assert_eq!(intent.suppresses_default(), Some(Selector::Delete));

    let err = Intent::from_ui_event(&UiEvent::delete("forty-two")).expect_err("id");
    assert_eq!(err, IntentError::InvalidColorId("forty-two".into()));

    let mut event = UiEvent::delete("1");
    event.color_id = None;
    assert_eq!(
        Intent::from_ui_event(&event).expect_err("id"),
        IntentError::MissingColorId
    );
}

#[test]
fn save_and_cancel_map_directly() {
    assert_eq!(Intent::from_ui_event(&UiEvent::save()), Ok(Intent::Save));
    let cancel = Intent::from_ui_event(&UiEvent::cancel()).expect("intent");
    assert_eq!(cancel, Intent::Cancel);
    assert_eq!(cancel.suppresses_default(), Some(Selector::Cancel));
}

#[test]
fn unknown_selector_is_reported() {
    let event = UiEvent {
        selector: ".reset".into(),
        scope: None,
        value: None,
        color_id: None,
    };
    assert_eq!(
        Intent::from_ui_event(&event).expect_err("selector"),
        IntentError::UnknownSelector(".reset".into())
    );
}
