use super::*;
use crate::ink::model::Point;

#[test]
fn pointer_types_map_to_hints() {
    assert_eq!(InputType::from_pointer_type("pen"), Some(InputType::Pen));
    assert_eq!(InputType::from_pointer_type("touch"), Some(InputType::Touch));
    assert_eq!(InputType::from_pointer_type("mouse"), Some(InputType::Mouse));
    assert_eq!(InputType::from_pointer_type("eraser"), None);
}

#[test]
fn hints_serialize_camel_case() {
    let hints = RecognitionHints {
        recognition_type: Some("text".to_string()),
        input_type: Some(InputType::Pen),
        text_context: Some("abc".to_string()),
        alternatives: 0,
    };
    let json = serde_json::to_value(&hints).unwrap();
    assert_eq!(json["recognitionType"], "text");
    assert_eq!(json["inputType"], "pen");
    assert_eq!(json["textContext"], "abc");
}

#[test]
fn scripted_session_predicts_only_with_ink() {
    let mut recognizer = ScriptedRecognizer::new(vec![Prediction::text_only("hello")]);
    let mut session = recognizer
        .start_drawing(&RecognitionHints::default())
        .unwrap();
    assert!(session.get_prediction().unwrap().is_empty());

    session.add_stroke(Stroke::from_points(vec![Point::new(1.0, 1.0, 0.0)]));
    let predictions = session.get_prediction().unwrap();
    assert_eq!(predictions[0].text, "hello");
    assert_eq!(session.drawing().strokes.len(), 1);

    session.clear();
    assert!(session.drawing().strokes.is_empty());
}
