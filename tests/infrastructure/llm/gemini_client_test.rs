use serde_json::json;

use docrelay::domain::{
    ConversationTurn, DocumentText, ImageAttachment, OutboundRequest, TurnRole,
};
use docrelay::infrastructure::llm::{build_contents, Part};

fn image() -> ImageAttachment {
    ImageAttachment {
        filename: "chart.png".to_string(),
        mime_type: "image/png".to_string(),
        base64: "QUJD".to_string(),
    }
}

#[test]
fn given_history_when_building_contents_then_assistant_maps_to_model_role() {
    let history = vec![
        ConversationTurn::new(TurnRole::User, "hi"),
        ConversationTurn::new(TurnRole::Assistant, "hello"),
    ];
    let request = OutboundRequest::new(history, "next", Vec::new(), Vec::new());

    let contents = build_contents(&request);

    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0].role.as_deref(), Some("user"));
    assert_eq!(contents[1].role.as_deref(), Some("model"));
    assert_eq!(contents[2].role.as_deref(), Some("user"));
}

#[test]
fn given_prompt_and_image_when_building_contents_then_text_part_precedes_inline_data() {
    let request = OutboundRequest::new(Vec::new(), "describe", vec![image()], Vec::new());

    let contents = build_contents(&request);
    let parts = &contents.last().unwrap().parts;

    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], Part::Text { text } if text == "describe"));
    match &parts[1] {
        Part::InlineData { inline_data } => {
            assert_eq!(inline_data.mime_type, "image/png");
            assert_eq!(inline_data.data, "QUJD");
        }
        other => panic!("expected inline data part, got {:?}", other),
    }
}

#[test]
fn given_documents_when_building_contents_then_folded_text_part_present() {
    let docs = vec![DocumentText::new("a.txt", "alpha")];
    let request = OutboundRequest::new(Vec::new(), "summarize", Vec::new(), docs);

    let contents = build_contents(&request);
    let parts = &contents.last().unwrap().parts;

    assert_eq!(parts.len(), 2);
    assert!(
        matches!(&parts[1], Part::Text { text } if text.contains("--- a.txt ---"))
    );
}

#[test]
fn given_empty_final_turn_when_building_contents_then_placeholder_part_emitted() {
    let history = vec![ConversationTurn::new(TurnRole::User, "earlier")];
    let request = OutboundRequest::new(history, "", Vec::new(), Vec::new());

    let contents = build_contents(&request);
    let parts = &contents.last().unwrap().parts;

    assert_eq!(parts.len(), 1);
    assert!(matches!(&parts[0], Part::Text { text } if text == "(no content)"));
}

#[test]
fn given_inline_data_part_when_serializing_then_camel_case_wire_format() {
    let request = OutboundRequest::new(Vec::new(), "", vec![image()], Vec::new());

    let contents = build_contents(&request);
    let serialized = serde_json::to_value(contents.last().unwrap()).unwrap();

    assert_eq!(
        serialized["parts"][0],
        json!({ "inlineData": { "mimeType": "image/png", "data": "QUJD" } })
    );
}

#[test]
fn given_response_part_with_unknown_shape_when_deserializing_then_absorbed_as_other() {
    let part: Part =
        serde_json::from_value(json!({ "functionCall": { "name": "f" } })).unwrap();
    assert!(matches!(part, Part::Other(_)));
}
