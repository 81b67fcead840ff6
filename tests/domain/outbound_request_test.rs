use docrelay::domain::{
    ConversationTurn, DocumentText, ImageAttachment, OutboundRequest, TurnRole,
};

fn image(filename: &str) -> ImageAttachment {
    ImageAttachment {
        filename: filename.to_string(),
        mime_type: "image/png".to_string(),
        base64: "aGVsbG8=".to_string(),
    }
}

#[test]
fn given_history_with_blank_turns_when_building_then_blank_turns_dropped() {
    let history = vec![
        ConversationTurn::new(TurnRole::User, "first"),
        ConversationTurn::new(TurnRole::Assistant, "   "),
        ConversationTurn::new(TurnRole::User, "second"),
    ];

    let request = OutboundRequest::new(history, "prompt", Vec::new(), Vec::new());

    assert_eq!(request.history.len(), 2);
    assert_eq!(request.history[0].content, "first");
    assert_eq!(request.history[1].content, "second");
}

#[test]
fn given_padded_prompt_when_building_then_prompt_trimmed() {
    let request = OutboundRequest::new(Vec::new(), "  hello  ", Vec::new(), Vec::new());
    assert_eq!(request.prompt, "hello");
}

#[test]
fn given_only_history_when_checking_content_then_request_is_empty() {
    let history = vec![ConversationTurn::new(TurnRole::User, "earlier")];
    let request = OutboundRequest::new(history, "  ", Vec::new(), Vec::new());
    assert!(!request.has_content());
}

#[test]
fn given_only_image_when_checking_content_then_request_has_content() {
    let request = OutboundRequest::new(Vec::new(), "", vec![image("a.png")], Vec::new());
    assert!(request.has_content());
}

#[test]
fn given_documents_when_folding_then_each_has_filename_header() {
    let docs = vec![
        DocumentText::new("a.txt", "alpha body"),
        DocumentText::new("b.txt", "beta body"),
    ];
    let request = OutboundRequest::new(Vec::new(), "q", Vec::new(), docs);

    let folded = request.folded_documents().unwrap();
    assert!(folded.starts_with("Attached documents (extracted text):"));
    assert!(folded.contains("--- a.txt ---\nalpha body"));
    assert!(folded.contains("--- b.txt ---\nbeta body"));
}

#[test]
fn given_whitespace_only_document_when_folding_then_document_skipped() {
    let docs = vec![
        DocumentText::new("empty.txt", "   \n"),
        DocumentText::new("real.txt", "content"),
    ];
    let request = OutboundRequest::new(Vec::new(), "q", Vec::new(), docs);

    let folded = request.folded_documents().unwrap();
    assert!(!folded.contains("empty.txt"));
    assert!(folded.contains("real.txt"));
}

#[test]
fn given_no_documents_when_folding_then_returns_none() {
    let request = OutboundRequest::new(Vec::new(), "q", Vec::new(), Vec::new());
    assert!(request.folded_documents().is_none());
}

#[test]
fn given_prompt_and_documents_when_listing_text_blocks_then_prompt_comes_first() {
    let docs = vec![DocumentText::new("a.txt", "doc body")];
    let request = OutboundRequest::new(Vec::new(), "the question", Vec::new(), docs);

    let blocks = request.user_text_blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], "the question");
    assert!(blocks[1].contains("doc body"));
}

#[test]
fn given_documents_without_prompt_when_listing_text_blocks_then_single_block() {
    let docs = vec![DocumentText::new("a.txt", "doc body")];
    let request = OutboundRequest::new(Vec::new(), "  ", Vec::new(), docs);

    let blocks = request.user_text_blocks();
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("doc body"));
}
