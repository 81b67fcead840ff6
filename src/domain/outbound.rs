use super::{ConversationTurn, DocumentText, ImageAttachment};

/// Text substituted when folding would otherwise produce a user turn with
/// zero content blocks; providers reject empty turns outright.
pub const EMPTY_TURN_PLACEHOLDER: &str = "(no content)";

const DOCUMENTS_PREAMBLE: &str = "Attached documents (extracted text):";

/// The single provider-agnostic request shape both backends consume.
/// Rebuilt from scratch on every call, never persisted.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub history: Vec<ConversationTurn>,
    pub prompt: String,
    pub images: Vec<ImageAttachment>,
    pub document_texts: Vec<DocumentText>,
}

impl OutboundRequest {
    /// Normalizes the caller's input: the prompt is trimmed and history
    /// turns with empty content are dropped here, before any backend sees
    /// them.
    pub fn new(
        history: Vec<ConversationTurn>,
        prompt: &str,
        images: Vec<ImageAttachment>,
        document_texts: Vec<DocumentText>,
    ) -> Self {
        Self {
            history: history.into_iter().filter(|t| !t.is_empty()).collect(),
            prompt: prompt.trim().to_string(),
            images,
            document_texts,
        }
    }

    /// A request with no prompt and no attachments has nothing to send.
    /// History alone does not count as content.
    pub fn has_content(&self) -> bool {
        !self.prompt.is_empty() || !self.images.is_empty() || !self.document_texts.is_empty()
    }

    /// Folds all document texts into one synthetic block, each document
    /// delimited by a header line carrying its filename. Returns `None`
    /// when there are no documents.
    pub fn folded_documents(&self) -> Option<String> {
        if self.document_texts.is_empty() {
            return None;
        }
        let mut combined = String::from(DOCUMENTS_PREAMBLE);
        combined.push('\n');
        for doc in &self.document_texts {
            let block = doc.text.trim();
            if block.is_empty() {
                continue;
            }
            combined.push_str(&format!("--- {} ---\n{}\n", doc.filename, block));
        }
        Some(combined)
    }

    /// The text blocks of the final user turn, in transmission order:
    /// free-text prompt first, folded documents after it. Instruction-first
    /// ordering is deliberate; documents never precede the prompt.
    pub fn user_text_blocks(&self) -> Vec<String> {
        let mut blocks = Vec::new();
        if !self.prompt.is_empty() {
            blocks.push(self.prompt.clone());
        }
        if let Some(docs) = self.folded_documents() {
            blocks.push(docs);
        }
        blocks
    }
}
