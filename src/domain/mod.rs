mod attachment;
mod conversation;
mod outbound;
mod provider_id;
mod reply;

pub use attachment::{DocumentText, ImageAttachment, MediaKind, SourceFile};
pub use conversation::{ConversationTurn, TurnRole};
pub use outbound::{EMPTY_TURN_PLACEHOLDER, OutboundRequest};
pub use provider_id::ProviderId;
pub use reply::ProviderReply;
