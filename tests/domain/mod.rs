mod conversation_test;
mod outbound_request_test;
