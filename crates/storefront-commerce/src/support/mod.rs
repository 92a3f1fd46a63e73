//! Customer center: notices, FAQ, inquiries and the counselor chat mock.

mod board;
mod chat;

pub use board::{faqs, notices, Faq, Inquiry, Notice};
pub use chat::{ChatMessage, ChatSender, ChatSession, ChatStatus, CONNECT_DELAY, REPLY_DELAY};
