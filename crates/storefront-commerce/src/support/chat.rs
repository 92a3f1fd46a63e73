//! Customer support chat with simulated counselor replies.
//!
//! Nothing runs in the background: connecting and replying are scheduled
//! events that [`ChatSession::poll`] delivers once their time has come.
//! A reply already in flight is delivered even after the chat ends; dropping
//! the session drops whatever is still pending.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Delay between starting a chat and the counselor connecting.
pub const CONNECT_DELAY: Duration = Duration::from_secs(2);
/// Delay before the counselor answers a message.
pub const REPLY_DELAY: Duration = Duration::from_secs(1);

const CONNECTED_TEXT: &str = "A counselor has joined the chat. How can we help you?";
const REPLY_TEXT: &str = "Thanks for reaching out. Let me check that for you.";
const ENDED_TEXT: &str = "The chat has ended.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChatSender {
    System,
    User,
    Counselor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ChatStatus {
    #[default]
    Idle,
    Connecting,
    Connected,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

impl ChatMessage {
    fn new(sender: ChatSender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Connect,
    Reply,
}

/// A support chat transcript plus its scheduled events.
#[derive(Debug, Default)]
pub struct ChatSession {
    status: ChatStatus,
    messages: Vec<ChatMessage>,
    pending: Vec<(Instant, Pending)>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ChatStatus {
        self.status
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of events still waiting to be delivered.
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Request a counselor. Ignored unless the chat is idle or has ended.
    pub fn start(&mut self, now: Instant) -> bool {
        if !matches!(self.status, ChatStatus::Idle | ChatStatus::Ended) {
            return false;
        }
        self.status = ChatStatus::Connecting;
        self.schedule(now + CONNECT_DELAY, Pending::Connect);
        tracing::debug!("support chat connecting");
        true
    }

    /// Send a message to the counselor.
    ///
    /// The text is trimmed; blank messages and messages sent while not
    /// connected are ignored. Returns whether the message was sent.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        let text = text.trim();
        if text.is_empty() || self.status != ChatStatus::Connected {
            return false;
        }
        self.messages.push(ChatMessage::new(ChatSender::User, text));
        self.schedule(now + REPLY_DELAY, Pending::Reply);
        true
    }

    /// Deliver every event due at `now`, in schedule order. Returns how many
    /// messages were added.
    pub fn poll(&mut self, now: Instant) -> usize {
        let due = self.pending.iter().take_while(|(at, _)| *at <= now).count();
        let delivered: Vec<Pending> = self.pending.drain(..due).map(|(_, e)| e).collect();
        for event in &delivered {
            match event {
                Pending::Connect => {
                    self.status = ChatStatus::Connected;
                    self.messages
                        .push(ChatMessage::new(ChatSender::System, CONNECTED_TEXT));
                }
                Pending::Reply => {
                    self.messages
                        .push(ChatMessage::new(ChatSender::Counselor, REPLY_TEXT));
                }
            }
        }
        delivered.len()
    }

    /// End the chat. A counselor still connecting never joins; replies
    /// already scheduled still arrive.
    pub fn disconnect(&mut self) {
        if self.status == ChatStatus::Idle || self.status == ChatStatus::Ended {
            return;
        }
        self.pending.retain(|(_, event)| *event != Pending::Connect);
        self.status = ChatStatus::Ended;
        self.messages
            .push(ChatMessage::new(ChatSender::System, ENDED_TEXT));
        tracing::debug!(messages = self.messages.len(), "support chat ended");
    }

    fn schedule(&mut self, at: Instant, event: Pending) {
        // Keep the queue sorted; equal times stay in insertion order.
        let pos = self.pending.partition_point(|(t, _)| *t <= at);
        self.pending.insert(pos, (at, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(t0: Instant) -> ChatSession {
        let mut chat = ChatSession::new();
        chat.start(t0);
        chat.poll(t0 + CONNECT_DELAY);
        chat
    }

    #[test]
    fn test_connects_after_delay() {
        let t0 = Instant::now();
        let mut chat = ChatSession::new();
        assert!(chat.start(t0));
        assert_eq!(chat.status(), ChatStatus::Connecting);
        assert_eq!(chat.poll(t0 + Duration::from_millis(1999)), 0);
        assert_eq!(chat.poll(t0 + CONNECT_DELAY), 1);
        assert_eq!(chat.status(), ChatStatus::Connected);
        assert_eq!(chat.messages()[0].sender, ChatSender::System);
    }

    #[test]
    fn test_send_requires_connection() {
        let t0 = Instant::now();
        let mut chat = ChatSession::new();
        assert!(!chat.send("hello", t0));
        chat.start(t0);
        assert!(!chat.send("hello", t0));
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn test_reply_after_delay() {
        let t0 = Instant::now();
        let mut chat = connected(t0);
        let t1 = t0 + CONNECT_DELAY;
        assert!(chat.send("  where is my order?  ", t1));
        assert!(!chat.send("   ", t1));
        assert_eq!(chat.messages()[1].text, "where is my order?");

        assert_eq!(chat.poll(t1 + Duration::from_millis(500)), 0);
        assert_eq!(chat.poll(t1 + REPLY_DELAY), 1);
        assert_eq!(chat.messages()[2].sender, ChatSender::Counselor);
    }

    #[test]
    fn test_reply_in_flight_survives_disconnect() {
        let t0 = Instant::now();
        let mut chat = connected(t0);
        let t1 = t0 + CONNECT_DELAY;
        chat.send("hi", t1);
        assert_eq!(chat.pending_events(), 1);

        chat.disconnect();
        assert_eq!(chat.status(), ChatStatus::Ended);
        assert_eq!(chat.pending_events(), 1);
        assert_eq!(chat.messages().last().unwrap().text, ENDED_TEXT);

        assert_eq!(chat.poll(t1 + REPLY_DELAY), 1);
        assert_eq!(chat.status(), ChatStatus::Ended);
        assert_eq!(chat.messages().last().unwrap().sender, ChatSender::Counselor);
        assert!(!chat.send("still there?", t1 + REPLY_DELAY));
    }

    #[test]
    fn test_disconnect_while_connecting_cancels_connect() {
        let t0 = Instant::now();
        let mut chat = ChatSession::new();
        chat.start(t0);
        chat.disconnect();
        assert_eq!(chat.pending_events(), 0);
        assert_eq!(chat.poll(t0 + CONNECT_DELAY), 0);
        assert_eq!(chat.status(), ChatStatus::Ended);
    }

    #[test]
    fn test_replies_delivered_in_order() {
        let t0 = Instant::now();
        let mut chat = connected(t0);
        let t1 = t0 + CONNECT_DELAY;
        chat.send("one", t1);
        chat.send("two", t1 + Duration::from_millis(100));
        assert_eq!(chat.poll(t1 + Duration::from_secs(5)), 2);
        let senders: Vec<ChatSender> = chat.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![
                ChatSender::System,
                ChatSender::User,
                ChatSender::User,
                ChatSender::Counselor,
                ChatSender::Counselor,
            ]
        );
    }
}
