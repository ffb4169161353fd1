// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Session-local conversation with deferred assistant replies.
//!
//! Replies are queued on a logical clock owned by the session. A reply is
//! computed when the clock passes its due time, against the ledger handed to
//! [`ChatSession::advance`] at that moment, so expenses added while a reply is
//! pending are reflected in it. History is never persisted.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::debug;

use crate::interpreter::respond;
use crate::models::{ChatTurn, ExpenseRecord};

pub const WELCOME: &str =
    "System Online. Local Storage Active. I can track your spending locally.";
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone)]
struct PendingReply {
    query: String,
    due: Duration,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    history: Vec<ChatTurn>,
    pending: VecDeque<PendingReply>,
    clock: Duration,
    reply_delay: Duration,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ChatSession {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            history: vec![ChatTurn::assistant(WELCOME)],
            pending: VecDeque::new(),
            clock: Duration::ZERO,
            reply_delay,
        }
    }

    /// Append a user turn. Empty text is ignored and returns `false`.
    pub fn append_user_turn(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.history.push(ChatTurn::user(text));
        true
    }

    /// Queue a reply to `query`, due one reply delay from now.
    pub fn begin_assistant_reply(&mut self, query: impl Into<String>) {
        let due = self.clock + self.reply_delay;
        let query = query.into();
        debug!("Reply to '{}' scheduled at {:?}", query, due);
        self.pending.push_back(PendingReply { query, due });
    }

    /// User turn plus scheduled reply; no-op for empty text.
    pub fn submit(&mut self, text: &str) -> bool {
        if !self.append_user_turn(text) {
            return false;
        }
        self.begin_assistant_reply(text);
        true
    }

    /// Move the clock forward and complete every reply now due, in FIFO order.
    /// Returns how many replies were appended.
    pub fn advance(&mut self, elapsed: Duration, ledger: &[ExpenseRecord]) -> usize {
        self.clock += elapsed;
        let mut completed = 0;
        while self.pending.front().is_some_and(|p| p.due <= self.clock) {
            if let Some(p) = self.pending.pop_front() {
                self.history.push(ChatTurn::assistant(respond(&p.query, ledger)));
                completed += 1;
            }
        }
        completed
    }

    /// Run the clock until nothing is pending.
    pub fn flush(&mut self, ledger: &[ExpenseRecord]) -> usize {
        // Due times never decrease, so the back of the queue is the latest.
        let Some(last_due) = self.pending.back().map(|p| p.due) else {
            return 0;
        };
        self.advance(last_due.saturating_sub(self.clock), ledger)
    }

    pub fn time_until_next_reply(&self) -> Option<Duration> {
        self.pending
            .front()
            .map(|p| p.due.saturating_sub(self.clock))
    }

    /// True while any reply is still pending.
    pub fn is_awaiting_response(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn last_turn(&self) -> Option<&ChatTurn> {
        self.history.last()
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }
}
