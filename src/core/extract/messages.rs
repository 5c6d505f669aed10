//! Building the deduplicated message set from call sites.

use super::CallSite;
use crate::core::{Message, MessageKey, catalog::MessageSet};

/// Marker function name used when none is configured.
pub const DEFAULT_MARKER: &str = "tr";

/// Accumulates messages from marker call sites.
///
/// The first literal argument is the source text; every later literal
/// argument, in order, is a context entry. Non-literal arguments after the
/// first are dropped from the context. Each call site of a message adds one
/// location, in the order call sites are fed in.
#[derive(Debug)]
pub struct MessageExtractor<'a> {
    marker: &'a str,
    messages: MessageSet,
    call_count: usize,
}

impl<'a> MessageExtractor<'a> {
    pub fn new(marker: &'a str) -> Self {
        Self {
            marker,
            messages: MessageSet::new(),
            call_count: 0,
        }
    }

    /// Record a call site. Returns false if it is not a marker call with a
    /// literal first argument.
    pub fn add(&mut self, call: CallSite) -> bool {
        if call.callee != self.marker {
            return false;
        }

        let mut args = call.args.into_iter();
        let Some(Some(source)) = args.next() else {
            return false;
        };
        let context: Vec<String> = args.flatten().collect();

        let key = MessageKey::new(source.as_str(), &context);
        self.messages
            .entry(key)
            .or_insert_with(|| Message::new(source, context))
            .locations
            .push(call.location);
        self.call_count += 1;

        true
    }

    /// Number of marker call sites recorded so far.
    pub fn call_count(&self) -> usize {
        self.call_count
    }

    pub fn finish(self) -> MessageSet {
        self.messages
    }
}
