use contracts::shared::endpoints::ResourceKey;
use std::collections::HashMap;

/// Identifies one outbound request for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub key: ResourceKey,
    pub seq: u64,
}

/// Per-resource sequence numbers. Only the most recently issued ticket of a
/// key may write its response into the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestTracker {
    latest: HashMap<ResourceKey, u64>,
}

impl RequestTracker {
    pub fn issue(&mut self, key: ResourceKey) -> RequestTicket {
        let seq = self.latest.entry(key).or_insert(0);
        *seq += 1;
        RequestTicket { key, seq: *seq }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get(&ticket.key) == Some(&ticket.seq)
    }

    /// Makes every ticket issued so far for `key` stale
    pub fn invalidate(&mut self, key: ResourceKey) {
        *self.latest.entry(key).or_insert(0) += 1;
    }
}
