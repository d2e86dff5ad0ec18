//! Ephemeral online-user tracking.
//!
//! Presence lives only in memory and only changes when a client announces
//! itself online or offline. A dropped connection does not remove its user;
//! clients are expected to re-announce on reconnect.

use std::collections::HashSet;

use tokio::sync::RwLock;

/// Set of usernames currently marked online.
pub struct PresenceRegistry {
    online: RwLock<HashSet<String>>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self {
            online: RwLock::new(HashSet::new()),
        }
    }

    /// Mark a user online and return the updated sorted roster.
    ///
    /// Marking an already-online user is a no-op apart from the snapshot.
    pub async fn set_online(&self, username: &str) -> Vec<String> {
        let mut online = self.online.write().await;
        online.insert(username.to_string());
        sorted(&online)
    }

    /// Mark a user offline and return the updated sorted roster.
    pub async fn set_offline(&self, username: &str) -> Vec<String> {
        let mut online = self.online.write().await;
        online.remove(username);
        sorted(&online)
    }

    /// Current sorted roster without mutating anything.
    pub async fn snapshot(&self) -> Vec<String> {
        sorted(&*self.online.read().await)
    }
}

impl Default for PresenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted(online: &HashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = online.iter().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn roster_is_sorted_and_deduplicated() {
        let presence = PresenceRegistry::new();
        presence.set_online("carol").await;
        presence.set_online("alice").await;
        let roster = presence.set_online("alice").await;
        assert_eq!(roster, vec!["alice", "carol"]);
    }

    #[tokio::test]
    async fn offline_removes_only_named_user() {
        let presence = PresenceRegistry::new();
        presence.set_online("alice").await;
        presence.set_online("bob").await;
        let roster = presence.set_offline("alice").await;
        assert_eq!(roster, vec!["bob"]);
        // Removing an unknown user leaves the roster untouched.
        let roster = presence.set_offline("nobody").await;
        assert_eq!(roster, vec!["bob"]);
    }

    #[tokio::test]
    async fn snapshot_does_not_mutate() {
        let presence = PresenceRegistry::new();
        presence.set_online("dave").await;
        assert_eq!(presence.snapshot().await, vec!["dave"]);
        assert_eq!(presence.snapshot().await, vec!["dave"]);
    }
}
