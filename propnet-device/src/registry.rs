//! Table of the nodes known to the host.

use propnet_encoding::types::Setting;

/// Role a node plays on the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Invalid = 0,
    God = 1,
    GameController = 2,
    Player = 3,
    Task = 4,
    Ambient = 5,
}

/// One known device and the settings it understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Role the node plays.
    pub node_type: NodeType,
    /// Display name used by the tooling.
    pub friendly_name: String,
    /// Radio address the node listens on.
    pub address: u32,
    /// Settings this node acts on.
    pub settings: Vec<Setting>,
}

/// Known nodes, kept in registration order.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node. A node already registered at the same address is
    /// replaced.
    pub fn insert(&mut self, node: Node) {
        match self.nodes.iter_mut().find(|known| known.address == node.address) {
            Some(slot) => *slot = node,
            None => self.nodes.push(node),
        }
    }

    /// The node listening at `address`.
    pub fn lookup(&self, address: u32) -> Option<&Node> {
        self.nodes.iter().find(|node| node.address == address)
    }

    /// The node registered under `friendly_name`.
    pub fn lookup_by_name(&self, friendly_name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.friendly_name == friendly_name)
    }

    /// The settings the node at `address` acts on.
    pub fn settings_of(&self, address: u32) -> Option<&[Setting]> {
        self.lookup(address).map(|node| node.settings.as_slice())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All registered nodes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simon_says() -> Node {
        Node {
            node_type: NodeType::Task,
            friendly_name: "Simon Says".into(),
            address: 0x01,
            settings: vec![Setting::SettingCount, Setting::RoundCount, Setting::RoundDifficulty],
        }
    }

    fn guitar_hero() -> Node {
        Node {
            node_type: NodeType::Task,
            friendly_name: "Guitar Hero".into(),
            address: 0x02,
            settings: vec![Setting::SettingCount, Setting::TaskValue, Setting::RoundDifficulty],
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = NodeRegistry::new();
        assert!(registry.is_empty());

        registry.insert(simon_says());
        registry.insert(guitar_hero());

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup(0x01), Some(&simon_says()));
        assert_eq!(registry.lookup(0x03), None);
    }

    #[test]
    fn test_insert_replaces_same_address() {
        let mut registry = NodeRegistry::new();
        registry.insert(simon_says());

        let mut replacement = guitar_hero();
        replacement.address = 0x01;
        registry.insert(replacement.clone());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(0x01), Some(&replacement));
    }

    #[test]
    fn test_lookup_by_name() {
        let mut registry = NodeRegistry::new();
        registry.insert(simon_says());
        registry.insert(guitar_hero());

        assert_eq!(registry.lookup_by_name("Guitar Hero"), Some(&guitar_hero()));
        assert_eq!(registry.lookup_by_name("Player 1"), None);
    }

    #[test]
    fn test_settings_listing() {
        let mut registry = NodeRegistry::new();
        registry.insert(simon_says());

        assert_eq!(
            registry.settings_of(0x01),
            Some(&[Setting::SettingCount, Setting::RoundCount, Setting::RoundDifficulty][..])
        );
        assert_eq!(registry.settings_of(0x04), None);
    }

    #[test]
    fn test_iteration_keeps_registration_order() {
        let mut registry = NodeRegistry::new();
        registry.insert(guitar_hero());
        registry.insert(simon_says());

        let names: Vec<_> = registry.iter().map(|node| node.friendly_name.as_str()).collect();
        assert_eq!(names, ["Guitar Hero", "Simon Says"]);
    }
}
