use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::ConnectorError;

/// The actions the connector knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    TestConnectivity,
    CreatePool,
    ListPools,
    ListMembers,
    CreateNode,
    DeleteNode,
    AddNode,
    RemoveNode,
    EnableNode,
    DisableNode,
    DescribeNode,
    ListNodes,
}

impl ActionId {
    pub const ALL: [ActionId; 12] = [
        ActionId::TestConnectivity,
        ActionId::CreatePool,
        ActionId::ListPools,
        ActionId::ListMembers,
        ActionId::CreateNode,
        ActionId::DeleteNode,
        ActionId::AddNode,
        ActionId::RemoveNode,
        ActionId::EnableNode,
        ActionId::DisableNode,
        ActionId::DescribeNode,
        ActionId::ListNodes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::TestConnectivity => "test_connectivity",
            ActionId::CreatePool => "create_pool",
            ActionId::ListPools => "list_pools",
            ActionId::ListMembers => "list_members",
            ActionId::CreateNode => "create_node",
            ActionId::DeleteNode => "delete_node",
            ActionId::AddNode => "add_node",
            ActionId::RemoveNode => "remove_node",
            ActionId::EnableNode => "enable_node",
            ActionId::DisableNode => "disable_node",
            ActionId::DescribeNode => "describe_node",
            ActionId::ListNodes => "list_nodes",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionId::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ConnectorError::UnsupportedAction(s.to_string()))
    }
}
