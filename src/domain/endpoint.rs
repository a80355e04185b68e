use std::fmt;

pub const LTM_ROOT: &str = "/mgmt/tm/ltm";

/// Paths of the LTM management API the connector talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Ltm,
    Nodes,
    Node(&'a str),
    Pools,
    PoolMembers(&'a str),
    PoolMember {
        pool: &'a str,
        node: &'a str,
        port: u16,
    },
    /// Members of a pool addressed by partition, using the `~partition~pool` form.
    PartitionPoolMembers {
        partition: &'a str,
        pool: &'a str,
    },
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Ltm => write!(f, "{LTM_ROOT}"),
            Endpoint::Nodes => write!(f, "{LTM_ROOT}/node"),
            Endpoint::Node(name) => write!(f, "{LTM_ROOT}/node/{name}"),
            Endpoint::Pools => write!(f, "{LTM_ROOT}/pool"),
            Endpoint::PoolMembers(pool) => write!(f, "{LTM_ROOT}/pool/{pool}/members"),
            Endpoint::PoolMember { pool, node, port } => {
                write!(f, "{LTM_ROOT}/pool/{pool}/members/{node}:{port}")
            }
            Endpoint::PartitionPoolMembers { partition, pool } => {
                write!(f, "{LTM_ROOT}/pool/~{partition}~{pool}/members")
            }
        }
    }
}
