use abi::AbiError;
use thiserror::Error;
use units::ScaleError;

/// Failure reported by an [`Rpc`](crate::Rpc) capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// Node unreachable, request rejected or call reverted
    #[error("Transport error: {0}")]
    Transport(String),

    /// Return data did not match the declared outputs
    #[error("Decode error: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("{method}: RPC call failed: {source}")]
    Rpc {
        method: String,
        #[source]
        source: RpcError,
    },

    /// Decoded result set is shorter than the declared outputs
    #[error("{method}: missing ABI output")]
    MissingAbiOutput { method: String },

    /// Decoded value has a different kind than the declared output
    #[error("{method}: expected {expected} output, got {found}")]
    UnexpectedOutputType {
        method: String,
        expected: String,
        found: String,
    },

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Scale(#[from] ScaleError),
}
