use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// A parameter type string that is empty or not a canonical ABI type
    #[error("Invalid ABI param type '{ty}': {reason}")]
    InvalidAbiParam { ty: String, reason: String },

    /// Malformed contract table. Indicates a programming defect.
    #[error("ABI assembly error: {0}")]
    AbiAssembly(String),

    /// Wrong number of call arguments
    #[error("{method}: expected {expected} arguments, got {got}")]
    ArgumentCount {
        method: String,
        expected: usize,
        got: usize,
    },

    /// Call argument does not match the declared input type
    #[error("{method}: argument {index} is not a valid {expected}")]
    ArgumentType {
        method: String,
        index: usize,
        expected: String,
    },

    /// Return data could not be decoded against the declared outputs
    #[error("{method}: failed to decode return data: {reason}")]
    Decode { method: String, reason: String },
}
