//! Typed ABI parameters.

use crate::AbiError;
use alloy_dyn_abi::DynSolType;

/// One typed input or output of a method or event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiParam {
    ty: String,
    kind: DynSolType,
    name: Option<String>,
    indexed: bool,
}

impl AbiParam {
    /// Create an unnamed, non-indexed parameter.
    ///
    /// The type string is normalized to its canonical form, so `uint`
    /// is stored as `uint256`.
    pub fn new(ty: &str) -> Result<Self, AbiError> {
        let ty = ty.trim();
        if ty.is_empty() {
            return Err(AbiError::InvalidAbiParam {
                ty: String::new(),
                reason: "type string is empty".to_string(),
            });
        }

        let kind = DynSolType::parse(ty).map_err(|e| AbiError::InvalidAbiParam {
            ty: ty.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            ty: kind.sol_type_name().into_owned(),
            kind,
            name: None,
            indexed: false,
        })
    }

    /// Create a named parameter.
    pub fn named(ty: &str, name: impl Into<String>) -> Result<Self, AbiError> {
        Ok(Self::new(ty)?.with_name(name))
    }

    /// Create a named parameter for an event, with its indexed flag.
    pub fn event(ty: &str, name: impl Into<String>, indexed: bool) -> Result<Self, AbiError> {
        Ok(Self::named(ty, name)?.with_indexed(indexed))
    }

    /// Set the name; an empty name clears it.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    /// Set the indexed flag.
    pub const fn with_indexed(mut self, indexed: bool) -> Self {
        self.indexed = indexed;
        self
    }

    /// Canonical type string, e.g. `address` or `uint256`.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Parsed type used by the encoder and decoder.
    pub const fn kind(&self) -> &DynSolType {
        &self.kind
    }

    /// Parameter name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the parameter is an indexed event input.
    pub const fn is_indexed(&self) -> bool {
        self.indexed
    }
}
