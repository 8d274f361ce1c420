//! Validation of decoded call results against the declared outputs.

use crate::TokenError;
use abi::{ContractMethod, DynSolType, DynSolValue};
use alloy_primitives::U256;

/// Decoded values of one call, checked position by position against the
/// method's declared outputs before any field is read.
#[derive(Debug)]
pub(crate) struct Outputs<'a> {
    method: &'a ContractMethod,
    values: Vec<DynSolValue>,
}

impl<'a> Outputs<'a> {
    pub(crate) fn validate(
        method: &'a ContractMethod,
        values: Vec<DynSolValue>,
    ) -> Result<Self, TokenError> {
        if values.is_empty() || values.len() < method.outputs().len() {
            return Err(TokenError::MissingAbiOutput {
                method: method.signature(),
            });
        }

        for (param, value) in method.outputs().iter().zip(&values) {
            if !same_kind(param.kind(), value) {
                return Err(TokenError::UnexpectedOutputType {
                    method: method.signature(),
                    expected: param.ty().to_string(),
                    found: describe(value),
                });
            }
        }

        Ok(Self { method, values })
    }

    fn value(&self, index: usize) -> Result<&DynSolValue, TokenError> {
        self.values
            .get(index)
            .ok_or_else(|| TokenError::MissingAbiOutput {
                method: self.method.signature(),
            })
    }

    pub(crate) fn unexpected(&self, expected: &str, found: String) -> TokenError {
        TokenError::UnexpectedOutputType {
            method: self.method.signature(),
            expected: expected.to_string(),
            found,
        }
    }

    pub(crate) fn uint(&self, index: usize) -> Result<U256, TokenError> {
        let value = self.value(index)?;
        value
            .as_uint()
            .map(|(v, _)| v)
            .ok_or_else(|| self.unexpected("uint", describe(value)))
    }

    pub(crate) fn string(&self, index: usize) -> Result<String, TokenError> {
        let value = self.value(index)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.unexpected("string", describe(value)))
    }
}

/// Integer widths are not compared: range checks happen when the value is
/// narrowed, e.g. `decimals` into `u8`.
fn same_kind(expected: &DynSolType, value: &DynSolValue) -> bool {
    match (expected, value) {
        (DynSolType::Uint(_), DynSolValue::Uint(..)) => true,
        (DynSolType::Int(_), DynSolValue::Int(..)) => true,
        _ => expected.matches(value),
    }
}

fn describe(value: &DynSolValue) -> String {
    value
        .as_type()
        .map_or_else(|| "unknown".to_string(), |ty| ty.sol_type_name().into_owned())
}
