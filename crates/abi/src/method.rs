//! Function and constructor descriptors.

use crate::{AbiError, AbiParam};
use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{keccak256, Bytes, Selector};

/// Kind of contract method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Constructor,
    Function,
}

/// A named, typed contract function or constructor.
///
/// Input and output order is the call-encoding order and is never changed
/// once a parameter has been appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractMethod {
    kind: MethodKind,
    name: String,
    constant: bool,
    payable: bool,
    inputs: Vec<AbiParam>,
    outputs: Vec<AbiParam>,
}

impl ContractMethod {
    /// Describe a function. `constant` marks a read-only (view) function.
    pub fn function(name: impl Into<String>, constant: bool, payable: bool) -> Self {
        Self {
            kind: MethodKind::Function,
            name: name.into(),
            constant,
            payable,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Describe a constructor.
    pub const fn constructor(payable: bool) -> Self {
        Self {
            kind: MethodKind::Constructor,
            name: String::new(),
            constant: false,
            payable,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Append an input parameter.
    pub fn append_input(mut self, param: AbiParam) -> Self {
        self.inputs.push(param);
        self
    }

    /// Append a declared output.
    pub fn append_output(mut self, param: AbiParam) -> Self {
        self.outputs.push(param);
        self
    }

    /// Function or constructor.
    pub const fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Function name; empty for a constructor.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the method is read-only.
    pub const fn is_constant(&self) -> bool {
        self.constant
    }

    /// Whether the method accepts value.
    pub const fn is_payable(&self) -> bool {
        self.payable
    }

    /// Input parameters in call order.
    pub fn inputs(&self) -> &[AbiParam] {
        &self.inputs
    }

    /// Declared outputs in return order.
    pub fn outputs(&self) -> &[AbiParam] {
        &self.outputs
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.inputs.iter().map(AbiParam::ty).collect();
        let name = match self.kind {
            MethodKind::Constructor => "constructor",
            MethodKind::Function => self.name.as_str(),
        };
        format!("{}({})", name, types.join(","))
    }

    /// First four bytes of the keccak-256 hash of the signature.
    pub fn selector(&self) -> Selector {
        Selector::from_slice(&keccak256(self.signature())[..4])
    }

    /// Label used in error messages.
    fn label(&self) -> String {
        match self.kind {
            MethodKind::Constructor => "constructor".to_string(),
            MethodKind::Function => format!("{}()", self.name),
        }
    }

    /// Encode a call with the given ordered arguments.
    ///
    /// Functions are prefixed with their selector; constructor arguments are
    /// returned bare, ready to append to the deployment bytecode.
    pub fn encode_call(&self, args: &[DynSolValue]) -> Result<Bytes, AbiError> {
        if args.len() != self.inputs.len() {
            return Err(AbiError::ArgumentCount {
                method: self.label(),
                expected: self.inputs.len(),
                got: args.len(),
            });
        }

        for (index, (param, arg)) in self.inputs.iter().zip(args).enumerate() {
            if !param.kind().matches(arg) {
                return Err(AbiError::ArgumentType {
                    method: self.label(),
                    index,
                    expected: param.ty().to_string(),
                });
            }
        }

        let params = DynSolValue::Tuple(args.to_vec()).abi_encode_params();
        let encoded = match self.kind {
            MethodKind::Constructor => params,
            MethodKind::Function => {
                let mut encoded = Vec::with_capacity(4 + params.len());
                encoded.extend_from_slice(self.selector().as_slice());
                encoded.extend_from_slice(&params);
                encoded
            }
        };

        Ok(Bytes::from(encoded))
    }

    /// Decode raw return data into values ordered as the declared outputs.
    pub fn decode_output(&self, data: &[u8]) -> Result<Vec<DynSolValue>, AbiError> {
        let ty = DynSolType::Tuple(self.outputs.iter().map(|p| p.kind().clone()).collect());
        let decoded = ty.abi_decode_params(data).map_err(|e| AbiError::Decode {
            method: self.label(),
            reason: e.to_string(),
        })?;

        match decoded {
            DynSolValue::Tuple(values) => Ok(values),
            other => Ok(vec![other]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{hex, Address, U256};

    fn transfer() -> ContractMethod {
        ContractMethod::function("transfer", false, false)
            .append_input(AbiParam::new("address").unwrap())
            .append_input(AbiParam::new("uint256").unwrap())
            .append_output(AbiParam::new("bool").unwrap())
    }

    #[test]
    fn test_signature_and_selector() {
        let method = transfer();
        assert_eq!(method.signature(), "transfer(address,uint256)");
        assert_eq!(method.selector(), Selector::from(hex!("a9059cbb")));

        let name = ContractMethod::function("name", true, false)
            .append_output(AbiParam::new("string").unwrap());
        assert_eq!(name.signature(), "name()");
        assert_eq!(name.selector(), Selector::from(hex!("06fdde03")));
    }

    #[test]
    fn test_encode_transfer() {
        let to = Address::from([0x11; 20]);
        let encoded = transfer()
            .encode_call(&[
                DynSolValue::Address(to),
                DynSolValue::Uint(U256::from(1_500_000u64), 256),
            ])
            .unwrap();

        assert_eq!(encoded.len(), 4 + 32 * 2);
        assert_eq!(&encoded[..4], &hex!("a9059cbb"));
        // address is left-padded into its word
        assert_eq!(&encoded[4..16], &[0u8; 12]);
        assert_eq!(&encoded[16..36], to.as_slice());
        assert_eq!(
            U256::from_be_slice(&encoded[36..68]),
            U256::from(1_500_000u64)
        );
    }

    #[test]
    fn test_encode_rejects_wrong_arity() {
        let err = transfer()
            .encode_call(&[DynSolValue::Address(Address::ZERO)])
            .unwrap_err();
        assert_eq!(
            err,
            AbiError::ArgumentCount {
                method: "transfer()".to_string(),
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn test_encode_rejects_wrong_type() {
        let err = transfer()
            .encode_call(&[
                DynSolValue::Uint(U256::from(1), 256),
                DynSolValue::Uint(U256::from(1), 256),
            ])
            .unwrap_err();
        assert!(matches!(err, AbiError::ArgumentType { index: 0, .. }));
    }

    #[test]
    fn test_constructor_has_no_selector() {
        let ctor = ContractMethod::constructor(false)
            .append_input(AbiParam::named("uint256", "_initialAmount").unwrap())
            .append_input(AbiParam::named("uint8", "_decimalUnits").unwrap());
        assert_eq!(ctor.kind(), MethodKind::Constructor);
        assert_eq!(ctor.signature(), "constructor(uint256,uint8)");

        let encoded = ctor
            .encode_call(&[
                DynSolValue::Uint(U256::from(1000), 256),
                DynSolValue::Uint(U256::from(18), 8),
            ])
            .unwrap();
        assert_eq!(encoded.len(), 64);
        assert_eq!(U256::from_be_slice(&encoded[32..]), U256::from(18));
    }

    #[test]
    fn test_decode_output() {
        let decimals = ContractMethod::function("decimals", true, false)
            .append_output(AbiParam::new("uint8").unwrap());

        let mut word = [0u8; 32];
        word[31] = 6;
        let values = decimals.decode_output(&word).unwrap();
        assert_eq!(values, vec![DynSolValue::Uint(U256::from(6), 8)]);
    }

    #[test]
    fn test_decode_short_data_fails() {
        let decimals = ContractMethod::function("decimals", true, false)
            .append_output(AbiParam::new("uint8").unwrap());

        let err = decimals.decode_output(&[0u8; 7]).unwrap_err();
        assert!(matches!(err, AbiError::Decode { method, .. } if method == "decimals()"));
    }
}
