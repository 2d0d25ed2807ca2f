//! Common test utilities for account-level tests
//!
//! `Chain` plays the host for a single smart account with the any-operation
//! validator installed, plus a token contract. Authority checks against the
//! account are answered the way an account contract does: the installed
//! validator is asked whether the operation being applied is valid, and an
//! account without a validator falls back to the transaction signature.

#![allow(dead_code)]

use modvalidation_any::{AllowArgs, EntryPoint, ModValidationAny, SkipEntryPointArgs};
use modvalidation_interface::{
    entry_point_selector, AuthorizationType, Host, IsValidOperationArgs, IsValidOperationResult,
    MemoryHost, Operation, Scope, Space,
};
use prost::Message;

pub const TRANSFER_ENTRY_POINT: u32 = 0x27f5_76ca;
pub const INITIAL_BALANCE: u32 = 123;

const VALIDATOR_KEY: &[u8] = b"validator";

/// Arguments of the token's `transfer`.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct TransferArgs {
    #[prost(bytes = "vec", tag = "1")]
    pub from: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub to: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub value: u32,
}

/// Outcome of a submitted transaction.
#[derive(Debug, Clone, Default)]
pub struct Receipt {
    pub logs: Vec<String>,
    pub error: Option<String>,
}

impl Receipt {
    pub fn is_reverted(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_log(&self, line: &str) -> bool {
        self.logs.iter().any(|log| log == line)
    }
}

pub struct Chain {
    host: MemoryHost,
    module: ModValidationAny,
    pub module_id: Vec<u8>,
    pub account_id: Vec<u8>,
    pub token_id: Vec<u8>,
    /// Operation currently being applied
    current: Option<Operation>,
    frames: Vec<(Vec<u8>, Vec<u8>)>,
    signed_by_account: bool,
}

impl Chain {
    pub fn new() -> anyhow::Result<Self> {
        let mut chain = Self {
            host: MemoryHost::default(),
            module: ModValidationAny::new(),
            module_id: random_id(),
            account_id: random_id(),
            token_id: random_id(),
            current: None,
            frames: Vec::new(),
            signed_by_account: false,
        };

        let account_id = chain.account_id.clone();
        chain.set_balance(&account_id, INITIAL_BALANCE);

        let receipt = chain.send(vec![chain.install_module_op(Scope::default_scope())]);
        anyhow::ensure!(!receipt.is_reverted(), "install failed: {:?}", receipt.error);
        Ok(chain)
    }

    /// Applies `operations` as one transaction signed by the account. Any
    /// failing operation reverts the whole transaction.
    pub fn send(&mut self, operations: Vec<Operation>) -> Receipt {
        self.host.take_logs();
        self.host.begin_transaction(random_tx_id());
        self.signed_by_account = true;

        let mut error = None;
        for operation in &operations {
            if let Err(e) = self.apply(operation) {
                tracing::debug!(operation = %operation, error = %e, "operation failed");
                error = Some(e.to_string());
                break;
            }
        }

        self.signed_by_account = false;
        self.current = None;
        if error.is_some() {
            self.host.abort_transaction();
        } else {
            self.host.commit_transaction();
        }

        Receipt {
            logs: self.host.take_logs(),
            error,
        }
    }

    /// Read-only call on the module outside of any transaction.
    pub fn query<M: Message + Default>(&mut self, entry_point: EntryPoint) -> anyhow::Result<M> {
        self.enter(self.module_id.clone(), Vec::new());
        let module = self.module;
        let result = module.call(self, entry_point.selector(), &[]);
        self.leave();
        Ok(M::decode(result?.as_slice())?)
    }

    pub fn balance_of(&self, owner: &[u8]) -> u32 {
        self.host
            .get_object(&self.token_space(), owner)
            .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
            .map(u32::from_le_bytes)
            .unwrap_or(0)
    }

    pub fn transfer_op(&self, to: &[u8], value: u32) -> Operation {
        let args = TransferArgs {
            from: self.account_id.clone(),
            to: to.to_vec(),
            value,
        };
        Operation::new(self.token_id.clone(), TRANSFER_ENTRY_POINT, args.encode_to_vec())
    }

    pub fn allow_op(&self, operation: &Operation) -> Operation {
        let args = AllowArgs::for_user(self.account_id.clone(), operation.clone());
        self.module_op(EntryPoint::Allow, args.encode_to_vec())
    }

    pub fn add_skip_op(&self, entry_point: u32) -> Operation {
        let args = SkipEntryPointArgs::new(entry_point);
        self.module_op(EntryPoint::AddSkipEntryPoint, args.encode_to_vec())
    }

    pub fn is_valid_op(&self, operation: &Operation) -> Operation {
        let args = IsValidOperationArgs {
            operation: operation.clone(),
        };
        self.module_op(EntryPoint::IsValidOperation, args.encode_to_vec())
    }

    pub fn install_module_op(&self, scope: Scope) -> Operation {
        Operation::new(
            self.account_id.clone(),
            entry_point_selector("install_module"),
            scope.encode_to_vec(),
        )
    }

    pub fn uninstall_module_op(&self) -> Operation {
        Operation::new(
            self.account_id.clone(),
            entry_point_selector("uninstall_module"),
            Vec::new(),
        )
    }

    fn module_op(&self, entry_point: EntryPoint, args: Vec<u8>) -> Operation {
        Operation::new(self.module_id.clone(), entry_point.selector(), args)
    }

    fn apply(&mut self, operation: &Operation) -> anyhow::Result<()> {
        self.current = Some(operation.clone());

        if operation.contract_id == self.module_id {
            self.enter(self.module_id.clone(), self.account_id.clone());
            let module = self.module;
            let result = module.call(self, operation.entry_point, &operation.args);
            self.leave();
            result?;
            Ok(())
        } else if operation.contract_id == self.token_id {
            self.token_call(operation)
        } else if operation.contract_id == self.account_id {
            self.account_call(operation)
        } else {
            anyhow::bail!("unknown contract {}", operation)
        }
    }

    fn token_call(&mut self, operation: &Operation) -> anyhow::Result<()> {
        anyhow::ensure!(
            operation.entry_point == TRANSFER_ENTRY_POINT,
            "unknown token entry point {}",
            operation.entry_point
        );
        let args = TransferArgs::decode(operation.args.as_slice())?;

        self.enter(self.token_id.clone(), self.account_id.clone());
        let authorized = self.check_authority(AuthorizationType::ContractCall, &args.from);
        self.leave();
        anyhow::ensure!(authorized, "from has not authorized transfer");

        let from_balance = self.balance_of(&args.from);
        anyhow::ensure!(from_balance >= args.value, "insufficient balance");
        let to_balance = self.balance_of(&args.to);
        self.set_balance(&args.from, from_balance - args.value);
        self.set_balance(&args.to, to_balance + args.value);
        Ok(())
    }

    fn account_call(&mut self, operation: &Operation) -> anyhow::Result<()> {
        let account_id = self.account_id.clone();
        anyhow::ensure!(
            self.check_authority(AuthorizationType::ContractCall, &account_id),
            "account has not authorized {}",
            operation
        );

        let space = Space::contract(&account_id, 0);
        if operation.entry_point == entry_point_selector("install_module") {
            let scope = Scope::decode(operation.args.as_slice())?;
            self.host.put_object(&space, VALIDATOR_KEY, &scope.encode_to_vec());

            self.enter(self.module_id.clone(), account_id);
            let module = self.module;
            let result = module.call(self, EntryPoint::OnInstall.selector(), &[]);
            self.leave();
            result?;
        } else if operation.entry_point == entry_point_selector("uninstall_module") {
            self.host.remove_object(&space, VALIDATOR_KEY);
        } else {
            anyhow::bail!("unknown account entry point {}", operation.entry_point);
        }
        Ok(())
    }

    /// Scope the installed validator was registered with.
    fn validator_scope(&self) -> Option<Scope> {
        self.host
            .get_object(&Space::contract(&self.account_id, 0), VALIDATOR_KEY)
            .and_then(|bytes| Scope::decode(bytes.as_slice()).ok())
    }

    fn validate(&mut self, operation: Operation) -> bool {
        self.enter(self.module_id.clone(), self.account_id.clone());
        let module = self.module;
        let result = module.call(
            self,
            EntryPoint::IsValidOperation.selector(),
            &IsValidOperationArgs { operation }.encode_to_vec(),
        );
        self.leave();

        result
            .ok()
            .and_then(|output| IsValidOperationResult::decode(output.as_slice()).ok())
            .map(|result| result.value)
            .unwrap_or(false)
    }

    fn enter(&mut self, contract_id: Vec<u8>, caller: Vec<u8>) {
        self.frames
            .push((self.host.contract_id(), self.host.caller()));
        self.host.set_contract_id(contract_id);
        self.host.set_caller(caller);
    }

    fn leave(&mut self) {
        if let Some((contract_id, caller)) = self.frames.pop() {
            self.host.set_contract_id(contract_id);
            self.host.set_caller(caller);
        }
    }

    fn token_space(&self) -> Space {
        Space::contract(&self.token_id, 0)
    }

    fn set_balance(&mut self, owner: &[u8], value: u32) {
        let space = self.token_space();
        self.host.put_object(&space, owner, &value.to_le_bytes());
    }
}

impl Host for Chain {
    fn contract_id(&self) -> Vec<u8> {
        self.host.contract_id()
    }

    fn caller(&self) -> Vec<u8> {
        self.host.caller()
    }

    fn transaction_id(&self) -> Option<Vec<u8>> {
        self.host.transaction_id()
    }

    fn check_authority(&mut self, kind: AuthorizationType, account: &[u8]) -> bool {
        if kind != AuthorizationType::ContractCall || account != self.account_id.as_slice() {
            return self.host.check_authority(kind, account);
        }

        let Some(operation) = self.current.clone() else {
            return false;
        };
        match self.validator_scope() {
            Some(scope)
                if scope.entry_point == Scope::DEFAULT_ENTRY_POINT
                    || scope.entry_point == operation.entry_point =>
            {
                self.validate(operation)
            },
            _ => self.signed_by_account,
        }
    }

    fn get_object(&self, space: &Space, key: &[u8]) -> Option<Vec<u8>> {
        self.host.get_object(space, key)
    }

    fn put_object(&mut self, space: &Space, key: &[u8], value: &[u8]) {
        self.host.put_object(space, key, value)
    }

    fn remove_object(&mut self, space: &Space, key: &[u8]) {
        self.host.remove_object(space, key)
    }

    fn log(&mut self, message: &str) {
        self.host.log(message)
    }
}

/// Setup a chain with the validator installed on the account
pub fn setup_chain() -> anyhow::Result<Chain> {
    Chain::new()
}

pub fn random_id() -> Vec<u8> {
    rand::random::<[u8; 25]>().to_vec()
}

pub fn random_tx_id() -> Vec<u8> {
    rand::random::<[u8; 32]>().to_vec()
}
