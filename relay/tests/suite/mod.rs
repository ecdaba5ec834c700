//! Shared multi-test setup: relay behind its proxy, wired to the mock
//! gateway, gas service and permit token.

#![allow(dead_code)]

use cosmwasm_schema::serde::de::DeserializeOwned;
use cosmwasm_std::{coins, to_json_binary, Addr, Coin, CosmosMsg, Empty, Uint128, WasmMsg};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use common::permit::NonceResponse;
use common::PermitQueryMsg;
use gmp_relay::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, RelayInitMsg};
use relay_mocks::gas_service::{self, GasPayment, PaymentsResponse};
use relay_mocks::gateway::{self, CallsResponse, ContractCallWithToken};
use relay_mocks::token::{self, PermitSigner};
use relay_mocks::{
    contract_gas_service, contract_gateway, contract_permit_token, PermitSignature, TestSigner,
};

pub const GAS_DENOM: &str = "uaxl";
pub const MIN_GAS: u128 = 1_000;
pub const GAS: u128 = 5_000;
pub const INITIAL_TOKENS: u128 = 1_000_000;
pub const RECEIVER: &str = "neutron1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn8fcct7";

pub fn contract_relay() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        gmp_relay::contract::execute,
        gmp_relay::contract::instantiate,
        gmp_relay::contract::query,
    )
    .with_migrate(gmp_relay::contract::migrate);
    Box::new(contract)
}

pub struct Suite {
    pub app: App,
    pub relay: Addr,
    pub relay_code_id: u64,
    pub token: Addr,
    pub gateway: Addr,
    pub gas_service: Addr,
    pub admin: Addr,
    pub deployer: Addr,
    pub user: Addr,
    pub signer: TestSigner,
}

impl Suite {
    pub fn new() -> Self {
        Self::with_gateway_chains(vec!["neutron".to_string()])
    }

    pub fn with_gateway_chains(supported_chains: Vec<String>) -> Self {
        let mut app = App::default();

        let admin = Addr::unchecked("admin");
        let deployer = Addr::unchecked("deployer");
        let user = Addr::unchecked("user");
        let signer = TestSigner::from_seed(1).unwrap();

        app.init_modules(|router, _, storage| {
            router
                .bank
                .init_balance(storage, &user, coins(1_000_000, GAS_DENOM))
                .unwrap();
        });

        let token_code_id = app.store_code(contract_permit_token());
        let gateway_code_id = app.store_code(contract_gateway());
        let gas_code_id = app.store_code(contract_gas_service());
        let relay_code_id = app.store_code(contract_relay());

        let token = app
            .instantiate_contract(
                token_code_id,
                deployer.clone(),
                &token::InstantiateMsg {
                    name: "Wrapped liquid staked Ether".to_string(),
                    symbol: "wstETH".to_string(),
                    decimals: 18,
                    initial_balances: vec![Cw20Coin {
                        address: user.to_string(),
                        amount: Uint128::new(INITIAL_TOKENS),
                    }],
                    signers: vec![PermitSigner {
                        owner: user.to_string(),
                        pubkey: signer.pubkey(),
                    }],
                },
                &[],
                "wsteth",
                None,
            )
            .unwrap();

        let gateway = app
            .instantiate_contract(
                gateway_code_id,
                deployer.clone(),
                &gateway::InstantiateMsg {
                    token: token.to_string(),
                    symbol: "wstETH".to_string(),
                    supported_chains,
                },
                &[],
                "gateway",
                None,
            )
            .unwrap();

        let gas_service = app
            .instantiate_contract(
                gas_code_id,
                deployer.clone(),
                &gas_service::InstantiateMsg {
                    denom: GAS_DENOM.to_string(),
                    min_amount: Uint128::new(MIN_GAS),
                },
                &[],
                "gas-service",
                None,
            )
            .unwrap();

        let relay = app
            .instantiate_contract(
                relay_code_id,
                deployer.clone(),
                &relay_instantiate_msg(
                    relay_code_id,
                    &admin,
                    &RelayInitMsg {
                        gateway: gateway.to_string(),
                        gas_service: gas_service.to_string(),
                        token: token.to_string(),
                    },
                ),
                &[],
                "gmp-relay",
                Some(deployer.to_string()),
            )
            .unwrap();

        // Upgrades are self-issued migrations
        app.execute(
            deployer.clone(),
            CosmosMsg::Wasm(WasmMsg::UpdateAdmin {
                contract_addr: relay.to_string(),
                admin: relay.to_string(),
            }),
        )
        .unwrap();

        Self {
            app,
            relay,
            relay_code_id,
            token,
            gateway,
            gas_service,
            admin,
            deployer,
            user,
            signer,
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    pub fn approve(&mut self, spender: &Addr, amount: u128) {
        self.app
            .execute_contract(
                self.user.clone(),
                self.token.clone(),
                &token::ExecuteMsg::IncreaseAllowance {
                    spender: spender.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn send(
        &mut self,
        amount: u128,
        refund_address: Option<&str>,
        gas: &[Coin],
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            self.relay.clone(),
            &ExecuteMsg::Send {
                receiver: RECEIVER.to_string(),
                amount: Uint128::new(amount),
                refund_address: refund_address.map(str::to_string),
            },
            gas,
        )
    }

    pub fn sign_permit(&self, amount: u128, nonce: u64, deadline: u64) -> PermitSignature {
        self.signer
            .sign_permit(
                self.token.as_str(),
                self.user.as_str(),
                self.relay.as_str(),
                Uint128::new(amount),
                nonce,
                deadline,
            )
            .unwrap()
    }

    pub fn send_with_permit(
        &mut self,
        amount: u128,
        deadline: u64,
        signature: PermitSignature,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            self.relay.clone(),
            &ExecuteMsg::SendWithPermit {
                receiver: RECEIVER.to_string(),
                amount: Uint128::new(amount),
                deadline,
                v: signature.v,
                r: signature.r,
                s: signature.s,
                refund_address: None,
            },
            &coins(GAS, GAS_DENOM),
        )
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn now(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn query_relay<T: DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(self.relay.clone(), msg)
            .unwrap()
    }

    pub fn balance(&self, address: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.token.clone(),
                &token::QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn allowance(&self, owner: &Addr, spender: &Addr) -> u128 {
        let res: AllowanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.token.clone(),
                &token::QueryMsg::Allowance {
                    owner: owner.to_string(),
                    spender: spender.to_string(),
                },
            )
            .unwrap();
        res.allowance.u128()
    }

    pub fn nonce(&self, owner: &Addr) -> u64 {
        let res: NonceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.token.clone(),
                &PermitQueryMsg::Nonce {
                    owner: owner.to_string(),
                },
            )
            .unwrap();
        res.nonce
    }

    pub fn gas_balance(&self, address: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(address, GAS_DENOM)
            .unwrap()
            .amount
            .u128()
    }

    pub fn gateway_calls(&self) -> Vec<ContractCallWithToken> {
        let res: CallsResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.gateway.clone(), &gateway::QueryMsg::Calls {})
            .unwrap();
        res.calls
    }

    pub fn gas_payments(&self) -> Vec<GasPayment> {
        let res: PaymentsResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.gas_service.clone(), &gas_service::QueryMsg::Payments {})
            .unwrap();
        res.payments
    }
}

pub fn relay_instantiate_msg(code_id: u64, admin: &Addr, init: &RelayInitMsg) -> InstantiateMsg {
    InstantiateMsg {
        implementation: code_id,
        admin: admin.to_string(),
        init: Some(to_json_binary(init).unwrap()),
    }
}

/// Value of the first attribute named `key` across all events
pub fn attribute(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}
