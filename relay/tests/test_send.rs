//! Send flow against the mock gateway, gas service and token.

mod suite;

use cosmwasm_std::{coin, coins, Addr, Uint128};
use cw_multi_test::Executor;

use common::{bytes32_to_hex, keccak256};
use gmp_relay::build_payload;
use relay_mocks::token;

use suite::{attribute, Suite, GAS, GAS_DENOM, INITIAL_TOKENS, MIN_GAS, RECEIVER};

const NEUTRON_SATELLITE: &str = "neutron1ug740qrkquxzrk2hh29qrlx3sktkfml3je7juusc2te7xmvsscns0n2wry";

// ============================================================================
// Success
// ============================================================================

#[test]
fn test_send_escrows_tokens_with_gateway() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 1_000);

    let res = suite.send(1_000, None, &coins(GAS, GAS_DENOM)).unwrap();

    // Tokens moved user -> gateway; the relay keeps nothing
    assert_eq!(suite.balance(&suite.user), INITIAL_TOKENS - 1_000);
    assert_eq!(suite.balance(&suite.gateway), 1_000);
    assert_eq!(suite.balance(&suite.relay), 0);
    assert_eq!(suite.allowance(&suite.relay, &suite.gateway), 0);
    assert_eq!(suite.allowance(&suite.user, &suite.relay), 0);

    let payload = build_payload(RECEIVER, Uint128::new(1_000)).unwrap();

    let calls = suite.gateway_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].sender, suite.relay);
    assert_eq!(calls[0].destination_chain, "neutron");
    assert_eq!(calls[0].destination_address, NEUTRON_SATELLITE);
    assert_eq!(calls[0].symbol, "wstETH");
    assert_eq!(calls[0].amount, Uint128::new(1_000));
    assert_eq!(calls[0].payload, payload);

    // Gas service saw the same call and all of the gas
    let payments = suite.gas_payments();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].payer, suite.relay);
    assert_eq!(payments[0].sender, suite.relay.to_string());
    assert_eq!(payments[0].payload, payload);
    assert_eq!(payments[0].destination_address, NEUTRON_SATELLITE);
    assert_eq!(payments[0].refund_address, suite.user.to_string());
    assert_eq!(payments[0].paid, coins(GAS, GAS_DENOM));
    assert_eq!(suite.gas_balance(&suite.gas_service), GAS);
    assert_eq!(suite.gas_balance(&suite.relay), 0);

    assert_eq!(attribute(&res, "method").as_deref(), Some("send"));
    assert_eq!(attribute(&res, "receiver").as_deref(), Some(RECEIVER));
    assert_eq!(
        attribute(&res, "payload_hash"),
        Some(bytes32_to_hex(&keccak256(payload.as_slice())))
    );
}

#[test]
fn test_missing_refund_address_defaults_to_caller() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 3_000);

    let user = suite.user.to_string();
    suite.send(1_000, None, &coins(GAS, GAS_DENOM)).unwrap();
    suite.send(1_000, Some(""), &coins(GAS, GAS_DENOM)).unwrap();
    suite
        .send(1_000, Some(&user), &coins(GAS, GAS_DENOM))
        .unwrap();

    let payments = suite.gas_payments();
    assert_eq!(payments.len(), 3);
    for payment in &payments {
        assert_eq!(payment, &payments[0]);
        assert_eq!(payment.refund_address, user);
    }

    let calls = suite.gateway_calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|call| call == &calls[0]));
}

#[test]
fn test_explicit_refund_address_is_forwarded() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 1_000);

    let res = suite
        .send(1_000, Some("refunds"), &coins(GAS, GAS_DENOM))
        .unwrap();

    assert_eq!(suite.gas_payments()[0].refund_address, "refunds");
    assert_eq!(attribute(&res, "refund_address").as_deref(), Some("refunds"));
}

#[test]
fn test_every_gas_coin_is_forwarded() {
    let mut suite = Suite::new();
    suite.app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(
                storage,
                &Addr::unchecked("user"),
                vec![coin(1_000_000, GAS_DENOM), coin(100, "uother")],
            )
            .unwrap();
    });
    suite.approve(&suite.relay.clone(), 1_000);

    suite
        .send(1_000, None, &[coin(GAS, GAS_DENOM), coin(100, "uother")])
        .unwrap();

    assert_eq!(
        suite.gas_payments()[0].paid,
        vec![coin(GAS, GAS_DENOM), coin(100, "uother")]
    );
    assert_eq!(suite.gas_balance(&suite.relay), 0);
}

// ============================================================================
// Gateway allowance
// ============================================================================

#[test]
fn test_stale_gateway_allowance_is_lowered_to_amount() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 1_000);

    // Leftover allowance from the relay to the gateway
    suite
        .app
        .execute_contract(
            suite.relay.clone(),
            suite.token.clone(),
            &token::ExecuteMsg::IncreaseAllowance {
                spender: suite.gateway.to_string(),
                amount: Uint128::new(5_000),
                expires: None,
            },
            &[],
        )
        .unwrap();

    suite.send(1_000, None, &coins(GAS, GAS_DENOM)).unwrap();

    // The gateway pulled exactly `amount`, so nothing is left over
    assert_eq!(suite.allowance(&suite.relay, &suite.gateway), 0);
    assert_eq!(suite.balance(&suite.gateway), 1_000);
    assert_eq!(suite.balance(&suite.relay), 0);
}

#[test]
fn test_partial_gateway_allowance_is_topped_up() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 1_000);

    suite
        .app
        .execute_contract(
            suite.relay.clone(),
            suite.token.clone(),
            &token::ExecuteMsg::IncreaseAllowance {
                spender: suite.gateway.to_string(),
                amount: Uint128::new(300),
                expires: None,
            },
            &[],
        )
        .unwrap();

    suite.send(1_000, None, &coins(GAS, GAS_DENOM)).unwrap();

    assert_eq!(suite.allowance(&suite.relay, &suite.gateway), 0);
    assert_eq!(suite.balance(&suite.gateway), 1_000);
}

// ============================================================================
// Local validation
// ============================================================================

#[test]
fn test_zero_amount_rejected() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 1_000);

    let res = suite.send(0, None, &coins(GAS, GAS_DENOM));
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Amount must be greater than zero"));
}

#[test]
fn test_send_without_gas_rejected() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 1_000);

    let res = suite.send(1_000, None, &[]);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("No funds sent"));
}

#[test]
fn test_invalid_receiver_rejected() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 1_000);

    for receiver in ["", "neutron1", "neutron1bio"] {
        let user = suite.user.clone();
        let relay = suite.relay.clone();
        let res = suite.app.execute_contract(
            user,
            relay,
            &gmp_relay::msg::ExecuteMsg::Send {
                receiver: receiver.to_string(),
                amount: Uint128::new(1_000),
                refund_address: None,
            },
            &coins(GAS, GAS_DENOM),
        );
        assert!(res
            .unwrap_err()
            .root_cause()
            .to_string()
            .contains("Invalid receiver"));
    }
}

#[test]
fn test_invalid_refund_address_rejected() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 1_000);

    let res = suite.send(1_000, Some("REFUNDS"), &coins(GAS, GAS_DENOM));
    assert!(res.is_err());
    assert!(suite.gas_payments().is_empty());
}

// ============================================================================
// Collaborator failures roll back everything
// ============================================================================

#[test]
fn test_send_without_allowance_rejected() {
    let mut suite = Suite::new();

    let res = suite.send(1_000, None, &coins(GAS, GAS_DENOM));
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("No allowance for this account"));

    assert_eq!(suite.balance(&suite.user), INITIAL_TOKENS);
    assert!(suite.gas_payments().is_empty());
    assert!(suite.gateway_calls().is_empty());
}

#[test]
fn test_insufficient_gas_rolls_back_transfer() {
    let mut suite = Suite::new();
    suite.approve(&suite.relay.clone(), 1_000);
    let gas_before = suite.gas_balance(&suite.user);

    let res = suite.send(1_000, None, &coins(MIN_GAS - 1, GAS_DENOM));
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Insufficient gas payment"));

    assert_eq!(suite.balance(&suite.user), INITIAL_TOKENS);
    assert_eq!(suite.balance(&suite.relay), 0);
    assert_eq!(suite.allowance(&suite.user, &suite.relay), 1_000);
    assert_eq!(suite.gas_balance(&suite.user), gas_before);
}

#[test]
fn test_unsupported_chain_rolls_back_gas_payment() {
    let mut suite = Suite::with_gateway_chains(vec!["osmosis".to_string()]);
    suite.approve(&suite.relay.clone(), 1_000);
    let gas_before = suite.gas_balance(&suite.user);

    let res = suite.send(1_000, None, &coins(GAS, GAS_DENOM));
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unsupported destination chain: neutron"));

    assert!(suite.gas_payments().is_empty());
    assert_eq!(suite.gas_balance(&suite.user), gas_before);
    assert_eq!(suite.gas_balance(&suite.gas_service), 0);
    assert_eq!(suite.balance(&suite.user), INITIAL_TOKENS);
    assert_eq!(suite.allowance(&suite.relay, &suite.gateway), 0);
}
