use casper_splitter::{Error, FundsWithdrawn, SplitAmounts, SplitPerformed, SplitterEvent};
use casper_splitter_test_support::{
    CallOutcome, RecipientBehaviour, ReentryAttempt, SplitterCall, SplitterConfig,
    SplitterTestBuilder, DEFAULT_ACCOUNT_ADDR, DEFAULT_ACCOUNT_BALANCE,
};
use casper_types::U512;

use super::{ALICE_ADDR, BOB_ADDR, CAROL_ADDR};

fn setup(builder: &mut SplitterTestBuilder) {
    builder
        .with_account(*ALICE_ADDR)
        .with_account(*BOB_ADDR)
        .split(*DEFAULT_ACCOUNT_ADDR, *ALICE_ADDR, *BOB_ADDR, 100.into())
        .expect_success();
}

#[test]
fn should_pay_reentrant_withdrawer_once() {
    let mut builder = SplitterTestBuilder::default();
    setup(&mut builder);
    builder.with_behaviour(*ALICE_ADDR, RecipientBehaviour::ReenterWithdraw);

    builder.withdraw(*ALICE_ADDR).expect_success();

    assert_eq!(
        builder.purse_balance(*ALICE_ADDR),
        *DEFAULT_ACCOUNT_BALANCE + U512::from(50)
    );
    assert_eq!(builder.balance_of(*ALICE_ADDR), U512::zero());
    assert_eq!(builder.custody_balance(), U512::from(50));
    assert_eq!(
        builder.get_reentry_attempts(),
        &[ReentryAttempt {
            caller: *ALICE_ADDR,
            depth: 2,
            call: SplitterCall::Withdraw,
            result: Err(Error::NoBalance),
        }]
    );
    assert_eq!(builder.last_events().len(), 1);
    builder.assert_conservation();
}

#[test]
fn should_keep_nested_split_made_while_receiving() {
    let mut builder = SplitterTestBuilder::default();
    setup(&mut builder);
    builder.with_behaviour(
        *ALICE_ADDR,
        RecipientBehaviour::ReenterSplit {
            receiver1: *BOB_ADDR,
            receiver2: *CAROL_ADDR,
            amount: 21.into(),
        },
    );

    builder.withdraw(*ALICE_ADDR).expect_success();

    assert_eq!(
        builder.purse_balance(*ALICE_ADDR),
        *DEFAULT_ACCOUNT_BALANCE + U512::from(50) - U512::from(21)
    );
    assert_eq!(builder.balance_of(*ALICE_ADDR), U512::one());
    assert_eq!(builder.balance_of(*BOB_ADDR), U512::from(60));
    assert_eq!(builder.balance_of(*CAROL_ADDR), U512::from(10));
    assert_eq!(
        builder.last_events(),
        &[
            SplitterEvent::SplitPerformed(SplitPerformed {
                sender: *ALICE_ADDR,
                receiver1: *BOB_ADDR,
                receiver2: *CAROL_ADDR,
                amount_each_received: U512::from(10),
                remainder: U512::one(),
            }),
            SplitterEvent::FundsWithdrawn(FundsWithdrawn {
                withdrawer: *ALICE_ADDR,
                amount: U512::from(50),
            }),
        ]
    );
    assert_eq!(
        builder.get_reentry_attempts()[0].result,
        Ok(CallOutcome::Split(SplitAmounts {
            share: U512::from(10),
            remainder: U512::one(),
        }))
    );
    builder.assert_conservation();
}

#[test]
fn should_discard_failed_nested_split_only() {
    let mut builder = SplitterTestBuilder::default();
    setup(&mut builder);
    builder.with_behaviour(
        *ALICE_ADDR,
        RecipientBehaviour::ReenterSplit {
            receiver1: *BOB_ADDR,
            receiver2: *CAROL_ADDR,
            amount: *DEFAULT_ACCOUNT_BALANCE * 2,
        },
    );

    builder.withdraw(*ALICE_ADDR).expect_success();

    assert_eq!(
        builder.purse_balance(*ALICE_ADDR),
        *DEFAULT_ACCOUNT_BALANCE + U512::from(50)
    );
    assert_eq!(builder.balance_of(*BOB_ADDR), U512::from(50));
    assert_eq!(builder.balance_of(*CAROL_ADDR), U512::zero());
    assert_eq!(
        builder.get_reentry_attempts()[0].result,
        Err(Error::DepositFailed)
    );
    assert_eq!(builder.last_events().len(), 1);
    builder.assert_conservation();
}

#[test]
fn should_fail_transfer_when_call_depth_is_exhausted() {
    let config = SplitterConfig::new(1, *DEFAULT_ACCOUNT_BALANCE);
    let mut builder = SplitterTestBuilder::new_with_config(config);
    setup(&mut builder);
    builder.with_behaviour(*ALICE_ADDR, RecipientBehaviour::ReenterWithdraw);

    builder.withdraw(*ALICE_ADDR).expect_failure();
    builder.assert_error(Error::TransferFailed);

    assert_eq!(builder.balance_of(*ALICE_ADDR), U512::from(50));
    assert_eq!(builder.purse_balance(*ALICE_ADDR), *DEFAULT_ACCOUNT_BALANCE);
    assert_eq!(builder.custody_balance(), U512::from(100));
    assert!(builder.get_reentry_attempts().is_empty());
}

#[test]
fn should_credit_rejecting_account_through_nested_split() {
    // Crediting the ledger never transfers, so the refusal only surfaces on withdrawal.
    let mut builder = SplitterTestBuilder::default();
    setup(&mut builder);
    builder
        .with_behaviour(*ALICE_ADDR, RecipientBehaviour::Reject)
        .with_behaviour(
            *BOB_ADDR,
            RecipientBehaviour::ReenterSplit {
                receiver1: *ALICE_ADDR,
                receiver2: *ALICE_ADDR,
                amount: 4.into(),
            },
        );

    builder.withdraw(*BOB_ADDR).expect_success();

    assert_eq!(builder.balance_of(*ALICE_ADDR), U512::from(54));
    assert_eq!(builder.balance_of(*BOB_ADDR), U512::zero());

    builder.withdraw(*ALICE_ADDR).expect_failure();
    builder.assert_error(Error::TransferFailed);
    assert_eq!(builder.balance_of(*ALICE_ADDR), U512::from(54));
    builder.assert_conservation();
}
