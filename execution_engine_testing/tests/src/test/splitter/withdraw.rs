use casper_splitter::{Error, FundsWithdrawn, SplitterEvent};
use casper_splitter_test_support::{
    CallOutcome, ExecuteRequestBuilder, RecipientBehaviour, SplitterTestBuilder,
    DEFAULT_ACCOUNT_ADDR, DEFAULT_ACCOUNT_BALANCE,
};
use casper_types::U512;

use super::{ALICE_ADDR, BOB_ADDR};

fn setup() -> SplitterTestBuilder {
    let mut builder = SplitterTestBuilder::default();
    builder
        .with_account(*ALICE_ADDR)
        .with_account(*BOB_ADDR)
        .split(*DEFAULT_ACCOUNT_ADDR, *ALICE_ADDR, *BOB_ADDR, 100.into())
        .expect_success();
    builder
}

#[test]
fn should_pay_out_credited_balance() {
    let mut builder = setup();

    builder.withdraw(*ALICE_ADDR).expect_success();

    assert_eq!(
        builder.get_last_exec_result().outcome(),
        Some(CallOutcome::Withdraw(U512::from(50)))
    );
    assert_eq!(builder.balance_of(*ALICE_ADDR), U512::zero());
    assert_eq!(
        builder.purse_balance(*ALICE_ADDR),
        *DEFAULT_ACCOUNT_BALANCE + U512::from(50)
    );
    assert_eq!(builder.custody_balance(), U512::from(50));
    assert_eq!(
        builder.last_events(),
        &[SplitterEvent::FundsWithdrawn(FundsWithdrawn {
            withdrawer: *ALICE_ADDR,
            amount: U512::from(50),
        })]
    );
    builder.assert_conservation();
}

#[test]
fn should_leave_other_balances_untouched() {
    let mut builder = setup();

    builder.withdraw(*ALICE_ADDR).expect_success();

    assert_eq!(builder.balance_of(*BOB_ADDR), U512::from(50));
    assert_eq!(builder.purse_balance(*BOB_ADDR), *DEFAULT_ACCOUNT_BALANCE);
}

#[test]
fn should_reject_withdraw_without_balance() {
    let mut builder = SplitterTestBuilder::default();

    builder.withdraw(*ALICE_ADDR).expect_failure();
    builder.assert_error(Error::NoBalance);
    assert!(builder.events().is_empty());
}

#[test]
fn should_not_pay_out_twice() {
    let mut builder = setup();

    builder
        .withdraw(*ALICE_ADDR)
        .expect_success()
        .withdraw(*ALICE_ADDR)
        .expect_failure();
    builder.assert_error(Error::NoBalance);

    assert_eq!(
        builder.purse_balance(*ALICE_ADDR),
        *DEFAULT_ACCOUNT_BALANCE + U512::from(50)
    );
    assert_eq!(builder.events().len(), 2);
}

#[test]
fn should_keep_balance_when_recipient_rejects_transfer() {
    let mut builder = setup();
    builder.with_behaviour(*ALICE_ADDR, RecipientBehaviour::Reject);

    builder.withdraw(*ALICE_ADDR).expect_failure();
    builder.assert_error(Error::TransferFailed);

    assert_eq!(builder.balance_of(*ALICE_ADDR), U512::from(50));
    assert_eq!(builder.purse_balance(*ALICE_ADDR), *DEFAULT_ACCOUNT_BALANCE);
    assert_eq!(builder.custody_balance(), U512::from(100));
    assert_eq!(builder.events().len(), 1);

    builder
        .with_behaviour(*ALICE_ADDR, RecipientBehaviour::Accept)
        .withdraw(*ALICE_ADDR)
        .expect_success();
    assert_eq!(builder.balance_of(*ALICE_ADDR), U512::zero());
    builder.assert_conservation();
}

#[test]
fn should_report_balance_of_any_account() {
    let mut builder = setup();

    let request = ExecuteRequestBuilder::balance_of(*BOB_ADDR)
        .with_caller(*ALICE_ADDR)
        .build();
    builder.exec(request).commit().expect_success();

    assert_eq!(
        builder.get_last_exec_result().outcome(),
        Some(CallOutcome::BalanceOf(U512::from(50)))
    );
    assert!(builder.get_last_exec_result().effects().is_empty());

    let request = ExecuteRequestBuilder::balance_of(*DEFAULT_ACCOUNT_ADDR).build();
    builder.exec(request).expect_success();
    assert_eq!(
        builder.get_last_exec_result().outcome(),
        Some(CallOutcome::BalanceOf(U512::zero()))
    );
}

#[test]
fn dry_run_withdraw_should_leave_state_untouched() {
    let builder = setup();

    assert_eq!(builder.dry_run_withdraw(*ALICE_ADDR), Ok(U512::from(50)));
    assert_eq!(
        builder.dry_run_withdraw(*DEFAULT_ACCOUNT_ADDR),
        Err(Error::NoBalance)
    );

    assert_eq!(builder.balance_of(*ALICE_ADDR), U512::from(50));
    assert_eq!(builder.purse_balance(*ALICE_ADDR), *DEFAULT_ACCOUNT_BALANCE);
}
