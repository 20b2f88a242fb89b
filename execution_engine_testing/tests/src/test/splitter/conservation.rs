use proptest::prelude::*;

use casper_splitter_test_support::{RecipientBehaviour, SplitterTestBuilder};
use casper_types::{account::AccountHash, U512};

use super::{ALICE_ADDR, BOB_ADDR, CAROL_ADDR};

#[derive(Clone, Debug)]
enum Operation {
    Split {
        caller: usize,
        receiver1: usize,
        receiver2: usize,
        amount: u64,
    },
    Withdraw(usize),
    SetBehaviour(usize, RecipientBehaviour),
}

fn accounts() -> [AccountHash; 3] {
    [*ALICE_ADDR, *BOB_ADDR, *CAROL_ADDR]
}

fn behaviour() -> impl Strategy<Value = RecipientBehaviour> {
    prop_oneof![
        Just(RecipientBehaviour::Accept),
        Just(RecipientBehaviour::Reject),
        Just(RecipientBehaviour::ReenterWithdraw),
        (0..3usize, 0..3usize, 0..1_000u64).prop_map(|(receiver1, receiver2, amount)| {
            let accounts = accounts();
            RecipientBehaviour::ReenterSplit {
                receiver1: accounts[receiver1],
                receiver2: accounts[receiver2],
                amount: amount.into(),
            }
        }),
    ]
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0..3usize, 0..3usize, 0..3usize, 0..20_000u64).prop_map(
            |(caller, receiver1, receiver2, amount)| Operation::Split {
                caller,
                receiver1,
                receiver2,
                amount,
            }
        ),
        2 => (0..3usize).prop_map(Operation::Withdraw),
        1 => (0..3usize, behaviour()).prop_map(|(account, behaviour)| {
            Operation::SetBehaviour(account, behaviour)
        }),
    ]
}

proptest! {
    #[test]
    fn custody_should_always_cover_credited_balances(
        operations in prop::collection::vec(operation(), 1..40)
    ) {
        let accounts = accounts();
        let mut builder = SplitterTestBuilder::default();
        for account in accounts {
            builder.with_funded_account(account, U512::from(10_000));
        }
        let total_supply = builder.total_supply();

        for operation in operations {
            match operation {
                Operation::Split { caller, receiver1, receiver2, amount } => {
                    builder.split(
                        accounts[caller],
                        accounts[receiver1],
                        accounts[receiver2],
                        amount.into(),
                    );
                }
                Operation::Withdraw(account) => {
                    let credited = builder.balance_of(accounts[account]);
                    builder.withdraw(accounts[account]);
                    if builder.get_last_exec_result().is_success() {
                        prop_assert!(!credited.is_zero());
                    } else {
                        prop_assert_eq!(builder.balance_of(accounts[account]), credited);
                    }
                }
                Operation::SetBehaviour(account, behaviour) => {
                    builder.with_behaviour(accounts[account], behaviour);
                }
            }

            builder.assert_conservation();
            prop_assert_eq!(builder.total_supply(), total_supply);
        }
    }
}
