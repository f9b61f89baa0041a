use atlantic_payout::domain::error::PayoutError;
use atlantic_payout::domain::money::{
    MIN_NOMINAL_EXCLUSIVE, RequestedAmount, WITHDRAW_FEE, resolve_nominal,
};
use proptest::prelude::*;

proptest! {
    /// Withdraw-all takes the balance minus the fee, or refuses when nothing is left.
    #[test]
    fn withdraw_all_is_balance_minus_fee(balance in 0u64..=10_000_000_000) {
        match resolve_nominal(balance, None, true) {
            Ok(nominal) => {
                prop_assert!(balance > WITHDRAW_FEE);
                prop_assert_eq!(nominal.value(), balance - WITHDRAW_FEE);
            }
            Err(e) => {
                prop_assert!(balance <= WITHDRAW_FEE);
                prop_assert!(matches!(e, PayoutError::InsufficientBalance(_)));
            }
        }
    }

    /// With withdraw-all, whatever amount was typed is ignored.
    #[test]
    fn withdraw_all_ignores_requested_amount(balance in 2_001u64..1_000_000, typed in any::<i64>()) {
        let requested = RequestedAmount::Integer(typed);
        let nominal = resolve_nominal(balance, Some(&requested), true).unwrap();
        prop_assert_eq!(nominal.value(), balance - WITHDRAW_FEE);
    }

    /// An explicit amount resolves iff it is an integer above the minimum.
    #[test]
    fn explicit_amount_threshold(amount in -100_000i64..100_000) {
        let requested = RequestedAmount::Text(amount.to_string());
        let result = resolve_nominal(0, Some(&requested), false);
        if amount > MIN_NOMINAL_EXCLUSIVE as i64 {
            prop_assert_eq!(result.unwrap().value(), amount as u64);
        } else {
            prop_assert_eq!(
                result.unwrap_err(),
                PayoutError::InvalidAmount("Nominal minimal Rp 2,001".into())
            );
        }
    }

    /// Text without leading digits never resolves.
    #[test]
    fn non_numeric_text_is_invalid(text in "[a-zA-Z ,.]{0,12}") {
        let requested = RequestedAmount::Text(text);
        let result = resolve_nominal(1_000_000, Some(&requested), false);
        prop_assert!(matches!(result, Err(PayoutError::InvalidAmount(_))), "{:?}", result);
    }
}

#[test]
fn boundary_2000_fails_2001_succeeds() {
    let at = RequestedAmount::Text("2000".into());
    let above = RequestedAmount::Text("2001".into());
    assert!(resolve_nominal(0, Some(&at), false).is_err());
    assert_eq!(resolve_nominal(0, Some(&above), false).unwrap().value(), 2001);
}

#[test]
fn explicit_amount_parses_leniently() {
    let cases = [
        (RequestedAmount::Text("  5000".into()), Some(5000)),
        (RequestedAmount::Text("2500abc".into()), Some(2500)),
        (RequestedAmount::Text("3000.9".into()), Some(3000)),
        (RequestedAmount::Text("+4000".into()), Some(4000)),
        (RequestedAmount::Decimal(4500.75), Some(4500)),
        (RequestedAmount::Integer(9000), Some(9000)),
        (RequestedAmount::Text("".into()), None),
        (RequestedAmount::Text("Rp5000".into()), None),
    ];
    for (requested, expected) in cases {
        let got = resolve_nominal(0, Some(&requested), false).ok().map(|n| n.value());
        assert_eq!(got, expected, "{requested:?}");
    }
}

#[test]
fn missing_amount_is_invalid() {
    assert!(matches!(
        resolve_nominal(1_000_000, None, false),
        Err(PayoutError::InvalidAmount(_))
    ));
}
