use crate::fixtures::*;
use public_sale::VaultState;
use token_sale::SaleError;

#[test]
fn test_missed_threshold_returns_contributions() {
    let w = World::new();
    let sale = w.public_sale(500 * UNIT);
    let contributor = w.investor(10 * UNIT, true);

    set_time(&w.env, T + DAY);
    let index = sale.contribute(&contributor, &(2 * UNIT));
    assert_eq!(w.payment.balance(&sale.address), 2 * UNIT);
    assert_eq!(w.payment.balance(&contributor), 8 * UNIT);

    set_time(&w.env, T + 8 * DAY + 1);
    assert_eq!(
        sale.try_close_refunds(&w.operator),
        Err(Ok(SaleError::ThresholdNotMet))
    );

    sale.enable_refunds(&w.operator);
    sale.refund_contribution(&w.operator, &index);

    assert_eq!(w.payment.balance(&contributor), 10 * UNIT);
    assert_eq!(w.payment.balance(&sale.address), 0);
    assert_eq!(w.payment.balance(&w.wallet), 0);
    assert_eq!(sale.vault_state(), VaultState::Refunding);
    assert_eq!(
        sale.try_refund_contribution(&w.operator, &index),
        Err(Ok(SaleError::AlreadyRefunded))
    );
}

#[test]
fn test_met_threshold_releases_escrow_to_wallet() {
    let w = World::new();
    let sale = w.public_sale(150 * UNIT);
    let a = w.investor(50 * UNIT, true);
    let b = w.investor(50 * UNIT, true);

    set_time(&w.env, T + DAY);
    let ia = sale.contribute(&a, &(20 * UNIT));
    let ib = sale.contribute(&b, &(30 * UNIT));

    set_time(&w.env, T + 7 * DAY + 1);
    sale.allocate_tokens(&w.operator, &ia, &(80 * UNIT));
    sale.allocate_tokens(&w.operator, &ib, &(70 * UNIT));

    set_time(&w.env, T + 8 * DAY + 1);
    assert_eq!(sale.close_refunds(&w.operator), 50 * UNIT);
    assert_eq!(w.payment.balance(&w.wallet), 50 * UNIT);
    assert_eq!(sale.vault_state(), VaultState::Closed);
    assert_eq!(
        sale.try_enable_refunds(&w.operator),
        Err(Ok(SaleError::VaultNotActive))
    );
    assert_eq!(w.token.balance(&a), 80 * UNIT);
    assert_eq!(w.token.balance(&b), 70 * UNIT);
}

#[test]
fn test_refunds_never_exceed_deposits() {
    let w = World::new();
    let sale = w.public_sale(500 * UNIT);
    let a = w.investor(10 * UNIT, true);
    let b = w.investor(10 * UNIT, true);

    set_time(&w.env, T + DAY);
    let a1 = sale.contribute(&a, &(3 * UNIT));
    let a2 = sale.contribute(&a, &(4 * UNIT));
    let b1 = sale.contribute(&b, &(5 * UNIT));

    set_time(&w.env, T + 7 * DAY + 1);
    sale.allocate_tokens(&w.operator, &a2, &UNIT);
    sale.enable_refunds(&w.operator);

    sale.refund_contribution(&w.operator, &a1);
    sale.refund_contribution(&w.operator, &b1);
    assert_eq!(
        sale.try_refund_contribution(&w.operator, &a2),
        Err(Ok(SaleError::AlreadyAllocated))
    );

    assert_eq!(w.payment.balance(&a), 6 * UNIT);
    assert_eq!(w.payment.balance(&b), 10 * UNIT);
    assert_eq!(sale.deposit_of(&a), 4 * UNIT);
    assert_eq!(sale.vault_balance(), 4 * UNIT);
    assert_eq!(w.payment.balance(&sale.address), 4 * UNIT);
}
