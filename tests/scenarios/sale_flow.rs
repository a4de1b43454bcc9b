use crate::fixtures::*;
use token_sale::SaleError;

#[test]
fn test_base_sale_forwards_contribution_immediately() {
    let w = World::new();
    let sale = w.base_sale();
    let contributor = w.investor(10 * UNIT, false);

    set_time(&w.env, T + DAY);
    let index = sale.contribute(&contributor, &(2 * UNIT));

    assert_eq!(index, 0);
    assert_eq!(sale.total_raised(), 2 * UNIT);
    assert_eq!(w.payment.balance(&w.wallet), 2 * UNIT);
    assert_eq!(w.payment.balance(&sale.address), 0);

    let record = sale.get_contribution(&0);
    assert_eq!(record.contributor, contributor);
    assert_eq!(record.amount, 2 * UNIT);
    assert_eq!(record.timestamp, T + DAY);
}

#[test]
fn test_capped_sale_allocates_after_end() {
    let w = World::new();
    let sale = w.capped_sale();
    let contributor = w.investor(10 * UNIT, true);

    set_time(&w.env, T + DAY);
    let index = sale.contribute(&contributor, &(2 * UNIT));
    assert_eq!(w.payment.balance(&w.wallet), 2 * UNIT);

    set_time(&w.env, T + 7 * DAY + 1);
    sale.allocate_tokens(&w.operator, &index, &(2 * UNIT));

    assert_eq!(w.token.balance(&contributor), 2 * UNIT);
    assert!(sale.get_contribution(&index).allocated);
    assert_eq!(
        sale.try_allocate_tokens(&w.operator, &index, &(2 * UNIT)),
        Err(Ok(SaleError::AlreadyAllocated))
    );
    assert_eq!(w.token.total_supply(), 2 * UNIT);
}

#[test]
fn test_capped_sale_never_mints_past_caps() {
    let w = World::new();
    let sale = w.capped_sale();
    let investors: Vec<_> = (0..11).map(|_| w.investor(UNIT, true)).collect();

    for investor in investors.iter().take(10) {
        sale.owner_assigned_tokens(&w.operator, investor, &(100 * UNIT));
    }
    assert_eq!(sale.distributed_supply(), 1_000 * UNIT);
    assert!(sale.has_ended());

    assert_eq!(
        sale.try_owner_assigned_tokens(&w.operator, &investors[10], &1),
        Err(Ok(SaleError::TokenCapExceeded))
    );
    assert_eq!(w.token.total_supply(), 1_000 * UNIT);
}

#[test]
fn test_ownership_returns_to_operator_after_sale() {
    let w = World::new();
    let sale = w.capped_sale();
    assert_eq!(w.token.owner(), sale.address);

    assert_eq!(
        sale.try_transfer_token_ownership(&w.operator, &sale.address),
        Err(Ok(SaleError::InvalidAddress))
    );
    sale.transfer_token_ownership(&w.operator, &w.operator);
    assert_eq!(w.token.owner(), w.operator);
}
