use crate::fixtures::*;
use soroban_sdk::vec;
use token_vesting::VestingError;

#[test]
fn test_two_grants_release_one_year_apart() {
    let w = World::new();
    let vesting = w.vesting();
    let a = w.investor(0, true);
    w.token.mint(&vesting.address, &(100 * UNIT));

    let release = T + 30 * DAY;
    vesting.add_vesting(
        &w.operator,
        &vec![&w.env, a.clone()],
        &vec![&w.env, 10 * UNIT],
        &vec![&w.env, release],
    );
    vesting.add_vesting(
        &w.operator,
        &vec![&w.env, a.clone()],
        &vec![&w.env, 35 * UNIT],
        &vec![&w.env, release + YEAR],
    );

    set_time(&w.env, release - 1);
    assert_eq!(
        vesting.try_claim(&a),
        Err(Ok(VestingError::NothingToClaim))
    );

    set_time(&w.env, release);
    vesting.claim(&a);
    assert_eq!(w.token.balance(&a), 10 * UNIT);

    set_time(&w.env, release + YEAR);
    vesting.claim(&a);
    assert_eq!(w.token.balance(&a), 45 * UNIT);

    assert_eq!(
        vesting.try_claim(&a),
        Err(Ok(VestingError::NothingToClaim))
    );
    assert_eq!(w.token.balance(&vesting.address), 55 * UNIT);
}

#[test]
fn test_vesting_pays_only_approved_beneficiaries() {
    let w = World::new();
    let vesting = w.vesting();
    let approved = w.investor(0, true);
    let unapproved = w.investor(0, false);
    w.token.mint(&vesting.address, &(20 * UNIT));

    vesting.add_vesting(
        &w.operator,
        &vec![&w.env, approved.clone(), unapproved.clone()],
        &vec![&w.env, 5 * UNIT, 5 * UNIT],
        &vec![&w.env, T, T],
    );

    set_time(&w.env, T);
    assert_eq!(
        vesting.try_claim(&unapproved),
        Err(Ok(VestingError::NotEligible))
    );
    assert_eq!(vesting.claim(&approved), 5 * UNIT);
    assert_eq!(w.token.balance(&unapproved), 0);
}
