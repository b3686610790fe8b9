use common::FixedI128;
use soroban_sdk::Env;

/// Proportion of par collateral released per unit of repaid debt
/// after `elapsed` seconds of auction.
///
/// Grows linearly from `initial_proportion` at the auction start up to one at `auction_time`
/// and stays at one afterwards:
///
/// ```text
/// proportion = initial + (1 - initial) * min(elapsed, auction_time) / auction_time
/// ```
///
/// Zero `auction_time` means no decay window. The increment is rounded down.
pub fn price_decay(
    env: &Env,
    elapsed: u64,
    initial_proportion: i128,
    auction_time: u64,
) -> Option<FixedI128> {
    if auction_time == 0 || elapsed >= auction_time {
        return Some(FixedI128::ONE);
    }

    let initial = FixedI128::from_inner(initial_proportion);

    FixedI128::ONE
        .checked_sub(initial)?
        .mul_ratio(env, elapsed, auction_time)?
        .checked_add(initial)
}

/// Collateral owed for `debt_repaid` of a vault holding `collateral` against `debt`.
/// Par amount `debt_repaid * collateral / debt` is scaled by `proportion`, both steps round down.
/// Intermediate products are widened to I256, so any vault held in i128 amounts is priced.
pub fn collateral_for_debt(
    env: &Env,
    debt_repaid: i128,
    collateral: i128,
    debt: i128,
    proportion: FixedI128,
) -> Option<i128> {
    let par = FixedI128::from_inner(debt_repaid)
        .mul_ratio(env, collateral, debt)?
        .into_inner();

    Some(proportion.mul_int(env, par))
}
