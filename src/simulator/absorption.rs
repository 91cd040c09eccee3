//! First-order absorption of discrete drinks

type T = f64;

/// Cumulative grams absorbed from one drink taken at `t_drink`, evaluated at `t`
///
/// Nothing is absorbed before the drink is taken.
#[inline]
pub fn absorbed_from_drink(grams: T, k: T, t_drink: T, t: T) -> T {
    if t < t_drink {
        return 0.0;
    }
    grams * (1.0 - (-k * (t - t_drink)).exp())
}

/// Total grams absorbed at `t` from every drink in the schedule
pub fn total_absorbed(grams_per_drink: T, k: T, drink_times: &[T], t: T) -> T {
    drink_times
        .iter()
        .map(|&t_i| absorbed_from_drink(grams_per_drink, k, t_i, t))
        .sum()
}
