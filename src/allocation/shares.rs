use std::collections::BTreeMap;

use super::facing::Facing;

/// Build the share table used for one allocation.
///
/// Starts from the base shares and, when `remove_turret` is set, deletes the
/// Turret entry and spreads its share evenly across the four survivors. The
/// spread stays as `turret_share / 4` arithmetic rather than precomputed
/// literals: a hardcoded 0.34175 differs from the computed sum in the last
/// ulp, which is enough to flip a rounding at a tie boundary.
///
/// The surviving shares always sum to 1.0.
pub fn share_table(remove_turret: bool) -> BTreeMap<Facing, f64> {
    let mut shares: BTreeMap<Facing, f64> = Facing::all()
        .iter()
        .map(|facing| (*facing, facing.base_share()))
        .collect();

    if remove_turret {
        if let Some(turret_share) = shares.remove(&Facing::Turret) {
            let spread = turret_share / shares.len() as f64;
            for share in shares.values_mut() {
                *share += spread;
            }
        }
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table_has_five_facings() {
        let shares = share_table(false);
        assert_eq!(shares.len(), 5);
        assert!(shares.contains_key(&Facing::Turret));
    }

    #[test]
    fn test_full_table_sums_to_one() {
        let total: f64 = share_table(false).values().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_turretless_table_sums_to_one() {
        let shares = share_table(true);
        assert_eq!(shares.len(), 4);
        assert!(!shares.contains_key(&Facing::Turret));
        let total: f64 = shares.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_turret_share_spread_evenly() {
        let base = share_table(false);
        let reduced = share_table(true);
        let spread = Facing::Turret.base_share() / 4.0;
        for (facing, share) in &reduced {
            let expected = base[facing] + spread;
            assert!(
                (share - expected).abs() < 1e-12,
                "{:?}: {} vs {}",
                facing,
                share,
                expected
            );
        }
    }

    #[test]
    fn test_iteration_order_is_canonical() {
        let order: Vec<Facing> = share_table(false).keys().copied().collect();
        assert_eq!(
            order,
            vec![
                Facing::Front,
                Facing::LeftSide,
                Facing::RightSide,
                Facing::Rear,
                Facing::Turret,
            ]
        );
    }
}
