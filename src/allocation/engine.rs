use std::collections::BTreeMap;

use super::facing::Facing;
use super::shares::share_table;

/// One computed armour distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Points per surviving facing, iterating in canonical facing order
    pub points: BTreeMap<Facing, u32>,
    /// Points by which the summed allocation exceeds the requested budget.
    ///
    /// Zero in the common case. Nonzero when rounding overshoots and the
    /// reconciliation rules cannot absorb the difference: the default policy
    /// repairs shortfalls only, and the coarse policy clamps Rear and Turret
    /// at zero without ever reducing the side facings.
    pub excess: u32,
}

impl Allocation {
    /// Sum of all allocated points
    pub fn total(&self) -> u32 {
        self.points.values().sum()
    }

    /// True when the allocation sums exactly to the requested budget
    pub fn is_balanced(&self) -> bool {
        self.excess == 0
    }
}

/// Distribute an armour point budget across the vehicle facings.
///
/// Each surviving facing first receives `total_points * share` as a real
/// number (see [`share_table`] for the shares and the turret-removal rule),
/// then one of two rounding policies turns that into whole points:
///
/// * default (`round_each == false`): round each facing to the nearest
///   integer (ties to even), then hand out any shortfall one point per
///   facing in canonical order until it is gone.
/// * coarse (`round_each == true`): snap Front up to the next multiple of
///   five and every other facing to the nearest multiple of five, then
///   reconcile: an overage comes out of Rear, then Turret, each clamped at
///   zero; a shortfall is added to Front in full.
///
/// Either policy can leave the total a point or two above the budget when
/// rounding overshoots; the leftover is reported in [`Allocation::excess`]
/// rather than redistributed.
pub fn allocate(total_points: u32, round_each: bool, remove_turret: bool) -> Allocation {
    let shares = share_table(remove_turret);

    // Unrounded point allocations, shared by both policies
    let raw: BTreeMap<Facing, f64> = shares
        .iter()
        .map(|(facing, share)| (*facing, total_points as f64 * share))
        .collect();

    let points = if round_each {
        round_coarse(&raw, total_points)
    } else {
        round_default(&raw, total_points)
    };

    let allocated: u32 = points.values().sum();
    Allocation {
        excess: allocated.saturating_sub(total_points),
        points,
    }
}

/// Round to the nearest multiple of 5, ties to even: `5 * round(n / 5)`.
fn round_to_nearest_5(n: f64) -> u32 {
    (n / 5.0).round_ties_even() as u32 * 5
}

/// Round up to the next multiple of 5: `5 * ceil(n / 5)`.
fn round_up_to_5(n: f64) -> u32 {
    (n / 5.0).ceil() as u32 * 5
}

/// Nearest-integer rounding per facing, then a single shortfall pass in map
/// order. Overshoots are left in place; there is no downward pass.
fn round_default(raw: &BTreeMap<Facing, f64>, total_points: u32) -> BTreeMap<Facing, u32> {
    let mut points: BTreeMap<Facing, u32> = raw
        .iter()
        .map(|(facing, value)| (*facing, value.round_ties_even() as u32))
        .collect();

    let allocated: u32 = points.values().sum();
    if allocated < total_points {
        let mut leftover = total_points - allocated;
        for value in points.values_mut() {
            if leftover == 0 {
                break;
            }
            *value += 1;
            leftover -= 1;
        }
    }

    points
}

/// Multiple-of-five snapping (Front always up), then total reconciliation
/// through Rear and Turret. When the overage exceeds Rear, Rear zeroes out
/// and the remainder comes from Turret, clamped at zero; whatever neither
/// can absorb stays in the total.
fn round_coarse(raw: &BTreeMap<Facing, f64>, total_points: u32) -> BTreeMap<Facing, u32> {
    let mut points: BTreeMap<Facing, u32> = raw
        .iter()
        .map(|(facing, value)| {
            let snapped = if *facing == Facing::Front {
                round_up_to_5(*value)
            } else {
                round_to_nearest_5(*value)
            };
            (*facing, snapped)
        })
        .collect();

    let total_rounded: u32 = points.values().sum();

    if total_rounded > total_points {
        let overage = total_rounded - total_points;
        let rear = points.get(&Facing::Rear).copied().unwrap_or(0);
        if rear >= overage {
            points.insert(Facing::Rear, rear - overage);
        } else {
            let deficit = overage - rear;
            points.insert(Facing::Rear, 0);
            if let Some(turret) = points.get_mut(&Facing::Turret) {
                *turret = turret.saturating_sub(deficit);
            }
        }
    } else if total_rounded < total_points {
        if let Some(front) = points.get_mut(&Facing::Front) {
            *front += total_points - total_rounded;
        }
    }

    points
}
