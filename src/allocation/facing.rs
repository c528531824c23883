/// Armoured facings of a ground vehicle (5 total).
///
/// The derived ordering is the canonical facing order: Front, Left Side,
/// Right Side, Rear, Turret. Share tables and allocations are keyed by this
/// enum in `BTreeMap`s, so they iterate in exactly this order and the
/// shortfall pass of the default rounding policy always tops up Turret last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facing {
    Front,
    LeftSide,
    RightSide,
    Rear,
    /// Only present on turreted hulls; removable via the turret option
    Turret,
}

impl Facing {
    /// Returns all facings in canonical order
    pub fn all() -> [Facing; 5] {
        [
            Facing::Front,
            Facing::LeftSide,
            Facing::RightSide,
            Facing::Rear,
            Facing::Turret,
        ]
    }

    /// Fraction of the armour budget this facing nominally receives.
    /// The five base shares sum to 1.0.
    pub fn base_share(&self) -> f64 {
        match self {
            Facing::Front => 0.30,
            Facing::LeftSide | Facing::RightSide => 0.208,
            Facing::Rear => 0.117,
            Facing::Turret => 0.167,
        }
    }

    /// Display label, e.g. "Left Side"
    pub fn label(&self) -> &'static str {
        match self {
            Facing::Front => "Front",
            Facing::LeftSide => "Left Side",
            Facing::RightSide => "Right Side",
            Facing::Rear => "Rear",
            Facing::Turret => "Turret",
        }
    }

    /// Two-letter tag used in the hull diagram
    pub fn tag(&self) -> &'static str {
        match self {
            Facing::Front => "Fr",
            Facing::LeftSide => "Ls",
            Facing::RightSide => "Rs",
            Facing::Rear => "Rr",
            Facing::Turret => "Tu",
        }
    }
}
