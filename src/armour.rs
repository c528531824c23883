use anyhow::{bail, Result};
use clap::ValueEnum;

/// Armour families and their point yield per ton of plating.
///
/// The yield drives both the budget (tonnage in, points out) and the
/// per-facing weight figures in reports and CSV exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArmourType {
    Standard,
    FerroFibrous,
    LightFerroFibrous,
    HeavyFerroFibrous,
    Hardened,
    BallisticReinforced,
    ClanFerroFibrous,
    ClanFerroLamellor,
}

impl ArmourType {
    pub fn all() -> [ArmourType; 8] {
        [
            ArmourType::Standard,
            ArmourType::FerroFibrous,
            ArmourType::LightFerroFibrous,
            ArmourType::HeavyFerroFibrous,
            ArmourType::Hardened,
            ArmourType::BallisticReinforced,
            ArmourType::ClanFerroFibrous,
            ArmourType::ClanFerroLamellor,
        ]
    }

    /// Armour points granted by one ton of this armour
    pub fn points_per_ton(&self) -> f64 {
        match self {
            ArmourType::Standard => 16.0,
            ArmourType::FerroFibrous => 17.92,
            ArmourType::LightFerroFibrous => 16.96,
            ArmourType::HeavyFerroFibrous => 19.84,
            ArmourType::Hardened => 8.0,
            ArmourType::BallisticReinforced => 12.0,
            ArmourType::ClanFerroFibrous => 19.20,
            ArmourType::ClanFerroLamellor => 14.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArmourType::Standard => "Standard",
            ArmourType::FerroFibrous => "Ferro-Fibrous",
            ArmourType::LightFerroFibrous => "Light Ferro-Fibrous",
            ArmourType::HeavyFerroFibrous => "Heavy Ferro-Fibrous",
            ArmourType::Hardened => "Hardened",
            ArmourType::BallisticReinforced => "Ballistic Reinforced",
            ArmourType::ClanFerroFibrous => "Clan Ferro-Fibrous",
            ArmourType::ClanFerroLamellor => "Clan Ferro-Lamellor",
        }
    }

    /// Name accepted on the command line for this type
    pub fn cli_name(&self) -> &'static str {
        match self {
            ArmourType::Standard => "standard",
            ArmourType::FerroFibrous => "ferro-fibrous",
            ArmourType::LightFerroFibrous => "light-ferro-fibrous",
            ArmourType::HeavyFerroFibrous => "heavy-ferro-fibrous",
            ArmourType::Hardened => "hardened",
            ArmourType::BallisticReinforced => "ballistic-reinforced",
            ArmourType::ClanFerroFibrous => "clan-ferro-fibrous",
            ArmourType::ClanFerroLamellor => "clan-ferro-lamellor",
        }
    }

    /// Display name with the yield attached, e.g. `Standard (16.00 pts/ton)`
    pub fn label(&self) -> String {
        format!("{} ({:.2} pts/ton)", self.name(), self.points_per_ton())
    }

    /// Whole armour points bought by `tonnage` tons of this armour.
    ///
    /// The fractional remainder is truncated, never rounded: 10 tons of
    /// Ferro-Fibrous is 179 points, not 180.
    pub fn total_points(&self, tonnage: f64) -> u32 {
        (tonnage * self.points_per_ton()) as u32
    }
}

/// Reject tonnage values the calculator cannot price.
pub fn validate_tonnage(tonnage: f64) -> Result<()> {
    if !tonnage.is_finite() {
        bail!("tonnage must be a finite number");
    }
    if tonnage < 0.0 {
        bail!("tonnage cannot be negative: {}", tonnage);
    }
    Ok(())
}
