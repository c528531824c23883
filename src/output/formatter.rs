use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::allocation::{Allocation, Facing};
use crate::armour::ArmourType;
use crate::theme::Theme;

/// Format the allocation report.
/// Header: armour type, point budget, total weight. Body: one line per
/// facing, "{facing}: {points} points ({weight} tons)". A trailing note
/// appears when rounding left points that no facing absorbed.
pub fn format_report(
    allocation: &Allocation,
    armour: ArmourType,
    tonnage: f64,
    total_points: u32,
    use_colors: bool,
    theme: &Theme,
) -> String {
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!(
            "Armour Type: {}",
            armour.label().style(theme.heading)
        ));
        lines.push(format!(
            "Total Armour Points: {}",
            total_points.style(theme.heading)
        ));
        lines.push(format!(
            "Total Armour Weight: {}",
            format!("{:.2} tons", tonnage).style(theme.heading)
        ));
    } else {
        lines.push(format!("Armour Type: {}", armour.label()));
        lines.push(format!("Total Armour Points: {}", total_points));
        lines.push(format!("Total Armour Weight: {:.2} tons", tonnage));
    }
    lines.push(String::new());

    for (facing, points) in &allocation.points {
        let weight = *points as f64 / armour.points_per_ton();
        if use_colors {
            lines.push(format!(
                "{}: {} points ({:.2} tons)",
                facing.label().style(theme.label),
                points.style(theme.value),
                weight
            ));
        } else {
            lines.push(format!(
                "{}: {} points ({:.2} tons)",
                facing.label(),
                points,
                weight
            ));
        }
    }

    if !allocation.is_balanced() {
        let note = format!(
            "Note: facings total {} points, {} over the requested {}.",
            allocation.total(),
            allocation.excess,
            total_points
        );
        lines.push(String::new());
        if use_colors {
            lines.push(note.style(theme.warning).to_string());
        } else {
            lines.push(note);
        }
    }

    lines.join("\n")
}

/// Format a top-down facing diagram.
/// Front sits over the side row, Rear under it, and the turret occupies the
/// centre cell when present. Cells share one width so the grid stays aligned
/// whatever the point counts.
pub fn format_diagram(allocation: &Allocation, use_colors: bool, theme: &Theme) -> String {
    let num_width = allocation
        .points
        .values()
        .map(|points| points.to_string().len())
        .max()
        .unwrap_or(1);

    let cell = |facing: Facing| -> String {
        let points = allocation.points.get(&facing).copied().unwrap_or(0);
        let number = format!("{:>width$}", points, width = num_width);
        if use_colors {
            format!(
                "[{} {}]",
                facing.tag().style(theme.hull),
                number.style(theme.value)
            )
        } else {
            format!("[{} {}]", facing.tag(), number)
        }
    };

    // Visible width of one cell: brackets, two-char tag, space, number
    let cell_width = num_width + 5;
    let indent = " ".repeat(cell_width + 1);

    let middle = if allocation.points.contains_key(&Facing::Turret) {
        cell(Facing::Turret)
    } else {
        " ".repeat(cell_width)
    };

    let top = format!("{}{}", indent, cell(Facing::Front));
    let sides = format!(
        "{} {} {}",
        cell(Facing::LeftSide),
        middle,
        cell(Facing::RightSide)
    );
    let bottom = format!("{}{}", indent, cell(Facing::Rear));

    [top, sides, bottom].join("\n")
}

/// Format the CSV export: a header row then one row per facing, CRLF
/// terminated. Never coloured.
pub fn format_csv(allocation: &Allocation, armour: ArmourType) -> String {
    let mut out = String::from("Facing,Armour Points,Weight (tons)\r\n");
    for (facing, points) in &allocation.points {
        let weight = *points as f64 / armour.points_per_ton();
        out.push_str(&format!(
            "{},{},{:.2}\r\n",
            facing.label(),
            points,
            weight
        ));
    }
    out
}

/// Format the armour catalog, one line per type with its CLI name and yield
pub fn format_types_table(use_colors: bool, theme: &Theme) -> String {
    let name_width = ArmourType::all()
        .iter()
        .map(|armour| armour.cli_name().len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    if use_colors {
        lines.push(format!("{}", "Armour types:".style(theme.heading)));
    } else {
        lines.push("Armour types:".to_string());
    }
    for armour in ArmourType::all() {
        let name = format!("{:<width$}", armour.cli_name(), width = name_width);
        if use_colors {
            lines.push(format!(
                "  {}  {}",
                name.style(theme.label),
                armour.label().style(theme.value)
            ));
        } else {
            lines.push(format!("  {}  {}", name, armour.label()));
        }
    }

    lines.join("\n")
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::allocate;

    #[test]
    fn test_format_report_plain() {
        let allocation = allocate(480, false, false);
        let result = format_report(
            &allocation,
            ArmourType::Standard,
            30.0,
            480,
            false,
            &Theme::dark(),
        );
        let expected = [
            "Armour Type: Standard (16.00 pts/ton)",
            "Total Armour Points: 480",
            "Total Armour Weight: 30.00 tons",
            "",
            "Front: 144 points (9.00 tons)",
            "Left Side: 100 points (6.25 tons)",
            "Right Side: 100 points (6.25 tons)",
            "Rear: 56 points (3.50 tons)",
            "Turret: 80 points (5.00 tons)",
        ]
        .join("\n");
        assert_eq!(result, expected);
    }

    #[test]
    fn test_format_report_notes_unabsorbed_points() {
        let allocation = allocate(46, false, false);
        let result = format_report(
            &allocation,
            ArmourType::Hardened,
            5.75,
            46,
            false,
            &Theme::dark(),
        );
        assert!(result.contains("Note: facings total 47 points, 1 over the requested 46."));
    }

    #[test]
    fn test_format_report_no_note_when_balanced() {
        let allocation = allocate(480, false, false);
        let result = format_report(
            &allocation,
            ArmourType::Standard,
            30.0,
            480,
            false,
            &Theme::dark(),
        );
        assert!(!result.contains("Note:"));
    }

    #[test]
    fn test_format_report_turretless_has_four_facings() {
        let allocation = allocate(100, false, true);
        let result = format_report(
            &allocation,
            ArmourType::Hardened,
            12.5,
            100,
            false,
            &Theme::dark(),
        );
        assert!(!result.contains("Turret"));
        assert!(result.contains("Rear: 16 points (2.00 tons)"));
    }

    #[test]
    fn test_format_diagram_with_turret() {
        let allocation = allocate(480, true, false);
        let result = format_diagram(&allocation, false, &Theme::dark());
        let expected = [
            "         [Fr 145]",
            "[Ls 100] [Tu  80] [Rs 100]",
            "         [Rr  55]",
        ]
        .join("\n");
        assert_eq!(result, expected);
    }

    #[test]
    fn test_format_diagram_turretless_leaves_centre_empty() {
        let allocation = allocate(100, false, true);
        let result = format_diagram(&allocation, false, &Theme::dark());
        let expected = [
            "        [Fr 34]",
            "[Ls 25]         [Rs 25]",
            "        [Rr 16]",
        ]
        .join("\n");
        assert_eq!(result, expected);
    }

    #[test]
    fn test_format_diagram_zero_budget() {
        let allocation = allocate(0, false, false);
        let result = format_diagram(&allocation, false, &Theme::dark());
        let expected = ["       [Fr 0]", "[Ls 0] [Tu 0] [Rs 0]", "       [Rr 0]"].join("\n");
        assert_eq!(result, expected);
    }

    #[test]
    fn test_format_csv_exact_bytes() {
        let allocation = allocate(480, false, false);
        let result = format_csv(&allocation, ArmourType::Standard);
        assert_eq!(
            result,
            "Facing,Armour Points,Weight (tons)\r\n\
             Front,144,9.00\r\n\
             Left Side,100,6.25\r\n\
             Right Side,100,6.25\r\n\
             Rear,56,3.50\r\n\
             Turret,80,5.00\r\n"
        );
    }

    #[test]
    fn test_format_csv_turretless() {
        let allocation = allocate(100, false, true);
        let result = format_csv(&allocation, ArmourType::Hardened);
        assert_eq!(result.lines().count(), 5);
        assert!(!result.contains("Turret"));
        assert!(result.contains("Front,34,4.25\r\n"));
    }

    #[test]
    fn test_format_types_table_lists_all() {
        let result = format_types_table(false, &Theme::dark());
        assert!(result.starts_with("Armour types:"));
        assert_eq!(result.lines().count(), 9);
        assert!(result.contains("standard"));
        assert!(result.contains("Ferro-Fibrous (17.92 pts/ton)"));
        assert!(result.contains("ballistic-reinforced"));
    }
}
