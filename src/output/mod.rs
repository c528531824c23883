pub mod formatter;

pub use formatter::{
    format_csv, format_diagram, format_report, format_types_table, should_use_colors,
};
