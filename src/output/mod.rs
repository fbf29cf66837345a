pub mod formatter;

pub use formatter::{
    format_bar, format_catalog, format_diagnostics, format_json, format_report, format_tsv,
    format_wiscar_compact, should_use_colors,
};
