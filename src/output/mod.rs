pub mod formatter;

pub use formatter::{
    format_assessment_detail, format_assessment_table, format_score, format_tsv, should_use_colors,
};
