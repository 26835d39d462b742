mod formatter;

pub use formatter::{
    format_breakdown, format_confidence, format_prediction, should_use_colors,
};
