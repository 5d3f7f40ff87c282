pub mod errors;
pub mod load;
pub mod save;

pub use errors::{LoadError, WriteError};
pub use load::{load_fractures, parse_fractures};
pub use save::{
    format_fracture_report, format_trace_list, report_to_json, write_fracture_report, write_trace_list,
    NetworkReport,
};
