pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::{local_date, parse_date, parse_timestamp};
pub(crate) use logging::init_logging;
