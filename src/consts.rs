/// Target date format accepted on the command line: "2018-12-09"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field names expected in the first line of a cookie log
pub(crate) const DEFAULT_HEADER: [&str; 2] = ["cookie", "timestamp"];

/// Environment variable pointing at an explicit config file
pub(crate) const CONFIG_ENV: &str = "MOST_ACTIVE_COOKIE_CONFIG";
