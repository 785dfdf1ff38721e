pub(crate) mod date;
pub(crate) mod jq;
pub(crate) mod logging;
pub(crate) mod timezone;

pub(crate) use jq::filter_json;
pub(crate) use logging::{init_logging, set_debug};
pub(crate) use timezone::Timezone;
