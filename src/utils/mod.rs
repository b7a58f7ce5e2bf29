pub(crate) mod debug;
pub(crate) mod int;

pub(crate) use debug::{debug_enabled, debug_log, set_debug};
pub(crate) use int::parse_int;
