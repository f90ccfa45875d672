use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::SinkArgs;

impl ArgumentType for SinkArgs {
    type Error = Infallible;

    const REPEATABLE: bool = true;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        Some(Ok(val.map(SinkArgs::parse_list).unwrap_or_default()))
    }

    fn default_value() -> Option<Self> {
        Some(SinkArgs::default())
    }
}
