macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod batch_ops;
pub mod config_ops;
pub mod convert_ops;

use crate::settings::DecimalSettings;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("precision {requested} exceeds decimal.max_precision ({max})")]
    PrecisionTooLarge { requested: i32, max: u32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Pick the precision for a decimal conversion: the explicit argument if
/// given, else the configured default. Negative values pass through and
/// mean "integer part only".
pub fn resolve_precision(
    requested: Option<i32>,
    decimal: &DecimalSettings,
) -> Result<i32, CommandError> {
    let Some(p) = requested else {
        return Ok(decimal.default_precision as i32);
    };
    if p > decimal.max_precision as i32 {
        return Err(CommandError::PrecisionTooLarge {
            requested: p,
            max: decimal.max_precision,
        });
    }
    Ok(p)
}
