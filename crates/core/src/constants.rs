use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places for monetary amounts shown to callers
pub const MONEY_SCALE: u32 = 2;

/// Decimal places for allocation and drift percentages
pub const PERCENT_SCALE: u32 = 2;

/// Decimal places of the value/total quotient before it is scaled to a percentage
pub const ALLOCATION_DIVISION_SCALE: u32 = 6;

/// Decimal places for per-holding and snapshot-drift ratios
pub const RATIO_DIVISION_SCALE: u32 = 4;

/// Decimal places kept when deriving a monthly rate from an annual percentage
pub const RATE_SCALE: u32 = 8;

/// Expected annual return (percent) assumed when a goal or what-if omits one
pub const DEFAULT_ANNUAL_RETURN: Decimal = dec!(8.0);

/// Forecast horizon used when neither a month count nor a target date is given
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Currency label applied to snapshots captured without one
pub const DEFAULT_CURRENCY: &str = "INR";

/// Trailing window for the snapshot moving average
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 3;

/// Timezone used to derive "today" when none is configured
pub const DEFAULT_TIMEZONE: &str = "UTC";

pub const MONTHS_IN_YEAR: u32 = 12;
