/// The single implicit user the dashboard serves
pub const DEFAULT_USER_ID: &str = "default_user";

/// Default theme for a settings record
pub const DEFAULT_THEME: &str = "light";

/// Default display currency for a settings record
pub const DEFAULT_CURRENCY: &str = "USD";

/// Decimal places for balances, amounts and aggregates
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Decimal places for stock price and change
pub const PRICE_DECIMAL_PRECISION: u32 = 4;

/// Digits allowed before the decimal point in a stored amount or price
pub const MAX_AMOUNT_INTEGER_DIGITS: u32 = 10;

/// Month labels for trend rows, January first
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
