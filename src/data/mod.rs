mod trade_log;

pub(crate) use trade_log::{load_trade_log, save_trade_log};
