//! Every user-facing string in one place.

pub struct UiText {
    pub app_title: &'static str,

    // Top bar
    pub menu_button: &'static str,
    pub menu_hint: &'static str,
    pub about_button: &'static str,

    // Nav panel
    pub nav_heading: &'static str,
    pub nav_show_history: &'static str,

    // Trade form
    pub trade_heading: &'static str,
    pub stock_label: &'static str,
    pub stock_hint: &'static str,
    pub action_label: &'static str,
    pub submit_button: &'static str,

    // Result area
    pub result_heading: &'static str,
    pub loading_text: &'static str,
    pub idle_hint: &'static str,

    // Chart
    pub chart_heading: &'static str,
    pub chart_empty: &'static str,

    // History
    pub history_heading: &'static str,
    pub history_empty: &'static str,

    // About dialog
    pub about_title: &'static str,
    pub about_offline: &'static str,

    // Startup screen
    pub connect_title: &'static str,
    pub connect_message: &'static str,

    // Status bar
    pub status_online_prefix: &'static str,
    pub status_offline_prefix: &'static str,
    pub status_probing: &'static str,
    pub status_trades_suffix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Pulse Trader",

    menu_button: "☰",
    menu_hint: "Toggle menu (M)",
    about_button: "About",

    nav_heading: "Menu",
    nav_show_history: "Show session history",

    trade_heading: "Place Order",
    stock_label: "Stock",
    stock_hint: "e.g. AAPL",
    action_label: "Action",
    submit_button: "Submit",

    result_heading: "Result",
    loading_text: "Loading...",
    idle_hint: "Submit an order to see the service response.",

    chart_heading: "Trend",
    chart_empty: "No chart data yet.",

    history_heading: "Session History",
    history_empty: "No trades this session.",

    about_title: "About Pulse Trader",
    about_offline: "Trade service not connected.",

    connect_title: "Pulse Trader",
    connect_message: "Contacting trade service...",

    status_online_prefix: "Service:",
    status_offline_prefix: "Offline:",
    status_probing: "Probing service...",
    status_trades_suffix: "trades this session",
};
