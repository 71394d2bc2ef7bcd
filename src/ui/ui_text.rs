/// All user-facing chart strings in one place
pub struct UiText {
    pub app_name: &'static str,
    pub title_price: &'static str,
    pub title_daily_returns: &'static str,
    pub title_return_distribution: &'static str,
    pub label_date: &'static str,
    pub label_price: &'static str,
    pub label_daily_return: &'static str,
    pub label_volatility: &'static str,
    pub label_frequency: &'static str,
    pub legend_close: &'static str,
    pub legend_zero: &'static str,
    pub hint_close_window: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_name: "Index Trend",
    title_price: "Stock Price Analysis",
    title_daily_returns: "Daily Returns",
    title_return_distribution: "Daily Return Distribution",
    label_date: "Date",
    label_price: "Price",
    label_daily_return: "Daily Return",
    label_volatility: "Volatility",
    label_frequency: "Frequency",
    legend_close: "Close Price",
    legend_zero: "Zero",
    hint_close_window: "Close this window to show the next chart",
};
