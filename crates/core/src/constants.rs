/// Expense categories, in the order the backend serves them
pub const CATEGORIES: [&str; 9] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Other",
];

/// Monthly budget applied when registration does not set one
pub const DEFAULT_MONTHLY_BUDGET: i64 = 30000;

/// Length of the trailing analytics window, in days
pub const ANALYTICS_WINDOW_DAYS: i64 = 30;
