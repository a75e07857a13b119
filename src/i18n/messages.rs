//! Message catalogue
//!
//! Every user-facing string is a `MessageKey` variant. Each language is an
//! exhaustive `match`, so a key without a translation does not compile.

/// A translatable user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ThisMonthExpenses,
    DailyExpenses,
    CreditExpenses,
    SpecialExpenses,
    GrandTotal,
    Daily,
    Credit,
    Special,
    Id,
    Date,
    Type,
    Amount,
    Purpose,
    Notes,
    PaymentMethod,
    Cash,
    Upi,
    Card,
    Reminder,
    Share,
    Count,
    Yes,
    No,
    NoExpenses,
    ExpenseSaved,
    ExpenseDeleted,
    ExpenseNotFound,
    DataExported,
    DataCleared,
    ClearDataWarning,
    Language,
    LanguageChanged,
    Settings,
}

impl MessageKey {
    /// Every key, for catalogue checks
    pub const ALL: [MessageKey; 33] = [
        Self::ThisMonthExpenses,
        Self::DailyExpenses,
        Self::CreditExpenses,
        Self::SpecialExpenses,
        Self::GrandTotal,
        Self::Daily,
        Self::Credit,
        Self::Special,
        Self::Id,
        Self::Date,
        Self::Type,
        Self::Amount,
        Self::Purpose,
        Self::Notes,
        Self::PaymentMethod,
        Self::Cash,
        Self::Upi,
        Self::Card,
        Self::Reminder,
        Self::Share,
        Self::Count,
        Self::Yes,
        Self::No,
        Self::NoExpenses,
        Self::ExpenseSaved,
        Self::ExpenseDeleted,
        Self::ExpenseNotFound,
        Self::DataExported,
        Self::DataCleared,
        Self::ClearDataWarning,
        Self::Language,
        Self::LanguageChanged,
        Self::Settings,
    ];
}

pub(super) fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        ThisMonthExpenses => "This Month's Expenses",
        DailyExpenses => "Daily Expenses",
        CreditExpenses => "Credit Card Expenses",
        SpecialExpenses => "Special Expenses",
        GrandTotal => "Grand Total",
        Daily => "Daily",
        Credit => "Credit",
        Special => "Special",
        Id => "ID",
        Date => "Date",
        Type => "Type",
        Amount => "Amount",
        Purpose => "Purpose",
        Notes => "Notes",
        PaymentMethod => "Payment Method",
        Cash => "Cash",
        Upi => "UPI",
        Card => "Card",
        Reminder => "Reminder",
        Share => "Share",
        Count => "Count",
        Yes => "Yes",
        No => "No",
        NoExpenses => "No expenses found.",
        ExpenseSaved => "Expense saved",
        ExpenseDeleted => "Expense deleted",
        ExpenseNotFound => "Expense not found",
        DataExported => "Data exported to",
        DataCleared => "All expense data has been cleared.",
        ClearDataWarning => "This permanently deletes every expense. Re-run with --yes to confirm.",
        Language => "Language",
        LanguageChanged => "Language changed to English",
        Settings => "Settings",
    }
}

pub(super) fn tamil(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        ThisMonthExpenses => "இந்த மாத செலவுகள்",
        DailyExpenses => "தினசரி செலவுகள்",
        CreditExpenses => "கிரெடிட் கார்டு செலவுகள்",
        SpecialExpenses => "சிறப்பு செலவுகள்",
        GrandTotal => "மொத்த தொகை",
        Daily => "தினசரி",
        Credit => "கிரெடிட்",
        Special => "சிறப்பு",
        Id => "அடையாளம்",
        Date => "தேதி",
        Type => "வகை",
        Amount => "தொகை",
        Purpose => "நோக்கம்",
        Notes => "குறிப்புகள்",
        PaymentMethod => "பணம் செலுத்தும் முறை",
        Cash => "ரொக்கம்",
        Upi => "யுபிஐ",
        Card => "அட்டை",
        Reminder => "நினைவூட்டல்",
        Share => "பங்கு",
        Count => "எண்ணிக்கை",
        Yes => "ஆம்",
        No => "இல்லை",
        NoExpenses => "செலவுகள் எதுவும் இல்லை.",
        ExpenseSaved => "செலவு சேமிக்கப்பட்டது",
        ExpenseDeleted => "செலவு நீக்கப்பட்டது",
        ExpenseNotFound => "செலவு கிடைக்கவில்லை",
        DataExported => "தரவு ஏற்றுமதி செய்யப்பட்ட இடம்",
        DataCleared => "எல்லா செலவு தரவும் அழிக்கப்பட்டது.",
        ClearDataWarning => {
            "இது எல்லா செலவுகளையும் நிரந்தரமாக நீக்கும். உறுதிப்படுத்த --yes உடன் மீண்டும் இயக்கவும்."
        }
        Language => "மொழி",
        LanguageChanged => "மொழி தமிழுக்கு மாற்றப்பட்டது",
        Settings => "அமைப்புகள்",
    }
}
