//! Settings CLI commands
//!
//! Language switching and configuration display.

use crate::context::AppContext;
use crate::error::ExpenseResult;
use crate::i18n::{Language, MessageKey};

/// Handle `language`; with no argument the language is toggled
pub fn handle_language_command(
    ctx: &mut AppContext,
    language: Option<Language>,
) -> ExpenseResult<()> {
    let language = language.unwrap_or_else(|| ctx.settings.language.toggled());
    ctx.set_language(language)?;
    println!("{}", ctx.translator().t(MessageKey::LanguageChanged));
    Ok(())
}

/// Render the paths and settings shown by `config`
pub fn format_config(ctx: &AppContext) -> String {
    let translator = ctx.translator();
    let settings = &ctx.settings;
    let mut output = String::new();

    output.push_str("Expense Tracker Configuration\n");
    output.push_str("=============================\n");
    output.push_str(&format!("Base directory:   {}\n", ctx.paths.base_dir().display()));
    output.push_str(&format!("Data directory:   {}\n", ctx.paths.data_dir().display()));
    output.push_str(&format!("Export directory: {}\n", ctx.paths.export_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", ctx.paths.settings_file().display()));
    output.push('\n');
    output.push_str(&format!("{}:\n", translator.t(MessageKey::Settings)));
    output.push_str(&format!(
        "  {}: {}\n",
        translator.t(MessageKey::Language),
        settings.language
    ));
    output.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));
    output.push_str(&format!("  Date format: {}\n", settings.date_format));
    output.push_str(&format!(
        "  {}: {}\n",
        translator.t(MessageKey::PaymentMethod),
        translator.payment_method(settings.default_payment_method)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        translator.t(MessageKey::Reminder),
        translator.yes_no(settings.reminders_enabled_by_default)
    ));

    output
}

/// Handle `config`
pub fn handle_config_command(ctx: &AppContext) -> ExpenseResult<()> {
    print!("{}", format_config(ctx));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpensePaths;
    use tempfile::TempDir;

    #[test]
    fn test_language_command_persists_choice() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = AppContext::new(paths.clone()).unwrap();

        handle_language_command(&mut ctx, Some(Language::Tamil)).unwrap();

        let reopened = AppContext::new(paths).unwrap();
        assert_eq!(reopened.settings.language, Language::Tamil);
    }

    #[test]
    fn test_language_command_toggles_without_argument() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = AppContext::new(paths).unwrap();

        handle_language_command(&mut ctx, None).unwrap();
        assert_eq!(ctx.settings.language, Language::Tamil);

        handle_language_command(&mut ctx, None).unwrap();
        assert_eq!(ctx.settings.language, Language::English);
    }

    #[test]
    fn test_format_config_lists_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let ctx = AppContext::ephemeral(paths.clone()).unwrap();

        let output = format_config(&ctx);

        assert!(output.contains(&paths.data_dir().display().to_string()));
        assert!(output.contains("Currency symbol: ₹"));
        assert!(output.contains("Language: english"));
    }
}
