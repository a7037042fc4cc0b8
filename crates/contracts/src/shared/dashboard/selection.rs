/// Collect a repeatable multi-select parameter from decoded query pairs.
///
/// Every occurrence of `key` is one selected value, kept exactly as sent:
/// values are never split or trimmed, so option names may contain commas.
/// An absent key yields `None` (the widget default). Blank values are
/// skipped, so `?stores=` on its own is an explicit empty selection.
///
/// ```
/// use contracts::shared::dashboard::collect_selection;
///
/// let pairs = vec![
///     ("stores".to_string(), "Colombo, Fort".to_string()),
///     ("stores".to_string(), "Kandy".to_string()),
/// ];
/// assert_eq!(
///     collect_selection(&pairs, "stores"),
///     Some(vec!["Colombo, Fort".to_string(), "Kandy".to_string()])
/// );
/// assert_eq!(collect_selection(&pairs, "tiers"), None);
/// ```
pub fn collect_selection(pairs: &[(String, String)], key: &str) -> Option<Vec<String>> {
    let mut values = pairs.iter().filter(|(k, _)| k == key).peekable();
    values.peek()?;
    Some(
        values
            .filter(|(_, v)| !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect(),
    )
}
