use contracts::shared::dashboard::FilterState;

/// Ordered, de-duplicated, possibly empty set of allowed filter values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    values: Vec<String>,
}

impl FilterSet {
    /// Resolve a multi-select against its lookup options.
    ///
    /// `None` is the widget default: every option selected. An explicit
    /// selection keeps only values present in `options`, in option order.
    pub fn resolve(options: &[String], selection: Option<Vec<String>>) -> Self {
        let Some(selection) = selection else {
            return Self::from_values(options.iter().cloned());
        };

        for unknown in selection.iter().filter(|v| !options.contains(v)) {
            tracing::warn!("Ignoring filter value that is not an option: {:?}", unknown);
        }

        Self::from_values(
            options
                .iter()
                .filter(|option| selection.contains(option))
                .cloned(),
        )
    }

    fn from_values(values: impl Iterator<Item = String>) -> Self {
        let mut set = Self::default();
        for value in values {
            if !set.values.contains(&value) {
                set.values.push(value);
            }
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Widget state for the response
    pub fn state(&self, label: &str, options: &[String]) -> FilterState {
        FilterState {
            label: label.to_string(),
            options: options.to_vec(),
            selected: self.values.clone(),
        }
    }
}

/// Resolve a single-select: the requested value if it is an option,
/// otherwise the first option
pub fn first_or(options: &[String], requested: Option<&str>) -> Option<String> {
    match requested {
        Some(value) if options.iter().any(|o| o == value) => Some(value.to_string()),
        Some(value) => {
            tracing::warn!("Ignoring selection that is not an option: {:?}", value);
            options.first().cloned()
        }
        None => options.first().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Bakery".into(), "Dairy".into(), "Fruit".into()]
    }

    #[test]
    fn test_default_selects_everything() {
        let set = FilterSet::resolve(&options(), None);
        assert_eq!(set.values(), options().as_slice());
    }

    #[test]
    fn test_selection_keeps_option_order_and_drops_unknowns() {
        let set = FilterSet::resolve(
            &options(),
            Some(vec!["Fruit".into(), "Toys".into(), "Bakery".into(), "Fruit".into()]),
        );
        assert_eq!(set.values(), &["Bakery".to_string(), "Fruit".to_string()]);
    }

    #[test]
    fn test_explicit_empty_selection_is_empty() {
        let set = FilterSet::resolve(&options(), Some(vec![]));
        assert!(set.is_empty());
    }

    #[test]
    fn test_first_or_falls_back_to_first_option() {
        assert_eq!(first_or(&options(), Some("Dairy")), Some("Dairy".to_string()));
        assert_eq!(first_or(&options(), Some("Toys")), Some("Bakery".to_string()));
        assert_eq!(first_or(&options(), None), Some("Bakery".to_string()));
        assert_eq!(first_or(&[], None), None);
    }
}
