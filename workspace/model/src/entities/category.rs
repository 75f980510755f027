/// The kind of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Income,
    Expense,
    Item,
    Other,
}

impl CategoryKind {
    /// Resolves a kind name supplied by an external collaborator.
    /// Unrecognized names resolve to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "income" => Self::Income,
            "expense" => Self::Expense,
            "item" => Self::Item,
            _ => Self::Other,
        }
    }

    /// The canonical name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Item => "item",
            Self::Other => "other",
        }
    }
}

/// Represents a category for transactions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub kind: CategoryKind,
    pub enabled: bool,
}

impl Category {
    /// Creates a new enabled category.
    pub fn new(id: i32, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            enabled: true,
        }
    }
}

/// Returns the id of the designated transfer category, if any.
///
/// Exactly one category per scope serves as the transfer marker: the first
/// enabled category of kind `Other`. Transactions tagged with it move value
/// between accounts and are excluded from income and expense totals.
pub fn transfer_category(categories: &[Category]) -> Option<i32> {
    categories
        .iter()
        .find(|c| c.enabled && c.kind == CategoryKind::Other)
        .map(|c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(CategoryKind::from_name("income"), CategoryKind::Income);
        assert_eq!(CategoryKind::from_name("expense"), CategoryKind::Expense);
        assert_eq!(CategoryKind::from_name("item"), CategoryKind::Item);
        assert_eq!(CategoryKind::from_name("other"), CategoryKind::Other);
        assert_eq!(CategoryKind::from_name("unheard-of"), CategoryKind::Other);
    }

    #[test]
    fn test_transfer_category_picks_first_enabled_other() {
        let mut disabled = Category::new(1, "Legacy Transfer", CategoryKind::Other);
        disabled.enabled = false;

        let categories = vec![
            Category::new(2, "Sales", CategoryKind::Income),
            disabled,
            Category::new(3, "Transfer", CategoryKind::Other),
            Category::new(4, "Misc", CategoryKind::Other),
        ];

        assert_eq!(transfer_category(&categories), Some(3));
    }

    #[test]
    fn test_transfer_category_none_when_absent() {
        let categories = vec![
            Category::new(1, "Sales", CategoryKind::Income),
            Category::new(2, "Rent", CategoryKind::Expense),
        ];

        assert_eq!(transfer_category(&categories), None);
    }
}
