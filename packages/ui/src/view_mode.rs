/// Grid/list toggle for the tools listing.
///
/// Switching the mode changes only the layout class on the list container;
/// the fetched records and their order are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub fn class(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_match_layout_names() {
        assert_eq!(ViewMode::Grid.class(), "grid");
        assert_eq!(ViewMode::List.class(), "list");
    }
}
