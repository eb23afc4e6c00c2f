use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[cfg(test)]
    Asc,
    Desc,
}

impl SortOrder {
    #[doc = "Applies the direction to an ascending comparison."]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            #[cfg(test)]
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}
