/// The four inputs of the card form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    Description,
    DueDate,
    StartDate,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Description,
        DraftField::DueDate,
        DraftField::StartDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Description => "Description",
            DraftField::DueDate => "Due Date",
            DraftField::StartDate => "Start Date",
        }
    }

    /// Query parameter carrying this field on the create-card request.
    pub fn query_key(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Description => "desc",
            DraftField::DueDate => "due",
            DraftField::StartDate => "start",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, DraftField::DueDate | DraftField::StartDate)
    }
}

/// Field values the user is editing. Held only for one form session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub start_date: String,
}

impl CardDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            due_date: due_date.into(),
            start_date: start_date.into(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::DueDate => &self.due_date,
            DraftField::StartDate => &self.start_date,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Description => self.description = value,
            DraftField::DueDate => self.due_date = value,
            DraftField::StartDate => self.start_date = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_address_the_same_field() {
        let mut draft = CardDraft::default();
        for (field, value) in DraftField::ALL.iter().zip(["n", "d", "2024-01-02", "2024-01-01"]) {
            draft.set(*field, value);
            assert_eq!(draft.get(*field), value);
        }
        assert_eq!(draft, CardDraft::new("n", "d", "2024-01-02", "2024-01-01"));
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut draft = CardDraft::new("n", "d", "x", "y");
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, CardDraft::default());
    }

    #[test]
    fn test_query_keys_match_remote_names() {
        let keys: Vec<_> = DraftField::ALL.iter().map(|f| f.query_key()).collect();
        assert_eq!(keys, vec!["name", "desc", "due", "start"]);
        assert!(DraftField::DueDate.is_date());
        assert!(!DraftField::Description.is_date());
    }
}
