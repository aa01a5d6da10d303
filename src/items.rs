use crate::error::PickerError;

/// A single input element for [`Items::from_items`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerItem {
    Int(i32),
    Label(String),
}

impl PickerItem {
    fn into_label(self) -> String {
        match self {
            PickerItem::Int(value) => value.to_string(),
            PickerItem::Label(label) => label,
        }
    }
}

impl From<i32> for PickerItem {
    fn from(value: i32) -> Self {
        PickerItem::Int(value)
    }
}

impl From<String> for PickerItem {
    fn from(label: String) -> Self {
        PickerItem::Label(label)
    }
}

impl From<&str> for PickerItem {
    fn from(label: &str) -> Self {
        PickerItem::Label(label.to_string())
    }
}

/// The configured item list, tagged by kind.
///
/// The kind is decided once, from the first element, when the list is set.
/// It determines what a "value" means: for `Ints` the value is the item
/// itself, for `Labels` it is the item's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Items {
    Ints(Vec<i32>),
    Labels(Vec<String>),
}

impl Items {
    /// Build a tagged list from raw items. The first element picks the kind;
    /// a list that mixes kinds degrades to labels with a warning rather than
    /// failing.
    pub fn from_items(items: Vec<PickerItem>) -> Result<Self, PickerError> {
        if items.is_empty() {
            return Err(PickerError::EmptyItems);
        }
        match items[0] {
            PickerItem::Int(_) => {
                let mut ints = Vec::with_capacity(items.len());
                for item in &items {
                    match item {
                        PickerItem::Int(value) => ints.push(*value),
                        PickerItem::Label(_) => {
                            log::warn!(
                                "item list mixes integers and labels; treating all items as labels"
                            );
                            return Ok(Self::labels_from(items));
                        }
                    }
                }
                Ok(Items::Ints(ints))
            }
            PickerItem::Label(_) => Ok(Self::labels_from(items)),
        }
    }

    fn labels_from(items: Vec<PickerItem>) -> Self {
        Items::Labels(items.into_iter().map(PickerItem::into_label).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Items::Ints(items) => items.len(),
            Items::Labels(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last_index(&self) -> usize {
        self.len() - 1
    }

    /// The externally visible value at `index`: the item itself for integer
    /// lists, the index itself for label lists.
    pub fn value_for_index(&self, index: usize) -> i32 {
        match self {
            Items::Ints(items) => items.get(index).copied().unwrap_or(0),
            Items::Labels(_) => index as i32,
        }
    }

    /// Translate a value back to an index. For integer lists this is the
    /// first occurrence of the value; for label lists the value is the index,
    /// bounds-checked.
    pub fn index_of_value(&self, value: i32) -> Result<usize, PickerError> {
        match self {
            Items::Ints(items) => items
                .iter()
                .position(|item| *item == value)
                .ok_or(PickerError::WrongValue { value }),
            Items::Labels(items) => {
                if value >= 0 && (value as usize) < items.len() {
                    Ok(value as usize)
                } else {
                    Err(PickerError::WrongValue { value })
                }
            }
        }
    }

    /// Display text of the item at `index`.
    pub fn display(&self, index: usize) -> String {
        match self {
            Items::Ints(items) => items.get(index).map(i32::to_string).unwrap_or_default(),
            Items::Labels(items) => items.get(index).cloned().unwrap_or_default(),
        }
    }
}
