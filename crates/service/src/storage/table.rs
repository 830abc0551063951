/// Rows that carry an integer primary key.
pub(crate) trait HasId {
    fn id(&self) -> i32;
}

/// Rows plus the id counter, kept together so one lock guards both.
/// Ids are handed out monotonically and never reused, even after deletes.
pub(crate) struct Table<T> {
    pub rows: Vec<T>,
    next_id: i32,
}

impl<T: HasId> Table<T> {
    /// Builds a table over seed rows; the counter resumes after the
    /// highest seeded id.
    pub fn new(rows: Vec<T>) -> Self {
        let next_id = rows.iter().map(HasId::id).max().unwrap_or(0) + 1;
        Self { rows, next_id }
    }

    pub fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn position(&self, id: i32) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }

    pub fn find(&self, id: i32) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn find_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// Removes the row; `false` when the id was not present.
    pub fn remove(&mut self, id: i32) -> bool {
        match self.position(id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }
}
