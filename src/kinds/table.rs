use super::{adopt, new_root, Inline, MarkupNode};
use crate::raw::{ColumnAlignment, RawMarkup, RawMarkupData};

markup_node! {
    /// A table, made of exactly one [`TableHead`] followed by one [`TableBody`].
    Table => visit_table
}

impl Table {
    /// Creates a table from its column alignments, head and body.
    pub fn new(column_alignments: Vec<Option<ColumnAlignment>>, head: TableHead, body: TableBody) -> Self {
        let data = RawMarkupData::Table { column_alignments };
        Self {
            markup: new_root(data, vec![head.markup.into_adopted_raw(), body.markup.into_adopted_raw()]),
        }
    }

    /// The alignment of each column, `None` for columns without an explicit alignment.
    pub fn column_alignments(&self) -> &[Option<ColumnAlignment>] {
        payload!(self, Table { column_alignments } => column_alignments.as_slice())
    }

    /// Replaces the column alignments.
    pub fn set_column_alignments(&mut self, column_alignments: Vec<Option<ColumnAlignment>>) {
        self.markup = self.markup.replacing_data(RawMarkupData::Table { column_alignments });
    }

    /// ## Panics
    /// If a rewrite left this table without a head.
    pub fn head(&self) -> TableHead {
        TableHead::from_markup(self.markup.structural_child(0))
    }

    /// ## Panics
    /// If a rewrite left this table without a body.
    pub fn body(&self) -> TableBody {
        TableBody::from_markup(self.markup.structural_child(1))
    }

    /// Replaces the head.
    pub fn set_head(&mut self, head: TableHead) {
        self.markup = self.markup.replacing_children_in_range(0..1, vec![head.markup.into_adopted_raw()]);
    }

    /// Replaces the body.
    pub fn set_body(&mut self, body: TableBody) {
        self.markup = self.markup.replacing_children_in_range(1..2, vec![body.markup.into_adopted_raw()]);
    }

    /// The number of columns of the widest row, head included, counting spanned cells once per spanned column.
    pub fn column_count(&self) -> usize {
        let widest_row = self.body().as_markup().raw().children().map(row_width).max().unwrap_or(0);
        row_width(self.head().as_markup().raw()).max(widest_row)
    }

    /// Whether the table has neither head cells nor body rows.
    pub fn is_empty(&self) -> bool {
        self.head().child_count() == 0 && self.body().child_count() == 0
    }
}

fn row_width(row: &RawMarkup) -> usize {
    row.children()
        .map(|cell| match cell.data() {
            RawMarkupData::TableCell { colspan, .. } => (*colspan).max(1) as usize,
            _ => 1,
        })
        .sum()
}

markup_node! {
    /// The header row of a [`Table`].
    TableHead => visit_table_head
}

impl TableHead {
    /// Creates a head row of the given cells.
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = TableCell>,
    {
        Self {
            markup: new_root(RawMarkupData::TableHead, adopt(cells)),
        }
    }
}

markup_node! {
    /// The rows of a [`Table`] below its head.
    TableBody => visit_table_body
}

impl TableBody {
    /// Creates a body of the given rows.
    pub fn new<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = TableRow>,
    {
        Self {
            markup: new_root(RawMarkupData::TableBody, adopt(rows)),
        }
    }
}

markup_node! {
    /// A row of a [`TableBody`].
    TableRow => visit_table_row
}

impl TableRow {
    /// Creates a row of the given cells.
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = TableCell>,
    {
        Self {
            markup: new_root(RawMarkupData::TableRow, adopt(cells)),
        }
    }
}

markup_node! {
    /// A cell of a [`TableHead`] or [`TableRow`].
    TableCell => visit_table_cell
}

impl TableCell {
    /// Creates a cell spanning a single column and row.
    pub fn new<I>(inlines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Inline>,
    {
        Self::spanning(1, 1, inlines)
    }

    /// Creates a cell spanning `colspan` columns and `rowspan` rows. A span of `0` marks a cell that is covered by
    /// a neighbouring cell.
    pub fn spanning<I>(colspan: u32, rowspan: u32, inlines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Inline>,
    {
        let data = RawMarkupData::TableCell { colspan, rowspan };
        Self {
            markup: new_root(data, adopt(inlines.into_iter().map(Into::<Inline>::into))),
        }
    }

    /// The number of columns this cell spans.
    pub fn colspan(&self) -> u32 {
        payload!(self, TableCell { colspan } => *colspan)
    }

    /// The number of rows this cell spans.
    pub fn rowspan(&self) -> u32 {
        payload!(self, TableCell { rowspan } => *rowspan)
    }

    /// Changes the number of spanned columns.
    pub fn set_colspan(&mut self, colspan: u32) {
        let data = RawMarkupData::TableCell {
            colspan,
            rowspan: self.rowspan(),
        };
        self.markup = self.markup.replacing_data(data);
    }

    /// Changes the number of spanned rows.
    pub fn set_rowspan(&mut self, rowspan: u32) {
        let data = RawMarkupData::TableCell {
            colspan: self.colspan(),
            rowspan,
        };
        self.markup = self.markup.replacing_data(data);
    }
}
