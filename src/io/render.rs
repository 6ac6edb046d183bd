use std::{
    fmt::Display,
    io::{Result, Write},
};

use crate::{
    edge::{INFINITY, Weight},
    node::{NodeIndex, NodeName},
    repr::{ReachabilityMatrix, WeightMatrix},
};

/// Width of the label column of the per-node row tables
const LABEL_WIDTH: usize = 8;

/// Writes graphs and algorithm results as **aligned text tables**, one
/// method per table shape.
///
/// Cell values are centered in a configurable width, with configurable
/// glyphs for the two sentinels: [`INFINITY`] and the `None` entries of
/// the single-source result arrays.
///
/// ```
/// use lexgraphs::{io::TableWriter, prelude::*};
///
/// let graph = AdjacencyList::from_edges([("a", "b", 2)]);
/// let names = graph.node_names().collect::<Vec<_>>();
///
/// let mut table = TableWriter::new(Vec::new());
/// table.write_weight_matrix(&names, &graph.to_matrix()).unwrap();
///
/// let output = String::from_utf8(table.into_inner()).unwrap();
/// assert!(output.contains("----+----------"));
/// assert!(output.contains("   a|  *    2  "));
/// ```
#[derive(Debug)]
pub struct TableWriter<W> {
    writer: W,
    cell_width: usize,
    infinity_glyph: char,
    null_glyph: char,
}

impl<W: Write> TableWriter<W> {
    /// Creates a writer over `writer` with cell width `3`, `*` standing in
    /// for [`INFINITY`], and `-` for null entries
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cell_width: 3,
            infinity_glyph: '*',
            null_glyph: '-',
        }
    }

    /// Sets the width a cell value is centered in
    pub fn set_cell_width(&mut self, width: usize) {
        self.cell_width = width;
    }

    /// Sets the width a cell value is centered in
    pub fn cell_width(mut self, width: usize) -> Self {
        self.set_cell_width(width);
        self
    }

    /// Sets the glyph standing in for [`INFINITY`]
    pub fn set_infinity_glyph(&mut self, glyph: char) {
        self.infinity_glyph = glyph;
    }

    /// Sets the glyph standing in for [`INFINITY`]
    pub fn infinity_glyph(mut self, glyph: char) -> Self {
        self.set_infinity_glyph(glyph);
        self
    }

    /// Sets the glyph standing in for a `None` entry
    pub fn set_null_glyph(&mut self, glyph: char) {
        self.null_glyph = glyph;
    }

    /// Sets the glyph standing in for a `None` entry
    pub fn null_glyph(mut self, glyph: char) -> Self {
        self.set_null_glyph(glyph);
        self
    }

    /// Consumes the writer and returns the underlying sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes `matrix` with `names` as row and column headers.
    /// `names` must be as long as the matrix order.
    pub fn write_weight_matrix<S>(&mut self, names: &[S], matrix: &WeightMatrix) -> Result<()>
    where
        S: AsRef<str>,
    {
        debug_assert_eq!(names.len(), matrix.order() as usize);

        self.write_matrix_header(names)?;
        for (name, row) in names.iter().zip(matrix.rows()) {
            self.write_matrix_label(name.as_ref())?;
            for &weight in row {
                let cell = self.weight_cell(weight);
                self.write_cell(cell)?;
            }
            writeln!(self.writer)?;
        }
        writeln!(self.writer)
    }

    /// Writes `reachability` with `names` as row and column headers, `1`
    /// for reachable cells and `0` otherwise.
    /// `names` must be as long as the matrix order.
    pub fn write_reachability_matrix<S>(
        &mut self,
        names: &[S],
        reachability: &ReachabilityMatrix,
    ) -> Result<()>
    where
        S: AsRef<str>,
    {
        debug_assert_eq!(names.len(), reachability.order() as usize);

        self.write_matrix_header(names)?;
        for (i, name) in names.iter().enumerate() {
            self.write_matrix_label(name.as_ref())?;
            for j in 0..reachability.order() {
                let cell = if reachability.reachable(i as NodeIndex, j) {
                    '1'
                } else {
                    '0'
                };
                self.write_cell(cell)?;
            }
            writeln!(self.writer)?;
        }
        writeln!(self.writer)
    }

    /// Writes the header line of a per-node row table
    pub fn write_row_header<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        write!(self.writer, "\n {:^width$}#", "", width = LABEL_WIDTH)?;
        for name in names {
            self.write_cell(name.as_ref())?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            " {}#{}",
            "=".repeat(LABEL_WIDTH),
            "=".repeat((self.cell_width + 2) * names.len())
        )
    }

    /// Writes one labeled row of weights: the null glyph for `None`, the
    /// infinity glyph for unreachable entries
    pub fn write_weight_row(&mut self, label: &str, cells: &[Option<Weight>]) -> Result<()> {
        self.write_row_label(label)?;
        for &cell in cells {
            let cell = match cell {
                Some(weight) => self.weight_cell(weight),
                None => self.null_glyph.to_string(),
            };
            self.write_cell(cell)?;
        }
        writeln!(self.writer)
    }

    /// Writes one labeled row of node names, the null glyph for `None`
    pub fn write_name_row(&mut self, label: &str, cells: &[Option<NodeName>]) -> Result<()> {
        self.write_row_label(label)?;
        for cell in cells {
            match cell {
                Some(name) => self.write_cell(name)?,
                None => self.write_cell(self.null_glyph)?,
            }
        }
        writeln!(self.writer)
    }

    fn write_matrix_header<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        write!(self.writer, "\n {:^width$}|", "", width = self.cell_width)?;
        for name in names {
            self.write_cell(name.as_ref())?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}+{}",
            "-".repeat(self.cell_width + 1),
            "-".repeat((self.cell_width + 2) * names.len())
        )
    }

    fn write_matrix_label(&mut self, name: &str) -> Result<()> {
        write!(self.writer, " {name:>width$}|", width = self.cell_width)
    }

    fn write_row_label(&mut self, label: &str) -> Result<()> {
        write!(self.writer, " {label:>width$}#", width = LABEL_WIDTH)
    }

    fn write_cell(&mut self, cell: impl Display) -> Result<()> {
        write!(self.writer, " {cell:^width$} ", width = self.cell_width)
    }

    fn weight_cell(&self, weight: Weight) -> String {
        if weight == INFINITY {
            self.infinity_glyph.to_string()
        } else {
            weight.to_string()
        }
    }
}
