/*!
# IO

Rendering of graphs and algorithm results as aligned text tables.

There is one writer, [`TableWriter`], wrapping any [`std::io::Write`]
sink. It renders the two matrix shapes of this crate and the per-node
result rows of the single-source algorithms, one method per shape. Cell
width and the sentinel glyphs are configurable.
*/

mod render;

pub use render::*;
