//! Trait surface shared by the statement builders.

use crate::dialect::Dialect;
use crate::value::Value;

/// A statement that can render itself to text plus bound values.
///
/// Rendering is lazy and pure: `build` recomputes from accumulated state,
/// so repeated reads return identical results.
pub trait Statement {
    /// The dialect captured when the statement was created.
    fn dialect(&self) -> Dialect;

    /// Assemble the statement text and its bound values.
    ///
    /// The i-th value corresponds to the i-th value-bearing position in
    /// the text, left to right.
    fn build(&self) -> (String, Vec<Value>);

    /// The assembled SQL text.
    fn text(&self) -> String {
        self.build().0
    }

    /// The bound values, ordered to match the placeholders in the text.
    fn values(&self) -> Vec<Value> {
        self.build().1
    }
}
